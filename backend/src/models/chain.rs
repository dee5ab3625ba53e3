use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use crate::constants::SUPPORTED_CHAINS;

static CHAIN_NAMES: Lazy<HashMap<&'static str, ChainName>> = Lazy::new(|| {
    SUPPORTED_CHAINS
        .iter()
        .map(|&(id, name)| (id, ChainName(name)))
        .collect()
});

/// Directory name of a chain inside the asset repository, e.g. `pulsechain`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChainName(&'static str);

impl ChainName {
    /// Looks up the chain identifier in [`SUPPORTED_CHAINS`].
    /// Identifiers are matched verbatim, so `"01"` or `" 1"` are unknown.
    pub fn from_chain_id(chain_id: &str) -> Option<Self> {
        CHAIN_NAMES.get(chain_id).copied()
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
