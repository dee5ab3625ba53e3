use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use super::LinkChecker;

/// Link checker answering from a fixed set of URLs and recording every probe
#[derive(Debug, Clone, Default)]
pub struct ScriptedChecker {
    existing: HashSet<String>,
    probed: Arc<Mutex<Vec<Option<String>>>>,
}

impl ScriptedChecker {
    pub fn with_existing<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing: urls.into_iter().map(Into::into).collect(),
            probed: Arc::default(),
        }
    }

    pub fn probed(&self) -> Vec<Option<String>> {
        self.probed.lock().unwrap().clone()
    }

    pub fn probed_urls(&self) -> Vec<String> {
        self.probed().into_iter().flatten().collect()
    }
}

#[async_trait]
impl LinkChecker for ScriptedChecker {
    async fn check_url_exists(&self, url: Option<&str>) -> bool {
        self.probed.lock().unwrap().push(url.map(str::to_string));
        match url {
            Some(url) if !url.is_empty() => self.existing.contains(url),
            _ => false,
        }
    }
}
