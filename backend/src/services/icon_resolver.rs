use once_cell::sync::Lazy;
use tracing::debug;
use crate::constants::*;
use crate::models::{ChainName, IconUrl};
use super::link_checker::{HttpLinkChecker, LinkChecker};

static SHARED_RESOLVER: Lazy<TokenIconResolver> = Lazy::new(TokenIconResolver::default);

/// Candidate icon URLs for a token, highest priority first.
/// The last entry is chain-agnostic and is used without being probed.
pub fn candidate_urls(chain: ChainName, address_hash: &str) -> [String; 4] {
    [
        pulsex_token_url(address_hash),
        pulsex_testnet_token_url(address_hash),
        trustwallet_logo_url(chain.as_str(), address_hash),
        trustwallet_logo_url(FALLBACK_CHAIN_NAME, address_hash),
    ]
}

/// Maps `(chain id, token address)` to the best available icon URL
#[derive(Debug, Clone)]
pub struct TokenIconResolver<C = HttpLinkChecker> {
    checker: C,
}

impl<C: LinkChecker> TokenIconResolver<C> {
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Probes the candidates one at a time and stops at the first hit.
    /// Unsupported chains get the default icon without any network traffic.
    pub async fn resolve(&self, chain_id: &str, address_hash: &str) -> IconUrl {
        let Some(chain) = ChainName::from_chain_id(chain_id) else {
            debug!("Chain {} is not supported, using default icon", chain_id);
            return IconUrl::Default;
        };

        let [primary, secondary, chain_specific, fallback] = candidate_urls(chain, address_hash);

        for candidate in [primary, secondary, chain_specific] {
            if self.checker.check_url_exists(Some(&candidate)).await {
                debug!("Resolved icon for {} on {}: {}", address_hash, chain, candidate);
                return IconUrl::Remote(candidate);
            }
            debug!("No icon at {}", candidate);
        }

        debug!("Falling back to unverified icon {}", fallback);
        IconUrl::Remote(fallback)
    }

    pub async fn resolve_token_icon_url(&self, chain_id: &str, address_hash: &str) -> String {
        self.resolve(chain_id, address_hash).await.into_string()
    }
}

impl Default for TokenIconResolver {
    fn default() -> Self {
        Self::new(HttpLinkChecker::new())
    }
}

/// Resolves an icon URL with a process-wide HTTP client
pub async fn resolve_token_icon_url(chain_id: &str, address_hash: &str) -> String {
    SHARED_RESOLVER.resolve_token_icon_url(chain_id, address_hash).await
}
