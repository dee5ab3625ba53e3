// =============================================================================
// Token Icon Constants
// =============================================================================
// This file contains all constants used throughout the backend to enable
// easy tuning and configuration from a single location.

// =============================================================================
// SUPPORTED CHAINS
// =============================================================================

/// Chain identifiers with a known asset-repository directory name.
/// Anything not listed here resolves straight to the default icon.
pub const SUPPORTED_CHAINS: &[(&str, &str)] = &[
    ("1", "ethereum"),
    ("99", "poa"),
    ("100", "xdai"),
    ("369", "pulsechain"),
    ("943", "pulsechain-testnet-v4"),
];

/// Chain directory used for the chain-agnostic last candidate
pub const FALLBACK_CHAIN_NAME: &str = "ethereum";

// =============================================================================
// ICON SOURCES
// =============================================================================

/// Primary hosted icon service (PulseX mainnet token list)
pub const PULSEX_TOKENS_BASE_URL: &str = "https://tokens.app.pulsex.com/images/tokens";

/// Secondary hosted icon service (PulseX v4 testnet token list)
pub const PULSEX_TESTNET_TOKENS_BASE_URL: &str = "https://tokens.app.v4.testnet.pulsex.com/images/tokens";

/// Community asset repository (Trust Wallet assets on GitHub)
pub const TRUSTWALLET_ASSETS_BASE_URL: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains";

/// Local asset served when the chain is not supported
pub const DEFAULT_TOKEN_ICON_PATH: &str = "/images/icons/token_icon_default.svg";

// =============================================================================
// PRESENTATION
// =============================================================================

/// Width and height of a rendered icon when no size is given
pub const DEFAULT_TOKEN_ICON_SIZE: u32 = 20;

/// CSS class applied to every rendered icon
pub const TOKEN_ICON_CLASS_NAME: &str = "mr-1";

// =============================================================================
// SERVER CONFIGURATION
// =============================================================================

/// Default server port if not specified in environment
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// HELPER FUNCTIONS FOR URL BUILDING
// =============================================================================

/// Hosted PulseX mainnet icon for an address
pub fn pulsex_token_url(address_hash: &str) -> String {
    format!("{}/{}.png", PULSEX_TOKENS_BASE_URL, address_hash)
}

/// Hosted PulseX testnet icon for an address
pub fn pulsex_testnet_token_url(address_hash: &str) -> String {
    format!("{}/{}.png", PULSEX_TESTNET_TOKENS_BASE_URL, address_hash)
}

/// Trust Wallet asset logo for an address on the given chain directory
pub fn trustwallet_logo_url(chain_name: &str, address_hash: &str) -> String {
    format!("{}/{}/assets/{}/logo.png", TRUSTWALLET_ASSETS_BASE_URL, chain_name, address_hash)
}
