pub mod models;
pub mod services;
pub mod handlers;
pub mod utils;
pub mod constants;

pub use utils::config::Config;
pub use handlers::create_router;

// Re-export common types
pub use anyhow::Result;
pub use models::{ChainName, IconUrl, ImageElement};
pub use services::{
    append_token_icon, check_url_exists, resolve_token_icon_url, HttpLinkChecker, LinkChecker,
    TokenIconResolver,
};
