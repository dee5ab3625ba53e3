use anyhow::Result;
use std::env;
use crate::constants::{DEFAULT_SERVER_PORT, DEFAULT_TOKEN_ICON_SIZE};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Option<Vec<String>>,
    pub display_token_icons: bool,
    pub token_icon_size: u32,
    pub asset_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            allowed_origins: None,
            display_token_icons: true,
            token_icon_size: DEFAULT_TOKEN_ICON_SIZE,
            asset_base_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let allowed_origins = env::var("ALLOWED_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect::<Vec<_>>()
        });

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_SERVER_PORT),
            allowed_origins,
            display_token_icons: env::var("TOKEN_ICON_DISPLAY")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            token_icon_size: env::var("TOKEN_ICON_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&size: &u32| size > 0)
                .unwrap_or(DEFAULT_TOKEN_ICON_SIZE),
            asset_base_url: env::var("ASSET_BASE_URL")
                .ok()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
