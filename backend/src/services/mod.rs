pub mod icon_renderer;
pub mod icon_resolver;
pub mod link_checker;

#[cfg(test)]
pub(crate) mod test_support;

pub use icon_renderer::append_token_icon;
pub use icon_resolver::{resolve_token_icon_url, TokenIconResolver};
pub use link_checker::{check_url_exists, HttpLinkChecker, LinkChecker};
