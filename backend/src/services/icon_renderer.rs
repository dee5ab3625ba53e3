use tracing::debug;
use crate::constants::DEFAULT_TOKEN_ICON_SIZE;
use crate::models::{IconUrl, ImageElement};
use super::icon_resolver::TokenIconResolver;
use super::link_checker::LinkChecker;

/// Resolves a token icon and, when icons are displayed and the resolved URL
/// answers, appends an image element to `container`.
///
/// A size of `None` or `0` falls back to [`DEFAULT_TOKEN_ICON_SIZE`].
/// The resolved URL is probed once more even if it was already confirmed,
/// so the unverified chain-agnostic candidate only renders when reachable.
/// The local default asset is probed against `asset_base_url` when one is
/// given and is assumed present otherwise.
pub async fn append_token_icon<C: LinkChecker>(
    resolver: &TokenIconResolver<C>,
    container: Option<&mut Vec<ImageElement>>,
    chain_id: &str,
    address_hash: &str,
    display_token_icons: bool,
    size: Option<u32>,
    asset_base_url: Option<&str>,
) -> Option<ImageElement> {
    let icon_size = size.filter(|&s| s > 0).unwrap_or(DEFAULT_TOKEN_ICON_SIZE);
    let icon = resolver.resolve(chain_id, address_hash).await;

    if !display_token_icons {
        return None;
    }

    let probe_url = match (&icon, asset_base_url) {
        (IconUrl::Default, Some(base)) => Some(join_asset_url(base, icon.as_str())),
        (IconUrl::Default, None) => None,
        (IconUrl::Remote(url), _) => Some(url.clone()),
    };

    if let Some(url) = probe_url {
        if !resolver.checker().check_url_exists(Some(&url)).await {
            debug!("Icon {} is not reachable, nothing rendered", url);
            return None;
        }
    }

    let container = container?;
    let img = ImageElement::new(icon.into_string(), icon_size);
    container.push(img.clone());
    Some(img)
}

fn join_asset_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
