use serde::Serialize;
use std::fmt;
use crate::constants::{DEFAULT_TOKEN_ICON_PATH, TOKEN_ICON_CLASS_NAME};

/// Outcome of a token icon lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconUrl {
    /// A remote candidate. Every candidate except the last was confirmed reachable.
    Remote(String),
    /// The local default asset, used for unsupported chains
    Default,
}

impl IconUrl {
    pub fn as_str(&self) -> &str {
        match self {
            IconUrl::Remote(url) => url,
            IconUrl::Default => DEFAULT_TOKEN_ICON_PATH,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, IconUrl::Default)
    }

    pub fn into_string(self) -> String {
        match self {
            IconUrl::Remote(url) => url,
            IconUrl::Default => DEFAULT_TOKEN_ICON_PATH.to_string(),
        }
    }
}

impl fmt::Display for IconUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A square `<img>` element ready to be appended to an icon container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub class_name: String,
}

impl ImageElement {
    pub fn new(src: impl Into<String>, size: u32) -> Self {
        Self {
            src: src.into(),
            width: size,
            height: size,
            class_name: TOKEN_ICON_CLASS_NAME.to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<img width="{}" height="{}" src="{}" class="{}">"#,
            self.width,
            self.height,
            escape_attr(&self.src),
            escape_attr(&self.class_name),
        )
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_icon_url_is_local_asset() {
        assert_eq!(IconUrl::Default.as_str(), "/images/icons/token_icon_default.svg");
        assert!(IconUrl::Default.is_default());
        assert_eq!(IconUrl::Default.into_string(), DEFAULT_TOKEN_ICON_PATH);
    }

    #[test]
    fn test_image_element_html() {
        let img = ImageElement::new("https://example.com/a.png?x=1&y=\"2\"", 24);
        assert_eq!(img.width, 24);
        assert_eq!(img.height, 24);
        assert_eq!(img.class_name, "mr-1");
        assert_eq!(
            img.to_html(),
            r#"<img width="24" height="24" src="https://example.com/a.png?x=1&amp;y=&quot;2&quot;" class="mr-1">"#
        );
    }
}
