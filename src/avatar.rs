//! # Avatar Resolver
//!
//! Picks the image shown for a patient. A non-blank `avatar` field is used as-is;
//! otherwise a placeholder is drawn: an 80x80 square in a solid fill with the
//! uppercased first letter of the name, embedded as a base64 SVG data URI so it
//! needs no network round trip.
//!
//! [`AvatarImage`] tracks one rendered instance. When its URL fails to load it
//! falls back to the placeholder once; later failures leave it alone.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const PLACEHOLDER_SIZE: u32 = 80;
pub const PLACEHOLDER_FILL: &str = "#7345fc";
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Display URL for a patient's avatar.
pub fn resolve(avatar: &str, name: &str) -> String {
    if avatar.trim().is_empty() {
        placeholder(name)
    } else {
        avatar.to_string()
    }
}

/// Uppercased first character of `name`, or empty for an empty name.
pub fn initial(name: &str) -> String {
    name.trim_start()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Self-contained SVG placeholder for `name`.
pub fn placeholder(name: &str) -> String {
    let size = PLACEHOLDER_SIZE;
    let center = size / 2;
    let svg = format!(
        r#"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg"><rect width="{size}" height="{size}" fill="{PLACEHOLDER_FILL}"/><text x="{center}" y="50" font-family="Arial, sans-serif" font-size="32" font-weight="bold" text-anchor="middle" fill="white">{}</text></svg>"#,
        escape_xml(&initial(name))
    );
    format!("{DATA_URI_PREFIX}{}", STANDARD.encode(svg))
}

fn escape_xml(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            other => other.to_string(),
        })
        .collect()
}

/// One on-screen avatar with its single allowed fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    name: String,
    src: String,
    fell_back: bool,
}

impl AvatarImage {
    pub fn new(avatar: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            src: resolve(avatar, name),
            fell_back: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_placeholder(&self) -> bool {
        self.src.starts_with(DATA_URI_PREFIX)
    }

    /// Reports a load failure for the current URL.
    ///
    /// Swaps in the placeholder on the first failure and returns `true`;
    /// returns `false` once the fallback has been used.
    pub fn on_load_error(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        self.fell_back = true;
        self.src = placeholder(&self.name);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(uri: &str) -> String {
        let payload = uri.strip_prefix(DATA_URI_PREFIX).expect("data uri");
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn test_resolve_explicit_url_verbatim() {
        assert_eq!(resolve("https://x/y.png", "Ana"), "https://x/y.png");
    }

    #[test]
    fn test_resolve_empty_builds_placeholder() {
        let uri = resolve("", "Ana");
        assert!(uri.starts_with(DATA_URI_PREFIX));

        let svg = decode(&uri);
        assert!(svg.contains(">A</text>"));
        assert!(svg.contains(r##"fill="#7345fc""##));
        assert!(svg.contains(r#"width="80""#));
    }

    #[test]
    fn test_placeholder_is_deterministic_and_uppercased() {
        assert_eq!(placeholder("ana"), placeholder("Ana"));
        assert!(decode(&placeholder("ñandú")).contains(">Ñ</text>"));
    }

    #[test]
    fn test_placeholder_escapes_markup() {
        let svg = decode(&placeholder("<script>"));
        assert!(svg.contains(">&lt;</text>"));
    }

    #[test]
    fn test_fallback_happens_once() {
        let mut image = AvatarImage::new("https://broken.example/a.png", "Bob");
        assert!(!image.is_placeholder());

        assert!(image.on_load_error());
        assert!(image.is_placeholder());
        let first = image.src().to_string();

        assert!(!image.on_load_error());
        assert_eq!(image.src(), first);
    }
}
