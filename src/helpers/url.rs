//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters kept as-is in a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/projects") // -> "/me/projects"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Percent-encode a value for use as one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Generated-initials avatar used when the profile picture fails to load
pub fn avatar_fallback(name: &str) -> String {
    let name = name.split_whitespace().collect::<Vec<_>>().join("+");
    let name = utf8_percent_encode(&name, NON_ALPHANUMERIC)
        .to_string()
        .replace("%2B", "+");
    format!(
        "https://ui-avatars.com/api/?name={}&background=1A73E8&color=fff&size=200",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/me/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/projects"), "/me/projects");
        assert_eq!(url_for(&config, ""), "/me/");
        assert_eq!(url_for(&SiteConfig::default(), "/admin/add"), "/admin/add");
        assert_eq!(url_for(&SiteConfig::default(), "/"), "/");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("holiday-hunter"), "holiday-hunter");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_avatar_fallback() {
        assert_eq!(
            avatar_fallback("Clarence Meneses"),
            "https://ui-avatars.com/api/?name=Clarence+Meneses&background=1A73E8&color=fff&size=200"
        );
    }
}
