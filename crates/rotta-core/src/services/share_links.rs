//! Share deep links for WhatsApp and the platforms' native composers.

use url::form_urlencoded::byte_serialize;

use crate::domain::Platform;

fn encode(text: &str) -> String {
    byte_serialize(text.as_bytes()).collect()
}

/// WhatsApp share link carrying the post copy.
pub fn whatsapp_url(text: &str) -> String {
    format!("https://wa.me/?text={}", encode(text))
}

/// Native share link, for the platforms that have one.
pub fn native_share_url(platform: Platform, text: &str) -> Option<String> {
    let base = match platform {
        Platform::Facebook => "https://www.facebook.com/sharer/sharer.php?quote=",
        Platform::X => "https://twitter.com/intent/tweet?text=",
        Platform::Linkedin => "https://www.linkedin.com/feed/?shareActive=true&text=",
        Platform::Instagram | Platform::Tiktok => return None,
    };
    Some(format!("{base}{}", encode(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_url_encodes_copy() {
        assert_eq!(
            whatsapp_url("Casa & giardino?"),
            "https://wa.me/?text=Casa+%26+giardino%3F"
        );
    }

    #[test]
    fn test_native_links_follow_platform_support() {
        for platform in Platform::ALL {
            assert_eq!(
                native_share_url(platform, "ciao").is_some(),
                platform.supports_native_share(),
                "{platform}"
            );
        }
        assert_eq!(
            native_share_url(Platform::X, "Nuovo mandato").as_deref(),
            Some("https://twitter.com/intent/tweet?text=Nuovo+mandato")
        );
    }
}
