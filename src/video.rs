/// YouTube watch-page detection and video-id extraction
use url::Url;

/// Extract the video identifier from a browser tab URL.
///
/// Rules:
/// 1. Parse the URL; anything unparseable yields None
/// 2. Host must be youtube.com or a subdomain (www, m, music, ...)
/// 3. Path must be the watch page ("/watch")
/// 4. The identifier is the non-empty `v` query parameter
///
/// Examples:
/// - https://www.youtube.com/watch?v=ABC123 → ABC123
/// - https://m.youtube.com/watch?v=x&t=42s → x
/// - https://example.com/ → None
/// - https://www.youtube.com/feed/subscriptions → None
pub fn extract_video_id(tab_url: &str) -> Option<String> {
    let parsed = Url::parse(tab_url.trim()).ok()?;

    if !is_watch_page(&parsed) {
        return None;
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// Check whether a parsed URL points at a YouTube watch page
fn is_watch_page(parsed: &Url) -> bool {
    let Some(host) = parsed.host_str() else {
        return false;
    };

    let host = host.to_lowercase();
    let is_youtube = host == "youtube.com" || host.ends_with(".youtube.com");

    is_youtube && parsed.path() == "/watch"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id_basic() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=ABC123"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=ABC123"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            extract_video_id("http://www.youtube.com/watch?v=ABC123"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_subdomains() {
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://music.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc&t=42s"),
            Some("abc".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL123&v=abc"),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_non_youtube() {
        assert_eq!(extract_video_id("https://example.com/"), None);
        assert_eq!(extract_video_id("https://example.com/watch?v=abc"), None);
        // Host must be youtube.com proper, not a lookalike
        assert_eq!(extract_video_id("https://notyoutube.com/watch?v=abc"), None);
        assert_eq!(
            extract_video_id("https://youtube.com.evil.example/watch?v=abc"),
            None
        );
    }

    #[test]
    fn test_extract_video_id_non_watch_pages() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/feed/subscriptions"),
            None
        );
        assert_eq!(extract_video_id("https://www.youtube.com/?v=abc"), None);
        assert_eq!(
            extract_video_id("https://www.youtube.com/playlist?list=PL123"),
            None
        );
    }

    #[test]
    fn test_extract_video_id_missing_or_empty_v() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?t=42s"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn test_extract_video_id_edge_cases() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("not-a-url"), None);
        assert_eq!(extract_video_id("chrome://newtab/"), None);
        assert_eq!(
            extract_video_id("  https://www.youtube.com/watch?v=abc  "),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_extract_video_id_case_insensitive_host() {
        assert_eq!(
            extract_video_id("https://WWW.YOUTUBE.COM/watch?v=abc"),
            Some("abc".to_string())
        );
    }
}
