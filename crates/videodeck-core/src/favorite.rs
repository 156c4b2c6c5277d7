//! Favorite identifier extraction from media URLs.

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Path marker preceding the file name in media URLs served by the deck.
pub const DEFAULT_VIDEO_MARKER: &str = "/video/";

/// Errors extracting a favorite key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FavoriteError {
    #[error("Source URL {url:?} does not contain {marker:?}")]
    MissingMarker { url: String, marker: String },
    #[error("Source URL {0:?} does not decode to UTF-8")]
    InvalidUtf8(String),
}

/// Extract the favorite key from a loaded source URL.
///
/// The key is the text between the first `marker` and the next one (or the
/// end of the URL), percent-decoded. Malformed escapes are kept verbatim.
pub fn favorite_key(src: &str, marker: &str) -> Result<String, FavoriteError> {
    let mut parts = src.split(marker);
    parts.next();
    let encoded = parts.next().ok_or_else(|| FavoriteError::MissingMarker {
        url: src.to_string(),
        marker: marker.to_string(),
    })?;

    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| FavoriteError::InvalidUtf8(src.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_file_name() {
        let key = favorite_key("http://localhost:5000/video/My%20Clip.mp4", DEFAULT_VIDEO_MARKER);
        assert_eq!(key.unwrap(), "My Clip.mp4");
    }

    #[test]
    fn test_keeps_subdirectories() {
        let key = favorite_key("/video/live/Set%20%231%C3%A9.webm", DEFAULT_VIDEO_MARKER);
        assert_eq!(key.unwrap(), "live/Set #1é.webm");
    }

    #[test]
    fn test_stops_at_second_marker() {
        let key = favorite_key("https://host/video/a.mp4/video/b.mp4", DEFAULT_VIDEO_MARKER);
        assert_eq!(key.unwrap(), "a.mp4");
    }

    #[test]
    fn test_missing_marker() {
        let err = favorite_key("https://host/media/a.mp4", DEFAULT_VIDEO_MARKER).unwrap_err();
        assert!(matches!(err, FavoriteError::MissingMarker { .. }));
    }

    #[test]
    fn test_keeps_malformed_escapes() {
        let key = favorite_key("http://deck.local/video/100%ZZ.mp4", DEFAULT_VIDEO_MARKER);
        assert_eq!(key.unwrap(), "100%ZZ.mp4");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = favorite_key("/video/%FF%FE.mp4", DEFAULT_VIDEO_MARKER).unwrap_err();
        assert!(matches!(err, FavoriteError::InvalidUtf8(_)));
    }

    #[test]
    fn test_custom_marker() {
        let key = favorite_key("/clips/intro%2Boutro.mov", "/clips/");
        assert_eq!(key.unwrap(), "intro+outro.mov");
    }
}
