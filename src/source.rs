use image::DynamicImage;
use thiserror::Error;

/// Errors produced while resolving an image source string.
#[derive(Debug, Error)]
pub enum ImageSourceError {
    /// The URL could not be fetched.
    #[error("failed to fetch image from '{url}'")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// The underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },
    /// The bytes could not be decoded as an image. Unreadable file paths also
    /// surface here, as the decoder's I/O error.
    #[error("failed to decode image from '{origin}'")]
    Decode {
        /// The path or URL the bytes came from.
        origin: String,
        /// The underlying decode error.
        #[source]
        source: image::ImageError,
    },
}

/// Resolves a file path or URL string into a decoded in-memory image.
///
/// Strings starting with `http://` or `https://` are fetched over the network
/// with a blocking request; anything else is opened as a local file. The
/// format is inferred from the bytes.
pub fn resolve_image(source: &str) -> Result<DynamicImage, ImageSourceError> {
    if is_url(source) {
        log::debug!("fetching image from {source}");
        let bytes = reqwest::blocking::get(source)
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(|e| ImageSourceError::Fetch {
                url: source.to_string(),
                source: e,
            })?;
        image::load_from_memory(&bytes).map_err(|e| ImageSourceError::Decode {
            origin: source.to_string(),
            source: e,
        })
    } else {
        image::open(source).map_err(|e| ImageSourceError::Decode {
            origin: source.to_string(),
            source: e,
        })
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn url_detection() {
        assert!(is_url("http://example.com/cat.jpg"));
        assert!(is_url("https://example.com/cat.png"));
        assert!(!is_url("/tmp/cat.jpg"));
        assert!(!is_url("cat.jpg"));
        assert!(!is_url("file:///tmp/cat.jpg"));
    }

    #[test]
    fn missing_path_is_a_decode_error() {
        let err = resolve_image("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, ImageSourceError::Decode { .. }));
    }

    #[test]
    fn non_image_file_is_a_decode_error() {
        let path = temp_path("selene-vlm-not-an-image.png");
        std::fs::write(&path, b"this is not a png").unwrap();
        let err = resolve_image(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ImageSourceError::Decode { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn decodes_a_valid_file() {
        let path = temp_path("selene-vlm-valid.png");
        image::RgbImage::new(4, 3).save(&path).unwrap();
        let img = resolve_image(path.to_str().unwrap()).unwrap();
        assert_eq!((img.width(), img.height()), (4, 3));
        std::fs::remove_file(&path).ok();
    }
}
