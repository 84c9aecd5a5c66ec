//! Image URL construction for poster and backdrop paths

/// Default image host for metadata API paths like `/kqjL17yufvn9OVLyXYpvtyrFfak.jpg`
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Rendition size segment understood by the image host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    Poster,
    Original,
}

impl ImageSize {
    fn segment(self) -> &'static str {
        match self {
            ImageSize::Poster => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Full URL for an image `path`, or None when the record has no image.
pub fn image_url(base_url: &str, size: ImageSize, path: Option<&str>) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    Some(format!(
        "{}/{}{}",
        base_url.trim_end_matches('/'),
        size.segment(),
        path
    ))
}
