//! Static assets compiled into the binary via `rust-embed`.
//!
//! `jobs.json` is the sample dataset used when no dataset path is
//! configured; `app.css` is inlined into standalone documents.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/"]
pub struct Assets;

pub const SAMPLE_JOBS: &str = "jobs.json";
pub const STYLESHEET: &str = "app.css";

/// Fetch an embedded text asset.
pub fn text(name: &str) -> Option<String> {
    Assets::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

/// The page stylesheet, or an empty string if it was not embedded.
pub fn stylesheet() -> String {
    text(STYLESHEET).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_is_embedded() {
        let jobs = text(SAMPLE_JOBS).expect("jobs.json embedded");
        assert!(jobs.trim_start().starts_with('['));
    }

    #[test]
    fn test_stylesheet_contains_active_link_class() {
        assert!(stylesheet().contains("kn-app-nav__link--active"));
    }

    #[test]
    fn test_unknown_asset_is_none() {
        assert!(text("missing.txt").is_none());
    }
}
