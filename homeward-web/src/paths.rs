//! Helpers for constructing URLs to static assets that respect the deployment base path.

use homeward_core::TRANSITION_GIF;

/// When `PUBLIC_URL` is set at compile time (e.g., `/site` for GitHub Pages),
/// generated URLs are prefixed accordingly. Builds without `PUBLIC_URL` keep
/// the path relative to the current page, as the page scripts always did.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Resolve an image source handed to the page: the bundled transition image
/// goes through [`asset_path`], anything else is used verbatim.
#[must_use]
pub fn image_src(src: &str) -> String {
    if src.eq_ignore_ascii_case(TRANSITION_GIF) {
        asset_path(TRANSITION_GIF)
    } else {
        src.to_string()
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        return relative.to_string();
    }
    let rel = relative.trim_start_matches('/');
    format!("{base}/{rel}")
}
