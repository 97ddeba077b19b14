/// Configuration for the frontend application

/// Backend origin. Read from the environment at compile time so deploy
/// workflows can point staging builds elsewhere; defaults to production.
pub const API_BASE: &str = match option_env!("GLOBAL_MAGAZINE_API_BASE") {
    Some(url) => url,
    None => "https://theglobalmagazine-backend-laka.onrender.com/api",
};

/// Base URL for static assets.
pub const BASE_URL: &str = "/";

/// Shown whenever a record arrives without an `image` field.
pub const PLACEHOLDER_IMAGE: &str = "static/placeholder-cover.jpg";

/// Magazine grid page size.
pub const MAGAZINES_PER_PAGE: usize = 8;

/// News/articles/stories page size.
pub const LIST_PER_PAGE: usize = 6;

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
