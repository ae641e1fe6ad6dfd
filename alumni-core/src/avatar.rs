/// Rendered for authors without an avatar or authors that no longer exist.
pub const DEFAULT_AVATAR_URL: &str = "/default-avatar.png";

/// Turns the relative avatar paths of users into absolute URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarUrls {
    base_url: String,
}

impl AvatarUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The stored path is appended verbatim, separators are not normalized.
    pub fn resolve(&self, avatar: Option<&str>) -> String {
        match avatar {
            Some(path) if !path.is_empty() => format!("{}{}", self.base_url, path),
            _ => DEFAULT_AVATAR_URL.to_string(),
        }
    }
}
