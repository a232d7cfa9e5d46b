use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user-facing menu entry.
///
/// The wheel engine reads the enabled subset of these and writes nothing
/// back; editing happens only through [`super::Menu`]. The image URL is
/// carried for display and persistence but never fetched by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Stable identity key, kept across renames and enable toggles.
    pub key: Uuid,
    pub label: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub enabled: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            label: label.into(),
            image_url: None,
            enabled: true,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
