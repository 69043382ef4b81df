//! # Session record
//!
//! [`UserRecord`] is the small identity object the landing page holds while an
//! actor is signed in. It is replaced wholesale on sign-in and cleared on
//! sign-out; there is no partial update or merge.
//!
//! The navbar never reads `image_url` directly. It goes through
//! [`UserRecord::avatar`], which resolves to either the image or the fallback
//! glyph so both render paths are decided in one place.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// What the avatar slot should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Avatar<'a> {
    Image { src: &'a str, alt: &'a str },
    /// No image configured; render the generic user glyph.
    Glyph,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            image_url: None,
        }
    }

    /// Builder method to attach an avatar image.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Resolve the avatar. Blank URLs count as missing.
    pub fn avatar(&self) -> Avatar<'_> {
        match self.image_url.as_deref() {
            Some(src) if !src.trim().is_empty() => Avatar::Image {
                src,
                alt: &self.name,
            },
            _ => Avatar::Glyph,
        }
    }
}
