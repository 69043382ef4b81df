//! # Site configuration — `percepto.toml`
//!
//! Copy and identity values the landing page renders. Every field has a
//! default, so a missing or empty file is the stock page.
//!
//! ```toml
//! [brand]
//! name = "Percepto"
//! home_href = "/"
//!
//! [hero]
//! badge = "Intelligent Object Detection"
//! heading = "Next Generation"
//! highlight = "Computer Vision"
//! description = "Experience real-time object detection ..."
//! primary_cta = "Try Demo"
//! secondary_cta = "Watch Demo"
//!
//! [demo_user]
//! id = "1"
//! name = "John Doe"
//! email = "john@example.com"
//! # image_url = "https://..."
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top-level config with TOML (de)serialisation and file loading. |
//! | [`BrandConfig`] | Logo text and the link it points to. |
//! | [`HeroCopy`] | Badge, heading, description and button labels of the hero. |
//! | [`DemoUserConfig`] | Record assigned by the stub sign-in. |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::UserRecord;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub hero: HeroCopy,
    #[serde(default)]
    pub demo_user: DemoUserConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub home_href: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Percepto".into(),
            home_href: "/".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub badge: String,
    pub heading: String,
    /// Rendered after `heading` with the brand gradient.
    pub highlight: String,
    pub description: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            badge: "Intelligent Object Detection".into(),
            heading: "Next Generation".into(),
            highlight: "Computer Vision".into(),
            description: "Experience real-time object detection powered by cutting-edge AI. \
                          Process images and video streams with unmatched accuracy."
                .into(),
            primary_cta: "Try Demo".into(),
            secondary_cta: "Watch Demo".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoUserConfig {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for DemoUserConfig {
    fn default() -> Self {
        Self {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            image_url: None,
        }
    }
}

impl From<DemoUserConfig> for UserRecord {
    fn from(demo: DemoUserConfig) -> Self {
        UserRecord {
            id: demo.id,
            name: demo.name,
            email: demo.email,
            image_url: demo.image_url,
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "percepto.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
