//! Platform-independent model of the Percepto landing page: view state,
//! session record, theme tokens, hero statistics and site configuration.

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod state;
pub mod stats;
pub mod theme;
pub mod tokens;

pub use config::{BrandConfig, DemoUserConfig, HeroCopy, SiteConfig};
pub use error::{Error, Result};
pub use models::{Avatar, UserRecord};
pub use session::{DemoSession, SessionBackend};
pub use state::{PageState, SessionView};
pub use stats::{Stat, StatIcon, HERO_STATS};
pub use theme::Theme;
