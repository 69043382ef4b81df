//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::LandingPage;

pub const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

mod config;
pub use config::{load_site_config, use_site_config};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;
