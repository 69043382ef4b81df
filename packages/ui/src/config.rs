use dioxus::prelude::*;
use store::SiteConfig;

/// Load the site config for this platform.
///
/// Native builds read `<config_dir>/percepto/percepto.toml`; the web build
/// has no filesystem and always uses the defaults. Any failure is logged and
/// falls back to the defaults.
pub fn load_site_config() -> SiteConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("percepto").join(SiteConfig::filename());
            match SiteConfig::load(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded site config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Ignoring site config: {}", e);
                }
            }
        }
    }

    SiteConfig::default()
}

/// Consume the `SiteConfig` provided by the app root.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
