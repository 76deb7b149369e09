//! Site configuration
//!
//! The configuration is a TOML document compiled into the bundle
//! (`crates/frontend/site.toml`). There is no runtime lookup: the page has no
//! environment variables and no query parameters that influence loading.

use serde::Deserialize;

/// Configuration embedded in the wasm bundle
const EMBEDDED_CONFIG: &str = include_str!("../../site.toml");

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the primary catalog document
    pub menu_path: String,
    /// Path of the specials document
    pub specials_path: String,
    /// DOM id of the catalog section, scrolled into view on drill-down
    pub section_id: String,
    /// Image shown when a category card image fails to load
    pub card_placeholder: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            menu_path: "/menu.json".to_string(),
            specials_path: "/special.json".to_string(),
            section_id: "menu".to_string(),
            card_placeholder: "/images/placeholder-category.jpg".to_string(),
        }
    }
}

/// Parse a configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    Ok(config)
}

impl SiteConfig {
    /// Embedded configuration, or compiled defaults if it does not parse.
    pub fn load() -> Self {
        match parse_config(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("site.toml is invalid, using defaults: {e}");
                Self::default()
            }
        }
    }
}
