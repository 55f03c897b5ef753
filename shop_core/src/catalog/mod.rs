//! Catalog loading from TOML files

mod rows;

pub use rows::{BaseWeapon, Effect};

use crate::pricing::PricingTables;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path)?;
    let table: T = toml::from_str(&content)?;
    Ok(table)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, CatalogError> {
    let table: T = toml::from_str(content)?;
    Ok(table)
}

/// All the rule tables the procedural generator consumes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub bases: Vec<BaseWeapon>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(flatten)]
    pub pricing: PricingTables,
}

impl Catalog {
    /// Bases matching a builder row's selector: exact id match first, then
    /// family match, then everything.
    pub fn bases_for(&self, selector: &str) -> Vec<&BaseWeapon> {
        if !selector.is_empty() {
            let exact: Vec<&BaseWeapon> = self
                .bases
                .iter()
                .filter(|b| b.base_id == selector)
                .collect();
            if !exact.is_empty() {
                return exact;
            }
            let family: Vec<&BaseWeapon> = self
                .bases
                .iter()
                .filter(|b| b.family_key == selector)
                .collect();
            if !family.is_empty() {
                return family;
            }
        }
        self.bases.iter().collect()
    }

    /// Effects eligible at exactly the given rarity tier
    pub fn effects_for_rarity(&self, rarity: Rarity) -> Vec<&Effect> {
        self.effects
            .iter()
            .filter(|e| e.min_rarity == rarity)
            .collect()
    }
}

/// Load a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    load_toml(path)
}

/// Parse a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    parse_toml(content)
}

/// The catalog bundled with the library
pub fn default_catalog() -> Catalog {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml).unwrap_or_default()
}
