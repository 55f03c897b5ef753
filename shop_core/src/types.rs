//! Core types shared across the shop generator

use crate::catalog::{BaseWeapon, Effect};
use crate::damage::DamageBreakdown;
use crate::pricing::PricingBreakdown;
use crate::shop::{SrdItem, SrdPriceAudit};
use serde::{Deserialize, Serialize};

/// Item rarity tier, ordered from most to least common
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
}

impl Rarity {
    /// All rarities in ascending order
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::VeryRare,
            Rarity::Legendary,
        ]
    }

    /// Lookup key used by rule tables
    pub fn key(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::VeryRare => "very_rare",
            Rarity::Legendary => "legendary",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::VeryRare => "Very Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// How a shop item was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemMode {
    /// Built procedurally from a weapon base plus effects
    Generated,
    /// Drawn from the fixed reference catalog
    Reference,
}

/// Audit data attached to a stocked item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemInternals {
    /// Rarity pricing breakdown, when the pricing model ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingBreakdown>,
    /// Reference-catalog price audit, when the item came from the SRD path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srd: Option<SrdPriceAudit>,
}

/// One item on a shop's shelf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub mode: ItemMode,
    pub name: String,
    pub rarity: Rarity,
    /// Price in gold pieces; fractional below 10 gp (silver/copper)
    pub price_gp: f64,

    // === Procedural fields ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<BaseWeapon>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<DamageBreakdown>,

    // === Reference fields ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srd: Option<SrdItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub srd_tags: Vec<String>,

    /// Explanation lines for how the price came together
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shop_log: Vec<String>,

    #[serde(default)]
    pub internals: ItemInternals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Rare < Rarity::VeryRare);
        assert!(Rarity::VeryRare < Rarity::Legendary);
    }

    #[test]
    fn test_rarity_keys_round_trip() {
        for rarity in Rarity::all() {
            let json = serde_json::to_string(rarity).unwrap();
            assert_eq!(json, format!("\"{}\"", rarity.key()));
            let back: Rarity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *rarity);
        }
    }
}
