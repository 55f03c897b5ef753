//! Catalog rows - weapon bases and effects

use crate::coerce::{LooseBool, LooseNum};
use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// A weapon base an item can be built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseWeapon {
    pub base_id: String,
    pub display_name: String,
    /// Groups related bases ("sword", "axe") for family lookups
    #[serde(default)]
    pub family_key: String,
    /// Compact dice notation, e.g. "1d8"
    #[serde(default)]
    pub damage_dice: String,
    /// Physical damage category, e.g. "slashing"
    #[serde(default)]
    pub damage_type: String,
    /// Power-budget weight this base consumes before effects
    #[serde(default)]
    pub base_weight: Option<LooseNum>,
}

/// A magical effect that can be applied to a base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub effect_id: String,
    pub display_name: String,
    #[serde(default)]
    pub rules_text: String,
    /// Power-budget weight this effect consumes
    #[serde(default)]
    pub effect_weight: Option<LooseNum>,
    /// Lowest rarity tier this effect appears at
    #[serde(default)]
    pub min_rarity: Rarity,

    // === On-hit damage contribution ===
    #[serde(default)]
    pub on_hit_damage_add_min: Option<LooseNum>,
    #[serde(default)]
    pub on_hit_damage_add_max: Option<LooseNum>,
    /// Whether the bonus counts toward the advertised damage range
    #[serde(default)]
    pub on_hit_damage_include_in_range: Option<LooseBool>,
    /// Generic damage type key; "{TERM}" inherits the base weapon's type
    #[serde(default)]
    pub type_key: Option<String>,

    // === Resolved at generation time ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_damage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_name: Option<String>,
}

#[cfg(test)]
impl Effect {
    /// Minimal effect row for unit tests
    pub fn test_row(id: &str, name: &str) -> Effect {
        Effect {
            effect_id: id.to_string(),
            display_name: name.to_string(),
            rules_text: String::new(),
            effect_weight: None,
            min_rarity: Rarity::Common,
            on_hit_damage_add_min: None,
            on_hit_damage_add_max: None,
            on_hit_damage_include_in_range: None,
            type_key: None,
            resolved_damage_type: None,
            resolved_name: None,
        }
    }
}
