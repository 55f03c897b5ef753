//! Itemized damage breakdown records

use serde::{Deserialize, Serialize};

/// Where a damage contribution comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionSource {
    Base,
    Effect,
}

/// One additive term in an item's damage calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamagePart {
    pub source: ContributionSource,
    /// Effect id for effect rows; absent on the base row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_id: Option<String>,
    /// Display label
    pub label: String,
    /// Contribution to the minimum of the range
    pub add_min: i64,
    /// Contribution to the maximum of the range
    pub add_max: i64,
    /// Whether this row counts toward the advertised total range.
    /// The base row is always included and never consults this flag.
    pub include_in_range: bool,
    /// Elemental/physical category, possibly inherited from the base
    pub damage_type: String,
    /// Reconstructed display notation ("2d6", "3", "3–10"); display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice_notation: Option<String>,
}

/// Damage summary for a generated item: the base range plus every
/// contribution, with totals over the included rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub base_min: i64,
    pub base_max: i64,
    pub total_min: i64,
    pub total_max: i64,
    pub parts: Vec<DamagePart>,
}

impl DamageBreakdown {
    /// Display string for the advertised range, e.g. "3–10" or "5"
    pub fn range_label(&self) -> String {
        if self.total_min == self.total_max {
            format!("{}", self.total_min)
        } else {
            format!("{}\u{2013}{}", self.total_min, self.total_max)
        }
    }
}
