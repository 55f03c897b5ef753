//! Pricing rule tables - per-rarity price ranges and weight budgets

use crate::coerce::{num_or, truthy, LooseBool, LooseNum};
use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// Global pricing behavior switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRuleRow {
    pub pricing_rule_key: String,
    /// Price against the item's derived rarity instead of the requested one
    #[serde(default)]
    pub use_derived_rarity: Option<LooseBool>,
}

/// Price range for one rarity tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RarityPriceRow {
    pub rarity_key: Rarity,
    #[serde(default)]
    pub min_gp: Option<LooseNum>,
    #[serde(default)]
    pub typical_gp: Option<LooseNum>,
    #[serde(default)]
    pub max_gp: Option<LooseNum>,
    /// Noise volatility; 1 means no noise
    #[serde(default)]
    pub vol: Option<LooseNum>,
}

/// Power-budget cap for one rarity tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RarityCapRow {
    pub rarity_key: Rarity,
    #[serde(default)]
    pub rarity_weight_budget: Option<LooseNum>,
    #[serde(default)]
    pub budget_enabled: Option<LooseBool>,
}

/// The read-only lookup rows the pricing model consumes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingTables {
    #[serde(default)]
    pub pricing_rules: Vec<PricingRuleRow>,
    #[serde(default)]
    pub rarity_prices: Vec<RarityPriceRow>,
    #[serde(default)]
    pub rarity_caps: Vec<RarityCapRow>,
}

impl PricingTables {
    /// The "default" behavior-switch row, if present
    pub fn default_rule(&self) -> Option<&PricingRuleRow> {
        self.pricing_rules
            .iter()
            .find(|r| r.pricing_rule_key == "default")
    }

    /// Price row for a rarity tier
    pub fn price_row(&self, rarity: Rarity) -> Option<&RarityPriceRow> {
        self.rarity_prices.iter().find(|r| r.rarity_key == rarity)
    }

    /// Weight budget for a rarity tier. Only budget-enabled rows count;
    /// without one the budget defaults to 1.0.
    pub fn cap_budget(&self, rarity: Rarity) -> f64 {
        let row = self
            .rarity_caps
            .iter()
            .find(|r| r.rarity_key == rarity && truthy(r.budget_enabled.as_ref()));
        num_or(row.and_then(|r| r.rarity_weight_budget.as_ref()), 1.0)
    }
}
