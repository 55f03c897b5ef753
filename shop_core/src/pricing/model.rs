//! Rarity pricing model - log-space interpolation with bounded noise
//!
//! Prices cluster around a rarity's typical value and spread toward its
//! min/max according to how much of the item's power budget is consumed.
//! Multiplicative noise adds variety; rejection sampling keeps outliers
//! rare without making them impossible.

use super::rules::PricingTables;
use crate::coerce::{num_or, truthy};
use crate::rng::ShopRng;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// Maximum noise redraws before the last candidate is accepted as-is
const MAX_PRICE_ATTEMPTS: u32 = 8;

/// Rejection ceiling relative to the rarity's max price
const PRICE_CEILING_FACTOR: f64 = 1.15;

/// What the pricing model needs to know about an item
#[derive(Debug, Clone, Default)]
pub struct PricingInput {
    /// Rarity derived from the item's actual contents
    pub rarity: Option<Rarity>,
    /// Rarity the caller asked for
    pub target_rarity: Option<Rarity>,
    /// Budget weight of the bare base
    pub base_weight: f64,
    /// Total budget weight of base plus applied effects
    pub capacity_used: f64,
}

/// Audit record for one pricing call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub rarity_key_used: Rarity,
    pub cap_total: f64,
    pub cap_used: f64,
    pub weight_fraction_clamped: f64,
    pub pre_rounding_price: f64,
    pub final_price: f64,
    pub attempts: u32,
}

/// A priced item: the gold-piece figure plus its audit breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    pub price_gp: f64,
    pub breakdown: PricingBreakdown,
}

/// Price an item from its rarity and budget usage.
///
/// Never fails: missing rule rows degrade to lenient defaults and any
/// input yields a price floored at 0.01 gp.
pub fn compute_price(
    input: &PricingInput,
    tables: &PricingTables,
    rng: &mut ShopRng,
) -> PricingResult {
    let rule = tables.default_rule();
    let use_derived = truthy(rule.and_then(|r| r.use_derived_rarity.as_ref()));
    let rarity_used = if use_derived {
        input.rarity
    } else {
        input.target_rarity.or(input.rarity)
    }
    .unwrap_or(Rarity::Common);

    // Missing price row for this tier: use the common row's rules
    let row = tables
        .price_row(rarity_used)
        .or_else(|| tables.price_row(Rarity::Common));

    let cap_total = tables.cap_budget(rarity_used);
    let base_weight = input.base_weight;
    let cap_used = input.capacity_used;

    let w_raw = if cap_total - base_weight > 0.0 {
        (cap_used - base_weight) / (cap_total - base_weight)
    } else {
        0.0
    };
    let w_clamped = w_raw.clamp(0.0, 1.0);

    let l_min = num_or(row.and_then(|r| r.min_gp.as_ref()), 1.0).ln();
    let l_typ = num_or(row.and_then(|r| r.typical_gp.as_ref()), 2.0).ln();
    let l_max = num_or(row.and_then(|r| r.max_gp.as_ref()), 3.0).ln();

    // Two-segment interpolation in log space, pivoting at the typical price
    let lp = if w_clamped <= 0.5 {
        l_min + (w_clamped / 0.5) * (l_typ - l_min)
    } else {
        l_typ + ((w_clamped - 0.5) / 0.5) * (l_max - l_typ)
    };

    let vol = {
        let v = num_or(row.and_then(|r| r.vol.as_ref()), 1.0);
        if v == 0.0 {
            1.0
        } else {
            v
        }
    };
    let upper_cap = num_or(row.and_then(|r| r.max_gp.as_ref()), 0.0) * PRICE_CEILING_FACTOR;

    let mut pre_rounding;
    let mut attempts = 0;
    loop {
        let noise = rng.uniform(-vol.ln(), vol.ln()).exp();
        pre_rounding = lp.exp() * noise;
        attempts += 1;
        if pre_rounding <= upper_cap || attempts >= MAX_PRICE_ATTEMPTS {
            break;
        }
    }

    pre_rounding = pre_rounding.max(num_or(row.and_then(|r| r.min_gp.as_ref()), 0.0));
    let final_price = round_price(pre_rounding);

    PricingResult {
        price_gp: final_price.max(0.01),
        breakdown: PricingBreakdown {
            rarity_key_used: rarity_used,
            cap_total,
            cap_used,
            weight_fraction_clamped: w_clamped,
            pre_rounding_price: pre_rounding,
            final_price,
            attempts,
        },
    }
}

/// Cheap items keep silver/copper precision; expensive ones round to whole gp.
pub fn round_price(value: f64) -> f64 {
    if value < 10.0 {
        (value * 100.0).round() / 100.0
    } else {
        value.round()
    }
}
