//! Pricing system - rarity rule tables and the log-space pricing model

mod model;
mod rules;

pub use model::{compute_price, round_price, PricingBreakdown, PricingInput, PricingResult};
pub use rules::{PricingRuleRow, PricingTables, RarityCapRow, RarityPriceRow};
