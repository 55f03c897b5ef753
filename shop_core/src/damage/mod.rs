//! Damage system - dice parsing and contribution aggregation

mod breakdown;
mod calculation;
mod dice;

pub use breakdown::{ContributionSource, DamageBreakdown, DamagePart};
pub use calculation::compute_damage;
pub use dice::{parse_dice_notation, DiceRange};
