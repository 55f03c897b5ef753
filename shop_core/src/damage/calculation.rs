//! Damage aggregation - combining a weapon base with effect contributions

use super::breakdown::{ContributionSource, DamageBreakdown, DamagePart};
use super::dice::parse_dice_notation;
use crate::catalog::{BaseWeapon, Effect};
use crate::coerce::{num_or, truthy};

/// Die faces considered for notation reconstruction
const STANDARD_DIE_FACES: [i64; 6] = [4, 6, 8, 10, 12, 20];

/// Placeholder token an effect uses to inherit the base weapon's damage type
const INHERIT_TYPE_TOKEN: &str = "{TERM}";

/// Aggregate a base weapon's damage range with effect contributions.
///
/// The base row always comes first and is always counted in the total.
/// Effect rows are emitted only when they add damage; each row is counted
/// in the total only when its include-in-range flag is truthy, but is kept
/// in the breakdown either way so it can still be displayed.
pub fn compute_damage(base: &BaseWeapon, effects: &[Effect]) -> DamageBreakdown {
    let base_range = parse_dice_notation(&base.damage_dice);

    let mut parts = vec![DamagePart {
        source: ContributionSource::Base,
        effect_id: None,
        label: format!("Base ({})", base.damage_dice),
        add_min: base_range.min,
        add_max: base_range.max,
        include_in_range: true,
        damage_type: base.damage_type.clone(),
        dice_notation: None,
    }];

    let mut total_min = base_range.min;
    let mut total_max = base_range.max;

    for eff in effects {
        let add_min = num_or(eff.on_hit_damage_add_min.as_ref(), 0.0) as i64;
        let mut add_max = num_or(eff.on_hit_damage_add_max.as_ref(), 0.0) as i64;
        // A lone minimum is a single-value bonus, not a range
        if add_max == 0 && add_min > 0 {
            add_max = add_min;
        }

        if add_min <= 0 && add_max <= 0 {
            continue;
        }

        let include = truthy(eff.on_hit_damage_include_in_range.as_ref());

        let mut damage_type = [eff.resolved_damage_type.as_deref(), eff.type_key.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();
        if damage_type == INHERIT_TYPE_TOKEN {
            damage_type = base.damage_type.clone();
        }

        let label = [eff.resolved_name.as_deref(), Some(eff.display_name.as_str())]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();

        parts.push(DamagePart {
            source: ContributionSource::Effect,
            effect_id: Some(eff.effect_id.clone()),
            label,
            add_min,
            add_max,
            include_in_range: include,
            damage_type,
            dice_notation: Some(display_notation(add_min, add_max)),
        });

        if include {
            total_min += add_min;
            total_max += add_max;
        }
    }

    DamageBreakdown {
        base_min: base_range.min,
        base_max: base_range.max,
        total_min,
        total_max,
        parts,
    }
}

/// Rebuild a display notation for a bonus range. A pair that factors into a
/// whole count of a standard die renders as "NdS"; everything else falls
/// back to the flat value or a literal range string.
fn display_notation(add_min: i64, add_max: i64) -> String {
    if add_max > add_min && add_min > 0 && add_max % add_min == 0 {
        let sides = add_max / add_min;
        if STANDARD_DIE_FACES.contains(&sides) {
            return format!("{}d{}", add_min, sides);
        }
    }
    if add_min == add_max {
        format!("{}", add_min)
    } else {
        format!("{}\u{2013}{}", add_min, add_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::{LooseBool, LooseNum};

    fn longsword() -> BaseWeapon {
        BaseWeapon {
            base_id: "longsword".to_string(),
            display_name: "Longsword".to_string(),
            family_key: "sword".to_string(),
            damage_dice: "1d6".to_string(),
            damage_type: "slashing".to_string(),
            base_weight: None,
        }
    }

    fn bonus_effect(min: f64, max: f64, include: &str) -> Effect {
        Effect {
            on_hit_damage_add_min: Some(LooseNum::Num(min)),
            on_hit_damage_add_max: Some(LooseNum::Num(max)),
            on_hit_damage_include_in_range: Some(LooseBool::Text(include.to_string())),
            ..Effect::test_row("flame", "Flaming")
        }
    }

    #[test]
    fn test_base_only() {
        let breakdown = compute_damage(&longsword(), &[]);
        assert_eq!(breakdown.total_min, 1);
        assert_eq!(breakdown.total_max, 6);
        assert_eq!(breakdown.parts.len(), 1);
        assert!(breakdown.parts[0].include_in_range);
        assert_eq!(breakdown.parts[0].label, "Base (1d6)");
        assert_eq!(breakdown.parts[0].damage_type, "slashing");
    }

    #[test]
    fn test_lone_minimum_coerces_maximum() {
        let breakdown = compute_damage(&longsword(), &[bonus_effect(2.0, 0.0, "true")]);
        assert_eq!(breakdown.parts.len(), 2);
        assert_eq!(breakdown.parts[1].add_max, 2);
        assert_eq!(breakdown.total_min, 3);
        assert_eq!(breakdown.total_max, 8);
    }

    #[test]
    fn test_excluded_effect_is_visible_but_not_counted() {
        let breakdown = compute_damage(&longsword(), &[bonus_effect(1.0, 4.0, "no")]);
        assert_eq!(breakdown.parts.len(), 2);
        assert!(!breakdown.parts[1].include_in_range);
        assert_eq!(breakdown.total_min, 1);
        assert_eq!(breakdown.total_max, 6);
    }

    #[test]
    fn test_zero_bonus_emits_nothing() {
        let breakdown = compute_damage(&longsword(), &[bonus_effect(0.0, 0.0, "true")]);
        assert_eq!(breakdown.parts.len(), 1);
    }

    #[test]
    fn test_notation_reconstruction() {
        assert_eq!(display_notation(2, 12), "2d6");
        assert_eq!(display_notation(1, 4), "1d4");
        assert_eq!(display_notation(3, 10), "3\u{2013}10");
        assert_eq!(display_notation(2, 14), "2\u{2013}14");
        assert_eq!(display_notation(5, 5), "5");
    }

    #[test]
    fn test_effect_notation_attached() {
        let breakdown = compute_damage(&longsword(), &[bonus_effect(2.0, 12.0, "1")]);
        assert_eq!(breakdown.parts[1].dice_notation.as_deref(), Some("2d6"));
        assert_eq!(breakdown.total_min, 3);
        assert_eq!(breakdown.total_max, 18);
    }

    #[test]
    fn test_inherited_damage_type() {
        let mut eff = bonus_effect(1.0, 6.0, "yes");
        eff.resolved_damage_type = Some("{TERM}".to_string());
        let breakdown = compute_damage(&longsword(), &[eff]);
        assert_eq!(breakdown.parts[1].damage_type, "slashing");
    }

    #[test]
    fn test_type_key_fallback() {
        let mut eff = bonus_effect(1.0, 6.0, "yes");
        eff.resolved_damage_type = Some(String::new());
        eff.type_key = Some("fire".to_string());
        let breakdown = compute_damage(&longsword(), &[eff]);
        assert_eq!(breakdown.parts[1].damage_type, "fire");
    }

    #[test]
    fn test_malformed_numeric_fields_default_to_zero() {
        let mut eff = bonus_effect(0.0, 0.0, "true");
        eff.on_hit_damage_add_min = Some(LooseNum::Text("n/a".to_string()));
        eff.on_hit_damage_add_max = None;
        let breakdown = compute_damage(&longsword(), &[eff]);
        assert_eq!(breakdown.parts.len(), 1);
        assert_eq!(breakdown.total_max, 6);
    }
}
