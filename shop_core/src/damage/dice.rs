//! Dice notation parsing

use serde::{Deserialize, Serialize};

/// Inclusive min/max range produced by a dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRange {
    pub min: i64,
    pub max: i64,
}

impl DiceRange {
    pub const ZERO: DiceRange = DiceRange { min: 0, max: 0 };
}

/// Parse compact dice notation into a damage range.
///
/// The first `<count>d<sides>` pattern found anywhere in the string wins
/// (case-insensitive), giving `{count, count * sides}`. Failing that, a
/// leading integer gives a flat `{n, n}` range. Anything else degrades to
/// a zero range; this never errors.
pub fn parse_dice_notation(text: &str) -> DiceRange {
    if text.is_empty() {
        return DiceRange::ZERO;
    }
    if let Some((count, sides)) = find_dice_pattern(text) {
        return DiceRange {
            min: count,
            max: count * sides,
        };
    }
    if let Some(flat) = leading_int(text) {
        return DiceRange {
            min: flat,
            max: flat,
        };
    }
    DiceRange::ZERO
}

/// Locate the first digit-run `d` digit-run occurrence in the text.
fn find_dice_pattern(text: &str) -> Option<(i64, i64)> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let count_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i < bytes.len() && (bytes[i] == b'd' || bytes[i] == b'D') {
            let sides_start = i + 1;
            let mut j = sides_start;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > sides_start {
                let count = text[count_start..i].parse::<i64>().unwrap_or(0);
                let sides = text[sides_start..j].parse::<i64>().unwrap_or(0);
                return Some((count, sides));
            }
        }
    }
    None
}

/// Leading-integer parse: skip whitespace, optional sign, take digits,
/// ignore trailing junk. Returns None when no digits are present.
fn leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (negative, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let end = rest
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .map(|(idx, c)| idx + c.len_utf8())
        .last()?;
    let n = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -n } else { n })
}
