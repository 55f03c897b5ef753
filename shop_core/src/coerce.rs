//! Loose field coercion for spreadsheet-origin rows
//!
//! Rule tables come from loosely-typed sources where a boolean column may
//! hold `true`, `"yes"` or `1`, and a numeric column may hold `"3.5"` or be
//! missing entirely. Every engine input funnels through these helpers so
//! malformed cells degrade to defaults instead of failing generation.

use serde::{Deserialize, Serialize};

/// A boolean-like cell: bool, number or string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseBool {
    Bool(bool),
    Num(f64),
    Text(String),
}

impl LooseBool {
    /// Truthiness test. Strings count as true only for "true", "1" or "yes"
    /// (case-insensitive, trimmed); numbers only for exactly 1.
    pub fn truthy(&self) -> bool {
        match self {
            LooseBool::Bool(b) => *b,
            LooseBool::Num(n) => *n == 1.0,
            LooseBool::Text(s) => {
                matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes")
            }
        }
    }
}

/// A numeric cell: number, string or bool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNum {
    Int(i64),
    Num(f64),
    Text(String),
    Bool(bool),
}

impl LooseNum {
    /// The numeric value, if the cell holds one. Empty strings coerce to 0.
    pub fn value(&self) -> Option<f64> {
        match self {
            LooseNum::Num(n) => Some(*n),
            LooseNum::Int(i) => Some(*i as f64),
            LooseNum::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    Some(0.0)
                } else {
                    t.parse::<f64>().ok()
                }
            }
            LooseNum::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }
}

/// Coerce an optional boolean-like cell; absent cells are false.
pub fn truthy(v: Option<&LooseBool>) -> bool {
    v.map(LooseBool::truthy).unwrap_or(false)
}

/// Coerce an optional numeric cell, falling back when absent or unparseable.
pub fn num_or(v: Option<&LooseNum>, fallback: f64) -> f64 {
    v.and_then(LooseNum::value).unwrap_or(fallback)
}
