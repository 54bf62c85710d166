//! Mode (most frequent value)
//!
//! Values are grouped by exact numeric equality, with `-0.0` and `0.0`
//! counted as the same value. When several values share the highest
//! frequency all of them are reported, in the order each was first seen
//! while scanning the input.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{StatsError, StatsResult};

/// Most frequent value(s) of a column
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Exactly one value has the highest frequency
    Single(f64),
    /// Several values share the highest frequency (first-observed order)
    Tied(Vec<f64>),
}

impl Mode {
    /// All modal values, in reporting order
    pub fn values(&self) -> &[f64] {
        match self {
            Mode::Single(v) => std::slice::from_ref(v),
            Mode::Tied(vs) => vs,
        }
    }

    /// Whether more than one value shares the highest frequency
    pub fn is_tied(&self) -> bool {
        matches!(self, Mode::Tied(_))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single(v) => write!(f, "{}", v),
            Mode::Tied(vs) => {
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
        }
    }
}

// A single mode serializes as a number, a tie as the display string ("1, 2").
impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mode::Single(v) => serializer.serialize_f64(*v),
            Mode::Tied(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(Mode::Single(v)),
            Repr::Text(text) => {
                let values = text
                    .split(',')
                    .map(|s| s.trim().parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(serde::de::Error::custom)?;
                match values.as_slice() {
                    [] => Err(serde::de::Error::custom("empty mode")),
                    [single] => Ok(Mode::Single(*single)),
                    _ => Ok(Mode::Tied(values)),
                }
            }
        }
    }
}

/// Equality key for a value; folds -0.0 onto 0.0
fn value_key(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

/// Compute the mode in a single scan
///
/// Fails with `EmptyColumn` on empty input.
pub fn mode(values: &[f64]) -> StatsResult<Mode> {
    // Distinct values in first-insertion order, with their counts
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut max_freq = 0;

    for &value in values {
        let slot = *index.entry(value_key(value)).or_insert_with(|| {
            counts.push((value, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
        max_freq = max_freq.max(counts[slot].1);
    }

    let mut modal: Vec<f64> = counts
        .into_iter()
        .filter(|&(_, count)| count == max_freq)
        .map(|(value, _)| value)
        .collect();

    match modal.len() {
        0 => Err(StatsError::EmptyColumn),
        1 => Ok(Mode::Single(modal.remove(0))),
        _ => Ok(Mode::Tied(modal)),
    }
}
