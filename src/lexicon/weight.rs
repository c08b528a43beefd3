//! Per-category blending weights.

use serde::{Deserialize, Serialize};

/// Tolerance on the sum of a weight triple.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// How much the keyword, context and type scores contribute to a
/// category's confidence. The three weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub keyword: f64,
    pub context: f64,
    #[serde(rename = "type")]
    pub type_: f64,
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self::new(0.4, 0.4, 0.2)
    }
}

impl WeightProfile {
    pub const fn new(keyword: f64, context: f64, type_: f64) -> Self {
        Self {
            keyword,
            context,
            type_,
        }
    }

    /// Scale the triple so it sums to 1.0 and round each weight to two
    /// decimals, ties to even. `None` when the triple sums to zero or less.
    pub fn normalized(keyword: f64, context: f64, type_: f64) -> Option<Self> {
        let total = keyword + context + type_;
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        Some(Self::new(
            round2(keyword / total),
            round2(context / total),
            round2(type_ / total),
        ))
    }

    pub fn sum(&self) -> f64 {
        self.keyword + self.context + self.type_
    }

    /// Whether every weight is finite and the sum is 1.0 within
    /// [`WEIGHT_SUM_TOLERANCE`].
    ///
    /// Learned profiles may hold a negative keyword weight when negated
    /// keywords dominate a category's examples.
    pub fn is_valid(&self) -> bool {
        self.keyword.is_finite()
            && self.context.is_finite()
            && self.type_.is_finite()
            && (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE + 1e-9
    }

    pub fn is_non_negative(&self) -> bool {
        self.keyword >= 0.0 && self.context >= 0.0 && self.type_ >= 0.0
    }

    /// Weighted sum of three scores.
    pub fn blend(&self, keyword: f64, context: f64, type_: f64) -> f64 {
        self.keyword * keyword + self.context * context + self.type_ * type_
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
