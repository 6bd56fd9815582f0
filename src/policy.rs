//! Bit-width inference.
//!
//! `bnot` without an explicit width, `tobin` padding and `bunset` all size a mask from
//! the magnitude of a number. [`WidthPolicy::Compat`] keeps the historical sizing, which
//! runs one bit short in places; [`WidthPolicy::Exact`] sizes every mask to the full bit
//! length. The three behaviours always switch together.

use crate::bit_table::BitTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthPolicy {
    /// `floor(log2 x)` for NOT, `bits + 1` padding, `ceil(log2 x)` for unset.
    #[default]
    Compat,
    /// Bit length everywhere, padding to exactly `bits`.
    Exact,
}

impl WidthPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthPolicy::Compat => "compat",
            WidthPolicy::Exact => "exact",
        }
    }

    /// Width of the mask `bnot` uses when the caller gives none.
    pub fn not_width(&self, x: u64) -> u32 {
        match self {
            WidthPolicy::Compat => floor_log2(x),
            WidthPolicy::Exact => bit_length(x),
        }
    }

    /// Width of the NOT mask applied while unsetting bits of `x`.
    pub fn unset_width(&self, x: u64) -> u32 {
        match self {
            WidthPolicy::Compat => ceil_log2(x),
            WidthPolicy::Exact => bit_length(x),
        }
    }

    /// Minimum length of a `tobin` string.
    pub fn pad_target(&self, bits: Option<u32>) -> usize {
        let bits = bits.unwrap_or(1) as usize;
        match self {
            WidthPolicy::Compat => bits.saturating_add(1),
            WidthPolicy::Exact => bits,
        }
    }
}

/// Number of significant binary digits; 0 for 0.
pub fn bit_length(x: u64) -> u32 {
    if x == 0 {
        return 0;
    }
    BitTable::encode(x).len() as u32
}

/// `floor(log2 x)`, taking 0 for both 0 and 1.
pub fn floor_log2(x: u64) -> u32 {
    bit_length(x).saturating_sub(1)
}

/// `ceil(log2 x)`, taking 0 for both 0 and 1.
pub fn ceil_log2(x: u64) -> u32 {
    if x <= 1 {
        return 0;
    }
    bit_length(x - 1)
}
