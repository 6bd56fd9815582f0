//! Digit-table codec.
//!
//! A [`BitTable`] holds the binary expansion of a number as a most-significant-first
//! list of 0/1 digits. Encoding uses only division and remainder; decoding goes
//! through a base-2 string parse, so nothing here touches the hardware bit operators.

use std::fmt;

use crate::error::{BitopsError, Result};

/// Most-significant-first binary digits of a non-negative number.
///
/// Never empty, every digit is 0 or 1, and there is no leading zero unless the
/// table is the single digit `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitTable {
    digits: Vec<u8>,
}

impl BitTable {
    pub fn encode(x: u64) -> Self {
        if x == 0 {
            return Self { digits: vec![0] };
        }
        let mut digits = Vec::with_capacity(64);
        let mut rest = x;
        while rest > 0 {
            digits.push((rest % 2) as u8);
            rest /= 2;
        }
        digits.reverse();
        Self { digits }
    }

    pub fn decode(&self) -> Result<u64> {
        parse_digits(&self.digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at `offset` counted from the least significant end, or `None` past the top.
    pub fn digit_from_lsb(&self, offset: usize) -> Option<u8> {
        let len = self.digits.len();
        if offset >= len {
            return None;
        }
        Some(self.digits[len - 1 - offset])
    }
}

impl fmt::Display for BitTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digits_to_string(&self.digits))
    }
}

pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|&d| if d == 0 { '0' } else { '1' })
        .collect()
}

/// Reads a most-significant-first digit sequence back into a number.
///
/// Leading zeros are allowed; an empty sequence reads as zero.
pub(crate) fn parse_digits(digits: &[u8]) -> Result<u64> {
    let significant = match digits.iter().position(|&d| d != 0) {
        Some(first) => &digits[first..],
        None => return Ok(0),
    };
    parse_base2(&digits_to_string(significant), "decode")
}

pub(crate) fn parse_base2(s: &str, op: &'static str) -> Result<u64> {
    if s.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(s, 2).map_err(|_| BitopsError::Overflow { op })
}
