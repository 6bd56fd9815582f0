//! Generic two-operand combinator and the AND/OR/XOR instances built from it.

use crate::bit_table::{BitTable, parse_digits};
use crate::error::{BitopsError, Result};

/// A bitwise operator defined by what it does to one pair of digits.
#[derive(Clone, Copy)]
pub struct BinaryOp {
    name: &'static str,
    reduce: fn(bool, bool) -> bool,
}

impl std::fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryOp").field("name", &self.name).finish()
    }
}

pub const AND: BinaryOp = BinaryOp::new("band", both);
pub const OR: BinaryOp = BinaryOp::new("bor", either);
pub const XOR: BinaryOp = BinaryOp::new("bxor", exactly_one);

fn both(a: bool, b: bool) -> bool {
    a && b
}

fn either(a: bool, b: bool) -> bool {
    a || b
}

fn exactly_one(a: bool, b: bool) -> bool {
    a != b
}

impl BinaryOp {
    pub const fn new(name: &'static str, reduce: fn(bool, bool) -> bool) -> Self {
        Self { name, reduce }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Aligns both tables on their least significant digit and reduces position by position.
    /// The shorter operand reads as 0 above its top digit.
    pub fn apply(&self, x: u64, y: u64) -> Result<u64> {
        let tx = BitTable::encode(x);
        let ty = BitTable::encode(y);
        let width = tx.len().max(ty.len());

        let mut out = vec![0u8; width];
        for offset in 0..width {
            let (b1, b2) = match (tx.digit_from_lsb(offset), ty.digit_from_lsb(offset)) {
                (None, None) => break,
                (b1, b2) => (b1.unwrap_or(0), b2.unwrap_or(0)),
            };
            if (self.reduce)(b1 != 0, b2 != 0) {
                out[width - 1 - offset] = 1;
            }
        }
        parse_digits(&out)
    }

    /// Left-to-right fold: `op(op(op(a, b), c), ...)`. A single operand comes back unchanged.
    pub fn fold(&self, values: &[u64]) -> Result<u64> {
        let (&first, rest) = values
            .split_first()
            .ok_or(BitopsError::EmptyOperands { op: self.name })?;
        rest.iter().try_fold(first, |acc, &next| {
            let folded = self.apply(acc, next)?;
            tracing::trace!(op = self.name, acc, next, folded, "fold step");
            Ok(folded)
        })
    }
}
