use crate::combinator::{AND, OR, XOR};
use crate::convert::{from_binary_string, to_binary_string};
use crate::error::Result;
use crate::policy::{WidthPolicy, bit_length};
use crate::shift::{self, ones, pow2};

/// Result of a bit test: one answer per queried position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitQuery {
    Single(bool),
    Many(Vec<bool>),
}

impl BitQuery {
    pub fn into_vec(self) -> Vec<bool> {
        match self {
            BitQuery::Single(b) => vec![b],
            BitQuery::Many(v) => v,
        }
    }
}

/// The operator set, bound to a width policy.
///
/// The crate-level functions (`band`, `bnot`, ...) go through [`Bitops::COMPAT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitops {
    policy: WidthPolicy,
}

impl Bitops {
    pub const COMPAT: Bitops = Bitops::new(WidthPolicy::Compat);
    pub const EXACT: Bitops = Bitops::new(WidthPolicy::Exact);

    pub const fn new(policy: WidthPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> WidthPolicy {
        self.policy
    }

    pub fn band(&self, values: &[u64]) -> Result<u64> {
        AND.fold(values)
    }

    pub fn bor(&self, values: &[u64]) -> Result<u64> {
        OR.fold(values)
    }

    pub fn bxor(&self, values: &[u64]) -> Result<u64> {
        XOR.fold(values)
    }

    /// Flips the low `bits` bits of `x`. Bits of `x` above the mask are kept.
    pub fn bnot(&self, x: u64, bits: Option<u32>) -> Result<u64> {
        let bits = bits.unwrap_or_else(|| self.policy.not_width(x));
        XOR.apply(x, ones(bits)?)
    }

    pub fn blshift(&self, x: u64, bits: u32) -> Result<u64> {
        shift::blshift(x, bits)
    }

    pub fn brshift(&self, x: u64, bits: u32) -> u64 {
        shift::brshift(x, bits)
    }

    pub fn tobin(&self, x: u64, bits: Option<u32>) -> String {
        to_binary_string(x, self.policy.pad_target(bits))
    }

    pub fn frombin(&self, s: &str) -> Result<u64> {
        from_binary_string(s)
    }

    /// One flag per position, in the order given. Position 0 is the least significant bit.
    pub fn bisset_all(&self, x: u64, positions: &[u32]) -> Vec<bool> {
        positions
            .iter()
            .map(|&p| self.brshift(x, p) % 2 == 1)
            .collect()
    }

    /// Like [`Bitops::bisset_all`], but a lone position yields a single flag.
    pub fn bisset(&self, x: u64, positions: &[u32]) -> BitQuery {
        let mut flags = self.bisset_all(x, positions);
        if flags.len() == 1 {
            return BitQuery::Single(flags.remove(0));
        }
        BitQuery::Many(flags)
    }

    pub fn bset(&self, x: u64, positions: &[u32]) -> Result<u64> {
        positions
            .iter()
            .try_fold(x, |acc, &p| OR.apply(acc, pow2(p)?))
    }

    /// Clears each position in turn. The NOT mask is re-sized from the running value at
    /// every step, so under `Compat` a value that is an exact power of two is not covered
    /// by its own mask.
    pub fn bunset(&self, x: u64, positions: &[u32]) -> Result<u64> {
        positions.iter().try_fold(x, |acc, &p| {
            let width = self.policy.unset_width(acc);
            if width < bit_length(acc) {
                tracing::debug!(
                    value = acc,
                    width,
                    policy = self.policy.as_str(),
                    "unset mask narrower than operand"
                );
            }
            // A bit at 2^64 or above never meets acc; only the mask half of the NOT matters.
            let flipped = match pow2(p) {
                Ok(bit) => self.bnot(bit, Some(width))?,
                Err(_) => ones(width)?,
            };
            AND.apply(acc, flipped)
        })
    }
}

pub fn band(values: &[u64]) -> Result<u64> {
    Bitops::COMPAT.band(values)
}

pub fn bor(values: &[u64]) -> Result<u64> {
    Bitops::COMPAT.bor(values)
}

pub fn bxor(values: &[u64]) -> Result<u64> {
    Bitops::COMPAT.bxor(values)
}

/// Without `bits`, the mask width is `floor(log2 x)`: `bnot(5, None)` flips only two bits.
pub fn bnot(x: u64, bits: Option<u32>) -> Result<u64> {
    Bitops::COMPAT.bnot(x, bits)
}

pub fn blshift(x: u64, bits: u32) -> Result<u64> {
    Bitops::COMPAT.blshift(x, bits)
}

pub fn brshift(x: u64, bits: u32) -> u64 {
    Bitops::COMPAT.brshift(x, bits)
}

/// Pads to `bits + 1` characters (2 when `bits` is `None`).
pub fn tobin(x: u64, bits: Option<u32>) -> String {
    Bitops::COMPAT.tobin(x, bits)
}

pub fn frombin(s: &str) -> Result<u64> {
    Bitops::COMPAT.frombin(s)
}

pub fn bisset(x: u64, positions: &[u32]) -> BitQuery {
    Bitops::COMPAT.bisset(x, positions)
}

pub fn bisset_all(x: u64, positions: &[u32]) -> Vec<bool> {
    Bitops::COMPAT.bisset_all(x, positions)
}

pub fn bset(x: u64, positions: &[u32]) -> Result<u64> {
    Bitops::COMPAT.bset(x, positions)
}

pub fn bunset(x: u64, positions: &[u32]) -> Result<u64> {
    Bitops::COMPAT.bunset(x, positions)
}
