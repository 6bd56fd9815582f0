//! JavaScript bindings.
//!
//! JS hands every number over as a double. Arguments are accepted only when they are
//! non-negative integers no larger than `Number.MAX_SAFE_INTEGER`, and results are
//! refused on the way back out if the double could not hold them exactly.

use wasm_bindgen::prelude::*;

use crate::bitops_core::{BitQuery, Bitops};
use crate::error::{BitopsError, Result};
use crate::policy::WidthPolicy;

/// 2^53 - 1.
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

fn to_u64(value: f64) -> Result<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_SAFE_INTEGER as f64 {
        tracing::debug!(value, "rejecting argument");
        return Err(BitopsError::InvalidArgument { value });
    }
    Ok(value as u64)
}

fn to_u32(value: f64) -> Result<u32> {
    let wide = to_u64(value)?;
    u32::try_from(wide).map_err(|_| BitopsError::InvalidArgument { value })
}

fn to_f64(value: u64) -> Result<f64> {
    if value > MAX_SAFE_INTEGER {
        tracing::debug!(value, "result not representable as a double");
        return Err(BitopsError::Unrepresentable { value });
    }
    Ok(value as f64)
}

fn to_js(err: BitopsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn operands(values: &[f64]) -> Result<Vec<u64>> {
    values.iter().map(|&v| to_u64(v)).collect()
}

fn positions(values: &[f64]) -> Result<Vec<u32>> {
    values.iter().map(|&v| to_u32(v)).collect()
}

fn width(bits: Option<f64>) -> Result<Option<u32>> {
    bits.map(to_u32).transpose()
}

fn band_with(ops: &Bitops, values: &[f64]) -> Result<f64> {
    to_f64(ops.band(&operands(values)?)?)
}

fn bor_with(ops: &Bitops, values: &[f64]) -> Result<f64> {
    to_f64(ops.bor(&operands(values)?)?)
}

fn bxor_with(ops: &Bitops, values: &[f64]) -> Result<f64> {
    to_f64(ops.bxor(&operands(values)?)?)
}

fn bnot_with(ops: &Bitops, x: f64, bits: Option<f64>) -> Result<f64> {
    to_f64(ops.bnot(to_u64(x)?, width(bits)?)?)
}

fn blshift_with(ops: &Bitops, x: f64, bits: f64) -> Result<f64> {
    to_f64(ops.blshift(to_u64(x)?, to_u32(bits)?)?)
}

fn brshift_with(ops: &Bitops, x: f64, bits: f64) -> Result<f64> {
    to_f64(ops.brshift(to_u64(x)?, to_u32(bits)?))
}

fn tobin_with(ops: &Bitops, x: f64, bits: Option<f64>) -> Result<String> {
    Ok(ops.tobin(to_u64(x)?, width(bits)?))
}

fn frombin_with(ops: &Bitops, s: &str) -> Result<f64> {
    to_f64(ops.frombin(s)?)
}

fn bisset_with(ops: &Bitops, x: f64, bits: &[f64]) -> Result<JsValue> {
    Ok(match ops.bisset(to_u64(x)?, &positions(bits)?) {
        BitQuery::Single(flag) => JsValue::from_bool(flag),
        BitQuery::Many(flags) => {
            let arr = js_sys::Array::new();
            for flag in flags {
                arr.push(&JsValue::from_bool(flag));
            }
            arr.into()
        }
    })
}

fn bset_with(ops: &Bitops, x: f64, bits: &[f64]) -> Result<f64> {
    to_f64(ops.bset(to_u64(x)?, &positions(bits)?)?)
}

fn bunset_with(ops: &Bitops, x: f64, bits: &[f64]) -> Result<f64> {
    to_f64(ops.bunset(to_u64(x)?, &positions(bits)?)?)
}

#[wasm_bindgen]
pub fn band(values: &[f64]) -> std::result::Result<f64, JsValue> {
    band_with(&Bitops::COMPAT, values).map_err(to_js)
}

#[wasm_bindgen]
pub fn bor(values: &[f64]) -> std::result::Result<f64, JsValue> {
    bor_with(&Bitops::COMPAT, values).map_err(to_js)
}

#[wasm_bindgen]
pub fn bxor(values: &[f64]) -> std::result::Result<f64, JsValue> {
    bxor_with(&Bitops::COMPAT, values).map_err(to_js)
}

#[wasm_bindgen]
pub fn bnot(x: f64, bits: Option<f64>) -> std::result::Result<f64, JsValue> {
    bnot_with(&Bitops::COMPAT, x, bits).map_err(to_js)
}

#[wasm_bindgen]
pub fn blshift(x: f64, bits: f64) -> std::result::Result<f64, JsValue> {
    blshift_with(&Bitops::COMPAT, x, bits).map_err(to_js)
}

#[wasm_bindgen]
pub fn brshift(x: f64, bits: f64) -> std::result::Result<f64, JsValue> {
    brshift_with(&Bitops::COMPAT, x, bits).map_err(to_js)
}

#[wasm_bindgen]
pub fn tobin(x: f64, bits: Option<f64>) -> std::result::Result<String, JsValue> {
    tobin_with(&Bitops::COMPAT, x, bits).map_err(to_js)
}

#[wasm_bindgen]
pub fn frombin(s: &str) -> std::result::Result<f64, JsValue> {
    frombin_with(&Bitops::COMPAT, s).map_err(to_js)
}

/// A boolean for one position, an array of booleans otherwise.
#[wasm_bindgen]
pub fn bisset(x: f64, bits: &[f64]) -> std::result::Result<JsValue, JsValue> {
    bisset_with(&Bitops::COMPAT, x, bits).map_err(to_js)
}

#[wasm_bindgen]
pub fn bset(x: f64, bits: &[f64]) -> std::result::Result<f64, JsValue> {
    bset_with(&Bitops::COMPAT, x, bits).map_err(to_js)
}

#[wasm_bindgen]
pub fn bunset(x: f64, bits: &[f64]) -> std::result::Result<f64, JsValue> {
    bunset_with(&Bitops::COMPAT, x, bits).map_err(to_js)
}

/// Operator set with a chosen width policy; `new BitopsConfig(true)` selects exact widths.
#[wasm_bindgen]
pub struct BitopsConfig {
    inner: Bitops,
}

#[wasm_bindgen]
impl BitopsConfig {
    #[wasm_bindgen(constructor)]
    pub fn new(exact: bool) -> BitopsConfig {
        let policy = if exact {
            WidthPolicy::Exact
        } else {
            WidthPolicy::Compat
        };
        BitopsConfig {
            inner: Bitops::new(policy),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn policy(&self) -> String {
        self.inner.policy().as_str().to_string()
    }

    pub fn band(&self, values: &[f64]) -> std::result::Result<f64, JsValue> {
        band_with(&self.inner, values).map_err(to_js)
    }

    pub fn bor(&self, values: &[f64]) -> std::result::Result<f64, JsValue> {
        bor_with(&self.inner, values).map_err(to_js)
    }

    pub fn bxor(&self, values: &[f64]) -> std::result::Result<f64, JsValue> {
        bxor_with(&self.inner, values).map_err(to_js)
    }

    pub fn bnot(&self, x: f64, bits: Option<f64>) -> std::result::Result<f64, JsValue> {
        bnot_with(&self.inner, x, bits).map_err(to_js)
    }

    pub fn blshift(&self, x: f64, bits: f64) -> std::result::Result<f64, JsValue> {
        blshift_with(&self.inner, x, bits).map_err(to_js)
    }

    pub fn brshift(&self, x: f64, bits: f64) -> std::result::Result<f64, JsValue> {
        brshift_with(&self.inner, x, bits).map_err(to_js)
    }

    pub fn tobin(&self, x: f64, bits: Option<f64>) -> std::result::Result<String, JsValue> {
        tobin_with(&self.inner, x, bits).map_err(to_js)
    }

    pub fn frombin(&self, s: &str) -> std::result::Result<f64, JsValue> {
        frombin_with(&self.inner, s).map_err(to_js)
    }

    pub fn bisset(&self, x: f64, bits: &[f64]) -> std::result::Result<JsValue, JsValue> {
        bisset_with(&self.inner, x, bits).map_err(to_js)
    }

    pub fn bset(&self, x: f64, bits: &[f64]) -> std::result::Result<f64, JsValue> {
        bset_with(&self.inner, x, bits).map_err(to_js)
    }

    pub fn bunset(&self, x: f64, bits: &[f64]) -> std::result::Result<f64, JsValue> {
        bunset_with(&self.inner, x, bits).map_err(to_js)
    }
}
