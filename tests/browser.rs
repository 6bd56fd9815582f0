//! Browser-based tests for the JS bindings using wasm-pack test
//!
//! Run these tests with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use soft_bitops::bitops_wasm::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_logic_ops() {
    assert_eq!(bor(&[3735928559.0, 3405691582.0]).unwrap(), 3741302527.0);
    assert_eq!(band(&[3735928559.0, 3405691582.0]).unwrap(), 3400317614.0);
    assert_eq!(bxor(&[3735928559.0, 3405691582.0]).unwrap(), 340984913.0);
}

#[wasm_bindgen_test]
fn test_shifts_and_not() {
    assert_eq!(blshift(57005.0, 16.0).unwrap(), 3735879680.0);
    assert_eq!(brshift(57005.0, 8.0).unwrap(), 222.0);
    assert_eq!(bnot(0.0, Some(8.0)).unwrap(), 255.0);
    assert_eq!(bnot(5.0, None).unwrap(), 6.0);
}

#[wasm_bindgen_test]
fn test_binary_strings() {
    assert_eq!(tobin(3735928559.0, None).unwrap(), "11011110101011011011111011101111");
    assert_eq!(frombin("10101").unwrap(), 21.0);
    assert!(frombin("102").is_err());
}

#[wasm_bindgen_test]
fn test_bisset_shapes() {
    assert_eq!(bisset(16.0, &[4.0]).unwrap(), JsValue::TRUE);
    let many = js_sys::Array::from(&bisset(21.0, &[0.0, 1.0, 2.0]).unwrap());
    assert_eq!(many.length(), 3);
    assert_eq!(many.get(0), JsValue::TRUE);
    assert_eq!(many.get(1), JsValue::FALSE);
}

#[wasm_bindgen_test]
fn test_set_unset() {
    assert_eq!(bset(0.0, &[4.0]).unwrap(), 16.0);
    assert_eq!(bunset(18.0, &[1.0]).unwrap(), 16.0);
}

#[wasm_bindgen_test]
fn test_rejects_non_integers() {
    assert!(band(&[1.5, 2.0]).is_err());
    assert!(bor(&[-1.0]).is_err());
    assert!(bnot(f64::NAN, None).is_err());
    assert!(blshift(1.0, 0.5).is_err());
    assert!(band(&[9007199254740992.0]).is_err());
}

#[wasm_bindgen_test]
fn test_rejects_unsafe_results() {
    // 2^53 cannot come back as an exact double.
    assert!(blshift(1.0, 53.0).is_err());
    assert_eq!(blshift(1.0, 52.0).unwrap(), 4503599627370496.0);
}

#[wasm_bindgen_test]
fn test_config_policy() {
    let exact = BitopsConfig::new(true);
    assert_eq!(exact.policy(), "exact");
    assert_eq!(exact.bnot(5.0, None).unwrap(), 2.0);
    assert_eq!(exact.tobin(5.0, Some(8.0)).unwrap(), "00000101");

    let compat = BitopsConfig::new(false);
    assert_eq!(compat.policy(), "compat");
    assert_eq!(compat.tobin(5.0, Some(8.0)).unwrap(), "000000101");
}
