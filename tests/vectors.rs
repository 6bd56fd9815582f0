//! Known-answer vectors for the public operator set.

use soft_bitops::*;

#[test]
fn binary_string_of_deadbeef() {
    assert_eq!(tobin(0xDEADBEEF, None), "11011110101011011011111011101111");
    assert_eq!(frombin("11011110101011011011111011101111"), Ok(0xDEADBEEF));
}

#[test]
fn logic_on_deadbeef_cafebabe() {
    assert_eq!(bor(&[0xDEADBEEF, 0xCAFEBABE]), Ok(0xDEFFBEFF));
    assert_eq!(band(&[0xDEADBEEF, 0xCAFEBABE]), Ok(0xCAACBAAE));
    assert_eq!(bxor(&[0xDEADBEEF, 0xCAFEBABE]), Ok(0x14530451));
}

#[test]
fn shifts() {
    assert_eq!(blshift(0xDEAD, 16), Ok(0xDEAD0000));
    assert_eq!(brshift(0xDEAD0000, 16), 0xDEAD);
    assert_eq!(brshift(0xDEAD, 8), 0xDE);
}

#[test]
fn not_with_width() {
    assert_eq!(bnot(0, Some(8)), Ok(0xFF));
}

#[test]
fn bit_helpers() {
    assert_eq!(bisset(0x10, &[4]), BitQuery::Single(true));
    assert_eq!(bset(0, &[4]), Ok(0x10));
    assert_eq!(bunset(0x12, &[1]), Ok(0x10));
}

#[test]
fn bisset_many_positions() {
    let x = frombin("10101").unwrap();
    assert_eq!(
        bisset(x, &[0, 1, 2, 3, 4]),
        BitQuery::Many(vec![true, false, true, false, true])
    );
}

#[test]
fn exact_policy_agrees_on_the_vectors() {
    let ops = Bitops::EXACT;
    assert_eq!(ops.tobin(0xDEADBEEF, None), "11011110101011011011111011101111");
    assert_eq!(ops.bor(&[0xDEADBEEF, 0xCAFEBABE]), Ok(0xDEFFBEFF));
    assert_eq!(ops.bnot(0, Some(8)), Ok(0xFF));
    assert_eq!(ops.bunset(0x12, &[1]), Ok(0x10));
}

#[test]
fn variadic_fold() {
    assert_eq!(bor(&[0x1, 0x20, 0x400, 0x8000]), Ok(0x8421));
    assert_eq!(band(&[0xFFFF, 0x0FF0, 0x00FF]), Ok(0x00F0));
    assert_eq!(
        bxor(&[]),
        Err(BitopsError::EmptyOperands { op: "bxor" })
    );
}

#[test]
fn bit_table_of_deadbeef() {
    let table = BitTable::encode(0xDEADBEEF);
    assert_eq!(table.len(), 32);
    assert_eq!(table.to_string(), "11011110101011011011111011101111");
    assert_eq!(table.decode(), Ok(0xDEADBEEF));
}
