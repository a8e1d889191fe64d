//! # Bit Pattern Tests
//!
//! Fixed-width two's-complement encode/decode, slicing, sign extension and
//! the `0`/`1` string form.

use proptest::prelude::*;
use rstest::rstest;
use rv32sim_core::common::{Bits, BitsParseError, encode_twos_complement, slice};

#[test]
fn encode_zero_is_all_zero_bits() {
    for width in 1..=32 {
        let b = encode_twos_complement(0, width);
        assert_eq!(b.to_unsigned(), 0);
        assert_eq!(b.width(), width);
    }
}

#[test]
fn sign_extend_1010_to_8_bits_is_minus_6() {
    let b: Bits = "1010".parse().unwrap();
    let ext = b.sign_extend(8);
    assert_eq!(ext.to_string(), "11111010");
    assert_eq!(ext.to_signed(), -6);
}

#[test]
fn sign_extend_positive_pads_zeros() {
    let b: Bits = "0101".parse().unwrap();
    assert_eq!(b.sign_extend(8).to_string(), "00000101");
}

#[test]
fn sign_extend_to_narrower_width_is_noop() {
    let b = Bits::new(0b1010, 4);
    assert_eq!(b.sign_extend(2), b);
}

#[rstest]
#[case(5, 8, "00000101")]
#[case(-1, 8, "11111111")]
#[case(-128, 8, "10000000")]
#[case(-6, 4, "1010")]
#[case(256, 8, "00000000")] // high bits dropped
#[case(-129, 8, "01111111")] // wraps like hardware
fn encode_twos_complement_table(#[case] value: i64, #[case] width: u32, #[case] bits: &str) {
    assert_eq!(encode_twos_complement(value, width).to_string(), bits);
}

#[rstest]
#[case("0111", 7)]
#[case("1000", -8)]
#[case("1111", -1)]
#[case("0", 0)]
#[case("1", -1)]
fn to_signed_table(#[case] bits: &str, #[case] expected: i32) {
    assert_eq!(bits.parse::<Bits>().unwrap().to_signed(), expected);
}

#[test]
fn slice_extracts_inclusive_range() {
    let word = 0x00a0_0093; // addi x1, x0, 10
    assert_eq!(slice(word, 0, 6).to_unsigned(), 0b0010011);
    assert_eq!(slice(word, 7, 11).to_unsigned(), 1);
    assert_eq!(slice(word, 20, 31).to_unsigned(), 10);
    assert_eq!(slice(word, 20, 31).width(), 12);
    assert_eq!(slice(word, 31, 31).width(), 1);
}

#[test]
fn concat_places_low_pattern_below() {
    let hi = Bits::new(0b1, 1);
    let lo = Bits::new(0b0110, 4);
    let joined = hi.concat(lo);
    assert_eq!(joined.width(), 5);
    assert_eq!(joined.to_string(), "10110");
}

#[test]
fn zero_extend_keeps_value() {
    let b = Bits::new(0xF0, 8).zero_extend(32);
    assert_eq!(b.to_signed(), 0xF0);
}

#[test]
fn parse_errors_are_typed() {
    assert_eq!("".parse::<Bits>(), Err(BitsParseError::Empty));
    assert_eq!("10201".parse::<Bits>(), Err(BitsParseError::InvalidDigit('2')));
    let wide = "1".repeat(33);
    assert_eq!(wide.parse::<Bits>(), Err(BitsParseError::TooWide(33)));
}

proptest! {
    #[test]
    fn prop_round_trip_32(v in any::<i32>()) {
        prop_assert_eq!(encode_twos_complement(i64::from(v), 32).to_signed(), v);
    }

    #[test]
    fn prop_round_trip_narrow(width in 1u32..=31, raw in any::<i32>()) {
        let min = -(1i64 << (width - 1));
        let max = (1i64 << (width - 1)) - 1;
        let v = min + (i64::from(raw).rem_euclid(max - min + 1));
        prop_assert_eq!(i64::from(encode_twos_complement(v, width).to_signed()), v);
    }

    #[test]
    fn prop_sign_extend_preserves_value(raw in any::<u32>(), width in 1u32..=32) {
        let b = Bits::new(raw, width);
        prop_assert_eq!(b.sign_extend(32).to_signed(), b.to_signed());
    }

    #[test]
    fn prop_display_parse_round_trip(raw in any::<u32>(), width in 1u32..=32) {
        let b = Bits::new(raw, width);
        prop_assert_eq!(b.to_string().parse::<Bits>().unwrap(), b);
    }
}
