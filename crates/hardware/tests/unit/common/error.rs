//! # Error Tests

use rv32sim_core::SimError;
use rv32sim_core::common::DecodeError;

#[test]
fn decode_error_reports_raw_word() {
    let e = DecodeError::UnknownOpcode {
        raw: 0xFFFF_FFFF,
        opcode: 0x7F,
    };
    assert_eq!(e.raw(), 0xFFFF_FFFF);
    let msg = e.to_string();
    assert!(msg.contains("unknown opcode"), "{msg}");
    assert!(msg.contains("0xffffffff"), "{msg}");
}

#[test]
fn sim_error_wraps_decode_error_with_pc() {
    let e = SimError::Decode {
        pc: 0x100,
        source: DecodeError::UnknownFunctionCode {
            raw: 0x0000_2063,
            opcode: 0b1100011,
            funct3: 0b010,
            funct7: 0,
        },
    };
    let msg = e.to_string();
    assert!(msg.starts_with("decode failed at pc=0x00000100"), "{msg}");
    assert!(std::error::Error::source(&e).is_some());
}
