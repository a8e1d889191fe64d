//! # General-Purpose Register Tests
//!
//! Tests for the RISC-V general-purpose register array.

use rv32sim_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..32 {
        assert_eq!(gpr.read(i), 0);
    }
}

#[test]
fn test_gpr_read_write_x0_always_zero() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0x0EAD_BEEF);
    assert_eq!(gpr.read(0), 0);
}

#[test]
fn test_gpr_read_write_x31() {
    let mut gpr = Gpr::new();
    gpr.write(31, -0x6666_5556);
    assert_eq!(gpr.read(31), -0x6666_5556);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        let value = (i as i32) << 24 | i as i32;
        gpr.write(i, value);
        assert_eq!(gpr.read(i), value);
    }
}

#[test]
fn test_gpr_x0_ignores_writes() {
    let mut gpr = Gpr::new();
    for value in [1, -1, i32::MIN, i32::MAX] {
        gpr.write(0, value);
        assert_eq!(gpr.read(0), 0);
    }
}

#[test]
fn test_gpr_multiple_writes_to_same_register() {
    let mut gpr = Gpr::new();
    gpr.write(5, 100);
    gpr.write(5, 200);
    assert_eq!(gpr.read(5), 200);
}

#[test]
fn test_gpr_index_wraps_modulo_32() {
    let mut gpr = Gpr::new();
    gpr.write(33, 7);
    assert_eq!(gpr.read(1), 7);
    gpr.write(32, 9);
    assert_eq!(gpr.read(0), 0);
}
