//! Sparse Byte-Addressable Memory.
//!
//! This module implements the data and instruction memory of the simulated hart. It provides:
//! 1. **Sparse Storage:** A hash map from 32-bit address to byte; only written bytes occupy space.
//! 2. **Default Fill:** Reads of never-written addresses return a configurable fill byte.
//! 3. **Little-Endian Access:** Multi-byte loads and stores of 1, 2 or 4 bytes with no alignment
//!    requirement; the byte at the lowest address is the least significant.
//!
//! Stores always write the map entry, even when the byte equals the fill value. Reads are
//! indistinguishable either way, so entries are never compacted.

use std::collections::HashMap;

use crate::common::constants::DEFAULT_MEMORY_FILL;

/// Width of a memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    /// One byte.
    Byte,
    /// Two bytes.
    Half,
    /// Four bytes.
    Word,
}

impl AccessWidth {
    /// Selects a width from the `log2` byte count carried in `funct3[1:0]`.
    ///
    /// Returns `None` for the doubleword encoding, which RV32 does not define.
    pub const fn from_log2(log2: u32) -> Option<Self> {
        match log2 {
            0 => Some(Self::Byte),
            1 => Some(Self::Half),
            2 => Some(Self::Word),
            _ => None,
        }
    }

    /// Number of bytes transferred.
    #[inline(always)]
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Number of bits transferred.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.bytes() * 8
    }
}

/// Sparse memory covering the full 32-bit address space.
#[derive(Clone, Debug)]
pub struct SparseMemory {
    bytes: HashMap<u32, u8>,
    fill: u8,
}

impl Default for SparseMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SparseMemory {
    /// Creates an empty memory whose unmapped bytes read as zero.
    pub fn new() -> Self {
        Self::with_fill(DEFAULT_MEMORY_FILL)
    }

    /// Creates an empty memory whose unmapped bytes read as `fill`.
    pub fn with_fill(fill: u8) -> Self {
        Self {
            bytes: HashMap::new(),
            fill,
        }
    }

    /// The byte returned for unmapped addresses.
    pub const fn fill(&self) -> u8 {
        self.fill
    }

    /// Number of bytes that have been written at least once.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if no byte has ever been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads one byte, or the fill value if `addr` was never written.
    #[inline]
    pub fn load_byte(&self, addr: u32) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(self.fill)
    }

    /// Writes one byte unconditionally.
    #[inline]
    pub fn store_byte(&mut self, addr: u32, val: u8) {
        let _ = self.bytes.insert(addr, val);
    }

    /// Reads `width` consecutive bytes starting at `addr` and assembles them little-endian.
    ///
    /// The result is zero-extended to 32 bits; callers decide how to extend narrower loads.
    /// Addresses wrap around the top of the 32-bit space.
    pub fn load(&self, addr: u32, width: AccessWidth) -> u32 {
        (0..width.bytes()).fold(0u32, |acc, i| {
            acc | (u32::from(self.load_byte(addr.wrapping_add(i))) << (8 * i))
        })
    }

    /// Writes the low `width` bytes of `val` starting at `addr`, least significant byte first.
    pub fn store(&mut self, addr: u32, width: AccessWidth, val: u32) {
        for i in 0..width.bytes() {
            self.store_byte(addr.wrapping_add(i), (val >> (8 * i)) as u8);
        }
    }

    /// Reads a 32-bit little-endian word, used for instruction fetch.
    #[inline]
    pub fn load_word(&self, addr: u32) -> u32 {
        self.load(addr, AccessWidth::Word)
    }

    /// Copies `data` byte-for-byte into memory starting at `offset`.
    pub fn load_binary_at(&mut self, data: &[u8], offset: u32) {
        for (i, &byte) in data.iter().enumerate() {
            self.store_byte(offset.wrapping_add(i as u32), byte);
        }
    }
}
