//! Fixed-width bit patterns.
//!
//! This module provides the `Bits` type used wherever the simulator needs to reason about
//! an exact number of bits rather than a host integer width. It provides:
//! 1. **Extraction:** Inclusive `[hi:lo]` slicing in RISC-V bit numbering (bit 31 is the MSB).
//! 2. **Two's complement:** Encoding signed values into a fixed width with hardware wraparound,
//!    and decoding patterns back to signed or unsigned integers.
//! 3. **Extension:** Sign and zero extension, plus concatenation for scattered immediates.

use std::fmt;
use std::str::FromStr;

/// Widest pattern the simulator manipulates (one instruction word or register).
pub const MAX_WIDTH: u32 = 32;

/// Returns a mask with the low `width` bits set.
#[inline(always)]
const fn mask(width: u32) -> u32 {
    if width >= MAX_WIDTH {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// A bit pattern of an exact width between 1 and 32 bits.
///
/// Bits above `width` are always zero, so two patterns compare equal only when both the
/// width and the contents match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bits {
    value: u32,
    width: u32,
}

/// Error produced when parsing a `0`/`1` string into a [`Bits`] pattern.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BitsParseError {
    /// The input contained no digits.
    #[error("empty bit string")]
    Empty,
    /// The input is wider than [`MAX_WIDTH`].
    #[error("bit string of {0} digits exceeds 32 bits")]
    TooWide(usize),
    /// The input contained something other than `0` or `1`.
    #[error("invalid digit {0:?} in bit string")]
    InvalidDigit(char),
}

impl Bits {
    /// Creates a pattern of `width` bits from the low bits of `value`.
    ///
    /// Bits of `value` above `width` are discarded.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or greater than [`MAX_WIDTH`].
    #[inline(always)]
    pub const fn new(value: u32, width: u32) -> Self {
        assert!(width >= 1 && width <= MAX_WIDTH, "bit width out of range");
        Self {
            value: value & mask(width),
            width,
        }
    }

    /// Creates an all-zero pattern of `width` bits.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or greater than [`MAX_WIDTH`].
    pub const fn zero(width: u32) -> Self {
        Self::new(0, width)
    }

    /// Number of bits in the pattern.
    #[inline(always)]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Returns the most significant bit of the pattern.
    #[inline(always)]
    pub const fn msb(self) -> bool {
        (self.value >> (self.width - 1)) & 1 == 1
    }

    /// Interprets the pattern as an unsigned binary integer.
    #[inline(always)]
    pub const fn to_unsigned(self) -> u32 {
        self.value
    }

    /// Interprets the pattern as a two's-complement signed integer.
    ///
    /// A leading `0` yields the unsigned value. Otherwise the magnitude is recovered by
    /// inverting every bit of the pattern and adding one, and the result is its negation.
    #[inline]
    pub const fn to_signed(self) -> i32 {
        if !self.msb() {
            return self.value as i32;
        }
        let magnitude = ((!self.value) & mask(self.width)) as i64 + 1;
        (-magnitude) as i32
    }

    /// Replicates the most significant bit leftward until the pattern is `width` bits wide.
    ///
    /// Patterns already at least `width` bits wide are returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `width` is greater than [`MAX_WIDTH`].
    #[inline]
    pub const fn sign_extend(self, width: u32) -> Self {
        if width <= self.width {
            return self;
        }
        let fill = if self.msb() {
            mask(width) & !mask(self.width)
        } else {
            0
        };
        Self::new(self.value | fill, width)
    }

    /// Pads the pattern with zeros on the left until it is `width` bits wide.
    ///
    /// # Panics
    ///
    /// Panics if `width` is greater than [`MAX_WIDTH`].
    pub const fn zero_extend(self, width: u32) -> Self {
        if width <= self.width {
            return self;
        }
        Self::new(self.value, width)
    }

    /// Appends `low` below this pattern, producing a pattern of the combined width.
    ///
    /// # Panics
    ///
    /// Panics if the combined width exceeds [`MAX_WIDTH`].
    #[inline]
    pub const fn concat(self, low: Self) -> Self {
        let width = self.width + low.width;
        assert!(width <= MAX_WIDTH, "concatenated width exceeds 32 bits");
        Self::new((self.value << low.width) | low.value, width)
    }
}

/// Extracts the inclusive bit range `[hi:lo]` of `word` using RISC-V bit numbering.
///
/// The result is `hi - lo + 1` bits wide.
///
/// # Panics
///
/// Panics if `hi < lo` or `hi` is outside the 32-bit word.
#[inline(always)]
pub const fn slice(word: u32, lo: u32, hi: u32) -> Bits {
    assert!(lo <= hi && hi < MAX_WIDTH, "invalid bit range");
    Bits::new(word >> lo, hi - lo + 1)
}

/// Encodes `value` as an exactly `width`-bit two's-complement pattern.
///
/// Values that do not fit are truncated the way hardware wraps them: the high bits are
/// silently dropped. Encoding zero always yields the all-zero pattern.
///
/// # Panics
///
/// Panics if `width` is zero or greater than [`MAX_WIDTH`].
#[inline]
pub const fn encode_twos_complement(value: i64, width: u32) -> Bits {
    if value >= 0 {
        return Bits::new(value as u32, width);
    }
    let magnitude = Bits::new(value.unsigned_abs() as u32, width);
    Bits::new((!magnitude.value).wrapping_add(1), width)
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

impl FromStr for Bits {
    type Err = BitsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BitsParseError::Empty);
        }
        if s.len() > MAX_WIDTH as usize {
            return Err(BitsParseError::TooWide(s.len()));
        }
        let mut value = 0u32;
        for c in s.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                other => return Err(BitsParseError::InvalidDigit(other)),
            };
            value = (value << 1) | bit;
        }
        Ok(Self::new(value, s.len() as u32))
    }
}
