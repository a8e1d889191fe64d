//! M-extension selector.
//!
//! There is no dedicated major opcode; the extension is recognised from `funct7`.

/// `funct7` of every `mul*`, `div*` and `rem*` word.
pub const M_EXTENSION: u32 = 0b0000001;
