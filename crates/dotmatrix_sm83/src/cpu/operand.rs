/// 8-bit register selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// 16-bit register pair selector for 16-bit arithmetic and loads.
///
/// AF is deliberately absent: no instruction in this core addresses it as an
/// operand, and exposing it would let callers bypass the F low-nibble mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16 {
    Bc,
    De,
    Hl,
    Sp,
}

/// Source operand for the 8-bit ALU operations on A, resolved by the
/// dispatch layer.
///
/// The variant fixes the machine-cycle count of the consuming instruction:
/// register sources cost 1 M-cycle, immediate and memory sources 2.
#[derive(Clone, Copy, Debug)]
pub enum Operand8 {
    Reg(R8),
    Imm(u8),
    /// A precomputed address; for this instruction set always HL, but the
    /// address arrives already resolved.
    Mem(u16),
}

impl Operand8 {
    /// Machine cycles of an A-targeting ALU instruction with this source.
    #[inline]
    pub(super) fn cycles(self) -> u32 {
        match self {
            Operand8::Reg(_) => 1,
            Operand8::Imm(_) | Operand8::Mem(_) => 2,
        }
    }
}

/// Read-modify-write target for INC/DEC/RES/SET, and the byte BIT inspects.
#[derive(Clone, Copy, Debug)]
pub enum Place8 {
    Reg(R8),
    Mem(u16),
}

/// Bit index 0–7, bit 0 being the least significant.
///
/// Construction masks to three bits, so an out-of-range index is
/// unrepresentable rather than checked at use sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bit(u8);

impl Bit {
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index & 0x07)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub(super) const fn mask(self) -> u8 {
        1 << self.0
    }
}
