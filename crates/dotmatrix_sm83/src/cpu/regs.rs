use super::operand::{R16, R8};

/// Register file for the SM83.
///
/// Eight 8-bit registers viewable as four 16-bit pairs (AF, BC, DE, HL, high
/// byte first), plus the stack pointer and program counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Read an 8-bit register by selector.
    #[inline]
    pub fn r8(&self, r: R8) -> u8 {
        match r {
            R8::A => self.a,
            R8::B => self.b,
            R8::C => self.c,
            R8::D => self.d,
            R8::E => self.e,
            R8::H => self.h,
            R8::L => self.l,
        }
    }

    /// Write an 8-bit register by selector.
    #[inline]
    pub fn set_r8(&mut self, r: R8, value: u8) {
        match r {
            R8::A => self.a = value,
            R8::B => self.b = value,
            R8::C => self.c = value,
            R8::D => self.d = value,
            R8::E => self.e = value,
            R8::H => self.h = value,
            R8::L => self.l = value,
        }
    }

    /// Read a 16-bit register pair (or SP) by selector.
    #[inline]
    pub fn r16(&self, rr: R16) -> u16 {
        match rr {
            R16::Bc => self.bc(),
            R16::De => self.de(),
            R16::Hl => self.hl(),
            R16::Sp => self.sp,
        }
    }

    /// Write a 16-bit register pair (or SP) by selector.
    #[inline]
    pub fn set_r16(&mut self, rr: R16, value: u16) {
        match rr {
            R16::Bc => self.set_bc(value),
            R16::De => self.set_de(value),
            R16::Hl => self.set_hl(value),
            R16::Sp => self.sp = value,
        }
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.f & flag.mask() != 0
    }

    /// Set or clear a single flag bit, leaving the other three untouched.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.f |= flag.mask();
        } else {
            self.f &= !flag.mask();
        }
    }

    /// Clear all four flags at once. Used by operations that rewrite the
    /// whole flag set.
    #[inline]
    pub fn clear_flags(&mut self) {
        self.f = 0;
    }

    /// Carry flag as 0/1, for feeding into ADC/SBC arithmetic.
    #[inline]
    pub fn carry_bit(&self) -> u8 {
        if self.flag(Flag::C) {
            1
        } else {
            0
        }
    }
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    const fn mask(self) -> u8 {
        1 << self as u8
    }
}
