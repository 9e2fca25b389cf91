use super::{Bus, Cpu, Operand8, Place8};

impl Cpu {
    /// Resolve an ALU source operand to its byte value.
    #[inline]
    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u8 {
        match src {
            Operand8::Reg(r) => self.regs.r8(r),
            Operand8::Imm(value) => value,
            Operand8::Mem(addr) => bus.read8(addr),
        }
    }

    /// Read the current value of a read-modify-write target.
    #[inline]
    pub(super) fn read_place<B: Bus>(&mut self, bus: &mut B, place: Place8) -> u8 {
        match place {
            Place8::Reg(r) => self.regs.r8(r),
            Place8::Mem(addr) => bus.read8(addr),
        }
    }

    /// Write a read-modify-write target back.
    #[inline]
    pub(super) fn write_place<B: Bus>(&mut self, bus: &mut B, place: Place8, value: u8) {
        match place {
            Place8::Reg(r) => self.regs.set_r8(r, value),
            Place8::Mem(addr) => bus.write8(addr, value),
        }
    }
}
