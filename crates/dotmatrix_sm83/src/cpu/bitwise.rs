use super::{Bit, Bus, Cpu, Flag, Operand8, Place8};

impl Cpu {
    /// AND A, r8/n8/[HL].
    ///
    /// Flags: Z if the result is 0, N and C cleared, H set.
    pub fn and_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_and(value);
        src.cycles()
    }

    /// OR A, r8/n8/[HL].
    ///
    /// Flags: Z if the result is 0, N/H/C cleared.
    pub fn or_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_or(value);
        src.cycles()
    }

    /// XOR A, r8/n8/[HL].
    ///
    /// Flags: Z if the result is 0, N/H/C cleared.
    pub fn xor_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_xor(value);
        src.cycles()
    }

    /// CPL: complement A in place.
    ///
    /// Sets N and H; Z and C are unaffected.
    pub fn cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, true);
        1
    }

    /// BIT b, r8/[HL]: test a single bit without modifying the byte.
    ///
    /// Flags: Z if the tested bit is 0, N cleared, H set, C unaffected.
    /// 2 M-cycles for a register, 3 for memory.
    pub fn bit<B: Bus>(&mut self, bus: &mut B, bit: Bit, src: Place8) -> u32 {
        let value = self.read_place(bus, src);

        self.regs.set_flag(Flag::Z, value & bit.mask() == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, true);

        match src {
            Place8::Reg(_) => 2,
            Place8::Mem(_) => 3,
        }
    }

    /// RES b, r8/[HL]: clear a single bit in place. No flags affected.
    ///
    /// 2 M-cycles for a register, 4 for memory (read-modify-write).
    pub fn res<B: Bus>(&mut self, bus: &mut B, bit: Bit, place: Place8) -> u32 {
        let value = self.read_place(bus, place);
        self.write_place(bus, place, value & !bit.mask());

        match place {
            Place8::Reg(_) => 2,
            Place8::Mem(_) => 4,
        }
    }

    /// SET b, r8/[HL]: set a single bit in place. No flags affected.
    pub fn set<B: Bus>(&mut self, bus: &mut B, bit: Bit, place: Place8) -> u32 {
        let value = self.read_place(bus, place);
        self.write_place(bus, place, value | bit.mask());

        match place {
            Place8::Reg(_) => 2,
            Place8::Mem(_) => 4,
        }
    }
}
