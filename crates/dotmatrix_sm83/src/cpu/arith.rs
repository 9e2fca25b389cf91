use super::{Bus, Cpu, Operand8, Place8, R16};

impl Cpu {
    /// ADD A, r8/n8/[HL].
    ///
    /// Flags: Z if the result is 0, N cleared, H on bit-3 carry, C on bit-7
    /// carry. 1 M-cycle for a register source, 2 otherwise.
    pub fn add_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_add(value, false);
        src.cycles()
    }

    /// ADC A, r8/n8/[HL]: add the source plus the carry flag to A.
    ///
    /// Flags as [`add_a`](Self::add_a); the carry-in participates in both
    /// the H and C computations.
    pub fn adc_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_add(value, true);
        src.cycles()
    }

    /// SUB A, r8/n8/[HL].
    ///
    /// Flags: Z if the result is 0, N set, H on borrow from bit 4, C on
    /// borrow from bit 8 (A < source).
    pub fn sub_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_sub(value, false);
        src.cycles()
    }

    /// SBC A, r8/n8/[HL]: subtract the source plus the carry flag from A.
    pub fn sbc_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_sub(value, true);
        src.cycles()
    }

    /// CP A, r8/n8/[HL]: subtract the source from A for flags only; A is
    /// left unchanged.
    pub fn cp_a<B: Bus>(&mut self, bus: &mut B, src: Operand8) -> u32 {
        let value = self.read_operand(bus, src);
        self.alu_cp(value);
        src.cycles()
    }

    /// INC r8 / INC [HL]: increment a byte with wraparound.
    ///
    /// Flags: Z if the result is 0, N cleared, H if the low nibble was 0x0F.
    /// C is never touched. 1 M-cycle for a register, 3 for memory
    /// (read-modify-write).
    pub fn inc8<B: Bus>(&mut self, bus: &mut B, place: Place8) -> u32 {
        let value = self.read_place(bus, place);
        let result = self.alu_inc8(value);
        self.write_place(bus, place, result);

        match place {
            Place8::Reg(_) => 1,
            Place8::Mem(_) => 3,
        }
    }

    /// DEC r8 / DEC [HL]: decrement a byte with wraparound.
    ///
    /// Flags: Z if the result is 0, N set, H if the low nibble was 0x00.
    /// C is never touched.
    pub fn dec8<B: Bus>(&mut self, bus: &mut B, place: Place8) -> u32 {
        let value = self.read_place(bus, place);
        let result = self.alu_dec8(value);
        self.write_place(bus, place, result);

        match place {
            Place8::Reg(_) => 1,
            Place8::Mem(_) => 3,
        }
    }

    /// ADD HL, rr (BC/DE/HL/SP).
    ///
    /// Flags: Z unaffected, N cleared, H on bit-11 carry, C on bit-15 carry.
    pub fn add_hl(&mut self, src: R16) -> u32 {
        let value = self.regs.r16(src);
        self.alu_add16_hl(value);
        2
    }

    /// INC rr: plain 16-bit wraparound increment. No flags affected.
    pub fn inc16(&mut self, rr: R16) -> u32 {
        let value = self.regs.r16(rr).wrapping_add(1);
        self.regs.set_r16(rr, value);
        2
    }

    /// DEC rr: plain 16-bit wraparound decrement. No flags affected.
    pub fn dec16(&mut self, rr: R16) -> u32 {
        let value = self.regs.r16(rr).wrapping_sub(1);
        self.regs.set_r16(rr, value);
        2
    }
}
