//! Load/store operations, one method per opcode form.
//!
//! The cycle counts here depend on more than the register/immediate/memory
//! split (e.g. `LD A,[n16]` costs 4 M-cycles against `LD A,[BC]`'s 2), so
//! each form keeps its own method instead of sharing an operand enum. None
//! of these touch flags except `LD HL,SP+e8`.

use super::{Bus, Cpu, R16, R8};

impl Cpu {
    /// LD r8, r8.
    pub fn ld_r_r(&mut self, dst: R8, src: R8) -> u32 {
        let value = self.regs.r8(src);
        self.regs.set_r8(dst, value);
        1
    }

    /// LD r8, n8.
    pub fn ld_r_d8(&mut self, dst: R8, value: u8) -> u32 {
        self.regs.set_r8(dst, value);
        2
    }

    /// LD rr, n16 (BC/DE/HL/SP).
    pub fn ld_rr_d16(&mut self, dst: R16, value: u16) -> u32 {
        self.regs.set_r16(dst, value);
        3
    }

    /// LD [HL], r8.
    pub fn ld_hl_r<B: Bus>(&mut self, bus: &mut B, src: R8) -> u32 {
        bus.write8(self.regs.hl(), self.regs.r8(src));
        2
    }

    /// LD [HL], n8.
    pub fn ld_hl_d8<B: Bus>(&mut self, bus: &mut B, value: u8) -> u32 {
        bus.write8(self.regs.hl(), value);
        3
    }

    /// LD r8, [HL].
    pub fn ld_r_hl<B: Bus>(&mut self, bus: &mut B, dst: R8) -> u32 {
        let value = bus.read8(self.regs.hl());
        self.regs.set_r8(dst, value);
        2
    }

    /// LD [BC]/[DE], A. The dispatch layer passes the pair's value as the
    /// address.
    pub fn ld_mem_a<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        bus.write8(addr, self.regs.a);
        2
    }

    /// LD A, [BC]/[DE].
    pub fn ld_a_mem<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        self.regs.a = bus.read8(addr);
        2
    }

    /// LD [n16], A.
    pub fn ld_a16_a<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        bus.write8(addr, self.regs.a);
        4
    }

    /// LD A, [n16].
    pub fn ld_a_a16<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        self.regs.a = bus.read8(addr);
        4
    }

    /// LDH [n8], A: store A into the high page at 0xFF00 + n8.
    pub fn ldh_a8_a<B: Bus>(&mut self, bus: &mut B, offset: u8) -> u32 {
        bus.write8(0xFF00 + offset as u16, self.regs.a);
        3
    }

    /// LDH A, [n8]: load A from the high page at 0xFF00 + n8.
    pub fn ldh_a_a8<B: Bus>(&mut self, bus: &mut B, offset: u8) -> u32 {
        self.regs.a = bus.read8(0xFF00 + offset as u16);
        3
    }

    /// LDH [C], A: store A at 0xFF00 + C.
    pub fn ldh_c_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.write8(0xFF00 + self.regs.c as u16, self.regs.a);
        2
    }

    /// LDH A, [C]: load A from 0xFF00 + C.
    pub fn ldh_a_c<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.a = bus.read8(0xFF00 + self.regs.c as u16);
        2
    }

    /// LD [HL+], A: store A through HL, then increment HL.
    pub fn ld_hli_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.write8(self.regs.hl(), self.regs.a);
        self.regs.set_hl(self.regs.hl().wrapping_add(1));
        2
    }

    /// LD [HL-], A: store A through HL, then decrement HL.
    pub fn ld_hld_a<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.write8(self.regs.hl(), self.regs.a);
        self.regs.set_hl(self.regs.hl().wrapping_sub(1));
        2
    }

    /// LD A, [HL+]: load A through HL, then increment HL.
    pub fn ld_a_hli<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.a = bus.read8(self.regs.hl());
        self.regs.set_hl(self.regs.hl().wrapping_add(1));
        2
    }

    /// LD A, [HL-]: load A through HL, then decrement HL.
    pub fn ld_a_hld<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.a = bus.read8(self.regs.hl());
        self.regs.set_hl(self.regs.hl().wrapping_sub(1));
        2
    }

    /// LD [n16], SP: SP's low byte at n16, high byte at n16+1.
    pub fn ld_a16_sp<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u32 {
        let sp = self.regs.sp;
        bus.write8(addr, sp as u8);
        bus.write8(addr.wrapping_add(1), (sp >> 8) as u8);
        5
    }

    /// LD HL, SP+e8: add a signed 8-bit immediate to SP and store the
    /// result in HL.
    ///
    /// Flags: Z and N cleared; H and C from the unsigned byte addition of
    /// SP's low byte and the immediate's raw bit pattern.
    pub fn ld_hl_sp_e8(&mut self, offset: i8) -> u32 {
        let result = self.alu_add16_signed(self.regs.sp, offset as u8);
        self.regs.set_hl(result);
        3
    }

    /// LD SP, HL.
    pub fn ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        2
    }
}
