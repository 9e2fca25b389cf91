mod alu;
mod arith;
mod bitwise;
mod bus;
mod helpers;
mod ld;
mod operand;
mod regs;


pub use bus::Bus;
pub use operand::{Bit, Operand8, Place8, R16, R8};
pub use regs::{Flag, Registers};

/// Execution state for the SM83.
///
/// The CPU owns nothing but its register file; every memory access goes
/// through a caller-supplied [`Bus`]. Instruction methods take operands the
/// dispatch layer has already resolved (a register selector, an immediate,
/// or a precomputed address) and return the machine-cycle count of the
/// opcode form they implement.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cpu {
    pub regs: Registers,
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
        }
    }

    /// Reset the CPU to its power-on state.
    ///
    /// All registers go to zero; replicating the values the DMG boot ROM
    /// leaves behind is the front-end's concern.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
    }
}
