//! Instruction-execution core for the Sharp SM83, the CPU of the Game Boy.
//!
//! This crate covers the parts of the machine that need exact bit-level
//! fidelity: the register file, the arithmetic/bitwise/load-store instruction
//! semantics with their flag side effects, and the MMU that decodes the
//! 16-bit address space into memory regions. Opcode fetch/decode, interrupts,
//! the PPU/APU/timer peripherals and cartridge mappers live in outer layers;
//! the dispatch layer calls into [`Cpu`] with already-resolved operands, and
//! the [`Mmu`] talks to mapper logic through the [`Cartridge`] capability.

pub mod cpu;
pub mod mmu;

pub use cpu::{Bit, Bus, Cpu, Flag, Operand8, Place8, Registers, R16, R8};
pub use mmu::{Cartridge, Mmu};
