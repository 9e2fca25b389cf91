//! MMU: routes every 16-bit address to the backing store that owns it.
//!
//! The regions partition the full 0x0000–0xFFFF space with no gaps; the only
//! overlap is the deliberate echo-RAM mirror of work RAM. Cartridge ROM and
//! cartridge RAM live behind the [`Cartridge`] capability, which external
//! mapper logic supplies.

use crate::cpu::Bus;

// Memory map bounds (inclusive). Source: https://gbdev.io/pandocs/Memory_Map.html
pub const CART_ROM_END: u16 = 0x7FFF;
pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;
pub const CART_RAM_START: u16 = 0xA000;
pub const CART_RAM_END: u16 = 0xBFFF;
pub const WRAM_START: u16 = 0xC000;
pub const WRAM_END: u16 = 0xDFFF;
pub const ECHO_START: u16 = 0xE000;
pub const ECHO_END: u16 = 0xFDFF;
pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFE9F;
pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;
pub const IO_START: u16 = 0xFF00;
pub const IO_END: u16 = 0xFF7F;
pub const HRAM_START: u16 = 0xFF80;
pub const HRAM_END: u16 = 0xFFFE;
pub const IE_ADDR: u16 = 0xFFFF;

const VRAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const HRAM_SIZE: usize = 0x7F;
const IO_SIZE: usize = 0x80;

/// Capability the MMU uses for cartridge ROM (0x0000–0x7FFF) and cartridge
/// RAM (0xA000–0xBFFF). Bank switching and other mapper behavior live
/// entirely behind this trait.
pub trait Cartridge {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);
}

/// Memory management unit: address decoder plus the backing stores for the
/// built-in regions.
pub struct Mmu {
    cartridge: Option<Box<dyn Cartridge>>,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    hram: [u8; HRAM_SIZE],
    io: [u8; IO_SIZE],
    /// Interrupt-enable register, mapped at 0xFFFF.
    ie: u8,
}

impl Default for Mmu {
    fn default() -> Self {
        Self {
            cartridge: None,
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            hram: [0; HRAM_SIZE],
            io: [0; IO_SIZE],
            ie: 0,
        }
    }
}

impl Mmu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cartridge(cartridge: Box<dyn Cartridge>) -> Self {
        Self {
            cartridge: Some(cartridge),
            ..Self::default()
        }
    }

    pub fn attach_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.cartridge = Some(cartridge);
    }

    /// Read a byte. Total over the full 16-bit range.
    ///
    /// The unusable region 0xFEA0–0xFEFF reads as 0xFF, as does cartridge
    /// space with no cartridge attached (open bus).
    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=CART_ROM_END | CART_RAM_START..=CART_RAM_END => {
                match &self.cartridge {
                    Some(cart) => cart.read(addr),
                    None => 0xFF,
                }
            }
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize],
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize],
            // Echo RAM mirrors work RAM: same backing array, shifted offset.
            ECHO_START..=ECHO_END => self.wram[(addr - ECHO_START) as usize],
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize],
            UNUSABLE_START..=UNUSABLE_END => {
                log::trace!("read from unusable region 0x{addr:04X}");
                0xFF
            }
            IO_START..=IO_END => self.io[(addr - IO_START) as usize],
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize],
            IE_ADDR => self.ie,
        }
    }

    /// Write a byte, with the same routing as [`read`](Self::read).
    ///
    /// Writes to the unusable region are dropped; echo-RAM writes land in
    /// the work RAM array and are visible through both address ranges.
    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=CART_ROM_END | CART_RAM_START..=CART_RAM_END => {
                if let Some(cart) = &mut self.cartridge {
                    cart.write(addr, value);
                }
            }
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize] = value,
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize] = value,
            ECHO_START..=ECHO_END => self.wram[(addr - ECHO_START) as usize] = value,
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize] = value,
            UNUSABLE_START..=UNUSABLE_END => {
                log::trace!("dropped write of 0x{value:02X} to unusable region 0x{addr:04X}");
            }
            IO_START..=IO_END => self.io[(addr - IO_START) as usize] = value,
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize] = value,
            IE_ADDR => self.ie = value,
        }
    }
}

impl Bus for Mmu {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}
