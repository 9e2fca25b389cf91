/// Abstraction over the memory bus.
///
/// The instruction layer depends on this contract exclusively and never
/// touches concrete storage; the [`Mmu`](crate::mmu::Mmu) satisfies it, and
/// tests substitute a flat 64 KiB array.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}
