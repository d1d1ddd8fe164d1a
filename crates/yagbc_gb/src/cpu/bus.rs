/// Abstraction over the Game Boy address space.
///
/// The core only ever reads and writes single bytes by address. Both
/// operations are total: every address yields a byte and every write is
/// accepted, even if the backing store chooses to discard it.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by a given number of CPU cycles.
    ///
    /// Called once after every executed instruction with its cycle cost.
    /// Halted steps do not tick.
    /// The default implementation does nothing; buses that grow timers or a
    /// PPU can override this to drive them.
    fn tick(&mut self, _cycles: u32) {}
}
