pub(super) mod backlight;
pub(super) mod display;

/// Peripheral setup and drawing errors
#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Backlight level outside 0–7
    OutOfBounds,
    DisplayInit,
    DisplayWrite,
}
