//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};
use watchface::ClockStyle;

/// Offset of local time from UTC, in seconds
pub const TIMEZONE_OFFSET: i32 = 1 * 3_600;

/// Hour convention of the time label
pub const CLOCK_STYLE: ClockStyle = ClockStyle::TwentyFourHour;

/// Backlight level while the watchface is shown (0–7)
pub const BACKLIGHT_LEVEL: u8 = 2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }
}
