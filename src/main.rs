#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Level, Output, OutputDrive, Pin},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Delay, Duration, Ticker, Timer};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, display::Display};
use system::{
    config::{self, SystemConfig},
    time::{TimeManager, TimeReference},
};

// Others
use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};
use watchface::{Session, StaticAssets};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

// Fonts and sprites, held by the session for the lifetime of the firmware
static ASSETS: StaticCell<StaticAssets> = StaticCell::new();

/// Signal the local time on every minute boundary.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager) {
    // Align the ticker to the start of a minute
    Timer::after(clock.until_next_minute()).await;

    let mut tick = Ticker::every(Duration::from_secs(60));
    loop {
        let now = clock.local_time();
        defmt::debug!("Minute tick at {}:{}", now.hour(), now.minute());

        // Send time to channel
        TIME.signal(now);

        // Re-schedule the timer interrupt
        tick.next().await;
    }
}

/// Refresh and redraw the watchface on every minute tick.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display, mut session: Session<'static, StaticAssets>) {
    loop {
        let now = TIME.wait().await;

        let refresh = session.on_minute_tick(&now);
        if refresh.background_changed {
            defmt::info!("Background changed to {}", session.state().background());
        }

        if let Err(e) = display.show(&session) {
            defmt::warn!("Failed to draw watchface: {}", e);
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize clock
    let clock = TimeManager::init(TimeReference::from_epoch(UTC_EPOCH), config::TIMEZONE_OFFSET);

    // Initialize Backlight
    let backlight = Backlight::init(
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let mut display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26.degrade(), Level::Low, OutputDrive::Standard),
        backlight,
        &mut Delay,
    ));
    unwrap!(display.clear(Rgb565::BLACK));

    // Start the watchface, seeding the first background from the clock
    let assets = ASSETS.init(StaticAssets::new(config::CLOCK_STYLE));
    let mut session = unwrap!(Session::start(assets, clock.unix_time() as u64));

    // Make sure the time is displayed from the start
    session.on_minute_tick(&clock.local_time());
    unwrap!(display.show(&session));
    unwrap!(display.set_brightness(config::BACKLIGHT_LEVEL));
    defmt::info!("Backlight at level {}", display.get_brightness());

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(display, session)));
    unwrap!(spawner.spawn(update_time(clock)));
}
