//! Display control module for PineTime

use embassy_nrf::{
    gpio::{AnyPin, Output},
    peripherals::SPI2,
    spim::Spim,
};

use display_interface_spi::SPIInterface;
use embassy_time::Delay;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use mipidsi::{models::ST7789, Builder, Orientation};
use watchface::{render, Session, StaticAssets};

use super::{backlight::Backlight, Error};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, AnyPin>, Output<'static, AnyPin>>,
    ST7789,
    Output<'static, AnyPin>,
>;

pub struct Display {
    /// Display instance
    lcd: Lcd,
    /// Backlight, kept here so its pins stay driven while the panel is in use
    backlight: Backlight,
}

impl Display {
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'static, SPI2>,
        cs_pin: Output<'static, AnyPin>,
        dc_pin: Output<'static, AnyPin>,
        rst_pin: Output<'static, AnyPin>,
        backlight: Backlight,
        delay: &mut Delay,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(delay, Some(rst_pin))
            .map_err(|_| Error::DisplayInit)?;

        Ok(Self { lcd, backlight })
    }

    /// Clear the display
    pub fn clear(&mut self, color: Rgb565) -> Result<(), Error> {
        self.lcd.clear(color).map_err(|_| Error::DisplayWrite)
    }

    /// Draw the current watchface frame
    pub fn show(&mut self, session: &Session<'_, StaticAssets>) -> Result<(), Error> {
        render::draw(session, &mut self.lcd).map_err(|_| Error::DisplayWrite)
    }

    /// Brightness of the display backlight
    pub fn get_brightness(&self) -> u8 {
        self.backlight.get_brightness()
    }

    /// Set the backlight brightness
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Error> {
        self.backlight.set(level)
    }
}
