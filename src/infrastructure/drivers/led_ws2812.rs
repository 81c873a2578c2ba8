use esp_hal::{
    gpio::interconnect::PeripheralOutput,
    peripherals::RMT,
    rmt::{self, Rmt},
    time::Rate,
};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapter, buffer_size, smart_led_buffer};
use pixel_webui_core::PixelDriver;
use smart_leds::{RGB8, SmartLedsWrite, brightness};
use static_cell::make_static;

use crate::config;

const PIXEL_COUNT: usize = config::PIXEL.led_count;

/// WS2812 driver on the RMT peripheral.
///
/// Colour and brightness are staged in memory and only reach the LED on
/// [`PixelDriver::flush`].
pub struct EspPixelDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(PIXEL_COUNT) }>,
    frame: [RGB8; PIXEL_COUNT],
    brightness: u8,
}

impl<'a> EspPixelDriver<'a> {
    /// Create a new driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Result<Self, rmt::Error>
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80))?;

        let rmt_buffer = make_static!(smart_led_buffer!(PIXEL_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Ok(Self {
            adapter,
            frame: [RGB8::default(); PIXEL_COUNT],
            brightness: u8::MAX,
        })
    }
}

impl PixelDriver for EspPixelDriver<'_> {
    type Error = LedAdapterError;

    fn set_brightness_scale(&mut self, value: u8) {
        self.brightness = value;
    }

    fn set_pixel_color(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let frame = self.frame;
        let level = self.brightness;
        // WS2812 timing must not be interrupted mid-frame.
        critical_section::with(|_| {
            self.adapter
                .write(brightness(frame.iter().copied(), level))
        })
    }
}
