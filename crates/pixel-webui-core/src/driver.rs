//! LED driver abstraction layer
//!
//! [`PixelDriver`] is the narrow surface the firmware needs from an
//! addressable LED strip. [`PixelAdapter`] turns one [`PixelState`] into one
//! physical refresh.

use core::fmt::Debug;

use log::error;
use smart_leds::RGB8;

use crate::pixel::PixelState;

/// Index of the only pixel this device drives.
pub const PIXEL_INDEX: usize = 0;

/// Addressable LED strip collaborator.
///
/// Brightness and colour calls only stage the next frame; nothing reaches
/// the hardware until [`PixelDriver::flush`].
pub trait PixelDriver {
    type Error: Debug;

    /// Set the global brightness scale applied to every channel.
    fn set_brightness_scale(&mut self, value: u8);

    /// Stage a colour for the pixel at `index`.
    fn set_pixel_color(&mut self, index: usize, color: RGB8);

    /// Transmit the staged frame.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The frame could not be transmitted to the LED.
    Transmit,
}

/// Pushes whole [`PixelState`]s to a [`PixelDriver`].
#[derive(Debug)]
pub struct PixelAdapter<D: PixelDriver> {
    driver: D,
}

impl<D: PixelDriver> PixelAdapter<D> {
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Apply brightness and colour, then refresh once.
    ///
    /// A failed refresh is logged and reported, never retried.
    pub fn apply(&mut self, state: &PixelState) -> Result<(), DriverError> {
        self.driver.set_brightness_scale(state.brightness);
        self.driver.set_pixel_color(PIXEL_INDEX, state.color());
        self.driver.flush().map_err(|e| {
            error!("pixel: frame transmit failed: {:?}", e);
            DriverError::Transmit
        })
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
