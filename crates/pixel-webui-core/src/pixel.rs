use smart_leds::RGB8;

/// Clamp an arbitrary integer into a channel/brightness byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_u8(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Colour and global brightness currently shown by the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelState {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub brightness: u8,
}

impl PixelState {
    pub const DEFAULT_BRIGHTNESS: u8 = 50;

    /// Pixel switched off at the given brightness scale.
    pub const fn off(brightness: u8) -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            brightness,
        }
    }

    /// Same brightness, new channels.
    #[must_use]
    pub const fn with_color(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self
    }

    /// Same channels, new brightness.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub const fn color(&self) -> RGB8 {
        RGB8 {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }
}

impl Default for PixelState {
    fn default() -> Self {
        Self::off(Self::DEFAULT_BRIGHTNESS)
    }
}

/// Owner of the process-wide [`PixelState`].
///
/// Lives for the whole firmware run and is lent to the router at
/// construction. Every setter clamps instead of rejecting.
#[derive(Debug, Default)]
pub struct PixelStore {
    state: PixelState,
}

impl PixelStore {
    pub const fn new(initial: PixelState) -> Self {
        Self { state: initial }
    }

    /// Snapshot of the current state.
    pub const fn get(&self) -> PixelState {
        self.state
    }

    pub fn set(&mut self, red: i32, green: i32, blue: i32) {
        self.state = self
            .state
            .with_color(clamp_u8(red), clamp_u8(green), clamp_u8(blue));
    }

    pub fn set_brightness(&mut self, brightness: i32) {
        self.state = self.state.with_brightness(clamp_u8(brightness));
    }
}
