//! Shared test doubles.

#![allow(dead_code)]

use pixel_webui_core::{
    CommandRequest, CommandRouter, PixelDriver, PixelState, PixelStore, Reply,
};
use smart_leds::RGB8;

/// One transmitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub brightness: u8,
    pub color: RGB8,
}

/// Records every flushed frame; can be switched into a failing mode.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    staged_brightness: u8,
    staged_color: RGB8,
    pub frames: Vec<Frame>,
    pub failing: bool,
}

impl PixelDriver for RecordingDriver {
    type Error = &'static str;

    fn set_brightness_scale(&mut self, value: u8) {
        self.staged_brightness = value;
    }

    fn set_pixel_color(&mut self, index: usize, color: RGB8) {
        assert_eq!(index, 0, "only pixel 0 exists");
        self.staged_color = color;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.failing {
            return Err("rmt channel busy");
        }
        self.frames.push(Frame {
            brightness: self.staged_brightness,
            color: self.staged_color,
        });
        Ok(())
    }
}

pub fn fresh_store() -> PixelStore {
    PixelStore::new(PixelState::default())
}

pub fn request(router: &mut CommandRouter<'_, RecordingDriver>, target: &str) -> Option<Reply> {
    router.route(&CommandRequest::from_target(target))
}

/// `request` for a path the router must recognize.
pub fn get(router: &mut CommandRouter<'_, RecordingDriver>, target: &str) -> Reply {
    request(router, target).unwrap_or_else(|| panic!("{target} should be routed"))
}

pub fn frames<'r>(router: &'r CommandRouter<'_, RecordingDriver>) -> &'r [Frame] {
    &router.pixel().driver().frames
}

/// Pull `(r, g, b)` out of `RGB(r,g,b)` the way the web page does.
pub fn parse_rgb(text: &str) -> Option<(u8, u8, u8)> {
    let start = text.find("RGB(")? + 4;
    let end = start + text[start..].find(')')?;
    let mut channels = text[start..end].split(',').map(|c| c.parse::<u8>().ok());
    let rgb = (channels.next()??, channels.next()??, channels.next()??);
    channels.next().is_none().then_some(rgb)
}
