use core::fmt::Write;

use crate::pixel::PixelState;

/// Longest line is `RGB(255,255,255) Brightness=255` (31 bytes).
pub const STATUS_LINE_CAPACITY: usize = 32;

pub type StatusLine = heapless::String<STATUS_LINE_CAPACITY>;

/// Render the status line the web page parses: `RGB(r,g,b) Brightness=n`.
pub fn render_status(state: &PixelState) -> StatusLine {
    let mut line = StatusLine::new();
    let _ = write!(
        line,
        "RGB({},{},{}) Brightness={}",
        state.red, state.green, state.blue, state.brightness
    );
    line
}
