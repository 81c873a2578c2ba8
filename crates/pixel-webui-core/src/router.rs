use core::fmt::Write;

use log::info;

use crate::{
    command::{Command, CommandRequest, NamedColor},
    driver::{DriverError, PixelAdapter, PixelDriver},
    http::StatusCode,
    pixel::{PixelState, PixelStore, clamp_u8},
    status::render_status,
};

/// Longest body is `OK BRIGHTNESS\n` plus a full status line.
pub const REPLY_CAPACITY: usize = 64;

pub type ReplyText = heapless::String<REPLY_CAPACITY>;

pub const MISSING_BRIGHTNESS_MESSAGE: &str = "ERR missing ?set=0..255";
pub const DRIVER_FAILURE_MESSAGE: &str = "ERR led write failed";
pub const RESTARTING_MESSAGE: &str = "OK RESTARTING";

/// Device restart collaborator.
pub trait SystemRestart {
    /// Reset the chip. Never returns.
    fn restart(&mut self) -> !;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The embedded web page, served as `text/html; charset=utf-8`.
    Page,
    /// A `text/plain` body.
    Text(ReplyText),
}

/// Work the transport performs after the reply is on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Body,
    pub follow_up: Option<FollowUp>,
}

impl Reply {
    fn page() -> Self {
        Self {
            status: 200,
            body: Body::Page,
            follow_up: None,
        }
    }

    fn text(status: StatusCode, text: &str) -> Self {
        let mut body = ReplyText::new();
        let _ = body.push_str(text);
        Self {
            status,
            body: Body::Text(body),
            follow_up: None,
        }
    }

    #[must_use]
    fn then(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    /// Text body, if this is not the page.
    pub fn text_body(&self) -> Option<&str> {
        match &self.body {
            Body::Text(text) => Some(text.as_str()),
            Body::Page => None,
        }
    }
}

/// Maps requests to pixel updates and status replies.
///
/// The store is only written after the driver accepted the new frame, so
/// [`CommandRouter::state`] always matches what the LED shows.
pub struct CommandRouter<'a, D: PixelDriver> {
    store: &'a mut PixelStore,
    pixel: PixelAdapter<D>,
}

impl<'a, D: PixelDriver> CommandRouter<'a, D> {
    pub fn new(store: &'a mut PixelStore, driver: D) -> Self {
        Self {
            store,
            pixel: PixelAdapter::new(driver),
        }
    }

    pub fn state(&self) -> PixelState {
        self.store.get()
    }

    pub fn pixel(&self) -> &PixelAdapter<D> {
        &self.pixel
    }

    pub fn pixel_mut(&mut self) -> &mut PixelAdapter<D> {
        &mut self.pixel
    }

    /// Push the stored state as-is. Used once at boot.
    pub fn apply_current(&mut self) -> Result<(), DriverError> {
        let state = self.store.get();
        self.pixel.apply(&state)
    }

    /// Handle one request. `None` leaves the path to the transport's 404.
    pub fn route(&mut self, request: &CommandRequest<'_>) -> Option<Reply> {
        Command::parse(request).map(|command| self.execute(command))
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Page => Reply::page(),
            Command::SetColor(color) => self.set_color(color),
            Command::SetBrightness(Some(value)) => self.set_brightness(value),
            Command::SetBrightness(None) => {
                Reply::text(400, MISSING_BRIGHTNESS_MESSAGE)
            }
            Command::Status => self.confirm("STATUS"),
            Command::Restart => {
                info!("Restart requested from WebUI");
                Reply::text(200, RESTARTING_MESSAGE).then(FollowUp::Restart)
            }
        }
    }

    fn set_color(&mut self, color: NamedColor) -> Reply {
        let (red, green, blue) = color.rgb();
        let next = self.store.get().with_color(red, green, blue);
        if self.pixel.apply(&next).is_err() {
            return Reply::text(500, DRIVER_FAILURE_MESSAGE);
        }
        self.store
            .set(i32::from(red), i32::from(green), i32::from(blue));
        self.confirm(color.label())
    }

    fn set_brightness(&mut self, value: i32) -> Reply {
        let next = self.store.get().with_brightness(clamp_u8(value));
        if self.pixel.apply(&next).is_err() {
            return Reply::text(500, DRIVER_FAILURE_MESSAGE);
        }
        self.store.set_brightness(value);
        self.confirm("BRIGHTNESS")
    }

    /// `OK <label>` plus the status line, mirrored to the log.
    fn confirm(&self, label: &str) -> Reply {
        let line = render_status(&self.store.get());
        info!("OK {} - {}", label, line);

        let mut body = ReplyText::new();
        let _ = write!(body, "OK {}\n{}", label, line);
        Reply {
            status: 200,
            body: Body::Text(body),
            follow_up: None,
        }
    }
}
