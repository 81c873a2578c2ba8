use crate::query::{decode_component, find_arg, parse_permissive_int};

/// Query argument carrying the brightness value on `/b`.
pub const BRIGHTNESS_ARG: &str = "set";

/// One incoming request target, split at the first `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRequest<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
}

impl<'a> CommandRequest<'a> {
    pub fn from_target(target: &'a str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self {
                path,
                query: Some(query),
            },
            None => Self {
                path: target,
                query: None,
            },
        }
    }

    /// Raw value of the query argument `name`, if present.
    pub fn arg(&self, name: &str) -> Option<&'a str> {
        self.query.and_then(|query| find_arg(query, name))
    }
}

/// Fixed palette reachable from the web page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Off,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl NamedColor {
    pub const ALL: [NamedColor; 6] = [
        NamedColor::Off,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Purple,
    ];

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Off => (0, 0, 0),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 255, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Purple => (128, 0, 128),
        }
    }

    /// Token echoed after `OK ` in the response.
    pub const fn label(self) -> &'static str {
        match self {
            NamedColor::Off => "OFF",
            NamedColor::Red => "RED",
            NamedColor::Green => "GREEN",
            NamedColor::Blue => "BLUE",
            NamedColor::Yellow => "YELLOW",
            NamedColor::Purple => "PURPLE",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            NamedColor::Off => "/off",
            NamedColor::Red => "/red",
            NamedColor::Green => "/green",
            NamedColor::Blue => "/blue",
            NamedColor::Yellow => "/yellow",
            NamedColor::Purple => "/purple",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.path() == path)
    }
}

/// A recognized request, already validated as far as parsing goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Page,
    SetColor(NamedColor),
    /// `None` when the `set` argument is missing.
    SetBrightness(Option<i32>),
    Status,
    Restart,
}

impl Command {
    /// Map a request to a command. `None` means the path is not served here.
    pub fn parse(request: &CommandRequest<'_>) -> Option<Self> {
        let command = match request.path {
            "/" => Command::Page,
            "/status" => Command::Status,
            "/restart" => Command::Restart,
            "/b" => Command::SetBrightness(
                request
                    .arg(BRIGHTNESS_ARG)
                    .map(|value| parse_permissive_int(decode_component(value))),
            ),
            path => Command::SetColor(NamedColor::from_path(path)?),
        };
        Some(command)
    }
}
