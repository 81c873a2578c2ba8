#![no_std]

//! Hardware-agnostic core of the pixel web UI firmware.
//!
//! Layers, leaf first:
//! - `pixel` - the single source of truth for colour and brightness
//! - `driver` - [`PixelDriver`] collaborator trait and the adapter that pushes a state
//! - `status` - the `RGB(r,g,b) Brightness=n` status line
//! - `command` - request target to [`Command`] mapping
//! - `router` - [`CommandRouter`], validation and dispatch
//! - `query` - query-string lookup, percent decoding and permissive integers
//! - `http` - request-line parsing and response header writing
//! - `dhcp` - wire codec for the access point's DHCP responder
//!
//! Nothing here touches a peripheral, so the whole crate is testable on the host.

pub mod command;
pub mod dhcp;
pub mod driver;
pub mod http;
pub mod pixel;
pub mod query;
pub mod router;
pub mod status;

pub use command::{Command, CommandRequest, NamedColor};
pub use driver::{DriverError, PixelAdapter, PixelDriver};
pub use pixel::{PixelState, PixelStore};
pub use router::{Body, CommandRouter, FollowUp, Reply, SystemRestart};
pub use status::{StatusLine, render_status};
