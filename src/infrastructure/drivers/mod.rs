mod led_ws2812;
mod random;
mod restart;
pub mod wifi_ap;

pub use led_ws2812::EspPixelDriver;
pub use restart::EspRestart;
pub use wifi_ap::start_access_point;
