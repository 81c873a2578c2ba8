use pixel_webui_core::SystemRestart;

/// Resets the chip through the system peripheral.
#[derive(Debug, Default)]
pub struct EspRestart;

impl SystemRestart for EspRestart {
    fn restart(&mut self) -> ! {
        esp_hal::system::software_reset()
    }
}
