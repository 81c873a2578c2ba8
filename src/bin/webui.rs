//! Pixel Web UI Firmware
//!
//! Hosts a Wi-Fi access point and serves a small web page that drives the
//! on-board WS2812 pixel:
//! - Starts the access point and its DHCP responder
//! - Pushes the initial pixel state (off, default brightness)
//! - Serves the page and the colour, brightness, status and restart
//!   commands on port 80

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_pixel_webui::{
    config,
    controllers::PixelHttpController,
    infrastructure::{
        drivers::{EspPixelDriver, EspRestart, start_access_point},
        tasks::http_server_task,
        types::{PixelRouter, WebUiController},
    },
    mk_static,
    pixel_gpio,
};
use log::{error, info};
use pixel_webui_core::{CommandRouter, PixelState, PixelStore};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    info!("=================================");
    info!("  ESP32-S3 Pixel Web UI {}", config::FIRMWARE.version);
    info!("=================================");

    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // The radio keeps its buffers on the heap
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let driver = EspPixelDriver::new(peripherals.RMT, pixel_gpio!(peripherals))
        .expect("RMT init failed");
    let store = mk_static!(
        PixelStore,
        PixelStore::new(PixelState::off(config::PIXEL.default_brightness))
    );
    let mut router: PixelRouter = CommandRouter::new(store, driver);
    if let Err(e) = router.apply_current() {
        error!("initial pixel push failed: {:?}", e);
    }

    let stack = start_access_point(spawner, peripherals.WIFI, &config::ACCESS_POINT).await;
    let address = stack
        .config_v4()
        .map_or(config::ACCESS_POINT.address, |v4| v4.address.address());
    info!("AP SSID: {}", config::ACCESS_POINT.ssid);
    info!("AP IP: {}", address);
    info!("Open http://{}/", address);

    let controller = mk_static!(
        WebUiController,
        PixelHttpController::new(router, EspRestart, config::HTTP.restart_grace)
    );
    spawner.spawn(http_server_task(stack, controller)).ok();
    info!("Server ON");

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
