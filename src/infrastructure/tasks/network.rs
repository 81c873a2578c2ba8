//! Wi-Fi access point tasks

use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ModeConfig, WifiController, WifiDevice};
use log::info;

/// Background task owning the Wi-Fi controller in AP mode
#[embassy_executor::task]
pub async fn ap_controller_task(mut controller: WifiController<'static>, mode: ModeConfig) {
    controller
        .set_config(&mode)
        .expect("access point config rejected");
    controller
        .start_async()
        .await
        .expect("access point failed to start");
    info!("wifi_ap: started");

    // The controller must stay alive for the AP to keep running
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
