use embassy_executor::Spawner;
use embassy_net::{Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::{AuthMethod, Config, ModeConfig};
use log::info;
use static_cell::make_static;

use super::random::get_seed;
use crate::{
    config::AccessPointConfig,
    infrastructure::tasks::{ap_controller_task, dhcp_server_task, network_runner_task},
};

const MAX_CONNECTIONS: usize = 6;

/// Bring up the access point and its network stack.
///
/// The stack uses the static address from `config`. Returns once the link
/// is up and the DHCP responder is running.
pub async fn start_access_point(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    config: &'static AccessPointConfig,
) -> Stack<'static> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().expect("radio init failed"));
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default())
            .expect("wifi init failed");

    let static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(config.address, config.prefix_len),
        gateway: Some(config.address),
        dns_servers: heapless::Vec::default(),
    };
    let net_config = embassy_net::Config::ipv4_static(static_config);

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.ap, net_config, network_resources, get_seed());

    spawner
        .spawn(ap_controller_task(controller, mode_config(config)))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    stack.wait_link_up().await;
    // Give the radio a moment before answering DHCP
    Timer::after(Duration::from_millis(100)).await;

    spawner.spawn(dhcp_server_task(stack, config.address)).ok();

    stack
}

fn mode_config(config: &AccessPointConfig) -> ModeConfig {
    let ap_config = esp_radio::wifi::AccessPointConfig::default().with_ssid(config.ssid.into());
    let ap_config = if config.is_open() {
        info!("wifi_ap: passphrase too short for WPA2, starting open network");
        ap_config.with_auth_method(AuthMethod::None)
    } else {
        ap_config
            .with_password(config.password.into())
            .with_auth_method(AuthMethod::Wpa2Personal)
    };
    ModeConfig::AccessPoint(ap_config)
}
