use embassy_net::Ipv4Address;
use embassy_time::Duration;

pub struct AccessPointConfig {
    pub ssid: &'static str,
    /// Shorter than [`MIN_WPA2_PASSWORD_LEN`] means an open network.
    pub password: &'static str,
    pub address: Ipv4Address,
    pub prefix_len: u8,
}

pub struct PixelConfig {
    pub led_count: usize,
    pub default_brightness: u8,
}

pub struct HttpConfig {
    pub port: u16,
    pub socket_timeout: Duration,
    /// Time between the `/restart` reply and the reset.
    pub restart_grace: Duration,
}

pub struct FirmwareConfig {
    pub version: &'static str,
}

pub const MIN_WPA2_PASSWORD_LEN: usize = 8;

pub const ACCESS_POINT: AccessPointConfig = AccessPointConfig {
    ssid: env!("AP_SSID"),
    password: env!("AP_PASSWORD"),
    address: Ipv4Address::new(192, 168, 4, 1),
    prefix_len: 24,
};

pub const PIXEL: PixelConfig = PixelConfig {
    led_count: 1,
    default_brightness: pixel_webui_core::PixelState::DEFAULT_BRIGHTNESS,
};

pub const HTTP: HttpConfig = HttpConfig {
    port: 80,
    socket_timeout: Duration::from_secs(30),
    restart_grace: Duration::from_millis(500),
};

pub const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

impl AccessPointConfig {
    pub const fn is_open(&self) -> bool {
        self.password.len() < MIN_WPA2_PASSWORD_LEN
    }
}

#[macro_export]
macro_rules! pixel_gpio {
    ($p:expr) => {
        $p.GPIO48
    };
}
