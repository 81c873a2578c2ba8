use std::{env, path::Path};

const DEFAULT_AP_SSID: &str = "ESP32";
const DEFAULT_AP_PASSWORD: &str = "testpass";

fn main() {
    load_env_config();

    println!(
        "cargo:rustc-env=BUILD_VERSION={}",
        chrono::Utc::now().format("%Y.%m.%d-%H%M")
    );

    // make sure linkall.x is the last linker script
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Access point credentials: environment first, then `.env`, then defaults.
fn load_env_config() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=AP_SSID");
    println!("cargo:rerun-if-env-changed=AP_PASSWORD");

    if Path::new(".env").exists() {
        match dotenvy::dotenv() {
            Ok(_) => println!("cargo:warning=Loaded .env file"),
            Err(e) => println!("cargo:warning=Failed to load .env file: {}", e),
        }
    }

    let ssid = env_or("AP_SSID", DEFAULT_AP_SSID);
    let password = env_or("AP_PASSWORD", DEFAULT_AP_PASSWORD);

    println!("cargo:rustc-env=AP_SSID={}", ssid);
    println!("cargo:rustc-env=AP_PASSWORD={}", password);

    if password.len() < 8 {
        println!("cargo:warning=AP_PASSWORD shorter than 8 characters, the access point will be open");
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .map(|value| value.trim().to_string())
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
