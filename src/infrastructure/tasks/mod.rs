mod dhcp_server;
mod http_server;
mod network;

pub use dhcp_server::dhcp_server_task;
pub use http_server::http_server_task;
pub use network::{ap_controller_task, network_runner_task};
