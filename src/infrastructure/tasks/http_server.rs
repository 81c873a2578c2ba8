//! HTTP Server Task
//!
//! Serves the web page and the pixel commands on the access point.

use embassy_net::Stack;

use crate::{
    config,
    infrastructure::types::WebUiController,
    net::http::HttpServer,
};

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 4096;

#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, handler: &'static mut WebUiController) {
    let mut server = HttpServer::new(handler, config::HTTP.socket_timeout);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    server
        .listen_and_serve(stack, config::HTTP.port, &mut rx_buffer, &mut tx_buffer)
        .await
}
