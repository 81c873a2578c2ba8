//! DHCP Server Task
//!
//! Hands out addresses in the access point's subnet. Leases are derived from
//! the client MAC, so nothing is remembered between packets.

use embassy_net::{
    Ipv4Address,
    Stack,
    udp::{PacketMetadata, UdpSocket},
};
use log::{debug, info, warn};
use pixel_webui_core::dhcp::{
    CLIENT_PORT,
    SERVER_PORT,
    lease_address,
    parse_request,
    write_reply,
};

const PACKET_SIZE: usize = 576;

#[embassy_executor::task]
pub async fn dhcp_server_task(stack: Stack<'static>, server_address: Ipv4Address) {
    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(e) = socket.bind(SERVER_PORT) {
        warn!("dhcp_server: failed to bind port {}: {:?}", SERVER_PORT, e);
        return;
    }
    info!("dhcp_server: listening on port {}", SERVER_PORT);

    let mut packet = [0u8; PACKET_SIZE];
    let mut reply = [0u8; PACKET_SIZE];

    loop {
        let len = match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => len,
            Err(e) => {
                warn!("dhcp_server: recv error: {:?}", e);
                continue;
            }
        };

        let Some(request) = parse_request(&packet[..len]) else {
            continue;
        };
        let Some(reply_type) = request.message_type.reply() else {
            debug!(
                "dhcp_server: ignoring {:?} from {:02x?}",
                request.message_type, request.client_mac
            );
            continue;
        };

        let offered = lease_address(server_address, &request.client_mac);
        let Some(reply_len) =
            write_reply(&mut reply, &request, server_address, offered, reply_type)
        else {
            continue;
        };
        debug!("dhcp_server: {:?} {} to {:02x?}", reply_type, offered, request.client_mac);

        // Clients without an address only hear broadcasts
        let dest = (Ipv4Address::BROADCAST, CLIENT_PORT);
        if let Err(e) = socket.send_to(&reply[..reply_len], dest).await {
            warn!("dhcp_server: send error: {:?}", e);
        }
    }
}
