//! DHCP wire codec for the access point's stateless responder.
//!
//! Leases are derived from the client MAC, so the responder keeps no table:
//! DISCOVER is answered with OFFER and REQUEST with ACK for the same address.

use core::net::Ipv4Addr;

pub const SERVER_PORT: u16 = 67;
pub const CLIENT_PORT: u16 = 68;

pub const LEASE_TIME_SECS: u32 = 3600;
pub const SUBNET_MASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

/// First and last host octet handed out inside the AP's /24.
pub const POOL_START: u8 = 2;
pub const POOL_END: u8 = 50;

const BOOTREQUEST: u8 = 1;
const BOOTREPLY: u8 = 2;
const HTYPE_ETHERNET: u8 = 1;
const BROADCAST_FLAG: [u8; 2] = [0x80, 0x00];
const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];

const XID: core::ops::Range<usize> = 4..8;
const FLAGS: core::ops::Range<usize> = 10..12;
const YIADDR: core::ops::Range<usize> = 16..20;
const SIADDR: core::ops::Range<usize> = 20..24;
const CHADDR: core::ops::Range<usize> = 28..34;
const COOKIE: core::ops::Range<usize> = 236..240;
const OPTIONS_START: usize = 240;

/// BOOTP requires replies of at least this many bytes.
pub const MIN_REPLY_LEN: usize = 300;

mod option {
    pub(super) const PAD: u8 = 0;
    pub(super) const SUBNET_MASK: u8 = 1;
    pub(super) const ROUTER: u8 = 3;
    pub(super) const DNS: u8 = 6;
    pub(super) const LEASE_TIME: u8 = 51;
    pub(super) const MESSAGE_TYPE: u8 = 53;
    pub(super) const SERVER_ID: u8 = 54;
    pub(super) const END: u8 = 255;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Discover,
    Offer,
    Request,
    Decline,
    Ack,
    Nak,
    Release,
    Inform,
}

impl MessageType {
    pub const fn from_u8(value: u8) -> Option<Self> {
        Some(match value {
            1 => MessageType::Discover,
            2 => MessageType::Offer,
            3 => MessageType::Request,
            4 => MessageType::Decline,
            5 => MessageType::Ack,
            6 => MessageType::Nak,
            7 => MessageType::Release,
            8 => MessageType::Inform,
            _ => return None,
        })
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            MessageType::Discover => 1,
            MessageType::Offer => 2,
            MessageType::Request => 3,
            MessageType::Decline => 4,
            MessageType::Ack => 5,
            MessageType::Nak => 6,
            MessageType::Release => 7,
            MessageType::Inform => 8,
        }
    }

    /// The message a stateless server answers with, if any.
    pub const fn reply(self) -> Option<Self> {
        match self {
            MessageType::Discover => Some(MessageType::Offer),
            MessageType::Request => Some(MessageType::Ack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpRequest {
    pub xid: [u8; 4],
    pub client_mac: [u8; 6],
    pub message_type: MessageType,
}

/// Parse a client BOOTREQUEST. Anything else yields `None`.
pub fn parse_request(packet: &[u8]) -> Option<DhcpRequest> {
    if packet.len() < OPTIONS_START
        || packet[0] != BOOTREQUEST
        || packet[COOKIE] != MAGIC_COOKIE
    {
        return None;
    }

    let message_type = find_option(&packet[OPTIONS_START..], option::MESSAGE_TYPE)
        .and_then(|data| data.first().copied())
        .and_then(MessageType::from_u8)?;

    let mut xid = [0u8; 4];
    xid.copy_from_slice(&packet[XID]);
    let mut client_mac = [0u8; 6];
    client_mac.copy_from_slice(&packet[CHADDR]);

    Some(DhcpRequest {
        xid,
        client_mac,
        message_type,
    })
}

/// Address offered to `mac`, inside the server's /24.
pub fn lease_address(server: Ipv4Addr, mac: &[u8; 6]) -> Ipv4Addr {
    let [a, b, c, _] = server.octets();
    let span = POOL_END - POOL_START + 1;
    Ipv4Addr::new(a, b, c, POOL_START + mac[5] % span)
}

/// Write an OFFER/ACK for `request` into `buffer`.
///
/// Returns the reply length, or `None` if `buffer` is shorter than
/// [`MIN_REPLY_LEN`].
pub fn write_reply(
    buffer: &mut [u8],
    request: &DhcpRequest,
    server: Ipv4Addr,
    offered: Ipv4Addr,
    reply_type: MessageType,
) -> Option<usize> {
    if buffer.len() < MIN_REPLY_LEN {
        return None;
    }
    buffer.fill(0);

    buffer[0] = BOOTREPLY;
    buffer[1] = HTYPE_ETHERNET;
    buffer[2] = 6;
    buffer[XID].copy_from_slice(&request.xid);
    buffer[FLAGS].copy_from_slice(&BROADCAST_FLAG);
    buffer[YIADDR].copy_from_slice(&offered.octets());
    buffer[SIADDR].copy_from_slice(&server.octets());
    buffer[CHADDR].copy_from_slice(&request.client_mac);
    buffer[COOKIE].copy_from_slice(&MAGIC_COOKIE);

    let server_octets = server.octets();
    let mut options = OptionWriter {
        buffer,
        at: OPTIONS_START,
    };
    options.put(option::MESSAGE_TYPE, &[reply_type.as_u8()]);
    options.put(option::SERVER_ID, &server_octets);
    options.put(option::LEASE_TIME, &LEASE_TIME_SECS.to_be_bytes());
    options.put(option::SUBNET_MASK, &SUBNET_MASK.octets());
    options.put(option::ROUTER, &server_octets);
    // DNS points at the AP, as the softAP DHCP server hands it out.
    options.put(option::DNS, &server_octets);
    options.end();

    Some(options.at.max(MIN_REPLY_LEN))
}

struct OptionWriter<'a> {
    buffer: &'a mut [u8],
    at: usize,
}

impl OptionWriter<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn put(&mut self, code: u8, data: &[u8]) {
        self.buffer[self.at] = code;
        self.buffer[self.at + 1] = data.len() as u8;
        self.buffer[self.at + 2..self.at + 2 + data.len()].copy_from_slice(data);
        self.at += 2 + data.len();
    }

    fn end(&mut self) {
        self.buffer[self.at] = option::END;
        self.at += 1;
    }
}

/// Find `code` in an options area that starts after the magic cookie.
fn find_option(options: &[u8], code: u8) -> Option<&[u8]> {
    let mut i = 0;
    while i < options.len() {
        match options[i] {
            option::END => break,
            option::PAD => {
                i += 1;
                continue;
            }
            _ => {}
        }
        let len = usize::from(*options.get(i + 1)?);
        let data = options.get(i + 2..i + 2 + len)?;
        if options[i] == code {
            return Some(data);
        }
        i += 2 + len;
    }
    None
}
