use std::net::{IpAddr, UdpSocket};

/// Address of the interface this host would use to reach the outside network.
///
/// Nothing is sent: connecting a UDP socket only selects a route.
pub fn get_local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let local_addr = socket.local_addr().ok()?;
    Some(local_addr.ip())
}
