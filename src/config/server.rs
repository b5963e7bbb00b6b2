//! Listener address and HTTP timeouts. Fixed, not read from env.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const LISTEN_PORT: u16 = 8080;
/// Bound on reading a request body.
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);
/// Bound on handling a whole request, including the response.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(10);
/// Largest accepted request body.
pub const BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT)),
            read_timeout: READ_TIMEOUT,
            write_timeout: WRITE_TIMEOUT,
            body_limit: BODY_LIMIT,
        }
    }
}
