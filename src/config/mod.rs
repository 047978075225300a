mod test;

use crate::dispatcher::AdminSecret;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

#[derive(Parser, Debug)]
#[command(name = "queueboard", about = "Live queue board served over websockets")]
pub struct Args {
    /// Interface to listen on
    #[arg(long, env = "QUEUEBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "QUEUEBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Shared secret that turns a connection into an admin connection
    #[arg(long, env = "QUEUEBOARD_ADMIN_PASSWORD", default_value = DEFAULT_ADMIN_PASSWORD, hide_default_value = true, hide_env_values = true)]
    pub admin_password: String,

    /// Directory holding the built client bundle
    #[arg(long, env = "QUEUEBOARD_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn admin_secret(&self) -> AdminSecret {
        AdminSecret::new(self.admin_password.clone())
    }
}
