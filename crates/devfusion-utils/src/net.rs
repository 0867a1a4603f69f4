use listenfd::ListenFd;
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Where the server listens. Without an explicit host or port a socket passed in
/// through `LISTEN_FDS` takes precedence over `fallback`.
#[derive(Debug, Clone, Copy)]
pub struct BindOptions {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub fallback: SocketAddr,
}

impl BindOptions {
    fn address(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(self.fallback.ip()),
            self.port.unwrap_or(self.fallback.port()),
        )
    }
}

pub async fn create_listener(options: BindOptions) -> io::Result<TcpListener> {
    if options.host.is_none() && options.port.is_none() {
        let mut listenfd = ListenFd::from_env();
        if let Some(listener) = listenfd.take_tcp_listener(0)? {
            listener.set_nonblocking(true)?;
            tracing::debug!("using socket from listenfd");
            return TcpListener::from_std(listener);
        }
    }

    let address = options.address();
    tracing::debug!(%address, "binding listener");
    TcpListener::bind(address).await
}
