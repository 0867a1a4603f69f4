use clap::{Args, Parser, Subcommand};
use http::HeaderName;
use std::net::IpAddr;
use std::num::ParseIntError;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "devfusion", about = "Run the DevFusion learning backend")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

fn parse_seconds(value: &str) -> Result<Duration, ParseIntError> {
    value.parse().map(Duration::from_secs)
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Db {
    #[arg(long, env = "DATABASE_URL", help = "sqlite:// or postgres:// connection url")]
    pub(crate) database_url: String,

    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,

    #[arg(long, default_value = "5", value_parser = parse_seconds, help = "Seconds to wait for a pooled connection")]
    pub(crate) db_acquire_timeout: Duration,
}

/// Headers set by the authenticating proxy in front of the server.
///
/// The server trusts these headers as they arrive, so it must only be reachable through
/// that proxy. Configure `--proxy-secret` to additionally require a shared secret the
/// proxy attaches to every request; requests without it carry no identity.
#[derive(Debug, Clone, Args)]
pub(crate) struct Identity {
    #[arg(long, env = "DEVFUSION_EMAIL_HEADER", default_value = "x-forwarded-email")]
    pub(crate) email_header: HeaderName,

    #[arg(long, env = "DEVFUSION_ROLES_HEADER", default_value = "x-forwarded-groups")]
    pub(crate) roles_header: HeaderName,

    #[arg(long, env = "DEVFUSION_ADMIN_ROLE", default_value = "admin")]
    pub(crate) admin_role: String,

    #[arg(long, env = "DEVFUSION_PROXY_SECRET_HEADER", default_value = "x-proxy-secret")]
    pub(crate) proxy_secret_header: HeaderName,

    #[arg(long, env = "DEVFUSION_PROXY_SECRET", help = "Shared secret the identity proxy sends")]
    pub(crate) proxy_secret: Option<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) identity: Identity,

    #[arg(long, value_delimiter = ',', help = "Allowed CORS origins")]
    pub(crate) origins: Vec<String>,

    #[arg(long, default_value = "dev", help = "Name of the deployment environment")]
    pub(crate) env: String,
}
