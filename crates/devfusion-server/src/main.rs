use crate::app::AppConfig;
use crate::opt::{Commands, Db, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use devfusion_migration::run_migrations;
use devfusion_utils::net::{BindOptions, create_listener};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

mod app;
mod opt;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

async fn run(opt: Run) -> Result<()> {
    devfusion_utils::tracing::setup(
        devfusion_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .env(opt.env.clone())
            .build(),
    )?;

    let conn = Database::connect(build_connect_options(&opt.db))
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to connect to database"))?;
    conn.ping()
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "database is not reachable"))?;
    run_migrations(&conn).await?;

    let Run {
        host,
        port,
        identity,
        origins,
        ..
    } = opt;
    let app = app::create_app(AppConfig::from(identity), &origins, conn)?;

    let listener = create_listener(BindOptions {
        host,
        port,
        fallback: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
    })
    .await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = &error as &dyn Error, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}

fn build_connect_options(db_options: &Db) -> ConnectOptions {
    let mut pool_options = ConnectOptions::new(db_options.database_url.clone());
    if let Some(min_connections) = db_options.db_min_connections {
        pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        pool_options.max_connections(max_connections);
    }
    pool_options.acquire_timeout(db_options.db_acquire_timeout);
    pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    pool_options
}

fn main() -> Result<()> {
    unsafe { env::set_var("RUST_BACKTRACE", "1") };

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
