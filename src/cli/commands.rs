//! CLI command implementations

use std::path::Path;

use crate::cli::args::{Cli, Command};
use crate::cli::errors::CliResult;
use crate::dataset::DatasetAccessor;
use crate::http_server::{HttpServer, HttpServerConfig};

/// Parse CLI args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            database,
            host,
            port,
        } => serve(&database, &host, port),
    }
}

/// Open the dataset read-only and serve the HTTP API until interrupted.
pub fn serve(database: &Path, host: &str, port: u16) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let accessor = DatasetAccessor::open(database).await?;
        tracing::info!("opened dataset at {}", database.display());

        let server = HttpServer::with_config(accessor, HttpServerConfig::with_addr(host, port));
        server.start().await?;
        Ok(())
    })
}
