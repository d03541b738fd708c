use clap::Parser;
use flightpath_api::RestApi;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A small service that reconstructs ordered flight itineraries
#[derive(Parser, Debug)]
#[command(name = "flightpath")]
#[command(about = "Reconstructs ordered flight itineraries from unordered legs", long_about = None)]
struct Args {
    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting flightpath v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API: http://localhost:{}/calculate", args.port);

    RestApi::start(args.port).await?;

    info!("Shutting down...");
    Ok(())
}
