use clap::{Parser, Subcommand};
use contact_relay::config::MailConfig;
use contact_relay::email::ResendClient;
use contact_relay::http::ContactServer;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, error};

/// Relay website contact-form submissions as transactional email
#[derive(Parser)]
#[command(name = "contact-relay")]
#[command(about = "Contact-form relay for mgripe.com", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default command)
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace,hyper=debug,tower=debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("contact-relay started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Some(Commands::Serve { bind, port }) => run_serve(bind, port).await,
        None => run_serve(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_serve(bind: IpAddr, port: u16) -> anyhow::Result<()> {
    let config = MailConfig::from_env()?;
    let dispatch = Arc::new(ResendClient::new(config.api_key.clone())?);

    let server = ContactServer::new(dispatch, config, SocketAddr::new(bind, port));
    server.start().await
}
