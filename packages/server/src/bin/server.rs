//! Line-oriented TCP chat broker.
//!
//! Clients register a display name and exchange direct or broadcast messages
//! using `|`-delimited commands, one per line.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin pipechat-server
//! cargo run --bin pipechat-server -- --host 0.0.0.0 --port 5001 --http-port 8080
//! ```

use std::sync::Arc;

use clap::Parser;
use pipechat_server::{
    domain::Directory,
    ui::{Server, ServerConfig, shutdown_signal},
    usecase::CommandDispatcher,
};
use pipechat_shared::logger::setup_logger;
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "pipechat-server")]
#[command(about = "Line-oriented TCP chat broker", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number for chat connections
    #[arg(short = 'p', long, default_value = "5001")]
    port: u16,

    /// Port number for the HTTP status API (disabled when omitted)
    #[arg(long)]
    http_port: Option<u16>,

    /// Maximum accepted command line length in bytes
    #[arg(long, default_value = "4096")]
    max_line_length: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        http_port: args.http_port,
        max_line_length: args.max_line_length,
    };

    let directory = Arc::new(Mutex::new(Directory::new()));
    let dispatcher = CommandDispatcher::new(directory);

    let server = match Server::bind(&config, dispatcher).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Error starting server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.serve(shutdown_signal()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
