//! Terminal client for the pipechat broker.
//!
//! Type protocol commands directly, one per line:
//!
//! ```text
//! USER|name           register a display name
//! LIST                list registered users
//! CHAT_REQ|name|msg   send a direct message
//! BCAST_REQ|msg       send a message to everyone else
//! exit                disconnect and quit
//! ```
//!
//! Run with:
//! ```not_rust
//! cargo run --bin pipechat-client
//! cargo run --bin pipechat-client -- --host 127.0.0.1 --port 5001
//! ```

use clap::Parser;
use pipechat_client::run_client;
use pipechat_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "pipechat-client")]
#[command(about = "Terminal client for the pipechat broker", long_about = None)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short = 'p', long, default_value = "5001")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    if let Err(e) = run_client(&addr).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
