//! Oekaki game server.
//!
//! Hosts the single shared drawing session and relays game messages between all
//! connected WebSocket clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin oekaki-server
//! cargo run --bin oekaki-server -- --host 0.0.0.0 --port 3001
//! PORT=4000 cargo run --bin oekaki-server
//! ```

use std::sync::Arc;

use clap::Parser;
use oekaki_server::{
    domain::Session,
    infrastructure::{message_pusher::WebSocketMessagePusher, randomizer::ThreadRngRandomizer},
    ui::{AppState, Server},
};
use oekaki_shared::{logger::setup_logger, time::SystemClock};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "oekaki-server")]
#[command(about = "Session coordinator for the Oekaki drawing game", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(
        &[env!("CARGO_PKG_NAME"), "tower_http"],
        &args.log_level,
    );

    // Initialize dependencies in order:
    // 1. Session
    // 2. MessagePusher, Randomizer, Clock
    // 3. AppState (UseCases)
    // 4. Server
    let session = Arc::new(Mutex::new(Session::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new());
    let randomizer = Arc::new(ThreadRngRandomizer);
    let clock = Arc::new(SystemClock);

    let app_state = AppState::new(session, message_pusher, randomizer, clock);

    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
