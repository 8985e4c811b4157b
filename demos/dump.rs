//! Dump the secret and key names found under a mounted volume.
//!
//! Prints names and value sizes only, never values. Usage:
//!
//! ```text
//! cargo run --example dump -- /etc/secrets
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use warren::{SecretStore, WalkOptions};

fn main() {
    // Initialize tracing subscriber with env-filter support
    let filter =
        EnvFilter::try_from_env("WARREN_LOG").unwrap_or_else(|_| EnvFilter::new("warren=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    let mut options = WalkOptions::new();
    if let Some(directory) = std::env::args().nth(1) {
        options = options.directory(directory);
    }

    let mut store = SecretStore::new();
    if let Err(e) = store.walk(&options) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    for (secret, keys) in store.iter() {
        for (key, value) in keys {
            println!("{}/{} ({} bytes)", secret, key, value.len());
        }
    }
}
