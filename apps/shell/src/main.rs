//! # iShop Entry Point
//!
//! Startup lives in `lib.rs` so it can be tested; this only drives it.

use std::process::ExitCode;

use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    match ishop_shell::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, config_error = e.is_config_error(), "iShop failed to start");
            ExitCode::FAILURE
        }
    }
}
