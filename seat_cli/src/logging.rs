//! Structured logging configuration.
//!
//! Log output goes to stderr so stdout only carries rendered venue state.

use seating::SeatingEvent;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Levels come from `RUST_LOG` (default `info`). Records emitted through the
/// `log` facade by the seating library are forwarded to the same subscriber.
///
/// # Example
///
/// ```no_run
/// use seat_cli::logging;
///
/// logging::init();
/// tracing::info!("Driver starting");
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Structured logging initialized");
}

/// Log a seating event with structured data
///
/// Promotions are logged at info level; everything else at debug.
pub fn log_seating_event(step: usize, event: &SeatingEvent) {
    match event {
        SeatingEvent::Promoted { group, table } => tracing::info!(
            step = step,
            group = group.0,
            table = table.0,
            "Promoted from waitlist"
        ),
        other => tracing::debug!(step = step, event = %other, "Seating event"),
    }
}

/// Log a command the venue refused
pub fn log_rejected_command(step: usize, command: &str, reason: &str) {
    tracing::warn!(step = step, command = command, "REJECTED: {}", reason);
}
