//! Logging setup

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "bistro_client=info,bistro_admin=info";

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate, falling
/// back to `info`. Output goes to stderr so command output stays clean.
pub fn init_logger(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("bistro_client={level},bistro_admin={level}")),
        None => EnvFilter::new(DEFAULT_FILTER),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
