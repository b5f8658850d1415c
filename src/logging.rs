use tracing::Level;

/// Install the global fmt subscriber. The hosting environment stamps log
/// lines with time and source, so both are suppressed here.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .init();
}
