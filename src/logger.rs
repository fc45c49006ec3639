use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initialize the process-wide logger. Safe to call more than once; a
/// RUST_LOG setting overrides the defaults.
pub fn initialize_logger() {
    // call_once_force recovers if an earlier initialization attempt panicked
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // don't panic if a logger was already installed elsewhere
        let _ = builder.try_init();
    });
}
