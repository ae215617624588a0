use std::sync::Once;

use tracing_subscriber::fmt;

/// Guards subscriber installation.
static INIT: Once = Once::new();

/// Route `tracing` output to the test harness's captured output. Safe to call
/// from every test; only the first call installs a subscriber, and an already
/// installed global subscriber is left in place.
pub fn init_logging() {
    INIT.call_once(|| {
        let format = fmt::format()
            .with_level(true)
            .with_line_number(true)
            .with_ansi(false)
            .without_time()
            .compact();
        let installed = fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .event_format(format)
            .try_init();
        if installed.is_err() {
            tracing::debug!("a global subscriber was already installed");
        }
    });
}
