//! Browser console output for the `log` facade.

use std::sync::Once;

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

static INSTALL: Once = Once::new();

/// Parse a level name; unknown names fall back to `Warn`.
pub(crate) fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}

/// Route codec log output to the browser console.
///
/// `level` is one of `off`, `error`, `warn`, `info`, `debug`, `trace`.
/// Safe to call more than once; later calls only change the level.
///
/// # Example (TypeScript)
/// ```typescript
/// init_logging("debug"); // show derived tone parameters
/// ```
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    INSTALL.call_once(|| {
        if let Err(e) = console_log::init_with_level(Level::Trace) {
            // The host page installed its own logger; keep using it.
            log::warn!("console logger not installed: {}", e);
        }
    });
    log::set_max_level(parse_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Warn);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_init_logging_twice_only_changes_level() {
        init_logging("debug");
        assert_eq!(log::max_level(), LevelFilter::Debug);
        init_logging("error");
        assert_eq!(log::max_level(), LevelFilter::Error);
    }
}
