//! Skipped-input warnings for layout hosts.
//!
//! Layout never fails on odd input; it skips what it cannot use and says so
//! on stderr. A page with a hundred captions naming the same missing color
//! reports it once per document.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Keys already reported since the last [`clear_warnings`].
fn reported() -> &'static Mutex<HashSet<String>> {
    static REPORTED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    REPORTED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Record `key`, returning whether it is new.
fn first_report(key: String) -> bool {
    reported()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key)
}

/// Report skipped input from `component`, once per distinct message.
///
/// # Example
/// ```ignore
/// warn_once("Style", "unknown color 'sepia'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_report(format!("{component}\u{0}{message}")) {
        eprintln!("{YELLOW}[Folio {component}] ⚠ {message}{RESET}");
    }
}

/// Forget every reported warning. Hosts call this before each document.
pub fn clear_warnings() {
    reported()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}
