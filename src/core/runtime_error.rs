//! Panic interception
//!
//! Runtime failures that would otherwise only reach the terminal are
//! recorded in the `errors` file logger.

use super::log_level::LogLevel;
use crate::backends::FileLoggers;
use std::panic::{self, PanicHookInfo};
use std::sync::{Arc, OnceLock};

/// File logger receiving intercepted panics
pub const ERRORS_FILE_LOGGER: &str = "errors";

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

// The hook that was active before the first override. Every override wraps
// this one, so repeated calls replace the interceptor instead of stacking it.
static ORIGINAL_HOOK: OnceLock<Arc<PanicHook>> = OnceLock::new();

fn original_hook() -> Arc<PanicHook> {
    Arc::clone(ORIGINAL_HOOK.get_or_init(|| Arc::new(panic::take_hook())))
}

/// Install the process-wide panic hook
///
/// With `discard == false` each panic is logged at error level to the
/// `errors` file logger of `loggers` before the original hook runs. With
/// `discard == true` panic reports are dropped entirely.
pub fn override_runtime_error_handler(discard: bool, loggers: &FileLoggers) {
    let original = original_hook();

    if discard {
        panic::set_hook(Box::new(|_| {}));
        return;
    }

    let errors = loggers.get(ERRORS_FILE_LOGGER);
    panic::set_hook(Box::new(move |info| {
        errors.log(LogLevel::Error, format!("Runtime error occurred: {}", info));
        let _ = errors.flush();
        (original.as_ref())(info);
    }));
}
