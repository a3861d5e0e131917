//! File logging example
//!
//! Mirrors console output of the process-wide logger to `<log_dir>/default.log`
//! and records panics in `<log_dir>/errors.log`.
//!
//! Run with: cargo run --example file_logging

use termlog::prelude::*;

fn main() -> Result<()> {
    let config = LoggerConfig::from_env()?.with_log_dir("demo-logs");
    let registry = termlog::init(config)?;

    enable_file_logging();

    let logger = get_instance();
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warn("Using default settings for some options");
    write_colored("Raw colored output is mirrored without escapes\n", "cyan+b");

    let result = std::panic::catch_unwind(|| {
        panic!("Simulated crash in a worker");
    });
    if result.is_err() {
        logger.fail("Worker crashed, see errors.log");
    }

    logger.flush()?;

    println!(
        "\nCheck '{}' for the log files",
        registry.file_loggers().log_dir().display()
    );
    Ok(())
}
