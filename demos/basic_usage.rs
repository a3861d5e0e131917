//! Basic logger usage example
//!
//! Demonstrates the process-wide logger, leveled messages and colored writes.
//!
//! Run with: cargo run --example basic_usage

use termlog::prelude::*;
use termlog::{done, info};

fn main() -> Result<()> {
    termlog::init(LoggerConfig::from_env()?)?;
    print_logo();

    let logger = get_instance();

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message (hidden at debug level)");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.done("This step finished");
    logger.fail("This step failed");

    println!("\n2. Formatting macros:");
    info!(logger, "Connected to {} nodes", 3);
    done!(logger, "Synced {} files in {}ms", 42, 180);

    println!("\n3. Colored writes through the registry:");
    write_colored("Everything is up to date\n", "green+b");

    println!("\n4. Silencing output:");
    set_instance(Logger::discard());
    get_instance().info("Nobody sees this");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
