//! Table rendering example
//!
//! Run with: cargo run --example tables

use termlog::prelude::*;

fn main() {
    let logger = get_instance();

    let header = ["NAME", "STATUS", "IMAGE"];
    let rows = vec![
        ["api", "Running", "registry.local/api:1.4.2"],
        ["worker", "Pending", "registry.local/worker:1.4.2"],
        ["db", "Running", "postgres:16"],
    ];
    print_table(&*logger, &header, &rows);

    let empty: Vec<[&str; 3]> = Vec::new();
    print_table(&*logger, &header, &empty);
}
