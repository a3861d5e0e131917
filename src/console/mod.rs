//! Console output helpers: colors, tables and the banner

pub mod color;
pub mod logo;
pub mod table;

pub use color::{colorize, colorize_if, strip_ansi, ColorSpec};
pub use logo::{print_logo, write_logo};
pub use table::{
    column_widths, print_table, render_table, set_fake_print_table, write_table,
    FakePrintTableGuard, TableRenderFn,
};
