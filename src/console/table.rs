//! Column-aligned table rendering
//!
//! Tables are printed with a blank line before and after, a bold green header
//! and one line per row. Every cell is written as `" " + cell + "  "` followed
//! by enough spaces to reach the column width, so cells are never truncated.
//!
//! ```text
//!
//!  NAME   STATUS
//!  foo    Running
//!  a      Pending
//!
//! ```
//!
//! Rows are not checked against the header: a short row pads only the cells
//! it has, and cells past the last header column are written unpadded.

use super::color::colorize_if;
use crate::core::LogSink;
use parking_lot::{const_mutex, const_rwlock, Mutex, MutexGuard, RwLock};
use std::sync::Arc;

/// Color spec for header cells
pub const HEADER_COLOR: &str = "green+b";

/// Line written instead of rows when a table is empty
pub const NO_ENTRIES: &str = " No entries found\n";

/// Replacement renderer installed with [`set_fake_print_table`]
pub type TableRenderFn = Arc<dyn Fn(&dyn LogSink, &[String], &[Vec<String>]) + Send + Sync>;

static FAKE_PRINT_TABLE: RwLock<Option<TableRenderFn>> = const_rwlock(None);
static FAKE_SCOPE: Mutex<()> = const_mutex(());

/// Keeps a fake renderer installed; dropping it restores [`print_table`]
#[must_use = "the fake renderer is removed as soon as the guard is dropped"]
pub struct FakePrintTableGuard {
    _scope: MutexGuard<'static, ()>,
}

impl Drop for FakePrintTableGuard {
    fn drop(&mut self) {
        *FAKE_PRINT_TABLE.write() = None;
    }
}

/// Replace [`print_table`] process-wide until the returned guard is dropped
///
/// Only one fake can be installed at a time: a second call blocks until the
/// first guard is gone. Removing a fake waits for renders already running.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use termlog::console::table::{print_table, set_fake_print_table};
/// use termlog::{LogLevel, LogSink, Logger};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let recorder = Arc::clone(&seen);
/// let _guard = set_fake_print_table(
///     move |_target: &dyn LogSink, header: &[String], _rows: &[Vec<String>]| {
///         recorder.lock().unwrap().extend_from_slice(header);
///     },
/// );
///
/// let target = Logger::memory(LogLevel::Info);
/// print_table(&*target, &["NAME"], &[["web"]]);
///
/// assert_eq!(*seen.lock().unwrap(), vec!["NAME".to_string()]);
/// assert_eq!(target.as_memory().unwrap().contents(), "");
/// ```
pub fn set_fake_print_table<F>(fake: F) -> FakePrintTableGuard
where
    F: Fn(&dyn LogSink, &[String], &[Vec<String>]) + Send + Sync + 'static,
{
    let scope = FAKE_SCOPE.lock();
    *FAKE_PRINT_TABLE.write() = Some(Arc::new(fake));
    FakePrintTableGuard { _scope: scope }
}

/// Print `header` and `rows` as an aligned table through `target`
///
/// The table is assembled first and handed to `target` in a single write.
/// The header is colored only if `target` has colors turned on.
pub fn print_table<S, R>(target: &dyn LogSink, header: &[S], rows: &[R])
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    write_table(target, header, rows, target.use_colors());
}

/// [`print_table`] with the header coloring decided by the caller
pub fn write_table<S, R>(target: &dyn LogSink, header: &[S], rows: &[R], use_colors: bool)
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    let fake = FAKE_PRINT_TABLE.read_recursive();
    if let Some(fake) = fake.as_ref() {
        let header: Vec<String> = header.iter().map(|cell| cell.as_ref().to_string()).collect();
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|cell| cell.as_ref().to_string()).collect())
            .collect();
        fake(target, &header, &rows);
        return;
    }

    target.write(render_table(header, rows, use_colors).as_bytes());
}

/// Render the table text without writing it anywhere
pub fn render_table<S, R>(header: &[S], rows: &[R], use_colors: bool) -> String
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    let widths = column_widths(header, rows);
    let mut out = String::from("\n");

    for (i, name) in header.iter().enumerate() {
        let name = name.as_ref();
        out.push_str(&colorize_if(&format!(" {}  ", name), HEADER_COLOR, use_colors));
        push_padding(&mut out, widths.get(i).copied(), name);
    }
    out.push('\n');

    if rows.is_empty() {
        out.push_str(NO_ENTRIES);
    }

    for row in rows {
        for (i, cell) in row.as_ref().iter().enumerate() {
            let cell = cell.as_ref();
            out.push(' ');
            out.push_str(cell);
            out.push_str("  ");
            push_padding(&mut out, widths.get(i).copied(), cell);
        }
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Width of each header column: the longest of the header name and every
/// row's cell in that column
///
/// Widths are counted in `char`s, not bytes, so `"über"` is 4 wide.
pub fn column_widths<S, R>(header: &[S], rows: &[R]) -> Vec<usize>
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    let mut widths: Vec<usize> = header.iter().map(|name| cell_len(name.as_ref())).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.as_ref()) {
            *width = (*width).max(cell_len(cell.as_ref()));
        }
    }
    widths
}

fn cell_len(text: &str) -> usize {
    text.chars().count()
}

fn push_padding(out: &mut String, width: Option<usize>, text: &str) {
    let padding = width.unwrap_or(0).saturating_sub(cell_len(text));
    out.extend(std::iter::repeat(' ').take(padding));
}
