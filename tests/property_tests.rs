//! Property-based tests for termlog using proptest

use proptest::prelude::*;
use termlog::console::color::{colorize, strip_ansi};
use termlog::console::table::{column_widths, render_table};
use termlog::prelude::*;

/// Header plus rectangular rows of non-empty, space-free cells
fn table() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    (1usize..5).prop_flat_map(|columns| {
        let cell = "[a-zA-Z0-9_.-]{1,12}";
        (
            prop::collection::vec(cell, columns),
            prop::collection::vec(prop::collection::vec(cell, columns), 0..6),
        )
    })
}

fn level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// Table Rendering Tests
// ============================================================================

proptest! {
    /// Every cell shows up untruncated on its own line
    #[test]
    fn test_cells_are_never_truncated((header, rows) in table()) {
        let rendered = strip_ansi(&render_table(&header, &rows, true));
        let lines: Vec<&str> = rendered.lines().collect();

        for name in &header {
            prop_assert!(lines[1].contains(name.as_str()));
        }
        for (i, row) in rows.iter().enumerate() {
            for cell in row {
                prop_assert!(lines[2 + i].contains(cell.as_str()),
                    "row {} is missing {:?}: {:?}", i, cell, lines[2 + i]);
            }
        }
    }

    /// Column width is the longest cell in the column, header included
    #[test]
    fn test_column_width_is_max_cell((header, rows) in table()) {
        let widths = column_widths(&header, &rows);
        prop_assert_eq!(widths.len(), header.len());

        for (i, width) in widths.iter().enumerate() {
            let expected = rows
                .iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(header[i].len()))
                .max()
                .unwrap();
            prop_assert_eq!(*width, expected);
        }
    }

    /// Padding brings every line to the same width
    #[test]
    fn test_lines_share_width((header, rows) in table()) {
        let widths = column_widths(&header, &rows);
        let expected: usize = widths.iter().map(|w| w + 3).sum();

        let rendered = strip_ansi(&render_table(&header, &rows, true));
        for line in rendered.lines().skip(1).take(1 + rows.len()) {
            if rows.is_empty() && line == " No entries found" {
                continue;
            }
            prop_assert_eq!(line.len(), expected, "line {:?}", line);
        }
    }

    /// Blank line before and after, one line per row, or the empty notice
    #[test]
    fn test_line_structure((header, rows) in table()) {
        let rendered = strip_ansi(&render_table(&header, &rows, true));

        prop_assert!(rendered.starts_with('\n'));
        prop_assert!(rendered.ends_with("\n\n"));

        let body_lines = rendered.lines().count() - 2;
        if rows.is_empty() {
            prop_assert_eq!(body_lines, 2);
            prop_assert!(rendered.contains("No entries found"));
        } else {
            prop_assert_eq!(body_lines, 1 + rows.len());
            prop_assert!(!rendered.contains("No entries found"));
        }
    }
}

// ============================================================================
// Color Tests
// ============================================================================

proptest! {
    /// Coloring never changes the visible text
    #[test]
    fn test_colorize_preserves_text(
        text in "[^\x1b]*",
        spec in prop_oneof![
            Just("cyan+b"),
            Just("green+b"),
            Just("red+h:white"),
            Just("magenta+ui"),
            Just(""),
            Just("unknown"),
        ]
    ) {
        prop_assert_eq!(strip_ansi(&colorize(&text, spec)), text);
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// Messages reach the memory logger exactly when they clear the threshold
    #[test]
    fn test_level_threshold(min in level(), message_level in level(), message in "[a-z ]{1,20}") {
        let logger = Logger::memory(min);
        logger.log(message_level, &message);

        let contents = logger.as_memory().unwrap().contents();
        prop_assert_eq!(contents.contains(message.as_str()), message_level >= min);
    }

    /// A registry pointed at discard leaves no trace, whatever is written
    #[test]
    fn test_discard_registry_leaves_no_trace(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        message in "[a-z ]{1,20}",
    ) {
        let dir = tempfile::TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        let registry = Registry::new(&LoggerConfig::default().with_log_dir(&log_dir));
        registry.set_instance(Logger::discard());

        let logger = registry.get_instance();
        logger.write(&bytes);
        for level in [LogLevel::Trace, LogLevel::Info, LogLevel::Error, LogLevel::Fatal] {
            logger.log(level, &message);
        }
        logger.done(&message);
        logger.fail(&message);
        registry.write_colored(&message, "green+b");
        registry.print_table(&["NAME"], &[[message.as_str()]]);

        prop_assert!(!registry.enable_file_logging());
        prop_assert!(logger.is_discard());
        prop_assert!(!log_dir.exists());
    }

    /// File log lines stay single lines no matter what the message contains
    #[test]
    fn test_file_lines_are_sanitized(legitimate in "[a-zA-Z0-9 ]+", injected in "[A-Z]{3,5}") {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("props.log");
        let logger = FileLogger::new("props", &path, LogLevel::Info);

        logger.log(LogLevel::Info, format!("{}\r\n{}: fake entry\t!", legitimate, injected));
        logger.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        prop_assert_eq!(content.lines().count(), 1);
        prop_assert!(!content.contains('\t'));
    }
}
