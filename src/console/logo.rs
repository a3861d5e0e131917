//! Startup banner

use super::color::colorize_if;
use crate::core::registry::colors_enabled;
use std::io::{self, Write};

pub const LOGO_COLOR: &str = "cyan+b";

pub const LOGO: &str = r#"
      _                       _
     | |_ ___ _ __ _ __ ___  | | ___   __ _
     | __/ _ \ '__| '_ ` _ \ | |/ _ \ / _` |
     | ||  __/ |  | | | | | || | (_) | (_| |
      \__\___|_|  |_| |_| |_||_|\___/ \__, |
                                      |___/"#;

/// Write the banner followed by a blank line to `out`, colorized if `use_colors`
pub fn write_logo<W: Write>(out: &mut W, use_colors: bool) -> io::Result<()> {
    let banner = colorize_if(&format!("{}\r\n\r\n", LOGO), LOGO_COLOR, use_colors);
    out.write_all(banner.as_bytes())?;
    out.flush()
}

/// Print the banner straight to stdout, bypassing the logger registry
///
/// Only the registry's color setting is consulted.
pub fn print_logo() {
    let _ = write_logo(&mut io::stdout().lock(), colors_enabled());
}
