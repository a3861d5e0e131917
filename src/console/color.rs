//! Symbolic color specs
//!
//! A spec has the form `fg[+attrs][:bg[+attrs]]`, for example `"cyan+b"`,
//! `"red+bh"` or `"white:blue"`.
//!
//! | attr | effect          |
//! |------|-----------------|
//! | `b`  | bold            |
//! | `d`  | dimmed          |
//! | `i`  | italic          |
//! | `u`  | underline       |
//! | `B`  | blink           |
//! | `r`  | reversed        |
//! | `s`  | strikethrough   |
//! | `h`  | bright color    |
//!
//! Whether escapes are emitted at all follows `colored`'s own environment
//! handling (`NO_COLOR`, `CLICOLOR_FORCE`, tty detection). Callers holding a
//! color setting of their own go through [`colorize_if`].

use colored::{Color, ColoredString, Colorize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Attributes {
    bold: bool,
    dimmed: bool,
    italic: bool,
    underline: bool,
    blink: bool,
    reversed: bool,
    strikethrough: bool,
    bright: bool,
}

impl Attributes {
    fn parse(attrs: &str) -> Self {
        let mut parsed = Self::default();
        for c in attrs.chars() {
            match c {
                'b' => parsed.bold = true,
                'd' => parsed.dimmed = true,
                'i' => parsed.italic = true,
                'u' => parsed.underline = true,
                'B' => parsed.blink = true,
                'r' => parsed.reversed = true,
                's' => parsed.strikethrough = true,
                'h' => parsed.bright = true,
                _ => {}
            }
        }
        parsed
    }
}

/// Parsed color spec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorSpec {
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Attributes,
}

impl ColorSpec {
    /// Parse a spec. Unknown color names mean "no color"; attributes still apply.
    pub fn parse(spec: &str) -> Self {
        let (fg_part, bg_part) = match spec.split_once(':') {
            Some((fg, bg)) => (fg, Some(bg)),
            None => (spec, None),
        };

        let (fg_name, fg_attrs) = split_attrs(fg_part);
        let attrs = Attributes::parse(fg_attrs);
        let fg = named_color(fg_name).map(|c| if attrs.bright { brighten(c) } else { c });

        let bg = bg_part.and_then(|part| {
            let (bg_name, bg_attrs) = split_attrs(part);
            let bright = Attributes::parse(bg_attrs).bright;
            named_color(bg_name).map(|c| if bright { brighten(c) } else { c })
        });

        Self { fg, bg, attrs }
    }

    pub fn foreground(&self) -> Option<Color> {
        self.fg
    }

    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        let mut out = text.normal();
        if let Some(fg) = self.fg {
            out = out.color(fg);
        }
        if let Some(bg) = self.bg {
            out = out.on_color(bg);
        }

        let attrs = self.attrs;
        if attrs.bold {
            out = out.bold();
        }
        if attrs.dimmed {
            out = out.dimmed();
        }
        if attrs.italic {
            out = out.italic();
        }
        if attrs.underline {
            out = out.underline();
        }
        if attrs.blink {
            out = out.blink();
        }
        if attrs.reversed {
            out = out.reversed();
        }
        if attrs.strikethrough {
            out = out.strikethrough();
        }
        out
    }
}

fn split_attrs(part: &str) -> (&str, &str) {
    part.split_once('+').unwrap_or((part, ""))
}

fn named_color(name: &str) -> Option<Color> {
    match name.trim().to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

fn brighten(color: Color) -> Color {
    match color {
        Color::Black => Color::BrightBlack,
        Color::Red => Color::BrightRed,
        Color::Green => Color::BrightGreen,
        Color::Yellow => Color::BrightYellow,
        Color::Blue => Color::BrightBlue,
        Color::Magenta => Color::BrightMagenta,
        Color::Cyan => Color::BrightCyan,
        Color::White => Color::BrightWhite,
        other => other,
    }
}

/// Wrap `text` in the escapes described by `spec`
///
/// # Examples
///
/// ```
/// use termlog::console::color::{colorize, strip_ansi};
///
/// let painted = colorize("ready", "green+b");
/// assert_eq!(strip_ansi(&painted), "ready");
/// ```
pub fn colorize(text: &str, spec: &str) -> String {
    ColorSpec::parse(spec).paint(text).to_string()
}

/// [`colorize`] when `enabled`, otherwise `text` unchanged
pub fn colorize_if(text: &str, spec: &str, enabled: bool) -> String {
    if enabled {
        colorize(text, spec)
    } else {
        text.to_string()
    }
}

/// Remove ANSI escape sequences (`ESC [ ... final-byte`) from `text`
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte in 0x40..=0x7E
            for next in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&next) {
                    break;
                }
            }
        }
    }
    out
}
