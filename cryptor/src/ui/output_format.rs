//! Helpers for printing prefixed status messages.

use std::io::{self, Write};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", paint(prefix, entry, theme, enable_colors), msg)
}

pub fn print_info_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_prefixed(writer, "Info:", msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_success_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_prefixed(writer, "Success:", msg, ThemeEntry::Success, theme, enable_colors)
}

pub fn print_warn_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_prefixed(writer, "Warning:", msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_prefixed(writer, "Error:", msg, ThemeEntry::Error, theme, enable_colors)
}
