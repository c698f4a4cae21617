use colored::Colorize;
use std::io::{self, Write};
use todofile::api::{CmdMessage, MessageLevel};
use todofile::model::Item;

pub(super) const MENU: &[&str] = &["1. Add", "2. Delete", "3. Show All", "4. Clear", "5. Exit"];

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    for entry in MENU {
        writeln!(out, "{}", entry)?;
    }
    prompt(out, "Enter option: ")
}

pub(super) fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_items<W: Write>(out: &mut W, items: &[Item]) -> io::Result<()> {
    writeln!(out, "\n")?;
    for item in items {
        writeln!(out, "{}", item)?;
    }
    writeln!(out, "\n")
}
