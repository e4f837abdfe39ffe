//! Outcome notifications on stderr. Stdout stays reserved for command output.

use crate::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    const fn label(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

fn format_line(level: Level, message: &str) -> String {
    format!("{}: {message}", level.label())
}

fn emit(level: Level, message: &str) {
    if ui::prefs().notify {
        eprintln!("{}", format_line(level, message));
    }
}

pub fn success(message: &str) {
    emit(Level::Success, message);
}

pub fn warning(message: &str) {
    emit(Level::Warning, message);
}

pub fn error(message: &str) {
    emit(Level::Error, message);
}
