use colored::Colorize;
use std::fmt;

/// Print an informational message.
pub fn info(message: impl fmt::Display) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a success message.
pub fn success(message: impl fmt::Display) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print a warning message.
pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print an error message.
pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a section header.
pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}
