use std::fmt;

use colored::Colorize;

/// Plain informational line.
pub fn info(message: impl fmt::Display) {
    println!("{}", message);
}

pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_yellow());
}

pub fn error(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_red());
}

pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}
