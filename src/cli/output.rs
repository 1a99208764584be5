use colored::Colorize;

use super::context;

/// Print a success message.
pub fn success(msg: &str) {
    if !context::quiet() {
        println!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if !context::quiet() {
        println!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if !context::quiet() {
        println!("\n{}", msg.bold());
    }
}

/// Print a plain informational line.
pub fn info(msg: &str) {
    if !context::quiet() {
        println!("{msg}");
    }
}
