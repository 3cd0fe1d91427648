//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     hive-posts-to-md                                  ║
║     Hive & Steemit blog posts to Markdown             ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    author: &str,
    platform: &str,
    node: &str,
    dates: &str,
    output_dir: &str,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Author: {}", author);
    println!("  Platform: {} ({})", platform, node);
    println!("  Dates: {}", dates);
    println!("  Directory: {}", output_dir);
    println!();
}
