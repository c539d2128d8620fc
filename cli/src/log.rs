use colored::Colorize;

/// Bold banner shown once before talking to the node.
pub fn print_title(text: &str) {
    println!("{}", format!("\n{}", text).bold());
}

/// Blank line between the status lines and the block cards.
pub fn print_divider() {
    println!();
}

/// Yellow heading above the rendered blocks.
pub fn print_section_header(text: &str) {
    println!("{}", format!("\n=== {} ===", text).yellow().bold());
}

/// Status line: node address, how the walk ended.
pub fn print_message(text: &str) {
    println!("{}", format!("→ {}", text).cyan());
}

/// Summary line with the number of blocks shown.
pub fn print_count(text: &str) {
    println!("{}", format!("⟐ {}", text).blue());
}

// Goes to stderr so `--json` output on stdout stays parseable.
pub fn print_error(text: &str) {
    eprintln!("{}", format!("✗ {}", text).red());
}
