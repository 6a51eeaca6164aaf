pub fn print_banner() {
    println!("baseband-rs");
}

/// Section header on stdout, framed by `=` rules.
pub fn print_section(title: &str) {
    let rule = "=".repeat(70);
    println!("{}\n{}\n{}", rule, title, rule);
}
