//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{BenchmarkCase, VariantRegistry};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print case info box
pub fn print_case_info_box(case: &BenchmarkCase) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Case:      {}", case.name());
    let cat_line = format!("Category:  {}", case.category());
    let shape_line = format!("Input:     {} ({:?})", case.shape(), case.input_mode());
    let desc_line = case.description();
    let var_line = format!("Variants:  {}", case.variant_names().join(", "));

    let lines = [
        name_line.as_str(),
        cat_line.as_str(),
        shape_line.as_str(),
        desc_line,
    ];
    let content_width = lines
        .iter()
        .chain(std::iter::once(&var_line.as_str()))
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in lines {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Micro Variant Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available cases
pub fn print_available_cases(registry: &VariantRegistry, category: Option<&str>) {
    println!("Available cases:");
    println!();
    for case in registry
        .cases()
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category() == cat))
    {
        println!(
            "  {:<20} [{}] {} - {}",
            case.name(),
            case.category(),
            case.shape(),
            case.description()
        );
        for variant in registry.resolve(case).into_iter().flatten() {
            println!("      {:<34} {}", variant.name(), variant.description());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer line", 8), "a lon...");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }
}
