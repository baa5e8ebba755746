//! Splits raw workflow text into candidate step descriptions.

/// Segments multi-line workflow text into an ordered list of step
/// descriptions.
///
/// Blank lines are dropped. Each remaining line is stripped of a leading
/// ordinal marker (`1.` / `1)`) and a leading bullet marker (`*` / `-`),
/// then trimmed; lines that carried only markers contribute nothing.
/// Text with no usable lines yields an empty list, not an error.
pub fn segment_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_bullet(strip_ordinal(line)).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes a leading `<digits>.` or `<digits>)` marker. Digits not followed
/// by a terminator are content (`2024 review` stays intact).
fn strip_ordinal(line: &str) -> &str {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    let rest = &line[digits..];
    match rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        Some(after) => after.trim_start(),
        None => line,
    }
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['*', '-'])
        .map(str::trim_start)
        .unwrap_or(line)
}
