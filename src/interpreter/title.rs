/// How many leading lines the title heuristic inspects.
const TITLE_SCAN_LINES: usize = 3;

/// Pick and remove a title line from `lines`, returning the cleaned title.
///
/// Heuristic pass: the first of the leading three lines that does not
/// contain "okay" (model preamble like "Okay, here's a recipe...") and
/// either mentions "recipe" or is a markdown heading. Fallback pass: the
/// first non-blank line anywhere. `None` only when every line is blank;
/// the caller then substitutes its fallback title and leaves the lines
/// untouched.
pub(super) fn extract_title(lines: &mut Vec<&str>) -> Option<String> {
    for i in 0..lines.len().min(TITLE_SCAN_LINES) {
        let line = lines[i];
        let lower = line.to_lowercase();
        if lower.contains("okay") {
            continue;
        }
        if lower.contains("recipe") || is_markdown_heading(line) {
            let title = clean_title(line);
            // A bare "# " heading cleans down to nothing; skip it so the
            // non-empty title invariant holds.
            if !title.is_empty() {
                lines.remove(i);
                return Some(title);
            }
        }
    }

    let i = lines.iter().position(|l| !l.trim().is_empty())?;
    let title = lines.remove(i).trim().to_string();
    Some(title)
}

/// One or more leading `#` characters followed by a space.
fn is_markdown_heading(line: &str) -> bool {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    hashes >= 1 && trimmed[hashes..].starts_with(' ')
}

/// Strip heading markers and the first literal " Recipe" suffix word.
fn clean_title(line: &str) -> String {
    line.trim_start_matches(|c| c == '#' || c == ' ')
        .replacen(" Recipe", "", 1)
        .trim()
        .to_string()
}
