const INGREDIENTS_MARKER: &str = "ingredients";
const INSTRUCTIONS_MARKER: &str = "instructions";

/// Extract the raw ingredient block: the substring between the first
/// case-insensitive "ingredients" and the first "instructions" occurrence,
/// provided instructions comes strictly after. Empty otherwise.
pub(super) fn extract_block(body: &str) -> String {
    let start = find_ignore_ascii_case(body, INGREDIENTS_MARKER);
    let end = find_ignore_ascii_case(body, INSTRUCTIONS_MARKER);

    match (start, end) {
        (Some(s), Some(e)) if e > s => body[s + INGREDIENTS_MARKER.len()..e].to_string(),
        _ => String::new(),
    }
}

/// Tidy a raw ingredient block for display as a list.
///
/// Drops blank lines, a stray "Ingredients" header, the `**` / `:**`
/// leftovers of bold markdown section headers, and the Equipment sub-header;
/// strips a leading `* ` bullet from what remains. The exclusion list was
/// collected from real model output and is reproduced verbatim.
pub(super) fn clean_block(block: &str) -> String {
    block
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.eq_ignore_ascii_case(INGREDIENTS_MARKER)
                && *line != "**"
                && *line != ":**"
                && !starts_with_ignore_ascii_case(line, "equipment")
        })
        .map(|line| line.strip_prefix("* ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn starts_with_ignore_ascii_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
/// The needle is ASCII, so a match can only cover ASCII bytes and the
/// returned offsets always fall on char boundaries.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
