use unidecode::unidecode;

/// Turns a cast-file name into the canonical `First Last` form.
///
/// Only names with exactly one `", "` separator are reordered; anything
/// else (single names, suffixed names like `"Davis, Sammy, Jr."`) is kept
/// as written after trimming.
pub fn canonical_actor_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed.split(", ").collect();

    match parts.as_slice() {
        [last, first] => format!("{} {}", first.trim(), last.trim()),
        _ => trimmed.to_string(),
    }
}

/// Lookup key for user-typed names: ASCII, lowercase, single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
