//! Context-aware confidence adjustment for pattern matches.
//!
//! A match preceded by a telling word ("call", "ssn", "iban") is more likely
//! real, so its score gets a boost. Matches that are template placeholders
//! are never PII and are dropped.

/// Whether one of `words` appears (case-insensitively, as a whole word) in
/// the `window` characters before `match_start` (a byte offset on a char
/// boundary).
pub fn has_context_word(text: &str, match_start: usize, window: usize, words: &[&str]) -> bool {
    if window == 0 || words.is_empty() {
        return false;
    }
    let before = &text[..match_start];
    let window_start = before
        .char_indices()
        .rev()
        .nth(window - 1)
        .map_or(0, |(i, _)| i);
    let prefix = before[window_start..].to_lowercase();
    // A word cut by the window edge continues before it.
    let cut_word = before[..window_start]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric);
    words.iter().any(|w| contains_word(&prefix, w, cut_word))
}

/// `word` occurs in `haystack` with no letter or digit on either side.
fn contains_word(haystack: &str, word: &str, cut_at_start: bool) -> bool {
    if word.is_empty() {
        return false;
    }
    haystack.match_indices(word).any(|(i, _)| {
        let open = match haystack[..i].chars().next_back() {
            Some(c) => !c.is_alphanumeric(),
            None => !cut_at_start,
        };
        let close = haystack[i + word.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        open && close
    })
}

/// Apply the context boost, capped at 1.0.
pub fn boost(score: f64, amount: f64) -> f64 {
    (score + amount).clamp(0.0, 1.0)
}

/// Detect if a matched string is a template placeholder or a filler value
/// rather than real data.
pub fn looks_like_placeholder(matched_text: &str) -> bool {
    let exact_indicators = ["<", ">", "[", "]", "${", "{{", "}}"];
    if exact_indicators.iter().any(|p| matched_text.contains(p)) {
        return true;
    }

    // Filler numbers such as 000-000-0000 or 5555 5555 5555 5555.
    let mut digits = matched_text.chars().filter(char::is_ascii_digit);
    match digits.next() {
        Some(first) => {
            let mut count = 1;
            for d in digits {
                if d != first {
                    return false;
                }
                count += 1;
            }
            count >= 6
        }
        None => false,
    }
}
