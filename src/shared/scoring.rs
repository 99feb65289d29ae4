/// Ratio of query length to matched-word length, counted in chars so that
/// non-ASCII names weigh the same as ASCII ones. Approaches 1.0 for
/// near-exact matches and shrinks as the matched word grows.
pub(crate) fn char_weight(needle: &str, matched_word: &str) -> f64 {
    needle.chars().count() as f64 / matched_word.chars().count() as f64
}

/// Isolates the one comma-delimited alternate-name token containing the
/// match, so a short query buried in a long alias list is weighed against
/// that alias alone. `normalized` must be the lowercased form of
/// `alternates` and `needle` must be lowercased.
pub(crate) fn matching_alternate_token(
    alternates: &str,
    normalized: &str,
    needle: &str,
) -> String {
    let Some(match_byte) = normalized.find(needle) else {
        return alternates.to_string();
    };
    let match_start = normalized[..match_byte].chars().count();
    let match_end = match_start + needle.chars().count();

    let chars: Vec<char> = alternates.chars().collect();
    // Lowercasing keeps the char count for gazetteer names; clamp so a
    // degenerate mapping cannot push the span past the raw field.
    let match_start = match_start.min(chars.len());
    let match_end = match_end.min(chars.len());

    let start = token_start(&chars, match_start);
    let end = token_end(&chars, match_end);
    chars[start..end].iter().collect()
}

fn token_start(chars: &[char], match_start: usize) -> usize {
    chars[..match_start]
        .iter()
        .rposition(|&c| c == ',')
        .map(|comma| comma + 1)
        .unwrap_or(0)
}

fn token_end(chars: &[char], match_end: usize) -> usize {
    chars[match_end..]
        .iter()
        .position(|&c| c == ',')
        .map(|comma| match_end + comma)
        .unwrap_or(chars.len())
}

#[test]
fn char_weight_equal_length_is_one() {
    assert_eq!(char_weight("paris", "Paris"), 1.0);
}

#[test]
fn char_weight_partial_query() {
    assert_eq!(char_weight("par", "Paris"), 3.0 / 5.0);
}

#[test]
fn char_weight_counts_chars_not_bytes() {
    // "zürich" is 7 bytes but 6 chars.
    assert_eq!(char_weight("zü", "zürich"), 2.0 / 6.0);
}

#[test]
fn token_middle_of_field() {
    let raw = "Springfield,Springfield Town,New Springfield";
    let token = matching_alternate_token(raw, &raw.to_lowercase(), "field");
    assert_eq!(token, "Springfield");
}

#[test]
fn token_keeps_raw_casing() {
    let raw = "LONDON,Londres";
    let token = matching_alternate_token(raw, &raw.to_lowercase(), "londr");
    assert_eq!(token, "Londres");
}

#[test]
fn token_spanning_spaces() {
    let raw = "Springfield,Springfield Town,New Springfield";
    let token = matching_alternate_token(raw, &raw.to_lowercase(), "town");
    assert_eq!(token, "Springfield Town");
}

#[test]
fn token_at_end_of_field() {
    let raw = "Paris,Lutece";
    let token = matching_alternate_token(raw, &raw.to_lowercase(), "lutece");
    assert_eq!(token, "Lutece");
}

#[test]
fn token_single_entry_field() {
    let raw = "Gotham";
    let token = matching_alternate_token(raw, &raw.to_lowercase(), "gotham");
    assert_eq!(token, "Gotham");
}

#[test]
fn token_first_of_field() {
    let raw = "Edo,Tokio,Tokyo";
    let token = matching_alternate_token(raw, &raw.to_lowercase(), "edo");
    assert_eq!(token, "Edo");
}

#[test]
fn token_with_multibyte_prefix() {
    let raw = "Čakovec,Tschakathurn";
    let token = matching_alternate_token(raw, &raw.to_lowercase(), "tschaka");
    assert_eq!(token, "Tschakathurn");
}
