//! Token completion for the input field.

/// Suggest a registered token for a partially typed one.
///
/// Does nothing unless `partial` is at least `min_chars` characters long and
/// contains no whitespace. Tokens are tried in the order given and the first
/// one whose leading characters match `partial`, ignoring case, wins. Only
/// the overlapping length is compared, so a token shorter than the input
/// matches when the input starts with it.
pub fn suggest<'a>(
    partial: &str,
    tokens: impl IntoIterator<Item = &'a str>,
    min_chars: usize,
) -> Option<&'a str> {
    let len = partial.chars().count();
    if len < min_chars || partial.chars().any(char::is_whitespace) {
        return None;
    }
    tokens.into_iter().find(|token| {
        let n = token.chars().count().min(len);
        token
            .chars()
            .take(n)
            .flat_map(char::to_lowercase)
            .eq(partial.chars().take(n).flat_map(char::to_lowercase))
    })
}
