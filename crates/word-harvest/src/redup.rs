//! Reduplication test for candidate words

/// Root fragment lengths tried, shortest first
const FRAGMENT_LENGTHS: [usize; 2] = [2, 3];

/// Is `word` built from a repeated root fragment?
///
/// For a fragment length `L` of 2 or 3, with `part` the first `L`
/// characters, the word qualifies if it is `part + part + "S"` or
/// `part + part + part`.
///
/// The triple form is 6 or 9 characters long, so it never matches a
/// seven-letter word. It is kept as-is: the harvested word lists were
/// produced with exactly this rule.
pub fn is_reduplicated(word: &str) -> bool {
    FRAGMENT_LENGTHS.iter().any(|&len| {
        // a word no longer than the fragment can't contain it twice
        let Some((end, _)) = word.char_indices().nth(len) else {
            return false;
        };
        let part = &word[..end];

        let doubled_plural = format!("{part}{part}S");
        let tripled = part.repeat(3);
        word == doubled_plural || word == tripled
    })
}
