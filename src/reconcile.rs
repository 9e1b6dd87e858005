/// Strips the part of `edited` that still matches `prefix`.
///
/// Characters are compared from index 0 and the scan stops for good at the
/// first mismatch, so an edit in the middle of the prefix leaves the rest of
/// the prefix in the returned body. Never panics: a value shorter than the
/// prefix yields whatever follows the overlap, possibly nothing.
pub fn trim_prefix<'a>(edited: &'a str, prefix: &str) -> &'a str {
    let overlap: usize = edited
        .chars()
        .zip(prefix.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum();
    edited.get(overlap..).unwrap_or("")
}
