/// Logical source lines: comment stripped at the first `;`, whitespace
/// trimmed, empty results skipped. Line numbers are 1-based positions in
/// the original text.
pub fn logical_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.lines().enumerate().filter_map(|(idx, raw)| {
        let code = match raw.split_once(';') {
            Some((code, _comment)) => code,
            None => raw,
        };
        let code = code.trim();
        (!code.is_empty()).then_some((idx + 1, code))
    })
}
