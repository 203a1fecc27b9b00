/// Returns the substring from the first occurrence of `open` to the last
/// occurrence of `close`, inclusive. This filters out explanatory prose the
/// model wraps around its payload. The scan is greedy and does not balance
/// nested delimiters; a block that turns out not to be valid JSON is the
/// caller's problem (it falls back to line parsing).
pub fn embedded_block(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
