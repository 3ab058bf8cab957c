/// Non-empty after trimming, and every remaining character within printable
/// ASCII plus CR/LF.
pub fn is_printable_text(content: &str) -> bool {
    let trimmed = content.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| matches!(c, ' '..='~' | '\r' | '\n'))
}
