/// Longest name the default input field accepts.
pub const DEFAULT_MAX_NAME_CHARS: usize = 10;

/// Why a submitted name did not start a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameRejection {
    /// Nothing but whitespace was submitted; the name must be asked for again.
    #[error("a name is required")]
    Empty,
}

/// Trim `raw` and require something to remain.
pub fn normalize_name(raw: &str) -> Result<&str, NameRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameRejection::Empty);
    }
    Ok(trimmed)
}

/// Single-line name input with a length cap.
///
/// Like a form field with a maximum length, characters past the cap are never accepted;
/// trimming happens afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameField {
    max_chars: usize,
}

impl Default for NameField {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NAME_CHARS)
    }
}

impl NameField {
    /// Field accepting at most `max_chars` characters.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Character cap.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Capture one line of input as a name ready for submission.
    pub fn capture(&self, raw: &str) -> Result<String, NameRejection> {
        let line = raw.lines().next().unwrap_or_default();
        let capped = match line.char_indices().nth(self.max_chars) {
            Some((cut, _)) => &line[..cut],
            None => line,
        };
        normalize_name(capped).map(str::to_owned)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/name.rs"]
mod tests;
