//! Local preview of the OLED text log.

use heapless::Deque;

/// Lines the OLED shows at once.
pub const OLED_LINES: usize = 8;

/// Rolling buffer mirroring what was sent to the OLED.
///
/// Always holds exactly [`OLED_LINES`] lines; pushing drops the oldest.
#[derive(Debug, Clone)]
pub struct OledPreview {
    lines: Deque<String, OLED_LINES>,
}

impl Default for OledPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl OledPreview {
    pub fn new() -> Self {
        let mut lines = Deque::new();
        while lines.push_back(String::new()).is_ok() {}
        Self { lines }
    }

    /// Append a line, trimmed. Blank input is ignored.
    ///
    /// Returns the stored line, if any.
    pub fn push(&mut self, text: &str) -> Option<&str> {
        let line = text.trim();
        if line.is_empty() {
            return None;
        }
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        // A slot was just freed.
        let _ = self.lines.push_back(line.to_owned());
        self.lines.back().map(String::as_str)
    }

    /// Lines from oldest to newest.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn newest(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }
}
