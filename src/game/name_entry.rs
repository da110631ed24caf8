// Text buffer behind the name-entry screen.

/// Longest name the player can type, in characters
pub const MAX_NAME_LEN: usize = 12;

/// Characters that can show up in a name: no control codes, no invisible
/// or private-use code points, and the only whitespace allowed is a plain
/// space.
pub fn is_printable(c: char) -> bool {
    !c.is_control() && (c == ' ' || !c.is_whitespace()) && !is_invisible(c)
}

/// Format characters (zero-width space, soft hyphen, bidi marks, tags),
/// private-use code points and noncharacters. None of them draw anything.
fn is_invisible(c: char) -> bool {
    let code = c as u32;
    matches!(
        code,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
            // Private use
            | 0xE000..=0xF8FF
            | 0xF0000..=0xFFFFD
            | 0x100000..=0x10FFFD
            // Noncharacters
            | 0xFDD0..=0xFDEF
    ) || code & 0xFFFE == 0xFFFE
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    buffer: String,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing name, dropping anything that couldn't have
    /// been typed in
    pub fn with_name(name: &str) -> Self {
        let mut entry = Self::new();
        entry.push_str(name);
        entry
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_NAME_LEN
    }

    /// Append one character; false when it was rejected
    pub fn push(&mut self, c: char) -> bool {
        if self.is_full() || !is_printable(c) {
            return false;
        }
        self.buffer.push(c);
        true
    }

    /// Append typed text character by character, returning how many made it in
    pub fn push_str(&mut self, text: &str) -> usize {
        text.chars().filter(|&c| self.push(c)).count()
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// The name to store, or `None` while it is blank
    pub fn committed_name(&self) -> Option<String> {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
