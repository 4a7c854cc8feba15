//! The character scanner contract and its in-memory implementation.

use sqlscan_core::chars::is_line_break;

/// A forward character cursor with single-character pushback.
///
/// Exactly one rule borrows the scanner at a time, for the duration of one
/// `evaluate` call. A rule that reads N characters and then declines the
/// match must call [`unread`](CharacterScanner::unread) N times before
/// returning, so the scanner is back at the offset where the rule was
/// invoked. Reads at end of input return `None` without moving the logical
/// position, and keep returning `None` on every subsequent call; such reads
/// still count against the pushback balance.
pub trait CharacterScanner {
    /// Return the next character and advance by one, or `None` at end of
    /// input.
    fn read(&mut self) -> Option<char>;

    /// Move the read position back by exactly one character, cancelling the
    /// most recent `read`.
    fn unread(&mut self);

    /// The zero-based column of the current read position.
    fn column(&self) -> u32;
}

/// A [`CharacterScanner`] over an in-memory string.
pub struct StringScanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    offset: usize,
    /// Reads issued past the end of input and not yet cancelled by `unread`.
    pending_eof_reads: usize,
}

impl StringScanner {
    /// Create a new scanner over the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            offset: 0,
            pending_eof_reads: 0,
        }
    }

    /// The current read position.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset as u32
    }

    /// Whether the scanner has consumed all input.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.offset >= self.text.len()
    }
}

impl CharacterScanner for StringScanner {
    fn read(&mut self) -> Option<char> {
        match self.text.get(self.offset).copied() {
            Some(ch) => {
                self.offset += 1;
                Some(ch)
            }
            None => {
                self.pending_eof_reads += 1;
                None
            }
        }
    }

    fn unread(&mut self) {
        if self.pending_eof_reads > 0 {
            self.pending_eof_reads -= 1;
        } else if self.offset > 0 {
            self.offset -= 1;
        } else {
            debug_assert!(false, "unread with no outstanding read");
        }
    }

    fn column(&self) -> u32 {
        let mut column = 0u32;
        for i in (0..self.offset).rev() {
            if is_line_break(self.text[i]) {
                break;
            }
            column += 1;
        }
        column
    }
}
