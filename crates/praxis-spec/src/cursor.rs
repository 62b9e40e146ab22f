/// Forward line cursor with one-step pushback.
///
/// The parsers in this crate scan line by line; an inner loop often stops on
/// a heading that the outer loop must handle. `unread` hands that line back
/// instead of juggling raw indices.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().collect(),
            pos: 0,
        }
    }

    /// Consume and return the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }

    /// Look at the next line without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Push the most recently consumed line back onto the cursor.
    ///
    /// Calling this at the start of input is a no-op.
    pub fn unread(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// 1-based number of the line `next_line` will return next.
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_peek() {
        let mut cursor = LineCursor::new("one\ntwo\nthree");
        assert_eq!(cursor.peek(), Some("one"));
        assert_eq!(cursor.next_line(), Some("one"));
        assert_eq!(cursor.next_line(), Some("two"));
        assert_eq!(cursor.peek(), Some("three"));
        assert_eq!(cursor.next_line(), Some("three"));
        assert_eq!(cursor.next_line(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_unread_replays_line() {
        let mut cursor = LineCursor::new("## heading\nbody");
        assert_eq!(cursor.next_line(), Some("## heading"));
        cursor.unread();
        assert_eq!(cursor.next_line(), Some("## heading"));
        assert_eq!(cursor.next_line(), Some("body"));
    }

    #[test]
    fn test_unread_at_start_is_noop() {
        let mut cursor = LineCursor::new("only");
        cursor.unread();
        assert_eq!(cursor.next_line(), Some("only"));
    }

    #[test]
    fn test_line_number() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.line_number(), 1);
        cursor.next_line();
        assert_eq!(cursor.line_number(), 2);
    }
}
