use crate::error::Span;

/// Characters that terminate a token at parenthesis depth zero.
const DELIMITERS: [char; 6] = [' ', '{', ':', '}', '\n', '='];

/// The doc-comment fence.
const DOC_FENCE: &str = "\"\"\"";

/// A completed token and the delimiter that terminated it.
#[derive(Debug)]
pub(crate) struct Dispatch {
    pub token: String,
    pub delimiter: char,
    /// Source bytes of the token (zero-length at the delimiter when the
    /// token is empty).
    pub token_span: Span,
    /// Source bytes of the delimiter character.
    pub delimiter_span: Span,
}

/// Outcome of feeding one character to the scanner.
pub(crate) enum Step {
    /// The character was buffered or discarded.
    Consumed,
    /// A delimiter at depth zero completed a token.
    Dispatch(Dispatch),
}

/// Character-level token accumulator.
///
/// Buffers characters into the current token, discarding `#` line comments
/// and `"""`-fenced doc comments. A parenthesized argument list is absorbed
/// into the surrounding token, so delimiters inside `(...)` never reach the
/// state machine. The fence toggle fires only when the buffer is exactly
/// `"""`, so a fence glued to other text does not close a doc comment.
#[derive(Debug, Default)]
pub(crate) struct Scanner {
    buffer: String,
    line_comment: bool,
    doc_comment: bool,
    paren_depth: i32,
    offset: usize,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards everything up to and including the next newline.
    pub fn skip_rest_of_line(&mut self) {
        self.line_comment = true;
    }

    /// Feeds one character, returning a dispatch when a token completes.
    pub fn advance(&mut self, ch: char) -> Step {
        let at = self.offset;
        self.offset += ch.len_utf8();

        // Carriage returns are invisible, so CRLF input scans like LF.
        if ch == '\r' {
            return Step::Consumed;
        }

        if ch == '\n' {
            self.line_comment = false;
        } else if ch == '#' {
            self.line_comment = true;
        }
        if self.line_comment {
            return Step::Consumed;
        }

        if self.paren_depth > 0 || !DELIMITERS.contains(&ch) {
            self.buffer.push(ch);
            match ch {
                '(' => self.paren_depth += 1,
                ')' => self.paren_depth -= 1,
                _ => {}
            }
            if self.buffer == DOC_FENCE {
                self.doc_comment = !self.doc_comment;
                self.buffer.clear();
            }
            return Step::Consumed;
        }

        if self.doc_comment {
            self.buffer.clear();
            return Step::Consumed;
        }

        let token = std::mem::take(&mut self.buffer);
        Step::Dispatch(Dispatch {
            token_span: Span::new(at - token.len(), at),
            delimiter_span: Span::new(at, self.offset),
            token,
            delimiter: ch,
        })
    }
}
