use crate::error::{LexError, LexErrorKind};
use crate::token::{self, Lexeme, Token};

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Pull-based lexer: each call to [`Lexer::next_lexeme`] classifies one unit
/// of input. Once the input is exhausted every further call yields EOF.
pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    /// Current 1-based line of the read position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Lex the whole input, ending with (and including) the EOF lexeme.
    pub fn tokenize(mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::new();
        loop {
            let lx = self.next_lexeme()?;
            let eof = lx.token == Token::Eof;
            lexemes.push(lx);
            if eof {
                break;
            }
        }
        Ok(lexemes)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            // skip `//` line comments
            if self.src[self.pos..].starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    pub fn next_lexeme(&mut self) -> Result<Lexeme, LexError> {
        self.skip_whitespace_and_comments();

        let (line, col) = (self.line, self.col);
        let token = self.next_token(line, col)?;
        log::trace!("{line}:{col} {token:?}");
        Ok(Lexeme { token, line, col })
    }

    fn next_token(&mut self, line: usize, col: usize) -> Result<Token, LexError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ',' => { self.advance(); Ok(Token::Comma) }
            ':' => { self.advance(); Ok(Token::Colon) }
            ';' => { self.advance(); Ok(Token::Semicolon) }
            '.' => { self.advance(); Ok(Token::Period) }
            '(' => { self.advance(); Ok(Token::OpenParen) }
            ')' => { self.advance(); Ok(Token::CloseParen) }
            '"' => self.lex_string(line, col),
            c if c.is_ascii_digit() => self.lex_number(line, col),
            '-' if matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) => {
                self.lex_number(line, col)
            }
            c if c.is_alphabetic() => self.lex_word(line, col),
            other => Err(LexError::new(LexErrorKind::UnexpectedChar(other), line, col)),
        }
    }

    fn lex_string(&mut self, line: usize, col: usize) -> Result<Token, LexError> {
        self.advance(); // consume opening `"`
        let start = self.pos;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(LexError::new(LexErrorKind::UnterminatedString, line, col));
                }
                Some('"') => break,
                Some(_) => { self.advance(); }
            }
        }
        let content = self.src[start..self.pos].to_string();
        self.advance(); // consume closing `"`
        Ok(Token::Str(content))
    }

    fn lex_number(&mut self, line: usize, col: usize) -> Result<Token, LexError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        // A `.` only belongs to the number when a digit follows it; otherwise
        // it is the terminating period.
        if self.peek() == Some('.') && matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| LexError::new(LexErrorKind::UnknownWord(s.to_string()), line, col))
    }

    fn lex_word(&mut self, line: usize, col: usize) -> Result<Token, LexError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        let word = &self.src[start..self.pos];
        match token::keyword(word) {
            Some(kind) => Ok(Token::Keyword(kind)),
            None => Err(LexError::new(LexErrorKind::UnknownWord(word.to_string()), line, col)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::token::TokenKind;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().unwrap().iter().map(Lexeme::kind).collect()
    }

    #[test]
    fn punctuation_and_keywords() {
        use TokenKind::*;
        assert_eq!(
            kinds(r#"window "T" (1, 2) layout flow: end."#),
            vec![Window, String, OpenParen, Number, Comma, Number, CloseParen,
                 Layout, Flow, Colon, End, Period, Eof]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        use TokenKind::*;
        assert_eq!(kinds("WiNdOw LAYOUT Flow TextField"), vec![Window, Layout, Flow, TextField, Eof]);
    }

    #[test]
    fn string_content_is_verbatim() {
        let lx = Lexer::new(r#""a \n b""#).next_lexeme().unwrap();
        assert_eq!(lx.as_str(), Some(r"a \n b"));
    }

    #[test]
    fn fractional_number() {
        let lx = Lexer::new("12.75").next_lexeme().unwrap();
        assert_eq!(lx.as_number(), Some(12.75));
    }

    #[test]
    fn negative_number() {
        let lx = Lexer::new("-3").next_lexeme().unwrap();
        assert_eq!(lx.as_number(), Some(-3.0));
    }

    #[test]
    fn period_after_number_is_separate() {
        use TokenKind::*;
        assert_eq!(kinds("5."), vec![Number, Period, Eof]);
    }

    #[test]
    fn tracks_lines_and_columns() {
        let lexemes = Lexer::new("window\n  \"T\"\n\n(").tokenize().unwrap();
        let pos: Vec<(usize, usize)> = lexemes.iter().map(|l| (l.line, l.col)).collect();
        assert_eq!(pos, vec![(1, 1), (2, 3), (4, 1), (4, 2)]);
    }

    #[test]
    fn skips_line_comments() {
        use TokenKind::*;
        assert_eq!(kinds("// heading\nbutton // trailing\n;"), vec![Button, Semicolon, Eof]);
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::new("  \n");
        assert_eq!(lexer.next_lexeme().unwrap().kind(), TokenKind::Eof);
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.next_lexeme().unwrap().kind(), TokenKind::Eof);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let err = Lexer::new("\n  windo \"X\"").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnknownWord("windo".into()));
        assert_eq!((err.line, err.col), (2, 3));
    }

    #[test]
    fn unexpected_character() {
        let err = Lexer::new("button {").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('{'));
    }

    #[test]
    fn unterminated_string() {
        let err = Lexer::new("label \"oops\n\";").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!((err.line, err.col), (1, 7));
    }

    #[test]
    fn string_cut_off_by_end_of_input() {
        let err = Lexer::new("label \"oops").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!((err.line, err.col), (1, 7));
    }

    #[test]
    fn lone_minus_is_unexpected() {
        let err = Lexer::new("- 3").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('-'));
    }
}
