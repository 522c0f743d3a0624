use std::fmt;

// ── TokenKind ─────────────────────────────────────────────────────────────

/// The closed set of terminal symbols of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Window,
    Layout,
    Flow,
    Grid,
    Panel,
    Button,
    Label,
    TextField,
    Group,
    Radio,
    End,
    // Literals
    String,
    Number,
    // Punctuation
    Comma,
    Colon,
    Semicolon,
    Period,
    OpenParen,
    CloseParen,
    // Sentinel
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Window     => "`window`",
            TokenKind::Layout     => "`layout`",
            TokenKind::Flow       => "`flow`",
            TokenKind::Grid       => "`grid`",
            TokenKind::Panel      => "`panel`",
            TokenKind::Button     => "`button`",
            TokenKind::Label      => "`label`",
            TokenKind::TextField  => "`textfield`",
            TokenKind::Group      => "`group`",
            TokenKind::Radio      => "`radio`",
            TokenKind::End        => "`end`",
            TokenKind::String     => "string literal",
            TokenKind::Number     => "number",
            TokenKind::Comma      => "`,`",
            TokenKind::Colon      => "`:`",
            TokenKind::Semicolon  => "`;`",
            TokenKind::Period     => "`.`",
            TokenKind::OpenParen  => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Eof        => "end of input",
        };
        f.write_str(s)
    }
}

// ── Keywords ──────────────────────────────────────────────────────────────

/// Keyword spellings, matched case-insensitively.
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("window",    TokenKind::Window),
    ("layout",    TokenKind::Layout),
    ("flow",      TokenKind::Flow),
    ("grid",      TokenKind::Grid),
    ("panel",     TokenKind::Panel),
    ("button",    TokenKind::Button),
    ("label",     TokenKind::Label),
    ("textfield", TokenKind::TextField),
    ("group",     TokenKind::Group),
    ("radio",     TokenKind::Radio),
    ("end",       TokenKind::End),
];

/// Look up a bare word in the keyword table, ignoring ASCII case.
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(kw, _)| kw.eq_ignore_ascii_case(word))
        .map(|&(_, kind)| kind)
}

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Keyword(TokenKind),
    /// Content between the quotes, verbatim.
    Str(String),
    Number(f64),
    Comma,
    Colon,
    Semicolon,
    Period,
    OpenParen,
    CloseParen,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(k)  => *k,
            Token::Str(_)      => TokenKind::String,
            Token::Number(_)   => TokenKind::Number,
            Token::Comma       => TokenKind::Comma,
            Token::Colon       => TokenKind::Colon,
            Token::Semicolon   => TokenKind::Semicolon,
            Token::Period      => TokenKind::Period,
            Token::OpenParen   => TokenKind::OpenParen,
            Token::CloseParen  => TokenKind::CloseParen,
            Token::Eof         => TokenKind::Eof,
        }
    }
}

// ── Lexeme ────────────────────────────────────────────────────────────────

/// One classified unit of input together with where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    /// 1-based source line.
    pub line: usize,
    /// 1-based source column.
    pub col: usize,
}

impl Lexeme {
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    /// The payload of a STRING lexeme; `None` for every other kind.
    pub fn as_str(&self) -> Option<&str> {
        match &self.token {
            Token::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The payload of a NUMBER lexeme; `None` for every other kind.
    pub fn as_number(&self) -> Option<f64> {
        match self.token {
            Token::Number(n) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_ignores_case() {
        assert_eq!(keyword("window"), Some(TokenKind::Window));
        assert_eq!(keyword("WiNdOw"), Some(TokenKind::Window));
        assert_eq!(keyword("TEXTFIELD"), Some(TokenKind::TextField));
        assert_eq!(keyword("windo"), None);
        assert_eq!(keyword("textfields"), None);
    }

    #[test]
    fn payload_accessors_are_guarded() {
        let s = Lexeme { token: Token::Str("OK".into()), line: 1, col: 1 };
        let n = Lexeme { token: Token::Number(4.5), line: 1, col: 1 };
        assert_eq!(s.as_str(), Some("OK"));
        assert_eq!(s.as_number(), None);
        assert_eq!(n.as_number(), Some(4.5));
        assert_eq!(n.as_str(), None);
    }

    #[test]
    fn keyword_token_reports_its_kind() {
        assert_eq!(Token::Keyword(TokenKind::Grid).kind(), TokenKind::Grid);
        assert_eq!(Token::Str(String::new()).kind(), TokenKind::String);
    }
}
