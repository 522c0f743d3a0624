use std::io::Read;

use crate::config::{CommitMode, ParseOptions};
use crate::error::{Error, SyntaxError};
use crate::lexer::Lexer;
use crate::record::Recorder;
use crate::render::{Gaps, Layout, Renderer};
use crate::token::{Lexeme, Token, TokenKind};

/// Kinds that can begin a `Widget`, in the order they are tried.
const WIDGET_START: [TokenKind; 5] = [
    TokenKind::Button,
    TokenKind::Group,
    TokenKind::Label,
    TokenKind::Panel,
    TokenKind::TextField,
];

// ── Parser ────────────────────────────────────────────────────────────────

/// LL(1) recursive-descent parser that streams a document into a [`Renderer`].
///
/// The parser pulls one lexeme at a time and never backtracks. Each failed
/// lookahead test adds the tested kind to an expected set, which is cleared
/// whenever the parser advances; a syntax error therefore reports everything
/// that would have been accepted at the point of failure.
pub struct Parser<'s, 'r, R: Renderer> {
    lexer: Lexer<'s>,
    renderer: &'r mut R,
    current: Lexeme,
    expected: Vec<TokenKind>,
    depth: usize,
    max_nesting: usize,
}

impl<'s, 'r, R: Renderer> Parser<'s, 'r, R> {
    /// Prime the parser with the first lexeme of `src`.
    pub fn new(src: &'s str, renderer: &'r mut R, options: &ParseOptions) -> Result<Self, Error> {
        let mut lexer = Lexer::new(src);
        let current = lexer.next_lexeme()?;
        Ok(Self {
            lexer,
            renderer,
            current,
            expected: Vec::new(),
            depth: 0,
            max_nesting: options.max_nesting,
        })
    }

    fn check(&mut self, kind: TokenKind) -> bool {
        if self.current.kind() == kind {
            return true;
        }
        if !self.expected.contains(&kind) {
            self.expected.push(kind);
        }
        false
    }

    fn bump(&mut self) -> Result<(), Error> {
        self.current = self.lexer.next_lexeme()?;
        self.expected.clear();
        Ok(())
    }

    fn eat(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.check(kind) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), Error> {
        if self.eat(kind)? {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_string(&mut self) -> Result<String, Error> {
        if let Token::Str(s) = &mut self.current.token {
            let s = std::mem::take(s);
            self.bump()?;
            return Ok(s);
        }
        self.check(TokenKind::String);
        Err(self.unexpected())
    }

    /// Read a NUMBER, truncated toward zero.
    fn expect_number(&mut self) -> Result<i32, Error> {
        if let Token::Number(n) = self.current.token {
            self.bump()?;
            return Ok(n as i32);
        }
        self.check(TokenKind::Number);
        Err(self.unexpected())
    }

    fn unexpected(&self) -> Error {
        SyntaxError {
            line: self.current.line,
            col: self.current.col,
            expected: self.expected.clone(),
            found: self.current.kind(),
        }
        .into()
    }

    // ── Program ───────────────────────────────────────────────────────────

    /// `WINDOW STRING '(' NUMBER ',' NUMBER ')' Layout Widgets END '.'`
    pub fn parse_program(mut self) -> Result<(), Error> {
        self.expect(TokenKind::Window)?;
        let title = self.expect_string()?;
        self.expect(TokenKind::OpenParen)?;
        let width = self.expect_number()?;
        self.expect(TokenKind::Comma)?;
        let height = self.expect_number()?;
        self.expect(TokenKind::CloseParen)?;

        log::debug!("window {title:?} {width}x{height}");
        let window = self.renderer.create_window(&title, width, height);

        self.parse_layout(&window)?;
        self.parse_widgets(&window)?;
        self.expect(TokenKind::End)?;
        // The document ends at `.`; nothing after it is lexed.
        if !self.check(TokenKind::Period) {
            return Err(self.unexpected());
        }

        self.renderer.show(&window);
        Ok(())
    }

    // ── Layout ────────────────────────────────────────────────────────────

    /// `LAYOUT LayoutType ':'`
    fn parse_layout(&mut self, container: &R::Container) -> Result<(), Error> {
        self.expect(TokenKind::Layout)?;
        let layout = self.parse_layout_type()?;
        self.expect(TokenKind::Colon)?;
        log::debug!("layout {layout:?}");
        self.renderer.set_layout(container, &layout);
        Ok(())
    }

    /// `FLOW | GRID '(' NUMBER ',' NUMBER [ ',' NUMBER ',' NUMBER ] ')'`
    fn parse_layout_type(&mut self) -> Result<Layout, Error> {
        if self.eat(TokenKind::Flow)? {
            return Ok(Layout::Flow);
        }
        if !self.eat(TokenKind::Grid)? {
            return Err(self.unexpected());
        }

        self.expect(TokenKind::OpenParen)?;
        let rows = self.expect_number()?;
        self.expect(TokenKind::Comma)?;
        let cols = self.expect_number()?;

        if self.eat(TokenKind::CloseParen)? {
            return Ok(Layout::Grid { rows, cols, gaps: None });
        }
        if !self.eat(TokenKind::Comma)? {
            return Err(self.unexpected());
        }

        let h = self.expect_number()?;
        self.expect(TokenKind::Comma)?;
        let v = self.expect_number()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(Layout::Grid { rows, cols, gaps: Some(Gaps { h, v }) })
    }

    // ── Widgets ───────────────────────────────────────────────────────────

    fn at_widget_start(&mut self) -> bool {
        WIDGET_START.iter().any(|&kind| self.check(kind))
    }

    /// `Widget+`
    fn parse_widgets(&mut self, container: &R::Container) -> Result<(), Error> {
        self.parse_widget(container)?;
        while self.at_widget_start() {
            self.parse_widget(container)?;
        }
        Ok(())
    }

    fn parse_widget(&mut self, container: &R::Container) -> Result<(), Error> {
        let line = self.current.line;

        if self.eat(TokenKind::Button)? {
            let label = self.expect_string()?;
            self.expect(TokenKind::Semicolon)?;
            self.renderer.add_button(container, &label);
        } else if self.eat(TokenKind::Group)? {
            let group = self.renderer.begin_radio_group();
            self.parse_radio_buttons(&group, container)?;
            self.parse_block_end()?;
        } else if self.eat(TokenKind::Label)? {
            let text = self.expect_string()?;
            self.expect(TokenKind::Semicolon)?;
            self.renderer.add_label(container, &text);
        } else if self.eat(TokenKind::Panel)? {
            if self.depth >= self.max_nesting {
                return Err(Error::NestingTooDeep { line, limit: self.max_nesting });
            }
            let panel = self.renderer.begin_panel(container);
            self.depth += 1;
            self.parse_layout(&panel)?;
            self.parse_widgets(&panel)?;
            self.depth -= 1;
            self.parse_block_end()?;
        } else if self.eat(TokenKind::TextField)? {
            let columns = self.expect_number()?;
            self.expect(TokenKind::Semicolon)?;
            self.renderer.add_text_field(container, columns);
        } else {
            return Err(self.unexpected());
        }
        Ok(())
    }

    /// `END ';'` closing a panel or group.
    fn parse_block_end(&mut self) -> Result<(), Error> {
        self.expect(TokenKind::End)?;
        self.expect(TokenKind::Semicolon)
    }

    // ── Radio buttons ─────────────────────────────────────────────────────

    /// `RadioButton+`
    fn parse_radio_buttons(&mut self, group: &R::Group, container: &R::Container) -> Result<(), Error> {
        self.parse_radio_button(group, container)?;
        while self.check(TokenKind::Radio) {
            self.parse_radio_button(group, container)?;
        }
        Ok(())
    }

    /// `RADIO STRING ';'`
    fn parse_radio_button(&mut self, group: &R::Group, container: &R::Container) -> Result<(), Error> {
        self.expect(TokenKind::Radio)?;
        let label = self.expect_string()?;
        self.expect(TokenKind::Semicolon)?;
        self.renderer.add_radio_button(group, container, &label);
        Ok(())
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a `.wdl` source string into `renderer` with default options.
pub fn parse<R: Renderer>(src: &str, renderer: &mut R) -> Result<(), Error> {
    parse_with(src, renderer, &ParseOptions::default())
}

/// Parse a `.wdl` source string into `renderer`.
///
/// With [`CommitMode::Atomic`] the document is first parsed into a
/// [`Recorder`], and `renderer` only sees the calls once parsing succeeded.
pub fn parse_with<R: Renderer>(
    src: &str,
    renderer: &mut R,
    options: &ParseOptions,
) -> Result<(), Error> {
    let result = match options.commit {
        CommitMode::Streaming => {
            Parser::new(src, renderer, options).and_then(Parser::parse_program)
        }
        CommitMode::Atomic => {
            let mut recorder = Recorder::new();
            let parsed = Parser::new(src, &mut recorder, options).and_then(Parser::parse_program);
            parsed.map(|()| recorder.replay(renderer))
        }
    };
    if let Err(e) = &result {
        log::debug!("parse failed: {e}");
    }
    result
}

/// Read all of `reader` and parse it. The reader is released before parsing
/// starts, whatever the outcome.
pub fn parse_reader<Rd: Read, R: Renderer>(
    mut reader: Rd,
    renderer: &mut R,
    options: &ParseOptions,
) -> Result<(), Error> {
    let mut src = String::new();
    let read = reader.read_to_string(&mut src);
    drop(reader);
    read?;
    parse_with(&src, renderer, options)
}
