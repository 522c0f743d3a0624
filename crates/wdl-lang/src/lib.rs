//! Lexer, grammar engine, and renderer capability for the **Window
//! Description Language** (`.wdl`).
//!
//! A `.wdl` document describes one window: its title and size, a layout, and
//! a list of widgets. The parser validates the document and streams it into
//! any [`Renderer`] as it goes; this crate never touches a UI toolkit itself.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`token`] | `TokenKind`, `Token`, `Lexeme`, keyword table |
//! | [`lexer`] | `Lexer` |
//! | [`error`] | `LexError`, `SyntaxError`, `Error` |
//! | [`render`] | `Renderer` trait, `Layout`, handle ids |
//! | [`record`] | `Recorder`, `RenderCall` |
//! | [`config`] | `ParseOptions`, `CommitMode` |
//! | [`parser`] | `Parser`, `parse` / `parse_with` / `parse_reader` |
//!
//! # Quick start
//!
//! ```rust
//! use wdl_lang::{parse, Recorder, RenderCall};
//!
//! let src = r#"
//!     window "Test" (100, 100)
//!         layout flow:
//!         button "OK";
//!     end.
//! "#;
//!
//! let mut rec = Recorder::new();
//! parse(src, &mut rec).unwrap();
//! assert!(matches!(rec.calls().last(), Some(RenderCall::Show { .. })));
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod record;
pub mod render;
pub mod token;

pub use config::{CommitMode, ParseOptions};
pub use error::{Error, LexError, LexErrorKind, SyntaxError};
pub use parser::{parse, parse_reader, parse_with};
pub use record::{RenderCall, Recorder};
pub use render::{Gaps, GroupId, Layout, NodeId, Renderer};
pub use token::TokenKind;
