//! WDL UI — owned window/widget trees built from `.wdl` documents.
//!
//! [`TreeBuilder`] is a headless [`wdl_lang::Renderer`]: feed it to the
//! parser and it assembles a [`Window`] you can inspect, walk, or hand to a
//! real toolkit later. Printing a `Window` gives back canonical `.wdl`
//! source.
//!
//! # Quick start
//!
//! ```rust
//! use wdl_ui::{parse_window, Widget};
//!
//! let window = parse_window(r#"
//!     window "Test" (100, 100)
//!         layout flow:
//!         button "OK";
//!     end.
//! "#).unwrap();
//!
//! assert_eq!(window.title, "Test");
//! assert_eq!(window.children, vec![Widget::Button { label: "OK".into() }]);
//! ```

pub mod builder;
pub mod document;
pub mod load;
pub mod logging;

pub use builder::TreeBuilder;
pub use document::{Panel, RadioButton, Widget, Window};
pub use load::{load_window, parse_window, parse_window_with};
pub use logging::{LoggingConfig, init_logging};
