//! violetear
//!
//! Programmatic CSS authoring. Build styles from Rust code, group them into
//! media scopes and render the collection as a stylesheet.
//!
//! # Example
//! ```rust
//! use violetear::{StyleSheet, Output};
//!
//! let mut sheet = StyleSheet::new();
//! sheet.style(&["btn"]).display("flex").font(16, "bold");
//! sheet.media(Some(600), None).style(&["btn"]).display("block");
//!
//! let css = sheet.render(false, Output::Buffer).unwrap().unwrap();
//! assert!(css.contains(".btn {\n    display: flex;"));
//! ```

pub mod config;
pub mod media;
mod render;
pub mod selector;
pub mod style;
pub mod stylesheet;
pub mod units;

use std::path::PathBuf;

pub use config::{Clock, FixedClock, RenderOptions, SystemClock};
pub use media::MediaSet;
pub use render::Output;
pub use selector::Selector;
pub use style::{Declaration, DeferredValue, RuleValue, Style, StyleRef};
pub use stylesheet::{Entry, SheetId, StyleId, StyleSheet};
pub use units::{Color, FontSize, LengthUnit, Value, em, percent, pt, px, rem};

/// Stylesheet building and rendering errors
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Value for {property} cannot be rendered")]
    UnrenderableValue { property: String },

    #[error("Selector needs an id or at least one class")]
    EmptySelector,

    #[error("Failed writing {}: {source}", path.display())]
    SinkWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
