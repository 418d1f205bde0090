//! Example: build a small stylesheet and render it
//!
//! `cargo run --example basic [output.css]`

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use violetear::{Color, Output, StyleSheet, percent, px};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sheet = StyleSheet::new();

    let base = sheet
        .style(&["btn"])
        .display("inline-block")
        .font(12, "bold")
        .padding(px(8.0))
        .handle();
    sheet
        .style(&["btn", "primary"])
        .background(Color::from_hex("#3366ff").unwrap_or(Color::BLACK))
        .color(Color::WHITE);

    sheet
        .media(None, Some(600))
        .redefine(&base)
        .display("block")
        .width(percent(100.0));

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            sheet.render(false, Output::Path(&path))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let css = sheet.to_css()?;
            println!("{css}");
        }
    }

    Ok(())
}
