//! # Story Catalog
//!
//! Browse every widget story interactively:
//! - PageUp / PageDown (or Ctrl+P / Ctrl+N) switch stories
//! - Tab / Shift+Tab move focus inside a story
//! - The actions panel shows what the focused widget reported
//!
//! Set `TACTILE_LOG_FILE` to write logs (filtered by `TACTILE_LOG`) and
//! `TACTILE_COLOR_MODE=ansi` to force the 16-color palette.
//!
//! Run with: `cargo run --example catalog`

use std::path::PathBuf;

use tactile::catalog::Catalog;
use tactile::widgets::Theme;
use tactile::ProgramOptions;

#[tactile::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        title: Some("tactile catalog".into()),
        log_file: std::env::var_os("TACTILE_LOG_FILE").map(PathBuf::from),
        ..ProgramOptions::default()
    };
    let catalog = tactile::run_with::<Catalog>(Theme::from_env(), options).await?;
    println!("Last story: {}", tactile::stories::STORIES[catalog.selected()].title());
    Ok(())
}
