//! Headless driver: replays an event script against a cursor session and
//! prints every cursor paint request.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use linecursor::cli::{parse_script, CliArgs};
use linecursor::debug_dump::StateDump;
use linecursor::update::update;
use linecursor::view::{Painter, PixelPoint};
use linecursor::{AppModel, EditorConfig};

/// Painter that writes paint requests to stdout
struct StdoutPainter;

impl Painter for StdoutPainter {
    fn move_cursor(&mut self, at: PixelPoint) {
        println!("cursor {} {}", at.top, at.left);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        println!("{}", if visible { "show" } else { "hide" });
    }
}

fn main() -> Result<()> {
    linecursor::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };

    let text = match &args.text {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => None,
    };

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            source
        }
    };
    let events = parse_script(&script)?;

    let mut model =
        AppModel::new(config, text.as_deref()).context("Invalid reference glyph geometry")?;
    tracing::info!(
        lines = model.grid.line_count(),
        events = events.len(),
        "Replaying script"
    );

    let mut painter = StdoutPainter;
    let started = std::time::Instant::now();
    for event in &events {
        let Some(msg) = event.to_msg(started) else {
            tracing::debug!(?event, "Ignoring event");
            continue;
        };
        if let Some(cmd) = update(&mut model, msg) {
            cmd.apply(&mut painter);
        }
    }

    if args.dump {
        println!("{}", StateDump::from_model(&model).to_json());
    }

    Ok(())
}
