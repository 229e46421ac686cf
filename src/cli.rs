//! Command-line arguments and event scripts for the headless driver
//!
//! Supports:
//! - Loading an initial buffer from a text file
//! - Replaying an event script (clicks, keys, blink ticks)
//! - Dumping the final state as JSON

use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::input::EditorKey;
use crate::messages::{CursorMsg, Msg, UiMsg};
use crate::view::geometry::PixelPoint;

/// Headless cursor navigation driver
#[derive(Parser, Debug)]
#[command(
    name = "linecursor",
    version,
    about = "Replay cursor navigation over a line grid"
)]
pub struct CliArgs {
    /// Initial buffer contents (one grid line per text line)
    #[arg(long, value_name = "FILE")]
    pub text: Option<PathBuf>,

    /// Event script to replay; reads stdin when omitted
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Config file (defaults to ~/.config/linecursor/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a JSON dump of the final state
    #[arg(long)]
    pub dump: bool,
}

/// One line of an event script
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    /// `click <x> <y>`
    Click(PixelPoint),
    /// `key <name>`; unknown key names are kept and ignored on replay
    Key(String),
    /// `tick <ms>`: blink clock at `ms` after the script started
    Tick(u64),
}

impl ScriptEvent {
    /// Message for this event, if the core reacts to it
    pub fn to_msg(&self, started: Instant) -> Option<Msg> {
        match self {
            ScriptEvent::Click(point) => Some(Msg::Cursor(CursorMsg::ClickAt(*point))),
            ScriptEvent::Key(name) => EditorKey::from_name(name).map(EditorKey::to_msg),
            ScriptEvent::Tick(ms) => Some(Msg::Ui(UiMsg::BlinkTick(
                started + Duration::from_millis(*ms),
            ))),
        }
    }
}

/// Malformed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number in the script
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "script line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Parse an event script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let error = |message: String| ScriptError {
            line: i + 1,
            message,
        };

        let parts: Vec<&str> = content.split_whitespace().collect();
        let event = match parts.as_slice() {
            ["click", x, y] => {
                let x: f32 = x
                    .parse()
                    .map_err(|_| error(format!("invalid x coordinate '{}'", x)))?;
                let y: f32 = y
                    .parse()
                    .map_err(|_| error(format!("invalid y coordinate '{}'", y)))?;
                ScriptEvent::Click(PixelPoint::new(y, x))
            }
            ["key", name] => ScriptEvent::Key(name.to_string()),
            ["tick", ms] => ScriptEvent::Tick(
                ms.parse()
                    .map_err(|_| error(format!("invalid tick '{}'", ms)))?,
            ),
            _ => return Err(error(format!("unrecognized event '{}'", content))),
        };
        events.push(event);
    }

    Ok(events)
}
