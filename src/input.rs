//! Keyboard input mapping
//!
//! Only five keys drive the cursor. Everything else is ignored by the core.

use std::fmt;
use std::str::FromStr;

use crate::messages::{CursorMsg, Direction, Msg};

/// Keys the cursor core reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl EditorKey {
    /// Message produced by pressing this key
    pub fn to_msg(self) -> Msg {
        let msg = match self {
            EditorKey::Up => CursorMsg::Move(Direction::Up),
            EditorKey::Down => CursorMsg::Move(Direction::Down),
            EditorKey::Left => CursorMsg::Move(Direction::Left),
            EditorKey::Right => CursorMsg::Move(Direction::Right),
            EditorKey::Enter => CursorMsg::InsertLine,
        };
        Msg::Cursor(msg)
    }

    /// Parse a key name, ignoring keys the core does not handle
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl FromStr for EditorKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "arrowup" => Ok(EditorKey::Up),
            "down" | "arrowdown" => Ok(EditorKey::Down),
            "left" | "arrowleft" => Ok(EditorKey::Left),
            "right" | "arrowright" => Ok(EditorKey::Right),
            "enter" | "return" => Ok(EditorKey::Enter),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EditorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditorKey::Up => "Up",
            EditorKey::Down => "Down",
            EditorKey::Left => "Left",
            EditorKey::Right => "Right",
            EditorKey::Enter => "Enter",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_names() {
        assert_eq!(EditorKey::from_name("ArrowUp"), Some(EditorKey::Up));
        assert_eq!(EditorKey::from_name("down"), Some(EditorKey::Down));
        assert_eq!(EditorKey::from_name(" Left "), Some(EditorKey::Left));
        assert_eq!(EditorKey::from_name("RIGHT"), Some(EditorKey::Right));
        assert_eq!(EditorKey::from_name("Return"), Some(EditorKey::Enter));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(EditorKey::from_name("Tab"), None);
        assert_eq!(EditorKey::from_name("Backspace"), None);
        assert_eq!(EditorKey::from_name(""), None);
    }

    #[test]
    fn test_display_round_trips() {
        for key in [
            EditorKey::Up,
            EditorKey::Down,
            EditorKey::Left,
            EditorKey::Right,
            EditorKey::Enter,
        ] {
            assert_eq!(EditorKey::from_name(&key.to_string()), Some(key));
        }
    }

    #[test]
    fn test_enter_inserts_line() {
        assert!(matches!(
            EditorKey::Enter.to_msg(),
            Msg::Cursor(CursorMsg::InsertLine)
        ));
        assert!(matches!(
            EditorKey::Left.to_msg(),
            Msg::Cursor(CursorMsg::Move(Direction::Left))
        ));
    }
}
