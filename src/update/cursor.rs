//! Cursor message handlers (clicks, arrow keys, Enter)
//!
//! Every user-driven cursor event restarts the blink so the cursor is
//! freshly visible after activity.

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::CursorMsg;
use crate::model::AppModel;
use crate::view::hit_test::PointerEvent;

/// Handle cursor messages
pub fn update_cursor(model: &mut AppModel, msg: CursorMsg) -> Option<Cmd> {
    match msg {
        CursorMsg::Click(event) => click(model, &event),

        CursorMsg::ClickAt(point) => {
            let event = model.layout.pointer_event(&model.grid, point);
            click(model, &event)
        }

        CursorMsg::Move(direction) => {
            if let Err(e) =
                model
                    .cursor
                    .move_directional(&model.grid, model.layout.as_ref(), direction)
            {
                tracing::error!("Cursor move {:?} failed: {}", direction, e);
            }
            model.blink.activate(Instant::now());
            Some(Cmd::show_cursor_at(model.cursor.pixel()))
        }

        CursorMsg::InsertLine => {
            if let Err(e) = model.cursor.insert_line_after_current(&mut model.grid) {
                tracing::error!("Line insertion failed: {}", e);
            }
            model.blink.activate(Instant::now());
            Some(Cmd::show_cursor_at(model.cursor.pixel()))
        }
    }
}

/// Clicks inside the editor place and activate the cursor; clicks anywhere
/// else hide it and stop the blink.
fn click(model: &mut AppModel, event: &PointerEvent) -> Option<Cmd> {
    if !event.target.is_editor() {
        tracing::debug!(hit = ?event.target, "Click outside editor, deactivating cursor");
        model.blink.deactivate();
        return Some(Cmd::SetCursorVisible(false));
    }

    let pixel = model.cursor.resolve_from_pointer(&model.grid, event);
    model.blink.activate(Instant::now());
    Some(Cmd::show_cursor_at(pixel))
}
