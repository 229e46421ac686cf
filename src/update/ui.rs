//! UI message handlers (cursor blink)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkTick(now) => {
            if model.blink.tick(now) {
                Some(Cmd::SetCursorVisible(model.blink.visible))
            } else {
                None
            }
        }
    }
}
