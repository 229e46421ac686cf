//! Adjacency rule for directional moves that land between grid elements
//!
//! Used when a move's candidate pixel hits something inside the editor that
//! is not a column: the gutter, a line's code area past its end, or the
//! buffer area below the last line.

use crate::messages::Direction;
use crate::model::grid::{GridError, GridModel, GridPosition, TokenRef};

/// Token the cursor is attached to.
///
/// The column under the cursor, or the line's last column when the cursor
/// sits after it. An empty line has none.
pub fn anchor_token(grid: &GridModel, at: GridPosition) -> Result<Option<TokenRef>, GridError> {
    let len = grid.column_count(at.line)?;
    Ok(if at.column < len {
        Some(at)
    } else if len > 0 {
        Some(TokenRef::new(at.line, len - 1))
    } else {
        None
    })
}

/// Where a move in `direction` from `at` lands, or `None` for no movement.
///
/// - Right: the next token in document order, at its left edge.
/// - Left: the previous token in document order, at its right edge.
/// - Down: end of the next line, or end of the current line on the last one.
/// - Up: end of the previous line; nothing above the first line.
pub fn resolve(
    grid: &GridModel,
    at: GridPosition,
    direction: Direction,
) -> Result<Option<GridPosition>, GridError> {
    let anchor = anchor_token(grid, at)?;
    let target = match direction {
        Direction::Right => match anchor {
            Some(token) => grid.token_after(token),
            None => grid.first_token_from_line(at.line + 1),
        },
        Direction::Left => {
            let before = match anchor {
                Some(token) => grid.token_before(token),
                None => grid.last_token_before_line(at.line),
            };
            before.map(|token| GridPosition::new(token.line, token.column + 1))
        }
        Direction::Down => {
            let line = if at.line + 1 < grid.line_count() {
                at.line + 1
            } else {
                at.line
            };
            Some(grid.line_end(line)?)
        }
        Direction::Up => match at.line.checked_sub(1) {
            Some(line) => Some(grid.line_end(line)?),
            None => None,
        },
    };

    tracing::debug!(?at, ?direction, ?anchor, ?target, "Adjacency rule");
    Ok(target)
}
