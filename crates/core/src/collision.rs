//! Collision detection - walls, floor, and locked blocks

use crate::board::Board;
use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Does `shape` with its top-left corner at (x, y) hit anything?
///
/// A mino collides when its column is outside `0..BOARD_WIDTH`, its row is at
/// or below `BOARD_HEIGHT`, or it sits on a filled board cell. Minos above the
/// top edge (negative row) only get the column check.
pub fn collides(board: &Board, x: i8, y: i8, shape: &Shape) -> bool {
    shape.minos().iter().any(|&(dx, dy)| {
        let col = x as i16 + dx as i16;
        let row = y as i16 + dy as i16;

        if col < 0 || col >= BOARD_WIDTH as i16 || row >= BOARD_HEIGHT as i16 {
            return true;
        }
        row >= 0 && board.is_occupied(col as i8, row as i8)
    })
}

/// can we place here? (just !collides)
pub fn fits(board: &Board, x: i8, y: i8, shape: &Shape) -> bool {
    !collides(board, x, y, shape)
}
