//! Move execution via copy-make.

use crate::board::Board;
use crate::cell::Cell;
use crate::movegen::is_legal;
use crate::placement::Move;
use crate::player::Player;

impl Board {
    /// Place `mv` for `player` and return the resulting board.
    ///
    /// The receiver is left untouched. The new board has the covered cells
    /// owned by `player`, the piece marked used, and `player.next()` to move.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not legal for `player`. Search and generation only
    /// ever hand legal moves here, so a failure is a bug in the caller.
    pub fn apply(&self, mv: Move, player: Player) -> Board {
        assert!(
            is_legal(self, mv, player),
            "illegal placement {mv} for player {player}"
        );

        let mut b = self.clone();
        let catalog = self.catalog();
        // Legality above guarantees the piece exists and every covered cell is on the board.
        if let Some(piece) = catalog.piece(player, mv.piece()) {
            for p in piece.placed(mv.rotation(), mv.anchor()) {
                if let Some(idx) = b.index_of(p) {
                    b.set_cell(idx, Cell::Owned(player));
                }
            }
        }
        b.mark_used(player, mv.piece());
        b.set_to_move(player.next());
        b
    }
}
