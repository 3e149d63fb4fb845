use crate::{
    game::{Game, GameError, LinearScan, LookupTable},
    prelude::*,
};

/// Demonstration sequence from the puzzle text.
pub const EXAMPLE: [u32; 9] = [3, 8, 9, 1, 2, 5, 4, 6, 7];
pub const PUZZLE: [u32; 9] = [5, 3, 8, 9, 1, 4, 7, 6, 2];

pub const SMALL_MOVES: usize = 100;
pub const LARGE_CUPS: usize = 1_000_000;
pub const LARGE_MOVES: usize = 10_000_000;

/// Plays `moves` moves on exactly `labels` and returns the order of the
/// cups after cup 1.
pub fn play_small(labels: &[u32], moves: usize) -> Result<String, GameError> {
    let mut game = Game::<LinearScan>::new(labels, 0)?;
    info!("{} cups, {} moves", game.ring().len(), moves);
    debug!("cups: {}", game);

    game.play(moves)?;

    debug!("final ({} moves): {}", game.moves_played(), game);
    game.final_order()
}

/// Pads `labels` to `cups` cups, plays `moves` moves and returns the
/// product of the two labels following cup 1.
pub fn play_large(
    labels: &[u32],
    cups: usize,
    moves: usize,
) -> Result<u64, GameError> {
    let mut game = Game::<LookupTable>::new(labels, cups)?;
    info!("{} cups, {} moves", game.ring().len(), moves);

    game.play(moves)?;

    debug!(
        "final ({} moves): current cup {}, around cup 1: {}",
        game.moves_played(),
        game.ring().label(game.current()),
        game.around_one(3)?.iter().join(" ")
    );
    game.star_product()
}
