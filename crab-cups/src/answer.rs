use crate::{
    labels::Labels,
    prelude::*,
    scenario::{play_large, play_small, LARGE_CUPS, LARGE_MOVES, SMALL_MOVES},
};

/// Both parts of the puzzle: the cup order after a short game, and the
/// product next to cup 1 after a long game on a padded ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub moves: usize,
    pub cups: usize,
    pub large_moves: usize,
}

impl Default for Answer {
    fn default() -> Self {
        Self {
            moves: SMALL_MOVES,
            cups: LARGE_CUPS,
            large_moves: LARGE_MOVES,
        }
    }
}

impl Solver for Answer {
    type Input = Labels;
    type Output1 = String;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let s = parse_string(r)?;
        s.parse().with_context(|| "invalid cup labels")
    }

    /// Puzzle input: `54327968`
    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1> {
        Ok(play_small(input, self.moves)?)
    }

    /// Puzzle input: `157410423276`
    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2> {
        Ok(play_large(input, self.cups, self.large_moves)?)
    }
}
