use crate::prelude::*;
use std::iter;
use thiserror::Error;

/// Cups picked up by every move.
pub const PICK_UP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Ring(#[from] RingError),
    #[error("ring size is {actual} (expected {expected})")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("label {label} is out of range for {cups} cups")]
    LabelOutOfRange { label: u32, cups: usize },
    #[error("a move needs at least 5 cups, the ring has {0}")]
    TooFewCups(usize),
    #[error("no destination cup for current cup {0}")]
    NoDestination(u32),
    #[error("cup {0} is not in the ring")]
    MissingLabel(u32),
    #[error("cup {0} is not linked into the ring")]
    Unlinked(u32),
}

/// Finds the cup holding a label.
pub trait Locator: Sized {
    fn index(ring: &Ring) -> Self;
    fn locate(&self, ring: &Ring, from: CupId, label: u32) -> Option<CupId>;
}

/// Scans backward from the current cup. O(n) per lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScan;

impl Locator for LinearScan {
    fn index(_ring: &Ring) -> Self {
        Self
    }

    fn locate(&self, ring: &Ring, from: CupId, label: u32) -> Option<CupId> {
        ring.find_backward(from, label)
    }
}

/// Label-indexed table of cup ids, built once per ring.
#[derive(Debug, Clone)]
pub struct LookupTable {
    slots: Vec<Option<CupId>>,
}

impl Locator for LookupTable {
    fn index(ring: &Ring) -> Self {
        let mut slots = vec![None; ring.highest_label() as usize + 1];
        for cup in ring.ids() {
            slots[ring.label(cup) as usize] = Some(cup);
        }
        Self { slots }
    }

    #[inline]
    fn locate(&self, _ring: &Ring, _from: CupId, label: u32) -> Option<CupId> {
        self.slots.get(label as usize).copied().flatten()
    }
}

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub number: usize,
    pub current: u32,
    pub picked: [u32; PICK_UP],
    pub destination: u32,
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {}: current {}, pick up {}, destination {}",
            self.number,
            self.current,
            self.picked.iter().join(", "),
            self.destination
        )
    }
}

/// Label the picked-up cups go after.
///
/// Counts down from `current - 1`, wrapping from 1 to `highest`, skipping
/// any label in `picked`.
#[must_use]
pub fn destination(
    current: u32,
    picked: [u32; PICK_UP],
    highest: u32,
) -> Option<u32> {
    let below = |label: u32| if label > 1 { label - 1 } else { highest };

    iter::successors(Some(below(current)), |&label| Some(below(label)))
        .take(PICK_UP + 1)
        .find(|label| !picked.contains(label))
}

#[derive(Debug, Clone)]
pub struct Game<L> {
    ring: Ring,
    current: CupId,
    highest: u32,
    locator: L,
    moves: usize,
}

impl<L: Locator> Game<L> {
    /// Builds the ring from `labels`, padded to `size` cups when `size` is
    /// larger than the label count.
    pub fn new(labels: &[u32], size: usize) -> Result<Self, GameError> {
        let ring = Ring::new(labels, size)?;
        let current = ring.entry();

        let expected = size.max(labels.len());
        let actual = ring.size(current);
        if actual != expected {
            return Err(GameError::SizeMismatch { expected, actual });
        }

        // distinct labels from 1 can only fill 1..=n when none exceeds n
        let highest = ring.highest_label();
        if highest as usize > actual {
            return Err(GameError::LabelOutOfRange {
                label: highest,
                cups: actual,
            });
        }

        let locator = L::index(&ring);

        Ok(Self {
            ring,
            current,
            highest,
            locator,
            moves: 0,
        })
    }

    pub fn play_move(&mut self) -> Result<Move, GameError> {
        let current = self.ring.label(self.current);
        let three = self
            .ring
            .cut_after(self.current, PICK_UP)
            .ok_or_else(|| GameError::TooFewCups(self.ring.len()))?;

        let mut picked = [0; PICK_UP];
        for (slot, label) in picked.iter_mut().zip(three.labels(&self.ring)) {
            *slot = label;
        }

        let target = destination(current, picked, self.highest).and_then(
            |label| {
                self.locator
                    .locate(&self.ring, self.current, label)
                    .map(|cup| (label, cup))
            },
        );
        let (label, dest) = match target {
            Some(found) => found,
            None => {
                self.ring.insert_after(self.current, three);
                return Err(GameError::NoDestination(current));
            },
        };

        self.ring.insert_after(dest, three);
        self.current = self
            .ring
            .next(self.current)
            .ok_or(GameError::Unlinked(current))?;
        self.moves += 1;

        Ok(Move {
            number: self.moves,
            current,
            picked,
            destination: label,
        })
    }

    pub fn play(&mut self, moves: usize) -> Result<(), GameError> {
        for _ in 0..moves {
            let played = self.play_move()?;
            trace!("{}", played);
        }
        Ok(())
    }

    fn cup_one(&self) -> Result<CupId, GameError> {
        self.locator
            .locate(&self.ring, self.current, 1)
            .ok_or(GameError::MissingLabel(1))
    }

    /// Labels clockwise of cup 1, excluding 1 itself.
    pub fn labels_after_one(&self) -> Result<Vec<u32>, GameError> {
        let one = self.cup_one()?;
        Ok(self.ring.iter_from(one).skip(1).collect())
    }

    pub fn final_order(&self) -> Result<String, GameError> {
        Ok(self.labels_after_one()?.iter().join(""))
    }

    /// Product of the two labels immediately clockwise of cup 1.
    pub fn star_product(&self) -> Result<u64, GameError> {
        let one = self.cup_one()?;
        let first = self.ring.forward(one, 1).ok_or(GameError::Unlinked(1))?;
        let second =
            self.ring.forward(first, 1).ok_or(GameError::Unlinked(1))?;

        Ok(u64::from(self.ring.label(first))
            * u64::from(self.ring.label(second)))
    }

    /// Labels of the cups around cup 1, for diagnostics on large rings.
    pub fn around_one(&self, radius: usize) -> Result<Vec<u32>, GameError> {
        let one = self.cup_one()?;
        let start = self.ring.backward(one, radius).unwrap_or(one);
        Ok(self.ring.iter_from(start).take(2 * radius + 1).collect())
    }
}

impl<L> Game<L> {
    pub const fn ring(&self) -> &Ring {
        &self.ring
    }

    pub const fn current(&self) -> CupId {
        self.current
    }

    pub const fn moves_played(&self) -> usize {
        self.moves
    }
}

impl<L> Display for Game<L> {
    /// The whole ring from the current cup, which is shown in parentheses.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut labels = self.ring.iter_from(self.current);
        if let Some(current) = labels.next() {
            write!(f, "({})", current)?;
        }
        for label in labels {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{EXAMPLE, PUZZLE};

    fn played<L: Locator>(labels: &[u32], size: usize, moves: usize) -> Game<L> {
        let mut game = Game::<L>::new(labels, size).unwrap();
        game.play(moves).unwrap();
        game
    }

    #[test]
    fn first_move_of_example() {
        let mut game = Game::<LinearScan>::new(&EXAMPLE, 0).unwrap();
        assert_eq!(game.to_string(), "(3) 8 9 1 2 5 4 6 7");

        let first = game.play_move().unwrap();
        assert_eq!(first, Move {
            number: 1,
            current: 3,
            picked: [8, 9, 1],
            destination: 2,
        });
        assert_eq!(game.to_string(), "(2) 8 9 1 5 4 6 7 3");
        assert_eq!(
            first.to_string(),
            "move 1: current 3, pick up 8, 9, 1, destination 2"
        );
    }

    #[test]
    fn destination_wraps_around() {
        // move 2 of the example: current 2 picks up 8 9 1, so 1 is skipped
        // and the count wraps to the top
        let mut game = Game::<LinearScan>::new(&EXAMPLE, 0).unwrap();
        game.play_move().unwrap();
        let second = game.play_move().unwrap();
        assert_eq!(second.current, 2);
        assert_eq!(second.picked, [8, 9, 1]);
        assert_eq!(second.destination, 7);
    }

    #[test]
    fn destination_skips_picked_labels() {
        assert_eq!(destination(5, [4, 3, 9], 9), Some(2));
        assert_eq!(destination(1, [2, 3, 4], 9), Some(9));
        assert_eq!(destination(1, [9, 8, 7], 9), Some(6));
        assert_eq!(destination(2, [1, 9, 8], 9), Some(7));
        assert_eq!(destination(2, [1, 3, 2], 3), None);
    }

    /// Highest label below the current one that is still in the ring,
    /// otherwise the highest label left.
    fn remaining_below(current: u32, picked: [u32; 3], highest: u32) -> u32 {
        let left = |l: &u32| !picked.contains(l);
        (1..current)
            .rev()
            .find(left)
            .or_else(|| (1..=highest).rev().find(left))
            .unwrap()
    }

    #[test]
    fn destination_formulations_agree() {
        let highest = 9;
        for current in 1..=highest {
            let others = (1..=highest).filter(|&l| l != current);
            for picks in others.permutations(3) {
                let picked = [picks[0], picks[1], picks[2]];
                let dest = destination(current, picked, highest).unwrap();
                assert!(!picked.contains(&dest));
                assert_ne!(dest, current);
                assert_eq!(dest, remaining_below(current, picked, highest));
            }
        }
    }

    #[test]
    fn example_final_orders() {
        let ten = played::<LinearScan>(&EXAMPLE, 0, 10);
        assert_eq!(ten.final_order().unwrap(), "92658374");
        assert_eq!(ten.moves_played(), 10);

        let hundred = played::<LinearScan>(&EXAMPLE, 0, 100);
        assert_eq!(hundred.final_order().unwrap(), "67384529");
        assert_eq!(
            hundred.labels_after_one().unwrap(),
            vec![6, 7, 3, 8, 4, 5, 2, 9]
        );
        assert!(hundred.ring().is_consistent());
    }

    #[test]
    fn puzzle_final_order() {
        let game = played::<LinearScan>(&PUZZLE, 0, 100);
        assert_eq!(game.final_order().unwrap(), "54327968");
    }

    #[test]
    fn strategies_play_the_same_game() {
        let mut scan = Game::<LinearScan>::new(&PUZZLE, 50).unwrap();
        let mut table = Game::<LookupTable>::new(&PUZZLE, 50).unwrap();
        for _ in 0..500 {
            assert_eq!(scan.play_move().unwrap(), table.play_move().unwrap());
        }
        assert_eq!(scan.ring(), table.ring());
        assert_eq!(scan.current(), table.current());
        assert_eq!(scan.star_product().unwrap(), table.star_product().unwrap());
    }

    #[test]
    fn moves_keep_ring_whole() {
        let game = played::<LookupTable>(&EXAMPLE, 100, 1_000);
        assert!(game.ring().is_consistent());
        assert_eq!(game.ring().size(game.current()), 100);
    }

    #[test]
    fn star_product_and_neighbourhood() {
        let game = Game::<LookupTable>::new(&EXAMPLE, 0).unwrap();
        assert_eq!(game.star_product().unwrap(), 2 * 5);
        assert_eq!(game.around_one(1).unwrap(), vec![9, 1, 2]);
    }

    #[test]
    fn too_few_cups_leaves_ring_untouched() {
        let mut game = Game::<LinearScan>::new(&[2, 1, 4, 3], 0).unwrap();
        assert_eq!(game.play_move(), Err(GameError::TooFewCups(4)));
        assert!(game.ring().is_consistent());
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn labels_must_fill_the_ring() {
        // 4 is missing, so cup 5 would find nothing below it
        assert_eq!(
            Game::<LookupTable>::new(&[5, 1, 2, 3, 6], 0).unwrap_err(),
            GameError::LabelOutOfRange { label: 6, cups: 5 }
        );
        assert_eq!(
            Game::<LookupTable>::new(&[4_000_000_000, 1, 2, 3, 4], 0)
                .unwrap_err(),
            GameError::LabelOutOfRange {
                label: 4_000_000_000,
                cups: 5,
            }
        );
        assert!(Game::<LinearScan>::new(&[2, 3, 4, 5, 6], 0).is_err());
        assert!(Game::<LookupTable>::new(&[5, 1, 2, 3, 4], 0).is_ok());
    }

    #[test]
    fn errors_from_construction() {
        assert_eq!(
            Game::<LinearScan>::new(&[], 0).unwrap_err(),
            GameError::Ring(RingError::Empty)
        );
        assert!(Game::<LookupTable>::new(&[1, 1], 0).is_err());
    }

    #[test]
    fn puzzle_at_scale() {
        let game = played::<LookupTable>(&PUZZLE, 1_000_000, 10_000_000);
        assert_eq!(game.star_product().unwrap(), 157_410_423_276);
    }
}
