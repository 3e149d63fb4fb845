use crate::HashSet;
use std::iter;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("a ring needs at least one label")]
    Empty,
    #[error("cup labels start at 1")]
    ZeroLabel,
    #[error("label {0} appears more than once")]
    DuplicateLabel(u32),
    #[error("padding to {0} cups overflows the label range")]
    LabelOverflow(usize),
}

/// Position of a cup inside the ring's arena.
///
/// A cup keeps its id for the whole life of the ring, no matter how often it
/// is cut out and spliced back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CupId(usize);

impl CupId {
    /// Marks the open ends of a [`Chain`].
    const DETACHED: Self = Self(usize::MAX);

    #[inline]
    const fn linked(self) -> Option<Self> {
        if self.0 == usize::MAX {
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cup {
    label: u32,
    prev: CupId,
    next: CupId,
}

/// Circular doubly-linked list of labeled cups, stored as an arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    cups: Vec<Cup>,
    /// Cups currently held out in chains.
    detached: usize,
}

/// An open run of cups cut out of a [`Ring`].
///
/// Not `Clone`: [`Ring::insert_after`] consumes the chain, so each run is
/// spliced back exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct Chain {
    head: CupId,
    tail: CupId,
    len: usize,
}

impl Ring {
    /// Builds a cycle holding `labels` in order.
    ///
    /// When `target_size` is larger than the number of labels the cycle is
    /// padded with `max(labels) + 1`, `max(labels) + 2`, ... until it holds
    /// `target_size` cups. Otherwise the cycle holds exactly `labels`.
    pub fn new(labels: &[u32], target_size: usize) -> Result<Self, RingError> {
        let max = *labels.iter().max().ok_or(RingError::Empty)?;

        let mut seen = HashSet::default();
        for &label in labels {
            if label == 0 {
                return Err(RingError::ZeroLabel);
            }
            if !seen.insert(label) {
                return Err(RingError::DuplicateLabel(label));
            }
        }

        let padding = target_size.saturating_sub(labels.len());
        let total = labels.len() + padding;
        let last = u32::try_from(padding)
            .ok()
            .and_then(|p| max.checked_add(p))
            .ok_or(RingError::LabelOverflow(total))?;

        let cups = labels
            .iter()
            .copied()
            .chain((max..last).map(|l| l + 1))
            .enumerate()
            .map(|(i, label)| Cup {
                label,
                prev: CupId((i + total - 1) % total),
                next: CupId((i + 1) % total),
            })
            .collect();

        Ok(Self { cups, detached: 0 })
    }

    /// The cup holding the first label the ring was built from.
    #[must_use]
    pub const fn entry(&self) -> CupId {
        CupId(0)
    }

    /// Number of cups owned by the ring, linked in or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cups.is_empty()
    }

    /// Number of cups linked into the cycle, leaving out any held in chains.
    #[must_use]
    pub fn live(&self) -> usize {
        self.cups.len() - self.detached
    }

    /// Every cup id, in arena order.
    pub fn ids(&self) -> impl Iterator<Item = CupId> {
        (0..self.cups.len()).map(CupId)
    }

    #[must_use]
    pub fn highest_label(&self) -> u32 {
        self.cups.iter().map(|c| c.label).max().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn label(&self, cup: CupId) -> u32 {
        self.cups[cup.0].label
    }

    /// Successor of `cup`, or `None` at the tail of a chain.
    #[inline]
    #[must_use]
    pub fn next(&self, cup: CupId) -> Option<CupId> {
        self.cups[cup.0].next.linked()
    }

    /// Predecessor of `cup`, or `None` at the head of a chain.
    #[inline]
    #[must_use]
    pub fn prev(&self, cup: CupId) -> Option<CupId> {
        self.cups[cup.0].prev.linked()
    }

    #[must_use]
    pub fn forward(&self, cup: CupId, count: usize) -> Option<CupId> {
        (0..count).try_fold(cup, |c, _| self.next(c))
    }

    #[must_use]
    pub fn backward(&self, cup: CupId, count: usize) -> Option<CupId> {
        (0..count).try_fold(cup, |c, _| self.prev(c))
    }

    /// Counts the cups reachable from `from` by following `next`, stopping
    /// when `from` comes around again or the end of a chain is reached.
    #[must_use]
    pub fn size(&self, from: CupId) -> usize {
        self.walk(from, |c| self.next(c)).count()
    }

    /// Labels in cycle order, starting at `from`, one lap only.
    pub fn iter_from(&self, from: CupId) -> impl Iterator<Item = u32> + '_ {
        self.walk(from, move |c| self.next(c))
            .map(move |c| self.label(c))
    }

    #[must_use]
    pub fn find_forward(&self, start: CupId, label: u32) -> Option<CupId> {
        self.walk(start, |c| self.next(c))
            .find(|&c| self.label(c) == label)
    }

    #[must_use]
    pub fn find_backward(&self, start: CupId, label: u32) -> Option<CupId> {
        self.walk(start, |c| self.prev(c))
            .find(|&c| self.label(c) == label)
    }

    /// Detaches the `count` cups following `cup` and returns them as an open
    /// chain; `cup` is relinked to whatever followed the run.
    ///
    /// Returns `None`, leaving the ring untouched, when `count` is zero or
    /// the cycle does not hold more than `count + 1` linked cups.
    pub fn cut_after(&mut self, cup: CupId, count: usize) -> Option<Chain> {
        if count == 0 || self.live() <= count + 1 {
            return None;
        }

        let head = self.next(cup)?;
        let tail = self.forward(head, count - 1)?;
        let rest = self.next(tail)?;

        self.link(cup, rest);
        self.cups[head.0].prev = CupId::DETACHED;
        self.cups[tail.0].next = CupId::DETACHED;
        self.detached += count;

        Some(Chain {
            head,
            tail,
            len: count,
        })
    }

    /// Splices `chain` back in directly after `cup`, keeping its order.
    pub fn insert_after(&mut self, cup: CupId, chain: Chain) {
        let after = self.cups[cup.0].next;
        self.link(cup, chain.head);
        self.link(chain.tail, after);
        self.detached -= chain.len;
    }

    /// Checks that every cup is linked both ways and that the whole arena
    /// forms a single cycle.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let linked = self.cups.iter().enumerate().all(|(i, cup)| {
            match (cup.next.linked(), cup.prev.linked()) {
                (Some(next), Some(prev)) => {
                    self.cups[next.0].prev.0 == i
                        && self.cups[prev.0].next.0 == i
                },
                _ => false,
            }
        });

        linked && self.size(self.entry()) == self.cups.len()
    }

    #[inline]
    fn link(&mut self, from: CupId, to: CupId) {
        self.cups[from.0].next = to;
        self.cups[to.0].prev = from;
    }

    fn walk<'a, F>(
        &'a self,
        start: CupId,
        step: F,
    ) -> impl Iterator<Item = CupId> + 'a
    where
        F: Fn(CupId) -> Option<CupId> + 'a,
    {
        iter::successors(Some(start), move |&c| {
            step(c).filter(|&n| n != start)
        })
    }
}

impl Chain {
    #[must_use]
    pub const fn head(&self) -> CupId {
        self.head
    }

    #[must_use]
    pub const fn tail(&self) -> CupId {
        self.tail
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn labels<'a>(&self, ring: &'a Ring) -> impl Iterator<Item = u32> + 'a {
        ring.iter_from(self.head).take(self.len)
    }

    #[must_use]
    pub fn contains(&self, ring: &Ring, label: u32) -> bool {
        self.labels(ring).any(|l| l == label)
    }
}
