use crate::prelude::*;
use std::{num::ParseIntError, ops::Deref};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelsError {
    #[error("no cup labels given")]
    Empty,
    #[error("'{0}' is not a cup label")]
    Digit(char),
    #[error("invalid cup label: {0}")]
    Number(#[from] ParseIntError),
}

/// Starting cup labels, in clockwise order.
///
/// Parses either a run of single digits (`389125467`) or numbers separated
/// by commas and/or whitespace (`3,8,9,10`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels(Vec<u32>);

impl From<&[u32]> for Labels {
    fn from(labels: &[u32]) -> Self {
        Self(labels.to_vec())
    }
}

impl Deref for Labels {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Labels {
    type Err = LabelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LabelsError::Empty);
        }

        let separated = |c: char| c == ',' || c.is_whitespace();
        let labels = if s.contains(separated) {
            s.split(separated)
                .filter(|part| !part.is_empty())
                .map(str::parse::<u32>)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|c| c.to_digit(10).ok_or(LabelsError::Digit(c)))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self(labels))
    }
}

impl Display for Labels {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|&l| l < 10) {
            write!(f, "{}", self.0.iter().join(""))
        } else {
            write!(f, "{}", self.0.iter().join(","))
        }
    }
}
