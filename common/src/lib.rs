#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod ring;

pub use ring::{Chain, CupId, Ring, RingError};

use fnv::FnvBuildHasher;

pub type HashSet<T> = std::collections::HashSet<T, FnvBuildHasher>;
