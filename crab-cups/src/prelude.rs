pub use anyhow::{Context, Result};
pub use itertools::Itertools;
pub use log::{debug, info, trace};

///////////////////////////////////////////////////////////////////////////////
////
//// * workspace
////
///////////////////////////////////////////////////////////////////////////////
pub use common::{CupId, Ring, RingError};
pub use cups_runner::{parse_string, Reader, Solver};

///////////////////////////////////////////////////////////////////////////////
////
//// * stdlib
////
///////////////////////////////////////////////////////////////////////////////
pub use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
