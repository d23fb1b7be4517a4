pub mod algorithms;
pub mod error;
pub mod ordering;
pub mod random;
pub mod strings;

mod kitchen_sink;
pub use kitchen_sink::*;

pub use algorithms::{BatchExt, SliceExt};
pub use error::{Error, Result};
pub use ordering::{Between, RangeExt};
pub use random::RandomSource;
pub use strings::StrExt;
