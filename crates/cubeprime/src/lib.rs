mod distributor;
mod error;
mod primality;
mod range;
mod search;
mod sieve;

pub use crate::distributor::*;
pub use crate::error::*;
pub use crate::primality::*;
pub use crate::range::*;
pub use crate::search::*;
pub use crate::sieve::*;
