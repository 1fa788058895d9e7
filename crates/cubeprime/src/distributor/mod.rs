mod collection;
mod cursor;
mod mutex;
mod pool;

pub use collection::*;
pub use cursor::*;
pub use pool::*;
/// Stops a running search between claims; see
/// [`WorkDistributor::cancellation`].
pub use tokio_util::sync::CancellationToken;
