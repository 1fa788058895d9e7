mod engine;
mod line;

pub use engine::*;
pub use line::*;
