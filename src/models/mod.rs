pub mod block;
pub mod line;

pub use block::*;
pub use line::*;
