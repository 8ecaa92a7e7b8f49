pub mod stage0_segment;
pub mod stage1_unwrap;
pub mod stage2_reindent;
pub mod stage3_assemble;

pub use stage0_segment::*;
pub use stage1_unwrap::*;
pub use stage2_reindent::*;
pub use stage3_assemble::*;
