pub mod block;
pub mod record;

pub use block::{Block, BlockRef};
pub use record::{BlockRecord, fields};
