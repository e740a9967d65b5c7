pub mod gather;
pub mod header;
pub mod types;
pub mod writer;

pub use types::{Block, BlockBody, BundleReport};
pub use writer::{save_bundle, write_bundle};
