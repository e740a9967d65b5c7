pub mod bundle;
pub mod cli;
pub mod config;
pub mod constants;
pub mod tokenizer;

pub use bundle::{save_bundle, write_bundle};
