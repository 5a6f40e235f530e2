//! Configuration types and persistent settings.

pub mod file;

pub use file::FileConfig;
