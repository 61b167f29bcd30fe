pub mod catalog;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod ui;
pub mod utils;

pub use catalog::{Catalog, FileRecord, FileType, FolderSelection};
pub use error::{Result, VaultError};
