pub mod address;
pub mod format;
