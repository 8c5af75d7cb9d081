// Adapters layer: concrete implementations for external formats and the filesystem.

pub mod csv_source;
pub mod json_sink;
pub mod storage;
