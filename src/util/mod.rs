
/// Helper functions for writing JSON via serde, with optional gzip
pub mod json_io;
