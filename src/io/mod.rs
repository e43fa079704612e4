//! Input/output operations and error handling
//!
//! Everything outside the packing core lives here: the CLI, mask loading
//! and plate export, configuration and its validation, progress display,
//! and the error type.

/// Command-line interface and batch file processing
pub mod cli;
/// Plate constants and runtime configuration
pub mod configuration;
/// Error types for plate generation operations
pub mod error;
/// Mask loading, normalization, and plate export
pub mod image;
/// Progress tracking for batch operations
pub mod progress;
