// Public modules
pub mod actions;
pub mod config;
pub mod error;
pub mod generator;
pub mod local_files;
pub mod namespace;
pub mod output;
pub mod registry;
pub mod resolver;

// Internal modules - not part of public API
pub(crate) mod paths;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use actions::ActionSet;
pub use error::{Error, ErrorCode, Result};
pub use generator::{GenerateOptions, Generator};
pub use output::{ArtifactOutcome, ArtifactResult, GenerateOutput, GenerateSummary};
pub use resolver::{resolve, Resolution, ResolveRequest};
