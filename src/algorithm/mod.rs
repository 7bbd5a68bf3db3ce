/// Escape-time evaluation of single coordinates
pub mod escape;
/// Run entry point tying validation, sampling and statistics together
pub mod executor;
/// Grid sampling with optional parallelism
pub mod sampler;
