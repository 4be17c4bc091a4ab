use thiserror::Error;

/// Error returned by [`Build::build`](crate::Build::build).
///
/// Builders generated by [`resource!`](crate::resource) never create this
/// error themselves: their scalar fields always build. They only propagate
/// it, unchanged, from a nested builder that rejected its own state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid {kind}: {reason}")]
    Invalid { kind: &'static str, reason: String },
}
