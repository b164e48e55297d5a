pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while constructing a problem.
///
/// An unsatisfiable problem is *not* an error: exhausting the search space is
/// a normal negative result, reported as `None` from the engine. The variants
/// here all describe malformed problem definitions, caught at construction
/// time rather than surfacing as a confusing empty-domain failure in the
/// middle of a search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("variable {0} is already registered")]
    DuplicateVariable(String),

    #[error("variable {0} is not registered")]
    UnknownVariable(String),

    #[error("variable {0} was declared with an empty domain")]
    EmptyDomain(String),
}
