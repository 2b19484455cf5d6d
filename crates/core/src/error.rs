/// Domain-level failures that do not originate in the document store or
/// an upstream HTTP service.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller supplied an identifier that is not a well-formed ObjectId.
    #[error("Invalid id: {0}")]
    InvalidId(String),
}
