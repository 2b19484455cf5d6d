use crate::error::CoreError;

/// All document identifiers are MongoDB ObjectIds.
pub type DbId = bson::oid::ObjectId;

/// Parse the string form of a document identifier as it appears at the API
/// boundary (24 hex characters).
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    DbId::parse_str(raw).map_err(|_| CoreError::InvalidId(raw.to_string()))
}
