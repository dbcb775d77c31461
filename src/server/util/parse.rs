use crate::server::error::{internal::InternalError, AppError};

/// Decodes a club's stored membership list.
///
/// # Arguments
/// - `club_id` - Id of the club the value belongs to, used for error context
/// - `value` - JSON array text as stored in the `member_ids` column
///
/// # Returns
/// - `Ok(Vec<String>)` - Member ids in stored order
/// - `Err(AppError::InternalErr(MalformedMemberIds))` - Column did not hold a JSON
///   array of strings
pub fn parse_member_ids(club_id: &str, value: String) -> Result<Vec<String>, AppError> {
    let member_ids =
        serde_json::from_str(&value).map_err(|e| InternalError::MalformedMemberIds {
            club_id: club_id.to_string(),
            value,
            source: e,
        })?;

    Ok(member_ids)
}

/// Encodes a membership list for the `member_ids` column.
pub fn encode_member_ids(member_ids: &[String]) -> Result<String, AppError> {
    let value = serde_json::to_string(member_ids).map_err(InternalError::EncodeMemberIds)?;

    Ok(value)
}
