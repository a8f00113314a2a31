use crate::error::delivery::DeliveryError;

/// Splits a comma-separated identifier list into trimmed, non-empty entries.
///
/// Entries are returned in input order and are not validated.
pub fn parse_user_ids(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a raw Discord user ID.
///
/// # Arguments
/// - `raw` - Trimmed identifier as typed by the invoker
///
/// # Returns
/// - `Ok(u64)` - A non-zero snowflake
/// - `Err(DeliveryError::InvalidId)` - Not a number, or zero
pub fn parse_user_id(raw: &str) -> Result<u64, DeliveryError> {
    match raw.parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(DeliveryError::InvalidId(raw.to_string())),
    }
}
