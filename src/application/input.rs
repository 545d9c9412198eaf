//! Parsing of user-entered value lists.

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};

/// Default token separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Split `raw` on `separator` and drop empty tokens.
///
/// Tokens are kept verbatim (no trimming), so `"1, 2"` yields `"1"` and `" 2"`.
/// Fails with [`ApplicationError::EmptyInput`] if no token survives.
pub fn parse_values(raw: &str, separator: char) -> ApplicationResult<Vec<String>> {
    let values: Vec<String> = raw
        .split(separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    debug!("parse_values: {} tokens from {:?}", values.len(), raw);

    if values.is_empty() {
        return Err(ApplicationError::EmptyInput);
    }
    Ok(values)
}
