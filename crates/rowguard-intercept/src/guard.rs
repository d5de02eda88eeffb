//! Page-size guard over caller-supplied parameters.

use crate::error::InterceptError;
use rowguard_core::{LimitConfig, QueryParameter};

/// Reject the call when any configured page-size field exceeds the maximum.
///
/// Fields are checked in configuration order and the first violation is the
/// one reported. An absent parameter, a missing field, or a non-numeric
/// value means that check does not apply — nothing to reject.
pub fn check_page_size(
    parameter: Option<&QueryParameter>,
    config: &LimitConfig,
) -> Result<(), InterceptError> {
    let Some(parameter) = parameter else {
        return Ok(());
    };
    for field in &config.page_size_fields {
        let Some(value) = parameter.numeric_field(field) else {
            continue;
        };
        // Negative values cannot exceed the maximum.
        let Ok(requested) = u64::try_from(value) else {
            continue;
        };
        if requested > config.default_limit {
            return Err(InterceptError::LimitExceeded {
                field: Some(field.clone()),
                value: requested,
                max: config.default_limit,
            });
        }
    }
    Ok(())
}
