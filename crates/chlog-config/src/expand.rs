//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `$VAR` and `${VAR}` references in `value`.
///
/// An unset variable is an error that names the configuration `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}
