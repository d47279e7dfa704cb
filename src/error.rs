use thiserror::Error;

/// Crate-wide error type.
///
/// Every variant maps to a process exit code so the `sgs` binary can report
/// failures the same way regardless of where they were raised:
///
/// - `2`: bad arguments, configuration, or local file I/O
/// - `3`: a date or value string from the service could not be parsed
/// - `4`: the remote service could not be reached or answered badly
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    #[error("{0}")]
    Io(String),

    #[error("invalid date '{input}': expected DD/MM/YYYY or MMM/YYYY")]
    InvalidDate { input: String },

    #[error("invalid value '{input}' on {date}: not a number")]
    InvalidValue { input: String, date: String },

    #[error("request for series {code} failed: {msg}")]
    Request { code: u32, msg: String },

    #[error("request for series {code} failed with status {status}: {body}")]
    Status { code: u32, status: u16, body: String },

    #[error("failed to decode response for series {code}: {msg}")]
    Decode { code: u32, msg: String },
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidArg(_) | AppError::Io(_) => 2,
            AppError::InvalidDate { .. } | AppError::InvalidValue { .. } => 3,
            AppError::Request { .. } | AppError::Status { .. } | AppError::Decode { .. } => 4,
        }
    }

    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        AppError::InvalidArg(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        AppError::Io(msg.into())
    }

    pub fn invalid_date(input: impl Into<String>) -> Self {
        AppError::InvalidDate { input: input.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_group_by_failure_kind() {
        assert_eq!(AppError::invalid_arg("x").exit_code(), 2);
        assert_eq!(AppError::io("x").exit_code(), 2);
        assert_eq!(AppError::invalid_date("32/01/2018").exit_code(), 3);
        assert_eq!(
            AppError::Status { code: 12, status: 404, body: String::new() }.exit_code(),
            4
        );
    }

    #[test]
    fn value_error_names_the_offending_input() {
        let err = AppError::InvalidValue {
            input: "abc".to_string(),
            date: "02/01/2018".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value 'abc' on 02/01/2018: not a number");
    }
}
