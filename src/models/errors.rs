//! Error bodies returned by the service

use thiserror::Error;

use super::enums::{ErrorCodeId, ErrorTargetCode, SeverityLevel};

wire_model! {
    /// Envelope of every non-success response
    pub struct ErrorResult {
        pub error: Option<ErrorInfo> => "error",
    }
}

wire_model! {
    pub struct ErrorInfo {
        pub code: Option<ErrorCodeId> => "code",
        pub message: Option<String> => "message",
        pub target: Option<ErrorTargetCode> => "target",
        pub details: Option<Vec<ErrorDetail>> => "details",
    }
}

wire_model! {
    /// One reason behind an error, usually tied to an input field
    pub struct ErrorDetail {
        pub code: Option<ErrorCodeId> => "code",
        pub number: Option<i32> => "number",
        pub message: Option<String> => "message",
        pub description: Option<String> => "description",
        /// `Client` or `Server`
        pub fault_code: Option<String> => "faultCode",
        pub help_link: Option<String> => "helpLink",
        /// Name of the input field the detail refers to
        pub refers_to: Option<String> => "refersTo",
        pub severity: Option<SeverityLevel> => "severity",
    }
}

/// A service-side failure, for use with `?`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("{code}: {message}")]
    Reported {
        code: ErrorCodeId,
        message: String,
        target: Option<ErrorTargetCode>,
        details: Vec<ErrorDetail>,
    },

    /// The body carried no code this crate knows
    #[error("service error: {message}")]
    Unclassified {
        message: String,
        details: Vec<ErrorDetail>,
    },
}

impl ServiceError {
    pub fn code(&self) -> Option<ErrorCodeId> {
        match self {
            Self::Reported { code, .. } => Some(*code),
            Self::Unclassified { .. } => None,
        }
    }

    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            Self::Reported { details, .. } | Self::Unclassified { details, .. } => details,
        }
    }
}

impl From<ErrorResult> for ServiceError {
    fn from(result: ErrorResult) -> Self {
        let Some(info) = result.error else {
            return Self::Unclassified {
                message: "empty error body".to_string(),
                details: Vec::new(),
            };
        };

        let message = info.message.unwrap_or_else(|| "no message".to_string());
        let details = info.details.unwrap_or_default();
        match info.code {
            Some(code) => Self::Reported {
                code,
                message,
                target: info.target,
                details,
            },
            None => Self::Unclassified { message, details },
        }
    }
}

impl ErrorResult {
    pub fn into_error(self) -> ServiceError {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DecodeConfig, WireModel};

    const NOT_FOUND: &str = r#"{
        "error": {
            "code": "EntityNotFoundError",
            "message": "Document with ID 'ABC' not found",
            "target": "HttpRequest",
            "details": [
                {"code": "EntityNotFoundError", "number": 4, "faultCode": "Client", "severity": "Error"}
            ]
        }
    }"#;

    #[test]
    fn test_reported_error_converts() {
        let result = ErrorResult::from_json(NOT_FOUND).unwrap().into_inner();
        let err = result.into_error();

        assert_eq!(err.code(), Some(ErrorCodeId::EntityNotFoundError));
        assert_eq!(err.details().len(), 1);
        assert_eq!(
            err.to_string(),
            "EntityNotFoundError: Document with ID 'ABC' not found"
        );
    }

    #[test]
    fn test_unknown_code_is_unclassified() {
        let json = r#"{"error": {"code": "BrandNewError", "message": "boom"}}"#;
        let decoded = ErrorResult::from_json_with(json, &DecodeConfig::default()).unwrap();
        assert_eq!(decoded.warnings.len(), 1);

        let err = decoded.into_inner().into_error();
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "service error: boom");
    }

    #[test]
    fn test_empty_body() {
        let err = ServiceError::from(ErrorResult { error: None });
        assert!(matches!(err, ServiceError::Unclassified { .. }));
    }
}
