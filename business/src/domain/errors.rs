/// Gateway errors for domain layer.
/// Carries the HTTP status as a number so callers never match on message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.status_{status}")]
    Status {
        status: u16,
        detail: Option<String>,
    },
    #[error("gateway.unreachable")]
    Unreachable(String),
    #[error("gateway.unaddressable_id")]
    UnaddressableId(String),
}

impl GatewayError {
    pub fn status(status: u16) -> Self {
        GatewayError::Status {
            status,
            detail: None,
        }
    }
    pub fn unreachable(reason: impl Into<String>) -> Self {
        GatewayError::Unreachable(reason.into())
    }

    /// Status code of the response, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            GatewayError::Unreachable(_) | GatewayError::UnaddressableId(_) => None,
        }
    }
}
