use crate::transport::TransportError;

/// Lookup failure. `Display` is the fixed message shown to the user;
/// the fields keep the detail for logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("网络异常，请检查网络连接。")]
    Network(#[source] TransportError),

    #[error("请求过于频繁，请稍后再试。")]
    RateLimited,

    #[error("服务器错误，请稍后重试。")]
    Server { status: u16 },

    #[error("数据解析失败。")]
    Decode(#[source] serde_json::Error),

    #[error("未知错误。")]
    Unknown { status: u16 },

    /// Rejected locally by the request throttle
    #[error("操作过于频繁，请稍后再试。")]
    Throttled,
}

impl LookupError {
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Network(_) => "network",
            LookupError::RateLimited => "rate_limited",
            LookupError::Server { .. } => "server",
            LookupError::Decode(_) => "decode",
            LookupError::Unknown { .. } => "unknown",
            LookupError::Throttled => "throttled",
        }
    }
}
