use failure::Fail;
use std::time::Duration;

/// Every failure the gateway can hit while serving a request or booting.
#[derive(Debug, Fail)]
pub enum RopeeErr {
    #[fail(display = "read request body failed: {}", _0)]
    IoErr(#[cause] std::io::Error),

    /// Compressed envelope is malformed, empty or truncated
    #[fail(display = "snappy decode failed: {}", _0)]
    FramingErr(String),

    /// Payload decompressed fine but is not the expected message
    #[fail(display = "protobuf decode failed: {}", _0)]
    ProtocolErr(String),

    #[fail(display = "cannot build backend client: {}", _0)]
    ConstructionErr(String),

    /// Backend message is kept verbatim, it is what the caller sees.
    #[fail(display = "{}", _0)]
    BackendErr(String),

    #[fail(display = "backend call timed out after {:?}", _0)]
    TimeoutErr(Duration),

    #[fail(display = "invalid option: {}", _0)]
    OptionErr(String),

    #[fail(display = "internal error: {}", _0)]
    InternalErr(String),
}

impl RopeeErr {
    /// Transport status for this failure. Only caller faults map to 400.
    pub fn status_code(&self) -> u16 {
        match self {
            RopeeErr::FramingErr(_) | RopeeErr::ProtocolErr(_) => 400,
            _ => 500,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            RopeeErr::TimeoutErr(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, RopeeErr>;

impl From<std::io::Error> for RopeeErr {
    fn from(e: std::io::Error) -> Self {
        RopeeErr::IoErr(e)
    }
}

impl From<snap::Error> for RopeeErr {
    fn from(e: snap::Error) -> Self {
        RopeeErr::FramingErr(e.to_string())
    }
}

impl From<protobuf::ProtobufError> for RopeeErr {
    fn from(e: protobuf::ProtobufError) -> Self {
        RopeeErr::ProtocolErr(e.to_string())
    }
}

impl From<serde_json::Error> for RopeeErr {
    fn from(e: serde_json::Error) -> Self {
        RopeeErr::BackendErr(format!("invalid backend payload: {}", e))
    }
}

impl From<serde_yaml::Error> for RopeeErr {
    fn from(e: serde_yaml::Error) -> Self {
        RopeeErr::OptionErr(e.to_string())
    }
}

impl From<regex::Error> for RopeeErr {
    fn from(e: regex::Error) -> Self {
        RopeeErr::BackendErr(format!("invalid regex matcher: {}", e))
    }
}

impl From<std::num::ParseIntError> for RopeeErr {
    fn from(e: std::num::ParseIntError) -> Self {
        RopeeErr::OptionErr(e.to_string())
    }
}

#[cfg(test)]
mod test {
    use crate::RopeeErr;
    use std::time::Duration;

    #[test]
    fn test_status_code() {
        assert_eq!(RopeeErr::FramingErr("x".to_string()).status_code(), 400);
        assert_eq!(RopeeErr::ProtocolErr("x".to_string()).status_code(), 400);
        assert_eq!(RopeeErr::ConstructionErr("x".to_string()).status_code(), 500);
        assert_eq!(RopeeErr::BackendErr("x".to_string()).status_code(), 500);
        assert_eq!(RopeeErr::TimeoutErr(Duration::from_secs(1)).status_code(), 500);
    }

    #[test]
    fn test_backend_message_verbatim() {
        let err = RopeeErr::BackendErr("index not found".to_string());
        assert_eq!(err.to_string(), "index not found");
    }
}
