use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaMetadataError {
    #[error("Malformed input at byte {offset}: {reason}")]
    MalformedInput {
        offset: usize,
        reason: MalformedReason,
    },

    #[error("Value `{value}` of int64 field `{field}` cannot be represented as a safe integer")]
    Overflow {
        field: &'static str,
        value: i64,
    },

    #[error("Invalid JSON: `{0}`")]
    InvalidJson(#[from] serde_json::Error),

    #[error("io error: `{0}`")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug, Eq, PartialEq, Clone)]
pub enum MalformedReason {
    #[error("varint is truncated")]
    TruncatedVarint,

    #[error("varint is longer than 10 bytes or overflows 64 bits")]
    VarintTooLong,

    #[error("expected {needed} more bytes, but only {available} are available")]
    Truncated {
        needed: u64,
        available: usize,
    },

    #[error("invalid tag `{0}`")]
    InvalidTag(u64),

    #[error("unsupported wire type `{0}`")]
    InvalidWireType(u8),

    #[error("unexpected end-group tag for field {0}")]
    UnexpectedEndGroup(u32),

    #[error("group for field {0} is not terminated")]
    UnterminatedGroup(u32),

    #[error("string field is not valid UTF-8")]
    InvalidUtf8,

    #[error("message nesting exceeds the recursion limit of {0}")]
    RecursionLimitExceeded(usize),
}

pub type Result<T = ()> = std::result::Result<T, SchemaMetadataError>;
