use std::fmt::Debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;
use crate::error::{Result, SchemaMetadataError};
use crate::wire::{varint_len, ProtoReader, ProtoWriter, Tag};

/// The largest integer a double-precision float holds exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// How int64 fields are bounded when they cross the codec.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub enum Int64Strategy {
    /// Values whose magnitude exceeds [`MAX_SAFE_INTEGER`] are rejected with an overflow error.
    #[default]
    SafeInteger,
    /// The whole `i64` range is accepted.
    Full,
}

impl Int64Strategy {
    pub fn check(self, field: &'static str, value: i64) -> Result<i64> {
        match self {
            Int64Strategy::SafeInteger if !is_safe_integer(value) => {
                Err(SchemaMetadataError::Overflow { field, value })
            }
            _ => Ok(value),
        }
    }
}

pub fn is_safe_integer(value: i64) -> bool {
    value.unsigned_abs() <= MAX_SAFE_INTEGER as u64
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct CodecOptions {
    pub int64: Int64Strategy,
    /// Maximum nesting of length-delimited messages and groups.
    pub recursion_limit: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            int64: Int64Strategy::SafeInteger,
            recursion_limit: 100,
        }
    }
}

/// Encodes and decodes messages with a fixed set of [`CodecOptions`].
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct ProtoCodec {
    options: CodecOptions,
}

impl ProtoCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CodecOptions {
        self.options
    }

    pub fn encode<M: Message>(&self, message: &M) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode_into(message, &mut buffer)?;
        Ok(buffer)
    }

    /// Appends the encoded message to `buffer`. The buffer is left untouched on error.
    pub fn encode_into<M: Message>(&self, message: &M, buffer: &mut Vec<u8>) -> Result<()> {
        let start = buffer.len();
        let mut writer = ProtoWriter::new(buffer, self.options);
        if let Err(e) = message.encode_fields(&mut writer) {
            buffer.truncate(start);
            return Err(e);
        }
        trace!(message = M::NAME, bytes = buffer.len() - start, "Encoded message");
        Ok(())
    }

    /// Encodes the message prefixed with its length as a varint.
    pub fn encode_length_delimited<M: Message>(&self, message: &M) -> Result<Vec<u8>> {
        let body = self.encode(message)?;
        let mut buffer = Vec::with_capacity(varint_len(body.len() as u64) + body.len());
        let mut writer = ProtoWriter::new(&mut buffer, self.options);
        writer.write_varint(body.len() as u64);
        writer.write_bytes(&body);
        Ok(buffer)
    }

    pub fn decode<M: Message>(&self, bytes: &[u8]) -> Result<M> {
        let mut reader = ProtoReader::new(bytes, self.options);
        let mut message = M::default();
        reader.merge_into(&mut message)?;
        trace!(message = M::NAME, bytes = bytes.len(), "Decoded message");
        Ok(message)
    }

    /// Decodes one length-prefixed message from the front of `bytes`.
    ///
    /// Returns the message and the number of bytes consumed, prefix included.
    pub fn decode_length_delimited<M: Message>(&self, bytes: &[u8]) -> Result<(M, usize)> {
        let mut reader = ProtoReader::new(bytes, self.options);
        let mut nested = reader.limited()?;
        let mut message = M::default();
        nested.merge_into(&mut message)?;
        Ok((message, reader.get_read_bytes()))
    }
}

/// A schema metadata message.
///
/// Implementors only describe their fields: [`Message::encode_fields`] writes them in
/// field-number order and [`Message::merge_field`] claims the `(field number, wire type)`
/// pairs it owns. Everything else, including skipping unknown fields, is shared.
pub trait Message: Default + Clone + PartialEq + Debug + Serialize + DeserializeOwned {
    const NAME: &'static str;

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()>;

    /// Returns `false` when the tag does not belong to this message.
    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool>;

    fn encode(&self) -> Result<Vec<u8>> {
        ProtoCodec::default().encode(self)
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        ProtoCodec::default().decode(bytes)
    }

    fn encode_length_delimited(&self) -> Result<Vec<u8>> {
        ProtoCodec::default().encode_length_delimited(self)
    }

    fn decode_length_delimited(bytes: &[u8]) -> Result<(Self, usize)> {
        ProtoCodec::default().decode_length_delimited(bytes)
    }

    fn encoded_len(&self) -> Result<usize> {
        Ok(self.encode()?.len())
    }

    /// Builds a message from loosely typed JSON, defaulting missing and `null` fields.
    ///
    /// Anything other than an object is the zero value. Only integer fields that
    /// cannot be converted make this fail.
    fn from_json(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }

    fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Every field is emitted, zero values included. An unset optional stays absent.
    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Starts from the zero value and applies `fill` on top of it.
    fn from_partial(fill: impl FnOnce(&mut Self)) -> Self {
        let mut message = Self::default();
        fill(&mut message);
        message
    }

    fn create() -> Self {
        Self::default()
    }
}
