use tracing::trace;
use crate::codec::CodecOptions;
use crate::error::{MalformedReason, Result, SchemaMetadataError};
use crate::wire::{Tag, WireType};
use crate::Message;

/// A cursor over an encoded message.
///
/// Nested messages are read through [`ProtoReader::limited`], which hands out a
/// reader bounded to the length-delimited payload and advances this reader past it.
#[derive(Debug)]
pub struct ProtoReader<'a> {
    bytes: &'a [u8],
    read_bytes: usize,
    options: CodecOptions,
    depth: usize,
}

impl<'a> ProtoReader<'a> {
    pub fn new(bytes: &'a [u8], options: CodecOptions) -> Self {
        Self {
            bytes,
            read_bytes: 0,
            options,
            depth: 0,
        }
    }

    /// Absolute offset of the next unread byte in the outermost buffer.
    #[inline]
    pub fn get_read_bytes(&self) -> usize {
        self.read_bytes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn malformed(&self, reason: MalformedReason) -> SchemaMetadataError {
        SchemaMetadataError::MalformedInput {
            offset: self.read_bytes,
            reason,
        }
    }

    fn advance(&mut self, n: usize) {
        self.bytes = &self.bytes[n..];
        self.read_bytes += n;
    }

    pub fn read_varint(&mut self) -> Result<u64> {
        let mut result: u64 = 0;
        for (i, byte) in self.bytes.iter().copied().take(10).enumerate() {
            // The 10th byte can only carry the highest bit of a u64.
            if i == 9 && byte > 1 {
                return Err(self.malformed(MalformedReason::VarintTooLong));
            }
            result |= ((byte & 0x7f) as u64) << (7 * i);
            if byte & 0x80 == 0 {
                self.advance(i + 1);
                return Ok(result);
            }
        }

        if self.bytes.len() >= 10 {
            Err(self.malformed(MalformedReason::VarintTooLong))
        } else {
            Err(self.malformed(MalformedReason::TruncatedVarint))
        }
    }

    pub fn read_tag(&mut self) -> Result<Tag> {
        let raw = self.read_varint()?;
        if raw > u32::MAX as u64 || raw >> 3 == 0 {
            return Err(self.malformed(MalformedReason::InvalidTag(raw)));
        }

        let wire_type = WireType::try_from((raw & 7) as u8)
            .map_err(|w| self.malformed(MalformedReason::InvalidWireType(w)))?;

        Ok(Tag::new((raw >> 3) as u32, wire_type))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes: &'a [u8] = self.bytes;
        match bytes.split_at_checked(n) {
            Some((byt, _)) => {
                self.advance(n);
                Ok(byt)
            }
            None => Err(self.malformed(MalformedReason::Truncated {
                needed: n as u64,
                available: self.bytes.len(),
            })),
        }
    }

    fn read_length(&mut self) -> Result<usize> {
        let length = self.read_varint()?;
        if length > self.bytes.len() as u64 {
            return Err(self.malformed(MalformedReason::Truncated {
                needed: length,
                available: self.bytes.len(),
            }));
        }
        Ok(length as usize)
    }

    pub fn read_length_delimited(&mut self) -> Result<&'a [u8]> {
        let length = self.read_length()?;
        self.read_bytes(length)
    }

    pub fn read_string(&mut self) -> Result<String> {
        let offset = self.read_bytes;
        let bytes = self.read_length_delimited()?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_string()),
            Err(_) => Err(SchemaMetadataError::MalformedInput {
                offset,
                reason: MalformedReason::InvalidUtf8,
            }),
        }
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_varint()? != 0)
    }

    /// Negative int32 values arrive sign-extended to 64 bits, so the upper half is dropped.
    pub fn read_int32(&mut self) -> Result<i32> {
        Ok(self.read_varint()? as i32)
    }

    pub fn read_int64(&mut self, field: &'static str) -> Result<i64> {
        let value = self.read_varint()? as i64;
        self.options.int64.check(field, value)
    }

    /// Splits off a reader over the next length-delimited payload.
    pub fn limited(&mut self) -> Result<ProtoReader<'a>> {
        let length = self.read_length()?;
        let depth = self.depth + 1;
        if depth > self.options.recursion_limit {
            return Err(self.malformed(MalformedReason::RecursionLimitExceeded(
                self.options.recursion_limit,
            )));
        }

        let start = self.read_bytes;
        let bytes = self.read_bytes(length)?;
        Ok(ProtoReader {
            bytes,
            read_bytes: start,
            options: self.options,
            depth,
        })
    }

    pub fn read_message<M: Message>(&mut self) -> Result<M> {
        let mut nested = self.limited()?;
        let mut message = M::default();
        nested.merge_into(&mut message)?;
        Ok(message)
    }

    /// Reads fields into `message` until this reader is exhausted or an end-group tag is hit.
    pub fn merge_into<M: Message>(&mut self, message: &mut M) -> Result<()> {
        while !self.is_empty() {
            let tag = self.read_tag()?;
            if tag.wire_type == WireType::EndGroup {
                break;
            }

            if !message.merge_field(tag, self)? {
                trace!(
                    message = M::NAME,
                    %tag,
                    "Skipping unknown field"
                );
                self.skip_field(tag)?;
            }
        }
        Ok(())
    }

    pub fn skip_field(&mut self, tag: Tag) -> Result<()> {
        self.skip_field_at_depth(tag, self.depth)
    }

    fn skip_field_at_depth(&mut self, tag: Tag, depth: usize) -> Result<()> {
        match tag.wire_type {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::Fixed64 => {
                self.read_bytes(8)?;
            }
            WireType::LengthDelimited => {
                self.read_length_delimited()?;
            }
            WireType::Fixed32 => {
                self.read_bytes(4)?;
            }
            WireType::StartGroup => {
                let depth = depth + 1;
                if depth > self.options.recursion_limit {
                    return Err(self.malformed(MalformedReason::RecursionLimitExceeded(
                        self.options.recursion_limit,
                    )));
                }
                loop {
                    if self.is_empty() {
                        return Err(self.malformed(MalformedReason::UnterminatedGroup(
                            tag.field_number,
                        )));
                    }
                    let inner = self.read_tag()?;
                    if inner.wire_type == WireType::EndGroup {
                        if inner.field_number != tag.field_number {
                            return Err(self.malformed(MalformedReason::UnexpectedEndGroup(
                                inner.field_number,
                            )));
                        }
                        break;
                    }
                    self.skip_field_at_depth(inner, depth)?;
                }
            }
            WireType::EndGroup => {
                return Err(self.malformed(MalformedReason::UnexpectedEndGroup(
                    tag.field_number,
                )));
            }
        }
        Ok(())
    }
}
