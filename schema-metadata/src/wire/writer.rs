use crate::codec::CodecOptions;
use crate::error::Result;
use crate::wire::{Tag, WireType};
use crate::Message;

/// Appends encoded fields to a buffer.
///
/// Scalar helpers skip values equal to their zero value, the way the standard
/// encoders do. Repeated and nested helpers always write.
pub struct ProtoWriter<'a> {
    buffer: &'a mut Vec<u8>,
    options: CodecOptions,
}

impl<'a> ProtoWriter<'a> {
    pub fn new(buffer: &'a mut Vec<u8>, options: CodecOptions) -> Self {
        Self { buffer, options }
    }

    pub fn write_varint(&mut self, mut value: u64) {
        while value >= 0x80 {
            self.buffer.push((value as u8 & 0x7f) | 0x80);
            value >>= 7;
        }
        self.buffer.push(value as u8);
    }

    pub fn write_tag(&mut self, field_number: u32, wire_type: WireType) {
        self.write_varint(Tag::new(field_number, wire_type).to_raw());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn write_length_delimited(&mut self, field_number: u32, bytes: &[u8]) {
        self.write_tag(field_number, WireType::LengthDelimited);
        self.write_varint(bytes.len() as u64);
        self.write_bytes(bytes);
    }

    pub fn write_string_field(&mut self, field_number: u32, value: &str) {
        if !is_default_string(value) {
            self.write_length_delimited(field_number, value.as_bytes());
        }
    }

    /// Every entry gets its own tag, empty strings included.
    pub fn write_repeated_string_field(&mut self, field_number: u32, values: &[String]) {
        for value in values {
            self.write_length_delimited(field_number, value.as_bytes());
        }
    }

    pub fn write_bool_field(&mut self, field_number: u32, value: bool) {
        if !is_default_bool(value) {
            self.write_tag(field_number, WireType::Varint);
            self.write_varint(1);
        }
    }

    pub fn write_int32_field(&mut self, field_number: u32, value: i32) {
        if !is_default_int(value as i64) {
            self.write_tag(field_number, WireType::Varint);
            // Negative values are sign-extended to ten bytes.
            self.write_varint(value as i64 as u64);
        }
    }

    pub fn write_int64_field(&mut self, field_number: u32, field: &'static str, value: i64) -> Result<()> {
        let value = self.options.int64.check(field, value)?;
        if !is_default_int(value) {
            self.write_tag(field_number, WireType::Varint);
            self.write_varint(value as u64);
        }
        Ok(())
    }

    /// Writes a nested message, even when it encodes to zero bytes.
    pub fn write_message_field<M: Message>(&mut self, field_number: u32, message: &M) -> Result<()> {
        let mut nested = Vec::new();
        message.encode_fields(&mut ProtoWriter::new(&mut nested, self.options))?;

        self.write_length_delimited(field_number, &nested);
        Ok(())
    }

    pub fn write_repeated_message_field<M: Message>(&mut self, field_number: u32, messages: &[M]) -> Result<()> {
        for message in messages {
            self.write_message_field(field_number, message)?;
        }
        Ok(())
    }
}

pub fn is_default_string(value: &str) -> bool {
    value.is_empty()
}

pub fn is_default_bool(value: bool) -> bool {
    !value
}

pub fn is_default_int(value: i64) -> bool {
    value == 0
}
