use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

/// The `google.protobuf.StringValue` wrapper. Its presence is what tells an
/// explicit empty string apart from an unset field.
#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StringValue {
    #[serde(deserialize_with = "crate::json::string")]
    pub value: String,
}

impl Message for StringValue {
    const NAME: &'static str = "google.protobuf.StringValue";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.value);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.value = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
