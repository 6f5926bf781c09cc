use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub definition: String,
}

impl Message for FunctionMetadata {
    const NAME: &'static str = "bytebase.store.FunctionMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_string_field(2, &self.definition);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.definition = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
