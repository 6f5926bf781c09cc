use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    /// Where the extension's objects are installed. Usage is not limited to this schema.
    #[serde(deserialize_with = "crate::json::string")]
    pub schema: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub version: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub description: String,
}

impl Message for ExtensionMetadata {
    const NAME: &'static str = "bytebase.store.ExtensionMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_string_field(2, &self.schema);
        writer.write_string_field(3, &self.version);
        writer.write_string_field(4, &self.description);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.schema = reader.read_string()?,
            (3, WireType::LengthDelimited) => self.version = reader.read_string()?,
            (4, WireType::LengthDelimited) => self.description = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
