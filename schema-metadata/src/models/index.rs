use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    /// Key parts in order. Each is either a column name or an expression.
    #[serde(deserialize_with = "crate::json::string_list")]
    pub expressions: Vec<String>,
    #[serde(rename = "type", deserialize_with = "crate::json::string")]
    pub index_type: String,
    #[serde(deserialize_with = "crate::json::boolean")]
    pub unique: bool,
    #[serde(deserialize_with = "crate::json::boolean")]
    pub primary: bool,
    #[serde(deserialize_with = "crate::json::boolean")]
    pub visible: bool,
    #[serde(deserialize_with = "crate::json::string")]
    pub comment: String,
}

impl Message for IndexMetadata {
    const NAME: &'static str = "bytebase.store.IndexMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_repeated_string_field(2, &self.expressions);
        writer.write_string_field(3, &self.index_type);
        writer.write_bool_field(4, self.unique);
        writer.write_bool_field(5, self.primary);
        writer.write_bool_field(6, self.visible);
        writer.write_string_field(7, &self.comment);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.expressions.push(reader.read_string()?),
            (3, WireType::LengthDelimited) => self.index_type = reader.read_string()?,
            (4, WireType::Varint) => self.unique = reader.read_bool()?,
            (5, WireType::Varint) => self.primary = reader.read_bool()?,
            (6, WireType::Varint) => self.visible = reader.read_bool()?,
            (7, WireType::LengthDelimited) => self.comment = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
