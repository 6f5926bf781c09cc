use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::string_value::StringValue;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    /// 1-based ordinal of the column in its table.
    #[serde(deserialize_with = "crate::json::int32")]
    pub position: i32,
    /// `None` means the column has no default, `Some("")` an empty-string default.
    #[serde(deserialize_with = "crate::json::optional_string", skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(deserialize_with = "crate::json::boolean")]
    pub nullable: bool,
    #[serde(rename = "type", deserialize_with = "crate::json::string")]
    pub data_type: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub character_set: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub collation: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub comment: String,
}

impl ColumnMetadata {
    pub fn new(name: &str, position: i32, data_type: &str) -> Self {
        ColumnMetadata {
            name: name.to_string(),
            position,
            data_type: data_type.to_string(),
            ..crate::default()
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

impl Message for ColumnMetadata {
    const NAME: &'static str = "bytebase.store.ColumnMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_int32_field(2, self.position);
        if let Some(default) = &self.default {
            writer.write_message_field(3, &StringValue { value: default.clone() })?;
        }
        writer.write_bool_field(4, self.nullable);
        writer.write_string_field(5, &self.data_type);
        writer.write_string_field(6, &self.character_set);
        writer.write_string_field(7, &self.collation);
        writer.write_string_field(8, &self.comment);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::Varint) => self.position = reader.read_int32()?,
            (3, WireType::LengthDelimited) => {
                self.default = Some(reader.read_message::<StringValue>()?.value)
            }
            (4, WireType::Varint) => self.nullable = reader.read_bool()?,
            (5, WireType::LengthDelimited) => self.data_type = reader.read_string()?,
            (6, WireType::LengthDelimited) => self.character_set = reader.read_string()?,
            (7, WireType::LengthDelimited) => self.collation = reader.read_string()?,
            (8, WireType::LengthDelimited) => self.comment = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
