use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub definition: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub comment: String,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub dependent_columns: Vec<DependentColumn>,
}

impl ViewMetadata {
    pub fn depends_on_table(&self, schema: &str, table: &str) -> bool {
        self.dependent_columns
            .iter()
            .any(|c| c.schema == schema && c.table == table)
    }
}

impl Message for ViewMetadata {
    const NAME: &'static str = "bytebase.store.ViewMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_string_field(2, &self.definition);
        writer.write_string_field(3, &self.comment);
        writer.write_repeated_message_field(4, &self.dependent_columns)?;
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.definition = reader.read_string()?,
            (3, WireType::LengthDelimited) => self.comment = reader.read_string()?,
            (4, WireType::LengthDelimited) => self.dependent_columns.push(reader.read_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// A column a view reads from. This is a reference, the column is owned by its table.
#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DependentColumn {
    #[serde(deserialize_with = "crate::json::string")]
    pub schema: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub table: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub column: String,
}

impl Message for DependentColumn {
    const NAME: &'static str = "bytebase.store.DependentColumn";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.schema);
        writer.write_string_field(2, &self.table);
        writer.write_string_field(3, &self.column);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.schema = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.table = reader.read_string()?,
            (3, WireType::LengthDelimited) => self.column = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
