use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::function::FunctionMetadata;
use crate::models::table::TableMetadata;
use crate::models::view::ViewMetadata;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

/// A schema in the Postgres sense. For engines without schemas, such as MySQL,
/// `name` is empty and the schema holds every object of the database.
#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub tables: Vec<TableMetadata>,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub views: Vec<ViewMetadata>,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub functions: Vec<FunctionMetadata>,
}

impl SchemaMetadata {
    pub fn table(&self, name: &str) -> Option<&TableMetadata> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn view(&self, name: &str) -> Option<&ViewMetadata> {
        self.views.iter().find(|v| v.name == name)
    }

    pub fn function(&self, name: &str) -> Option<&FunctionMetadata> {
        self.functions.iter().find(|f| f.name == name)
    }
}

impl Message for SchemaMetadata {
    const NAME: &'static str = "bytebase.store.SchemaMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_repeated_message_field(2, &self.tables)?;
        writer.write_repeated_message_field(3, &self.views)?;
        writer.write_repeated_message_field(4, &self.functions)?;
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.tables.push(reader.read_message()?),
            (3, WireType::LengthDelimited) => self.views.push(reader.read_message()?),
            (4, WireType::LengthDelimited) => self.functions.push(reader.read_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
