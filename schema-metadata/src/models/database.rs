use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::extension::ExtensionMetadata;
use crate::models::schema::SchemaMetadata;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatabaseMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub schemas: Vec<SchemaMetadata>,
    #[serde(deserialize_with = "crate::json::string")]
    pub character_set: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub collation: String,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub extensions: Vec<ExtensionMetadata>,
}

impl DatabaseMetadata {
    /// Engines without schemas report a single schema named `""`.
    pub fn schema(&self, name: &str) -> Option<&SchemaMetadata> {
        self.schemas.iter().find(|s| s.name == name)
    }

    pub fn extension(&self, name: &str) -> Option<&ExtensionMetadata> {
        self.extensions.iter().find(|e| e.name == name)
    }
}

impl Message for DatabaseMetadata {
    const NAME: &'static str = "bytebase.store.DatabaseMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_repeated_message_field(2, &self.schemas)?;
        writer.write_string_field(3, &self.character_set);
        writer.write_string_field(4, &self.collation);
        writer.write_repeated_message_field(5, &self.extensions)?;
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.schemas.push(reader.read_message()?),
            (3, WireType::LengthDelimited) => self.character_set = reader.read_string()?,
            (4, WireType::LengthDelimited) => self.collation = reader.read_string()?,
            (5, WireType::LengthDelimited) => self.extensions.push(reader.read_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
