use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

/// A role on a database instance. Not nested under any database.
#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceRoleMetadata {
    /// Unique within the instance.
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    /// The grant display string, as rendered by the engine.
    #[serde(deserialize_with = "crate::json::string")]
    pub grant: String,
}

// name is field 2 and grant is field 7 in the schema; there is no field 1.
impl Message for InstanceRoleMetadata {
    const NAME: &'static str = "bytebase.store.InstanceRoleMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(2, &self.name);
        writer.write_string_field(7, &self.grant);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (2, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (7, WireType::LengthDelimited) => self.grant = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
