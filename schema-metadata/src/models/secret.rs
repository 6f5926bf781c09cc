use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

/// The named secrets attached to a data source.
#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Secrets {
    #[serde(deserialize_with = "crate::json::message_list")]
    pub items: Vec<SecretItem>,
}

impl Secrets {
    pub fn get(&self, name: &str) -> Option<&SecretItem> {
        self.items.iter().find(|i| i.name == name)
    }
}

impl Message for Secrets {
    const NAME: &'static str = "bytebase.store.Secrets";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_repeated_message_field(1, &self.items)
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.items.push(reader.read_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[derive(Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretItem {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub value: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub description: String,
}

// Keeps secret values out of logs.
impl std::fmt::Debug for SecretItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretItem")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .field("description", &self.description)
            .finish()
    }
}

impl Message for SecretItem {
    const NAME: &'static str = "bytebase.store.SecretItem";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_string_field(2, &self.value);
        writer.write_string_field(3, &self.description);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.value = reader.read_string()?,
            (3, WireType::LengthDelimited) => self.description = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
