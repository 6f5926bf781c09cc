use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

/// `columns[i]` references `referenced_columns[i]`. Nothing here checks that the
/// two lists have the same length.
#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForeignKeyMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    #[serde(deserialize_with = "crate::json::string_list")]
    pub columns: Vec<String>,
    /// Empty for engines without schemas.
    #[serde(deserialize_with = "crate::json::string")]
    pub referenced_schema: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub referenced_table: String,
    #[serde(deserialize_with = "crate::json::string_list")]
    pub referenced_columns: Vec<String>,
    #[serde(deserialize_with = "crate::json::string")]
    pub on_delete: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub on_update: String,
    /// Postgres only, empty elsewhere.
    #[serde(deserialize_with = "crate::json::string")]
    pub match_type: String,
}

impl ForeignKeyMetadata {
    /// Pairs each referencing column with the column it references.
    pub fn column_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .zip(self.referenced_columns.iter())
            .map(|(c, r)| (c.as_str(), r.as_str()))
    }
}

impl Message for ForeignKeyMetadata {
    const NAME: &'static str = "bytebase.store.ForeignKeyMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_repeated_string_field(2, &self.columns);
        writer.write_string_field(3, &self.referenced_schema);
        writer.write_string_field(4, &self.referenced_table);
        writer.write_repeated_string_field(5, &self.referenced_columns);
        writer.write_string_field(6, &self.on_delete);
        writer.write_string_field(7, &self.on_update);
        writer.write_string_field(8, &self.match_type);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.columns.push(reader.read_string()?),
            (3, WireType::LengthDelimited) => self.referenced_schema = reader.read_string()?,
            (4, WireType::LengthDelimited) => self.referenced_table = reader.read_string()?,
            (5, WireType::LengthDelimited) => self.referenced_columns.push(reader.read_string()?),
            (6, WireType::LengthDelimited) => self.on_delete = reader.read_string()?,
            (7, WireType::LengthDelimited) => self.on_update = reader.read_string()?,
            (8, WireType::LengthDelimited) => self.match_type = reader.read_string()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
