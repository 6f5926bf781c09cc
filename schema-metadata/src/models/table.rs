use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::models::column::ColumnMetadata;
use crate::models::foreign_key::ForeignKeyMetadata;
use crate::models::index::IndexMetadata;
use crate::wire::{ProtoReader, ProtoWriter, Tag, WireType};
use crate::Message;

#[derive(Debug, Eq, PartialEq, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableMetadata {
    #[serde(deserialize_with = "crate::json::string")]
    pub name: String,
    /// In the order the engine reports them, which follows `ColumnMetadata::position`.
    #[serde(deserialize_with = "crate::json::message_list")]
    pub columns: Vec<ColumnMetadata>,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub indexes: Vec<IndexMetadata>,
    #[serde(deserialize_with = "crate::json::string")]
    pub engine: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub collation: String,
    /// Estimated, as reported by the engine's statistics.
    #[serde(deserialize_with = "crate::json::int64")]
    pub row_count: i64,
    #[serde(deserialize_with = "crate::json::int64")]
    pub data_size: i64,
    #[serde(deserialize_with = "crate::json::int64")]
    pub index_size: i64,
    #[serde(deserialize_with = "crate::json::int64")]
    pub data_free: i64,
    #[serde(deserialize_with = "crate::json::string")]
    pub create_options: String,
    #[serde(deserialize_with = "crate::json::string")]
    pub comment: String,
    #[serde(deserialize_with = "crate::json::message_list")]
    pub foreign_keys: Vec<ForeignKeyMetadata>,
}

impl TableMetadata {
    pub fn new(name: &str) -> Self {
        TableMetadata {
            name: name.to_string(),
            ..crate::default()
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn index(&self, name: &str) -> Option<&IndexMetadata> {
        self.indexes.iter().find(|i| i.name == name)
    }

    pub fn primary_key(&self) -> Option<&IndexMetadata> {
        self.indexes.iter().find(|i| i.primary)
    }

    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKeyMetadata> {
        self.foreign_keys.iter().find(|f| f.name == name)
    }
}

impl Message for TableMetadata {
    const NAME: &'static str = "bytebase.store.TableMetadata";

    fn encode_fields(&self, writer: &mut ProtoWriter<'_>) -> Result<()> {
        writer.write_string_field(1, &self.name);
        writer.write_repeated_message_field(2, &self.columns)?;
        writer.write_repeated_message_field(3, &self.indexes)?;
        writer.write_string_field(4, &self.engine);
        writer.write_string_field(5, &self.collation);
        writer.write_int64_field(6, "row_count", self.row_count)?;
        writer.write_int64_field(7, "data_size", self.data_size)?;
        writer.write_int64_field(8, "index_size", self.index_size)?;
        writer.write_int64_field(9, "data_free", self.data_free)?;
        writer.write_string_field(10, &self.create_options);
        writer.write_string_field(11, &self.comment);
        writer.write_repeated_message_field(12, &self.foreign_keys)?;
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, reader: &mut ProtoReader<'_>) -> Result<bool> {
        match (tag.field_number, tag.wire_type) {
            (1, WireType::LengthDelimited) => self.name = reader.read_string()?,
            (2, WireType::LengthDelimited) => self.columns.push(reader.read_message()?),
            (3, WireType::LengthDelimited) => self.indexes.push(reader.read_message()?),
            (4, WireType::LengthDelimited) => self.engine = reader.read_string()?,
            (5, WireType::LengthDelimited) => self.collation = reader.read_string()?,
            (6, WireType::Varint) => self.row_count = reader.read_int64("row_count")?,
            (7, WireType::Varint) => self.data_size = reader.read_int64("data_size")?,
            (8, WireType::Varint) => self.index_size = reader.read_int64("index_size")?,
            (9, WireType::Varint) => self.data_free = reader.read_int64("data_free")?,
            (10, WireType::LengthDelimited) => self.create_options = reader.read_string()?,
            (11, WireType::LengthDelimited) => self.comment = reader.read_string()?,
            (12, WireType::LengthDelimited) => self.foreign_keys.push(reader.read_message()?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
