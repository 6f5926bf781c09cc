//! Database schema metadata messages (databases, schemas, tables, columns,
//! indexes, views, foreign keys) with a protobuf-compatible binary codec and a
//! lenient JSON mapping.

#[cfg(test)]
mod test_helpers;

mod codec;
mod error;
mod json;
mod models;
mod wire;

pub use codec::*;
pub use error::*;
pub use models::*;
pub use wire::*;

pub(crate) fn default<T: Default>() -> T {
    T::default()
}
