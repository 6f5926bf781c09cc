mod string_value;
mod database;
mod schema;
mod table;
mod column;
mod view;
mod function;
mod index;
mod extension;
mod foreign_key;
mod instance_role;
mod secret;

pub use string_value::*;
pub use database::*;
pub use schema::*;
pub use table::*;
pub use column::*;
pub use view::*;
pub use function::*;
pub use index::*;
pub use extension::*;
pub use foreign_key::*;
pub use instance_role::*;
pub use secret::*;
