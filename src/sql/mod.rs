//! Safe SQL building: table descriptors, parameterized query text, typed bind values.

mod builder;
mod params;

pub use builder::{delete_by_id, insert_generated, select_all, select_by_id, upsert, TableSpec};
pub use params::PgBindValue;
