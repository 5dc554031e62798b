//! Request extractors: caller identity and entity identifiers.

pub mod entity_id;
pub mod principal;

pub use entity_id::EntityId;
pub use principal::{Principal, Role, ROLES_HEADER, USER_HEADER};
