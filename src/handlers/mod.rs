pub mod resource;
pub mod system;

pub use resource::*;
pub use system::{current_user, system_info};
