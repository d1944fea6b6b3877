// Sub-modules organized by entity
pub mod api;
pub mod comment;
pub mod issue;
pub mod label;
pub mod user;

pub use api::*;
pub use comment::*;
pub use issue::*;
pub use label::*;
pub use user::*;
