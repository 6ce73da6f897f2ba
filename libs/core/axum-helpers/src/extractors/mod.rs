//! Request extractors and field validators shared by the domain handlers.

pub mod not_blank;
pub mod validated_json;

pub use not_blank::not_blank;
pub use validated_json::ValidatedJson;
