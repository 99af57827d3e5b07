// src/extractors/mod.rs
pub mod json;
pub mod uuid;

pub use self::json::AppJson;
pub use self::uuid::ResourceId;
