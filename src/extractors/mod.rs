//! Request extractors that report rejections through the JSON error envelope.

pub mod id;
pub mod payload;

pub use id::ResourceId;
pub use payload::Payload;
