//! Capability traits implemented by provider clients.

mod files;
mod model_listing;
mod moderation;
mod vector_stores;

pub use files::FileManagementCapability;
pub use model_listing::ModelListingCapability;
pub use moderation::ModerationCapability;
pub use vector_stores::VectorStoreCapability;
