pub mod entity_gateway;
pub mod image_store;

pub use entity_gateway::{EntityGateway, EntityRecord, GatewayError, ListOrder};
pub use image_store::{unique_object_name, ImageStore, UploadError};
