// Service exports
pub mod appwrite;

pub use appwrite::{AppwriteClient, AppwriteCollections, AppwriteError};
