//! `stockroom-client`
//!
//! **Responsibility:** thin HTTP client for the inventory API.
//!
//! The server remains the only authority; the client holds no state of its
//! own beyond the server URL.

pub mod client;
pub mod table;
pub mod types;

pub use client::{ClientError, InventoryClient, DEFAULT_SERVER_URL};
pub use types::{AddItemResponse, InventoryItemView, MessageResponse};
