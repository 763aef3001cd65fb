pub mod extract;
pub mod flow;
pub mod queries;
pub mod selector;

pub use crate::domain::ports::{Storage, WebhookGateway};
