//! Notiflow Types - Core types for the Notiflow dispatcher
//!
//! This module defines the outbound message model and the validation error
//! shared by every other crate in the workspace.

pub mod error;
pub mod message;

pub use error::ValidationError;
pub use message::{Media, Message, MessageId, MessageKind};
