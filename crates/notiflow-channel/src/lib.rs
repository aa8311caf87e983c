//! `Notiflow` channels
//!
//! Destination platforms (WhatsApp, Telegram, Facebook, Instagram), their
//! recipient validation, and the simulated send that prints a dispatch line.

pub mod channel;
pub mod factory;
mod recipient;

pub use channel::{Channel, ChannelType};
pub use factory::ChannelFactory;
