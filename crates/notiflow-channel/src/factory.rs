use crate::channel::{Channel, ChannelType};
use notiflow_types::ValidationError;

/// Builds channels from a channel type and a raw recipient
///
/// Validation is left to the channel constructors.
pub struct ChannelFactory;

impl ChannelFactory {
    pub fn create(kind: ChannelType, recipient: &str) -> Result<Channel, ValidationError> {
        match kind {
            ChannelType::WhatsApp => Channel::whatsapp(recipient),
            ChannelType::Telegram => Channel::telegram(recipient),
            ChannelType::Facebook => Channel::facebook(recipient),
            ChannelType::Instagram => Channel::instagram(recipient),
        }
    }

    /// Like [`ChannelFactory::create`], taking the channel by name
    pub fn create_named(name: &str, recipient: &str) -> Result<Channel, ValidationError> {
        Self::create(name.parse()?, recipient)
    }
}
