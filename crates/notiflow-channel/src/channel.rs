use crate::recipient::{validate_phone, validate_social_handle, validate_telegram};
use notiflow_types::{Message, ValidationError};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::{debug, warn};

/// Supported destination platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    WhatsApp,
    Telegram,
    Facebook,
    Instagram,
}

impl ChannelType {
    pub const ALL: [ChannelType; 4] = [
        ChannelType::WhatsApp,
        ChannelType::Telegram,
        ChannelType::Facebook,
        ChannelType::Instagram,
    ];

    /// Display name, used as the tag of every dispatch line
    pub fn name(self) -> &'static str {
        match self {
            ChannelType::WhatsApp => "WhatsApp",
            ChannelType::Telegram => "Telegram",
            ChannelType::Facebook => "Facebook",
            ChannelType::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChannelType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ChannelType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ValidationError::InvalidChannel(s.to_string()))
    }
}

/// A validated destination on one platform
///
/// The recipient is checked once at construction; a channel can then be
/// reused for any number of sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    kind: ChannelType,
    recipient: String,
}

impl Channel {
    /// Phone number with optional leading `+`
    pub fn whatsapp(recipient: &str) -> Result<Self, ValidationError> {
        let kind = ChannelType::WhatsApp;
        Ok(Self {
            kind,
            recipient: validate_phone(kind.name(), recipient)?,
        })
    }

    /// `@handle` or phone number
    pub fn telegram(recipient: &str) -> Result<Self, ValidationError> {
        let kind = ChannelType::Telegram;
        Ok(Self {
            kind,
            recipient: validate_telegram(kind.name(), recipient)?,
        })
    }

    /// Handle, stored with a leading `@`
    pub fn facebook(recipient: &str) -> Result<Self, ValidationError> {
        let kind = ChannelType::Facebook;
        Ok(Self {
            kind,
            recipient: validate_social_handle(kind.name(), recipient)?,
        })
    }

    /// Handle, stored with a leading `@`
    pub fn instagram(recipient: &str) -> Result<Self, ValidationError> {
        let kind = ChannelType::Instagram;
        Ok(Self {
            kind,
            recipient: validate_social_handle(kind.name(), recipient)?,
        })
    }

    pub fn kind(&self) -> ChannelType {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// The line a send produces, without trailing newline
    pub fn render(&self, message: &Message) -> String {
        format!(
            "[{}] Sending to {}: {}",
            self.name(),
            self.recipient,
            message.build_payload_preview()
        )
    }

    /// Write the dispatch line for `message` to `out`
    pub fn send_to<W: Write>(&self, message: &Message, out: &mut W) -> io::Result<()> {
        debug!(
            channel = self.name(),
            recipient = %self.recipient,
            message_id = %message.id(),
            kind = message.kind_label(),
            "Sending message"
        );
        writeln!(out, "{}", self.render(message))
    }

    /// Simulated delivery: print the dispatch line to stdout
    pub fn send(&self, message: &Message) {
        let stdout = io::stdout();
        if let Err(e) = self.send_to(message, &mut stdout.lock()) {
            warn!("Failed to write to stdout: {}", e);
        }
    }
}
