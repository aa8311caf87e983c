use crate::error::{Result, ValidationError};
use chrono::{DateTime, Local};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Unique id assigned to every message at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Attachment carried by photo, file and video messages
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub file_path: String,
    /// Always lowercase
    pub format: String,
}

impl Media {
    fn new(file_path: impl Into<String>, format: &str) -> Self {
        Self {
            file_path: file_path.into(),
            format: format.to_lowercase(),
        }
    }
}

/// Format-specific part of a message
#[derive(Debug, Clone, PartialEq)]
pub enum MessageKind {
    Text,
    Photo(Media),
    File(Media),
    Video { media: Media, duration: Duration },
}

/// An outbound message, independent of the channel it goes through
#[derive(Debug, Clone)]
pub struct Message {
    id: MessageId,
    text: String,
    send_date: DateTime<Local>,
    kind: MessageKind,
}

impl Message {
    fn new(text: impl Into<String>, kind: MessageKind) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::TextRequired);
        }

        Ok(Self {
            id: MessageId::new(),
            text,
            send_date: Local::now(),
            kind,
        })
    }

    /// Plain text message
    pub fn text(text: impl Into<String>) -> Result<Self> {
        Self::new(text, MessageKind::Text)
    }

    pub fn photo(
        text: impl Into<String>,
        file_path: impl Into<String>,
        format: &str,
    ) -> Result<Self> {
        Self::new(text, MessageKind::Photo(Media::new(file_path, format)))
    }

    pub fn file(
        text: impl Into<String>,
        file_path: impl Into<String>,
        format: &str,
    ) -> Result<Self> {
        Self::new(text, MessageKind::File(Media::new(file_path, format)))
    }

    pub fn video(
        text: impl Into<String>,
        file_path: impl Into<String>,
        format: &str,
        duration: Duration,
    ) -> Result<Self> {
        Self::new(
            text,
            MessageKind::Video {
                media: Media::new(file_path, format),
                duration,
            },
        )
    }

    /// Replace the timestamp captured at construction
    pub fn with_send_date(mut self, send_date: DateTime<Local>) -> Self {
        self.send_date = send_date;
        self
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn send_date(&self) -> DateTime<Local> {
        self.send_date
    }

    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }

    /// Tag used at the start of the payload preview
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            MessageKind::Text => "TEXT",
            MessageKind::Photo(_) => "PHOTO",
            MessageKind::File(_) => "FILE",
            MessageKind::Video { .. } => "VIDEO",
        }
    }

    /// Human-readable rendering of the message content
    ///
    /// Text messages show the full date, media messages only the time of day.
    pub fn build_payload_preview(&self) -> String {
        let label = self.kind_label();
        match &self.kind {
            MessageKind::Text => format!(
                "[{}] '{}' at {}",
                label,
                self.text,
                self.send_date.format("%d/%m/%Y %H:%M")
            ),
            MessageKind::Photo(media) | MessageKind::File(media) => format!(
                "[{}] '{}' ({}) file='{}' at {}",
                label,
                self.text,
                media.format,
                media.file_path,
                self.send_date.format("%H:%M")
            ),
            MessageKind::Video { media, duration } => format!(
                "[{}] '{}' ({}, {}s) file='{}' at {}",
                label,
                self.text,
                media.format,
                whole_seconds(*duration),
                media.file_path,
                self.send_date.format("%H:%M")
            ),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_payload_preview())
    }
}

fn whole_seconds(duration: Duration) -> u64 {
    duration.as_secs_f64().round() as u64
}
