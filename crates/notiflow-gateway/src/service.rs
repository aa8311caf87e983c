use crate::config::{Config, DispatchEntry};
use anyhow::{Context, Result};
use notiflow_channel::{Channel, ChannelFactory, ChannelType};
use notiflow_types::{Message, ValidationError};
use std::io::{self, Write};
use std::time::Duration;
use tracing::info;

/// Printed after the last send
const COMPLETION_NOTICE: &str = "All notifications dispatched.";

const SAMPLE_PHONE: &str = "+5511999998888";

/// Dispatch service - main orchestrator
pub struct DispatchService {
    config: Config,
}

impl DispatchService {
    /// Create a new dispatch service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the dispatch service against stdout
    pub fn run(self) -> Result<()> {
        // Initialize logging
        notiflow_logging::init_logging(&self.config.logging.level)?;
        info!("Starting Notiflow dispatch");

        let stdout = io::stdout();
        let sent = self.dispatch(&mut stdout.lock())?;

        info!("Dispatch finished: {} sends", sent);
        Ok(())
    }

    /// Build every channel and message, then send them all to `out`
    ///
    /// Nothing is written if any entry fails validation.
    pub fn dispatch<W: Write>(&self, out: &mut W) -> Result<usize> {
        let plan = if self.config.dispatch.is_empty() {
            info!("No dispatch entries configured, using sample plan");
            sample_plan()?
        } else {
            configured_plan(&self.config.dispatch)?
        };

        for (channel, message) in &plan {
            channel.send_to(message, out)?;
        }
        writeln!(out, "{}", COMPLETION_NOTICE)?;

        Ok(plan.len())
    }
}

fn configured_plan(entries: &[DispatchEntry]) -> Result<Vec<(Channel, Message)>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let channel = ChannelFactory::create_named(&entry.channel, &entry.recipient)
                .with_context(|| format!("dispatch entry {}", i + 1))?;
            let message = entry
                .message
                .build()
                .with_context(|| format!("dispatch entry {}", i + 1))?;
            Ok((channel, message))
        })
        .collect()
}

/// Built-in plan: one text message across every channel, then one of each
/// media kind
fn sample_plan() -> std::result::Result<Vec<(Channel, Message)>, ValidationError> {
    let hello = Message::text("Hello")?;
    let photo = Message::photo("Team photo", "team.JPG", "JPG")?;
    let report = Message::file("Quarterly report", "report.pdf", "PDF")?;
    let trailer = Message::video("Trailer", "video.mp4", "MP4", Duration::from_secs(15))?;

    let whatsapp = ChannelFactory::create(ChannelType::WhatsApp, SAMPLE_PHONE)?;
    let telegram = ChannelFactory::create(ChannelType::Telegram, "@clara_dev")?;
    let telegram_phone = ChannelFactory::create(ChannelType::Telegram, SAMPLE_PHONE)?;
    let facebook = ChannelFactory::create(ChannelType::Facebook, "clara.dev")?;
    let instagram = ChannelFactory::create(ChannelType::Instagram, "@clara.dev")?;

    Ok(vec![
        (whatsapp.clone(), hello.clone()),
        (telegram, hello.clone()),
        (facebook, hello.clone()),
        (instagram.clone(), hello),
        (instagram, photo),
        (telegram_phone, report),
        (whatsapp, trailer),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageSpec;

    fn entry(channel: &str, recipient: &str, message: MessageSpec) -> DispatchEntry {
        DispatchEntry {
            channel: channel.to_string(),
            recipient: recipient.to_string(),
            message,
        }
    }

    fn text(text: &str) -> MessageSpec {
        MessageSpec::Text {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_sample_plan_output() {
        let service = DispatchService::new(Config::default());
        let mut out = Vec::new();
        let sent = service.dispatch(&mut out).unwrap();
        assert_eq!(sent, 7);

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("[WhatsApp] Sending to +5511999998888: [TEXT] 'Hello' at "));
        assert!(lines[1].starts_with("[Telegram] Sending to @clara_dev: [TEXT] 'Hello'"));
        assert!(lines[2].starts_with("[Facebook] Sending to @clara.dev: [TEXT] 'Hello'"));
        assert!(lines[3].starts_with("[Instagram] Sending to @clara.dev: [TEXT] 'Hello'"));
        assert!(lines[4]
            .starts_with("[Instagram] Sending to @clara.dev: [PHOTO] 'Team photo' (jpg) file='team.JPG' at "));
        assert!(lines[5].starts_with(
            "[Telegram] Sending to +5511999998888: [FILE] 'Quarterly report' (pdf) file='report.pdf' at "
        ));
        assert!(lines[6].starts_with(
            "[WhatsApp] Sending to +5511999998888: [VIDEO] 'Trailer' (mp4, 15s) file='video.mp4' at "
        ));
        assert_eq!(lines[7], COMPLETION_NOTICE);
    }

    #[test]
    fn test_sample_plan_channels() {
        let plan = sample_plan().unwrap();
        let targets: Vec<(&str, &str)> = plan
            .iter()
            .map(|(channel, _)| (channel.name(), channel.recipient()))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("WhatsApp", SAMPLE_PHONE),
                ("Telegram", "@clara_dev"),
                ("Facebook", "@clara.dev"),
                ("Instagram", "@clara.dev"),
                ("Instagram", "@clara.dev"),
                ("Telegram", SAMPLE_PHONE),
                ("WhatsApp", SAMPLE_PHONE),
            ]
        );
        let labels: Vec<&str> = plan.iter().map(|(_, m)| m.kind_label()).collect();
        assert_eq!(labels, ["TEXT", "TEXT", "TEXT", "TEXT", "PHOTO", "FILE", "VIDEO"]);
    }

    #[test]
    fn test_configured_plan_output() {
        let config = Config {
            dispatch: vec![
                entry("instagram", "clara.dev", text("Hi")),
                entry("Telegram", "@clara_dev", text("Hey")),
            ],
            ..Config::default()
        };

        let mut out = Vec::new();
        let sent = DispatchService::new(config).dispatch(&mut out).unwrap();
        assert_eq!(sent, 2);

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("[Instagram] Sending to @clara.dev: [TEXT] 'Hi'"));
        assert!(lines[1].starts_with("[Telegram] Sending to @clara_dev: [TEXT] 'Hey'"));
        assert_eq!(lines[2], COMPLETION_NOTICE);
    }

    #[test]
    fn test_invalid_entry_aborts_before_output() {
        let config = Config {
            dispatch: vec![
                entry("whatsapp", "+5511999998888", text("ok")),
                entry("telegram", "ab", text("too short")),
            ],
            ..Config::default()
        };

        let mut out = Vec::new();
        let err = DispatchService::new(config).dispatch(&mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(err.to_string(), "dispatch entry 2");
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::InvalidRecipient { .. })
        ));
    }

    #[test]
    fn test_unknown_channel_rejected() {
        let config = Config {
            dispatch: vec![entry("carrier-pigeon", "@clara", text("coo"))],
            ..Config::default()
        };

        let err = DispatchService::new(config)
            .dispatch(&mut Vec::new())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InvalidChannel("carrier-pigeon".to_string()))
        );
    }
}
