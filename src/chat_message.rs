use chrono::Local;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

use crate::constants::{AVATAR_GLYPH, SENDER_LABEL, TIMESTAMP_FORMAT};

/// Who a transcript entry is attributed to. `UserEcho` is the assistant
/// bubble that repeats the user's input back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Assistant,
    UserEcho,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: Option<String>,
    pub has_avatar: bool,
}

impl ChatMessage {
    /// Assistant message with avatar, sender label, and a timestamp
    /// formatted once at construction time.
    pub fn assistant_headed(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: Some(now_timestamp()),
            has_avatar: true,
        }
    }

    /// Assistant message rendered without avatar or header.
    pub fn assistant_plain(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: None,
            has_avatar: false,
        }
    }

    /// The echo bubble: trimmed input text, no header. Embedded newlines
    /// are kept as-is.
    pub fn echo(text: &str) -> Self {
        Self {
            sender: Sender::UserEcho,
            text: text.trim().to_string(),
            timestamp: None,
            has_avatar: false,
        }
    }

    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.base_style();

        if self.has_avatar {
            self.render_header(&mut lines, base_style);
        }

        self.render_content(&mut lines, width, base_style);

        lines
    }

    fn base_style(&self) -> Style {
        // Echo bubbles share the assistant presentation; the sender
        // distinction lives in the data model only.
        Style::default().fg(Color::Rgb(144, 238, 144))
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let mut spans = vec![
            Span::styled(format!("{} ", AVATAR_GLYPH), style),
            Span::styled(
                SENDER_LABEL.to_string(),
                style.add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(ref timestamp) = self.timestamp {
            spans.push(Span::styled("  ".to_string(), style));
            spans.push(Span::styled(
                timestamp.clone(),
                style.add_modifier(Modifier::DIM),
            ));
        }

        lines.push(Line::from(spans));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, width: u16, style: Style) {
        let wrap_width = (width as usize).saturating_sub(4).max(1);

        for raw_line in self.text.lines() {
            if raw_line.is_empty() {
                lines.push(Line::from(""));
                continue;
            }

            for wrapped_line in wrap(raw_line, wrap_width) {
                lines.push(Line::from(Span::styled(
                    wrapped_line.to_string(),
                    style,
                )));
            }
        }
    }
}

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_timestamp_format_en_us() {
        let dt = NaiveDate::from_ymd_opt(2025, 8, 5)
            .unwrap()
            .and_hms_opt(15, 7, 0)
            .unwrap();
        assert_eq!(dt.format(TIMESTAMP_FORMAT).to_string(), "Aug 5, 2025, 3:07 PM");
    }

    #[test]
    fn test_echo_trims_outer_whitespace_only() {
        let msg = ChatMessage::echo("  Hello world  ");
        assert_eq!(msg.text, "Hello world");
        assert_eq!(msg.sender, Sender::UserEcho);
        assert!(!msg.has_avatar);
        assert!(msg.timestamp.is_none());
    }

    #[test]
    fn test_echo_preserves_embedded_newline() {
        let msg = ChatMessage::echo("line1\nline2");
        assert_eq!(msg.text, "line1\nline2");

        let lines = msg.render(80);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_headed_message_has_avatar_and_timestamp() {
        let msg = ChatMessage::assistant_headed("hello");
        assert!(msg.has_avatar);
        assert!(msg.timestamp.is_some());

        let lines = msg.render(80);
        // Header line plus one content line
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_plain_message_renders_content_only() {
        let msg = ChatMessage::assistant_plain("hello");
        let lines = msg.render(80);
        assert_eq!(lines.len(), 1);
    }
}
