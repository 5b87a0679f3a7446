use crate::chat_message::ChatMessage;
use crate::constants::{DISCLAIMER_TEXT, EXAMPLES_AFFORDANCE, GREETING_TEXT, PROMPT_TEXT};

/// The ordered list of rendered chat messages. Cleared and rebuilt
/// wholesale on reset and on every echoed response; never appended to
/// beyond its initial construction.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// The three canned assistant messages: greeting with avatar and
    /// timestamp, disclaimer, and the prompt-for-detail with the
    /// Examples affordance.
    pub fn canned() -> Self {
        Self {
            messages: vec![
                ChatMessage::assistant_headed(GREETING_TEXT),
                ChatMessage::assistant_plain(DISCLAIMER_TEXT),
                ChatMessage::assistant_plain(format!(
                    "{}\n\n{}",
                    PROMPT_TEXT, EXAMPLES_AFFORDANCE
                )),
            ],
        }
    }

    /// Echo mode: drops the whole history and leaves the single echo
    /// bubble as the only entry.
    pub fn replace_with_echo(&mut self, text: &str) {
        self.messages.clear();
        self.messages.push(ChatMessage::echo(text));
    }

    pub fn reset(&mut self) {
        *self = Transcript::canned();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::canned()
    }
}
