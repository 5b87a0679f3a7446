// UI Constants
pub const PANEL_TITLE: &str = "Autodesk Assistant";
pub const SENDER_LABEL: &str = "Autodesk Assistant";
pub const AVATAR_GLYPH: &str = "☰";
pub const EXAMPLES_AFFORDANCE: &str = "Examples   ▼";

// Canned assistant messages shown on load and on reset
pub const GREETING_TEXT: &str = "Hi, I'm Autodesk Assistant. I can help with product selection, purchasing, and support. If needed, you can also request an agent at any time via the input bar.";
pub const DISCLAIMER_TEXT: &str = "I use AI to recommend solutions. I'm still learning, so please leave feedback to help me improve my answers.";
pub const PROMPT_TEXT: &str = "Please describe your question in detail using complete sentences, and mention product name and version, if applicable.";

// Input placeholder: the hint replaces the default once, 2s after startup
pub const DEFAULT_PLACEHOLDER: &str = "Type your question here...";
pub const HINT_PLACEHOLDER: &str = "Try typing something and send it to see AI assistance!";

// Timing constants (ms) — externally observable widget contract
pub const PLACEHOLDER_HINT_DELAY_MS: u64 = 2000;
pub const MINIMIZE_RESTORE_MS: u64 = 500;
pub const CLOSE_RESTORE_MS: u64 = 1000;

// Visual pulse parameters
pub const MINIMIZE_SCALE: f32 = 0.8;
pub const MINIMIZE_OPACITY: f32 = 0.5;

// en-US timestamp, e.g. "Aug 5, 2025, 3:07 PM"
pub const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";
