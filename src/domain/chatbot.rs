use serde::{Deserialize, Serialize};

/// Incoming chatbot message. A missing `message` is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub message: String,
}

/// Reply returned to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Keyword rules, checked in order against the lowercased message.
pub const CHAT_RULES: &[(&str, &str)] = &[
    ("order", "Open Orders page to see your orders."),
    ("webinar", "Visit /webinars to watch webinars."),
    ("class", "Visit /classes to join learning sessions."),
    (
        "sos",
        "Press the SOS button on the dashboard to call ambulance.",
    ),
];

/// Reply used when no keyword matches.
pub const CHAT_FALLBACK: &str = "I can help with orders, webinars, classes, SOS, and hygiene.";
