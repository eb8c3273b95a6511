use crate::domain::chatbot::{CHAT_FALLBACK, CHAT_RULES, ChatMessage, ChatReply};

/// Picks the canned reply for `message`. The first keyword found wins.
pub fn reply_to(message: &str) -> &'static str {
    let normalized = message.to_lowercase();
    CHAT_RULES
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(CHAT_FALLBACK)
}

/// Answers a chatbot request.
pub fn answer(message: &ChatMessage) -> ChatReply {
    ChatReply {
        reply: reply_to(&message.message).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(reply_to("Where is my ORDER?"), "Open Orders page to see your orders.");
        assert_eq!(reply_to("Any Webinars today"), "Visit /webinars to watch webinars.");
        assert_eq!(reply_to("next CLASS"), "Visit /classes to join learning sessions.");
        assert_eq!(
            reply_to("sos"),
            "Press the SOS button on the dashboard to call ambulance."
        );
    }

    #[test]
    fn earlier_rules_take_precedence() {
        assert_eq!(
            reply_to("can I order a webinar class?"),
            "Open Orders page to see your orders."
        );
        assert_eq!(
            reply_to("webinar or class"),
            "Visit /webinars to watch webinars."
        );
    }

    #[test]
    fn unknown_and_empty_messages_get_fallback() {
        assert_eq!(reply_to("hello"), CHAT_FALLBACK);
        assert_eq!(answer(&ChatMessage::default()).reply, CHAT_FALLBACK);
    }
}
