//! Payload builders.
//!
//! Four envelope shapes cover every answer the skill gives. Each builder logs
//! the assembled envelope before handing it back.

use crate::requests::SessionAttributes;
use crate::responses::{Card, Directive, OutputSpeech, ResponseBody, ResponseEnvelope, RESPONSE_VERSION};

/// Wrap a number so the platform voice reads it digit by digit
/// ("five zero nine ..." rather than "five billion ...").
pub fn say_digits(number: impl std::fmt::Display) -> String {
    format!("<say-as interpret-as=\"digits\">{}</say-as>", number)
}

/// Escape text that will be interpolated into SSML markup.
pub fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Terminal response with plain-text speech and a simple card.
pub fn plain_response(title: &str, body: &str) -> ResponseEnvelope {
    build(
        ResponseBody {
            output_speech: Some(OutputSpeech::PlainText {
                text: body.to_string(),
            }),
            card: Some(simple_card(title, body)),
            should_end_session: true,
            directives: Vec::new(),
        },
        SessionAttributes::new(),
    )
}

/// Terminal response whose speech is `body` wrapped in `<speak>`.
///
/// `body` is used as markup as-is; callers escape any user text they splice in.
pub fn ssml_response(title: &str, body: &str) -> ResponseEnvelope {
    build(
        ResponseBody {
            output_speech: Some(OutputSpeech::Ssml {
                ssml: format!("<speak>{}</speak>", body),
            }),
            card: Some(simple_card(title, body)),
            should_end_session: true,
            directives: Vec::new(),
        },
        SessionAttributes::new(),
    )
}

/// Keep the session open and carry `session_attributes` into the next turn.
pub fn continuation_response(
    title: &str,
    body: &str,
    session_attributes: SessionAttributes,
) -> ResponseEnvelope {
    build(
        ResponseBody {
            output_speech: Some(OutputSpeech::PlainText {
                text: body.to_string(),
            }),
            card: Some(simple_card(title, body)),
            should_end_session: false,
            directives: Vec::new(),
        },
        session_attributes,
    )
}

/// Let the platform's dialog manager keep collecting slots.
pub fn delegate_response() -> ResponseEnvelope {
    build(
        ResponseBody {
            output_speech: None,
            card: None,
            should_end_session: false,
            directives: vec![Directive::DialogDelegate],
        },
        SessionAttributes::new(),
    )
}

fn simple_card(title: &str, body: &str) -> Card {
    Card::Simple {
        title: title.to_string(),
        content: body.to_string(),
    }
}

fn build(response: ResponseBody, session_attributes: SessionAttributes) -> ResponseEnvelope {
    let envelope = ResponseEnvelope {
        version: RESPONSE_VERSION.to_string(),
        session_attributes,
        response,
    };
    match serde_json::to_string(&envelope) {
        Ok(payload) => tracing::debug!(payload = %payload, "Built response envelope"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize response envelope for logging"),
    }
    envelope
}
