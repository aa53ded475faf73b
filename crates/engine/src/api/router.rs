//! Intent router.
//!
//! Classifies the request type, dispatches intent requests by intent kind,
//! and converts handled errors into speech. Only fatal errors reach the caller.

use groupcontact_domain::{DialogState, IntentKind};
use groupcontact_shared::{Intent, ResponseEnvelope, SessionAttributes, SkillEvent, SkillRequest};

use crate::app::App;
use crate::use_cases::SkillError;

/// Answer one platform event.
pub async fn handle_event(app: &App, event: SkillEvent) -> Result<ResponseEnvelope, SkillError> {
    let SkillEvent { request, session } = event;
    let request_id = request.request_id().map(str::to_owned);

    let outcome = match request {
        SkillRequest::LaunchRequest { .. } => {
            tracing::info!(request_id = ?request_id, "LaunchRequest received");
            Ok(app.use_cases.launch.execute())
        }

        SkillRequest::IntentRequest {
            dialog_state,
            intent,
            ..
        } => {
            tracing::info!(
                request_id = ?request_id,
                intent = %intent.name,
                dialog_state = ?dialog_state,
                "IntentRequest received"
            );
            dispatch_intent(app, dialog_state, &intent, &session).await
        }

        SkillRequest::Unsupported { request_type } => {
            tracing::info!(
                request_id = ?request_id,
                request_type = %request_type,
                "Unsupported request received"
            );
            Err(SkillError::UnsupportedRequestType(request_type))
        }
    };

    outcome.or_else(|e| e.into_spoken(&session))
}

/// Answer a raw JSON event. Events that do not match the inbound schema are
/// `MalformedEvent`.
pub async fn handle_json(
    app: &App,
    event: serde_json::Value,
) -> Result<ResponseEnvelope, SkillError> {
    let event: SkillEvent = serde_json::from_value(event)
        .map_err(|e| SkillError::MalformedEvent(e.to_string()))?;
    handle_event(app, event).await
}

async fn dispatch_intent(
    app: &App,
    dialog_state: Option<DialogState>,
    intent: &Intent,
    session: &SessionAttributes,
) -> Result<ResponseEnvelope, SkillError> {
    match intent.kind() {
        // Custom intents
        IntentKind::FindByName => app.use_cases.find_by_name.execute(intent, session).await,
        IntentKind::SetInfo => app.use_cases.set_info.execute(dialog_state, intent).await,

        // Required platform intents
        IntentKind::Cancel => Ok(app.use_cases.builtin.cancel()),
        IntentKind::Help => Ok(app.use_cases.builtin.help()),
        IntentKind::Stop => Ok(app.use_cases.builtin.stop()),

        IntentKind::Unknown(name) => Err(SkillError::UnknownIntent(name)),
    }
}
