//! Conversational Responder — given the running message history and one new
//! message, produce a single reply string.
//!
//! Primary path: one hosted Gemini call carrying the fixed persona
//! instruction and the four zero-argument data-lookup tools. If the model
//! requests tools, each is resolved against the local store and the
//! augmented conversation is resubmitted exactly once.
//!
//! Fallback path: the deterministic `LocalResponder`, selected when no API
//! key is configured or when the hosted call fails for any reason.

pub mod fallback;
pub mod gemini;
pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::content::ContentStore;
use crate::reference::StandingsFeed;
use crate::state::AppState;
use self::gemini::{Content, GeminiClient, LlmError, Part};

/// The generative backend seam for the primary chat path. Carried in
/// `AppState` as `Option<Arc<dyn ChatBackend>>`; `None` means no API key is
/// configured and every turn uses the local responder.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn generate(&self, contents: &[Content]) -> Result<Content, LlmError>;
}

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn generate(&self, contents: &[Content]) -> Result<Content, LlmError> {
        GeminiClient::generate(self, contents).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the chat session. History is append-only, insertion-ordered,
/// and lives only for the session — the server holds no chat state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Which path produced the reply — reported to the client for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Gemini,
    Local,
}

/// Produces one reply for the new message. Any hosted-path error is caught
/// here and substituted with the infallible local responder.
pub async fn respond(
    state: &AppState,
    history: &[ChatMessage],
    message: &str,
) -> (String, ReplySource) {
    if let Some(llm) = &state.llm {
        match hosted_reply(
            llm.as_ref(),
            &state.content,
            state.feed.as_ref(),
            history,
            message,
        )
        .await
        {
            Ok(reply) => return (reply, ReplySource::Gemini),
            Err(e) => warn!("hosted chat call failed, using local responder: {e}"),
        }
    } else {
        debug!("no generative API key configured; using local responder");
    }

    (state.responder.reply(history, message).await, ReplySource::Local)
}

/// The hosted round-trip: request → optional tool calls → resolve → one
/// follow-up request. Capped at a single tool round; a second tool request
/// from the model surfaces as `EmptyContent` and falls back.
async fn hosted_reply(
    llm: &dyn ChatBackend,
    content: &ContentStore,
    feed: &dyn StandingsFeed,
    history: &[ChatMessage],
    message: &str,
) -> Result<String, LlmError> {
    let mut contents = to_contents(history);
    contents.push(Content::user_text(message));

    let model_turn = llm.generate(&contents).await?;

    let calls: Vec<gemini::FunctionCall> = model_turn.function_calls().cloned().collect();
    if calls.is_empty() {
        return model_turn
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent);
    }

    let mut responses = Vec::with_capacity(calls.len());
    for call in &calls {
        let result = resolve_tool(&call.name, content, feed).await;
        responses.push(Part::function_response(call.name.clone(), result));
    }

    contents.push(model_turn);
    contents.push(Content {
        role: "user".to_string(),
        parts: responses,
    });

    let final_turn = llm.generate(&contents).await?;
    final_turn
        .text()
        .map(str::to_owned)
        .ok_or(LlmError::EmptyContent)
}

fn to_contents(history: &[ChatMessage]) -> Vec<Content> {
    history
        .iter()
        .map(|m| match m.role {
            ChatRole::User => Content::user_text(&m.text),
            ChatRole::Model => Content::model_text(&m.text),
        })
        .collect()
}

/// Resolves one declared tool against the local data store. Unknown names and
/// feed errors degrade to an error object in the tool result rather than
/// failing the chat turn.
async fn resolve_tool(name: &str, content: &ContentStore, feed: &dyn StandingsFeed) -> Value {
    match name {
        gemini::TOOL_STANDINGS => match feed.standings().await {
            Ok(standings) => serde_json::to_value(standings).unwrap_or_default(),
            Err(e) => {
                warn!("standings feed failed during tool resolution: {e}");
                json!({ "error": "standings unavailable" })
            }
        },
        gemini::TOOL_PROJECTS => serde_json::to_value(content.projects()).unwrap_or_default(),
        gemini::TOOL_EXPERIENCE => serde_json::to_value(content.experiences()).unwrap_or_default(),
        gemini::TOOL_SKILLS => serde_json::to_value(content.skills()).unwrap_or_default(),
        other => {
            warn!("model requested unknown tool {other:?}");
            json!({ "error": format!("unknown tool: {other}") })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use tokio::sync::RwLock;

    use super::ChatBackend;
    use crate::chat::fallback::{LocalResponder, ResponderConfig};
    use crate::config::Config;
    use crate::contact::HttpFormRelay;
    use crate::content::ContentStore;
    use crate::discovery::StaticProjectDiscovery;
    use crate::reference::{standings_snapshot, StaticStandingsFeed};
    use crate::state::AppState;
    use crate::sync::{StaticProfileLookup, SyncState};

    /// Fully wired state with static collaborators. The relay address is
    /// unroutable and must never be contacted by chat tests.
    pub(crate) fn app_state(llm: Option<Arc<dyn ChatBackend>>) -> AppState {
        let content = Arc::new(ContentStore::seeded());
        AppState {
            content: content.clone(),
            feed: Arc::new(StaticStandingsFeed),
            llm,
            responder: Arc::new(LocalResponder::new(
                content.clone(),
                standings_snapshot(),
                ResponderConfig::default(),
            )),
            relay: Arc::new(HttpFormRelay::new("http://127.0.0.1:9".to_string())),
            lookup: Arc::new(StaticProfileLookup),
            discovery: Arc::new(StaticProjectDiscovery),
            profile: Arc::new(RwLock::new(SyncState::new(content.profile().clone()))),
            config: Config {
                gemini_api_key: None,
                form_relay_url: "http://127.0.0.1:9".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::StaticStandingsFeed;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    fn store() -> Arc<ContentStore> {
        Arc::new(ContentStore::seeded())
    }

    /// Replays a fixed sequence of model turns and records every request.
    struct ScriptedBackend {
        turns: Mutex<VecDeque<Content>>,
        requests: Mutex<Vec<Vec<Content>>>,
    }

    impl ScriptedBackend {
        fn new(turns: Vec<Content>) -> Self {
            Self {
                turns: Mutex::new(turns.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn generate(&self, contents: &[Content]) -> Result<Content, LlmError> {
            self.requests.lock().unwrap().push(contents.to_vec());
            self.turns
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(LlmError::EmptyContent)
        }
    }

    fn tool_turn(names: &[&str]) -> Content {
        Content {
            role: "model".to_string(),
            parts: names
                .iter()
                .map(|name| Part {
                    function_call: Some(gemini::FunctionCall {
                        name: name.to_string(),
                        args: Value::Null,
                    }),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_hosted_reply_resolves_one_tool_round() {
        let backend = ScriptedBackend::new(vec![
            tool_turn(&[gemini::TOOL_PROJECTS]),
            Content::model_text("Six major systems deployed."),
        ]);

        let reply = hosted_reply(&backend, &store(), &StaticStandingsFeed, &[], "projects?")
            .await
            .unwrap();
        assert_eq!(reply, "Six major systems deployed.");
        assert_eq!(backend.request_count(), 2);

        // follow-up request must end with the resolved tool result as a user turn
        let requests = backend.requests.lock().unwrap();
        let last = requests[1].last().unwrap();
        assert_eq!(last.role, "user");
        assert_eq!(
            last.parts[0].function_response.as_ref().unwrap().name,
            gemini::TOOL_PROJECTS
        );
    }

    #[tokio::test]
    async fn test_second_tool_request_is_not_resolved() {
        let backend = ScriptedBackend::new(vec![
            tool_turn(&[gemini::TOOL_PROJECTS]),
            tool_turn(&[gemini::TOOL_SKILLS]),
        ]);

        let result = hosted_reply(&backend, &store(), &StaticStandingsFeed, &[], "projects?").await;
        assert!(matches!(result, Err(LlmError::EmptyContent)));
        // exactly two requests ever: the tool round-trip happens once
        assert_eq!(backend.request_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_tool_request_falls_back_to_local() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            tool_turn(&[gemini::TOOL_PROJECTS]),
            tool_turn(&[gemini::TOOL_SKILLS]),
        ]));
        let state = testing::app_state(Some(backend.clone() as Arc<dyn ChatBackend>));

        let (reply, source) = respond(&state, &[], "show me your projects").await;
        assert_eq!(source, ReplySource::Local);
        assert!(!reply.is_empty());
        assert_eq!(backend.request_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_error_substitutes_local_responder() {
        struct BrokenBackend;

        #[async_trait]
        impl ChatBackend for BrokenBackend {
            async fn generate(&self, _contents: &[Content]) -> Result<Content, LlmError> {
                Err(LlmError::Api {
                    status: 500,
                    message: "internal".to_string(),
                })
            }
        }

        let state = testing::app_state(Some(Arc::new(BrokenBackend)));
        let (reply, source) = respond(&state, &[], "hi").await;
        assert_eq!(source, ReplySource::Local);
        assert_eq!(reply, fallback::GREETING_REPLY);
    }

    #[tokio::test]
    async fn test_resolve_tool_standings() {
        let value = resolve_tool(gemini::TOOL_STANDINGS, &store(), &StaticStandingsFeed).await;
        assert_eq!(value["drivers"][0]["name"], "Max Verstappen");
    }

    #[tokio::test]
    async fn test_resolve_tool_projects_and_experience() {
        let content = store();
        let projects = resolve_tool(gemini::TOOL_PROJECTS, &content, &StaticStandingsFeed).await;
        assert_eq!(projects.as_array().unwrap().len(), 6);

        let experience =
            resolve_tool(gemini::TOOL_EXPERIENCE, &content, &StaticStandingsFeed).await;
        assert_eq!(experience.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_resolve_tool_unknown_name_degrades() {
        let value = resolve_tool("get_weather", &store(), &StaticStandingsFeed).await;
        assert!(value.get("error").is_some());
    }

    #[test]
    fn test_history_maps_to_wire_roles() {
        let history = vec![
            ChatMessage {
                role: ChatRole::User,
                text: "hi".to_string(),
            },
            ChatMessage {
                role: ChatRole::Model,
                text: "System Online.".to_string(),
            },
        ];
        let contents = to_contents(&history);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[1].text(), Some("System Online."));
    }

    #[test]
    fn test_chat_message_wire_shape() {
        let msg: ChatMessage = serde_json::from_str(r#"{"role":"model","text":"ok"}"#).unwrap();
        assert_eq!(msg.role, ChatRole::Model);
    }
}
