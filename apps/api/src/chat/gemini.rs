/// Gemini Client — the single point of entry for all generative-text calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All hosted chat interactions MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use super::prompts::SYSTEM_INSTRUCTION;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all hosted chat calls.
pub const MODEL: &str = "gemini-2.5-flash";

pub const TOOL_STANDINGS: &str = "get_f1_standings";
pub const TOOL_PROJECTS: &str = "get_projects";
pub const TOOL_EXPERIENCE: &str = "get_experience";
pub const TOOL_SKILLS: &str = "get_skills";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no usable content")]
    EmptyContent,
}

/// One conversation turn on the Gemini wire: a role plus ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: &str) -> Self {
        Content {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    pub fn model_text(text: &str) -> Self {
        Content {
            role: "model".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// First text part, if any.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(|p| p.text.as_deref())
    }

    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionCall> {
        self.parts.iter().filter_map(|p| p.function_call.as_ref())
    }
}

/// A part is exactly one of: text, a tool-call request, or a tool result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

impl Part {
    pub fn text(text: &str) -> Self {
        Part {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn function_response(name: String, result: Value) -> Self {
        Part {
            function_response: Some(FunctionResponse {
                name,
                response: json!({ "result": result }),
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    system_instruction: SystemInstruction,
    tools: &'a [ToolDecl],
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: [Part; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDecl {
    function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Debug, Serialize)]
struct FunctionDeclaration {
    name: &'static str,
    description: &'static str,
    parameters: Value,
}

/// The fixed set of zero-argument data-lookup operations declared on every
/// call. Resolution happens in `crate::chat::resolve_tool`.
pub fn tool_declarations() -> Vec<ToolDecl> {
    let declare = |name, description| FunctionDeclaration {
        name,
        description,
        parameters: json!({ "type": "OBJECT", "properties": {} }),
    };

    vec![ToolDecl {
        function_declarations: vec![
            declare(
                TOOL_STANDINGS,
                "Get the current Formula 1 driver and constructor standings.",
            ),
            declare(
                TOOL_PROJECTS,
                "Get the list of Marco's technical projects and portfolio items.",
            ),
            declare(TOOL_EXPERIENCE, "Get Marco's work and leadership experience."),
            declare(TOOL_SKILLS, "Get Marco's technical skills list."),
        ],
    }]
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

/// Wraps the Gemini `generateContent` API. Absent from `AppState` when no
/// API key is configured, which routes chat to the local responder.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// One `generateContent` call with the fixed persona instruction and tool
    /// declarations attached. Returns the model turn; the tool round-trip is
    /// orchestrated by the caller, never here.
    ///
    /// No automatic retry: any failure selects the fallback responder instead.
    pub async fn generate(&self, contents: &[Content]) -> Result<Content, LlmError> {
        let tools = tool_declarations();
        let request_body = GenerateContentRequest {
            contents,
            system_instruction: SystemInstruction {
                parts: [Part::text(SYSTEM_INSTRUCTION)],
            },
            tools: &tools,
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let turn = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!(
            parts = turn.parts.len(),
            tool_calls = turn.function_calls().count(),
            "Gemini call succeeded"
        );

        Ok(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_gemini_wire_keys() {
        let contents = vec![Content::user_text("hello")];
        let tools = tool_declarations();
        let request = GenerateContentRequest {
            contents: &contents,
            system_instruction: SystemInstruction {
                parts: [Part::text(SYSTEM_INSTRUCTION)],
            },
            tools: &tools,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_some());
        assert!(value["tools"][0].get("functionDeclarations").is_some());
        assert_eq!(
            value["tools"][0]["functionDeclarations"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        // bare text parts must not carry null tool fields
        assert!(value["contents"][0]["parts"][0].get("functionCall").is_none());
    }

    #[test]
    fn test_response_parses_text_turn() {
        let raw = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Standing by." }] } }
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let turn = parsed.candidates[0].content.as_ref().unwrap();
        assert_eq!(turn.text(), Some("Standing by."));
        assert_eq!(turn.function_calls().count(), 0);
    }

    #[test]
    fn test_response_parses_function_call_turn() {
        let raw = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [
                    { "functionCall": { "name": "get_f1_standings", "args": {} } },
                    { "functionCall": { "name": "get_projects" } }
                ] } }
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let turn = parsed.candidates[0].content.as_ref().unwrap();
        let names: Vec<&str> = turn.function_calls().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["get_f1_standings", "get_projects"]);
        assert_eq!(turn.text(), None);
    }

    #[test]
    fn test_function_response_part_wraps_result() {
        let part = Part::function_response("get_skills".to_string(), json!(["C/C++"]));
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["functionResponse"]["name"], "get_skills");
        assert_eq!(value["functionResponse"]["response"]["result"][0], "C/C++");
    }

    #[test]
    fn test_empty_candidates_is_empty_content() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
