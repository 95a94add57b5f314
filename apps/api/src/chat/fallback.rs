//! Local fallback responder — the deterministic reply generator used when the
//! hosted generative call is unavailable or fails.
//!
//! Two stages, in order:
//! 1. Sync-script override: if the previous assistant reply was a step of the
//!    four-step networking script, the next scripted prompt is returned
//!    regardless of the new message (the final step also requires an
//!    affirmative token).
//! 2. Intent scoring: keyword-overlap count per intent, declaration order
//!    breaking ties, generic reply on a zero score.
//!
//! Invariant: `reply_now` is total — any input yields a non-empty string and
//! never errors. The handler relies on this when substituting for a failed
//! hosted call.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::{ChatMessage, ChatRole};
use crate::content::ContentStore;
use crate::reference::Standings;

pub const GENERIC_REPLY: &str = "I did not recognize that command pattern. Try inquiring about **F1 Standings**, **Projects**, or initiate **Sync**.";

pub const GREETING_REPLY: &str = "System Online. How can I assist you today?";

const IDENTITY_REPLY: &str =
    "I am J.A.R.V.I.S., Marco's digital interface. My code is elegant, my data is precise.";

const SKILLS_REPLY: &str = "**Core Stack:**\n\n• Embedded: RTOS, PCB, C/C++\n• Software: React, Python, TypeScript\n• Engineering: MATLAB, SimScale\n\nA hybrid hardware-software profile.";

// The four-step sync script. Each reply carries the marker phrase the next
// turn's phase detection keys on, so the texts double as protocol state.
pub const SYNC_INIT_REPLY: &str = "**LinkedIn Sync Protocol v2.1**\n\nI will optimize your network vector. \n\n**Phase 1: Initialization**\n\nWhat is your **Primary Professional Goal** for the next 6 months?";

pub const SYNC_EXPERTISE_REPLY: &str =
    "Goal mapped. \n\n**Phase 1 (Step 2)**: List 3-5 **Core Expertise** skills for this vector.";

pub const SYNC_AUDIENCE_REPLY: &str =
    "Expertise indexed. \n\n**Phase 1 (Final)**: Define **Target Audience** (Industry/Role).";

pub const SYNC_OUTREACH_REPLY: &str = "Targeting locked. \n\n**Phase 2: Automated Outreach**\n\nIdentified 25 high-value prospects. Execute outreach sequence?";

pub const SYNC_MONITOR_REPLY: &str = "Sequence initiated. \n\n**Phase 3: Monitoring** active. I will report on conversation metrics weekly. \n\n*J.A.R.V.I.S. Standing by.*";

/// Explicit state of the scripted networking conversation.
///
/// The chat wire protocol is stateless, so the phase is recovered from the
/// marker phrase in the last assistant reply — but only ever from assistant
/// replies, so a user-authored message containing a marker cannot trigger
/// the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    AwaitingGoal,
    AwaitingExpertise,
    AwaitingAudience,
    AwaitingConfirmation,
}

impl SyncPhase {
    /// Most-advanced marker wins: each scripted reply contains earlier
    /// markers' vocabulary, so detection checks in reverse script order.
    pub fn detect(last_model_reply: &str) -> Self {
        if last_model_reply.contains("Phase 2") {
            SyncPhase::AwaitingConfirmation
        } else if last_model_reply.contains("Target Audience") {
            SyncPhase::AwaitingAudience
        } else if last_model_reply.contains("Core Expertise") {
            SyncPhase::AwaitingExpertise
        } else if last_model_reply.contains("Primary Professional Goal") {
            SyncPhase::AwaitingGoal
        } else {
            SyncPhase::Idle
        }
    }

    /// The next scripted prompt, ignoring message content except at the final
    /// step, which requires an affirmative token before executing outreach.
    fn scripted_reply(self, message_lower: &str) -> Option<&'static str> {
        match self {
            SyncPhase::AwaitingGoal => Some(SYNC_EXPERTISE_REPLY),
            SyncPhase::AwaitingExpertise => Some(SYNC_AUDIENCE_REPLY),
            SyncPhase::AwaitingAudience => Some(SYNC_OUTREACH_REPLY),
            SyncPhase::AwaitingConfirmation
                if message_lower.contains("yes") || message_lower.contains("execute") =>
            {
                Some(SYNC_MONITOR_REPLY)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    LinkedinInit,
    F1Data,
    Projects,
    Experience,
    Skills,
    Contact,
    Identity,
    Greeting,
}

/// One intent with its trigger keywords and score weight.
/// Keywords are stored lowercase; matching is case-insensitive substring.
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub weight: u32,
}

/// Immutable responder configuration: the priority-ordered intent table and
/// the cosmetic latency contract. Passed in explicitly rather than living as
/// module state.
pub struct ResponderConfig {
    pub rules: Vec<IntentRule>,
    pub base_delay: Duration,
    pub per_char_delay: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        ResponderConfig {
            // Declaration order is priority order for ties. The first two
            // intents carry double weight.
            rules: vec![
                IntentRule {
                    intent: Intent::LinkedinInit,
                    keywords: &["linkedin", "sync", "network", "connect"],
                    weight: 2,
                },
                IntentRule {
                    intent: Intent::F1Data,
                    keywords: &["f1", "standings", "winning", "points", "championship"],
                    weight: 2,
                },
                IntentRule {
                    intent: Intent::Projects,
                    keywords: &["project", "portfolio", "built", "app", "code", "work"],
                    weight: 1,
                },
                IntentRule {
                    intent: Intent::Experience,
                    keywords: &["experience", "job", "resume", "career"],
                    weight: 1,
                },
                IntentRule {
                    intent: Intent::Skills,
                    keywords: &["skill", "tech", "stack", "cpp", "python"],
                    weight: 1,
                },
                IntentRule {
                    intent: Intent::Contact,
                    keywords: &["contact", "email", "reach"],
                    weight: 1,
                },
                IntentRule {
                    intent: Intent::Identity,
                    keywords: &["who are you", "bot", "ai", "jarvis"],
                    weight: 1,
                },
                IntentRule {
                    intent: Intent::Greeting,
                    keywords: &["hi", "hello", "hey"],
                    weight: 1,
                },
            ],
            base_delay: Duration::from_millis(600),
            per_char_delay: Duration::from_millis(5),
        }
    }
}

impl ResponderConfig {
    /// Simulated thinking time, proportional to input length. Cosmetic only:
    /// keeps the caller's loading indicator plausible.
    pub fn thinking_delay(&self, message: &str) -> Duration {
        self.base_delay + self.per_char_delay * message.chars().count() as u32
    }

    /// Highest weighted keyword-overlap score wins. Strict comparison keeps
    /// the earlier-declared rule on ties; a zero best score is no intent.
    fn classify(&self, message_lower: &str) -> Option<Intent> {
        let mut best_intent = None;
        let mut best_score = 0u32;
        for rule in &self.rules {
            let score = keyword_overlap(message_lower, rule.keywords) * rule.weight;
            if score > best_score {
                best_score = score;
                best_intent = Some(rule.intent);
            }
        }
        best_intent
    }
}

/// Count of keywords appearing as substrings. Each keyword contributes one
/// point regardless of how many times it occurs.
fn keyword_overlap(text_lower: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .filter(|kw| text_lower.contains(**kw))
        .count() as u32
}

/// Deterministic local reply generator backed by the static content store and
/// the fixed standings snapshot.
pub struct LocalResponder {
    content: Arc<ContentStore>,
    standings: Standings,
    config: ResponderConfig,
}

impl LocalResponder {
    pub fn new(content: Arc<ContentStore>, standings: Standings, config: ResponderConfig) -> Self {
        Self {
            content,
            standings,
            config,
        }
    }

    /// Full reply path including the cosmetic thinking delay.
    pub async fn reply(&self, history: &[ChatMessage], message: &str) -> String {
        tokio::time::sleep(self.config.thinking_delay(message)).await;
        self.reply_now(history, message)
    }

    /// Deterministic core. Total: every input yields a non-empty reply.
    pub fn reply_now(&self, history: &[ChatMessage], message: &str) -> String {
        let message_lower = message.to_lowercase();
        let last_model_reply = history
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Model)
            .map(|m| m.text.as_str())
            .unwrap_or("");

        let phase = SyncPhase::detect(last_model_reply);
        if let Some(scripted) = phase.scripted_reply(&message_lower) {
            debug!(?phase, "sync script override");
            return scripted.to_string();
        }

        match self.config.classify(&message_lower) {
            Some(Intent::LinkedinInit) => SYNC_INIT_REPLY.to_string(),
            Some(Intent::F1Data) => self.standings_reply(),
            Some(Intent::Projects) => self.projects_reply(),
            Some(Intent::Experience) => self.experience_reply(),
            Some(Intent::Skills) => SKILLS_REPLY.to_string(),
            Some(Intent::Contact) => {
                format!("Secure Channel: **{}**", self.content.contact_email())
            }
            Some(Intent::Identity) => IDENTITY_REPLY.to_string(),
            Some(Intent::Greeting) => GREETING_REPLY.to_string(),
            None => GENERIC_REPLY.to_string(),
        }
    }

    fn standings_reply(&self) -> String {
        let (driver, constructor) = match (
            self.standings.drivers.first(),
            self.standings.constructors.first(),
        ) {
            (Some(d), Some(c)) => (d, c),
            _ => return GENERIC_REPLY.to_string(),
        };
        format!(
            "**Live Telemetry:**\n\n• **Driver:** {} ({} PTS)\n• **Constructor:** {} ({} PTS)\n\nRed Bull remains the dominant variable.",
            driver.name, driver.points, constructor.team, constructor.points
        )
    }

    fn projects_reply(&self) -> String {
        let projects = self.content.projects();
        match projects.first() {
            Some(first) => format!(
                "Marco has deployed **{} major systems**.\n\nNotable: **{}** ({}).\n\nShall I pull the schematics?",
                projects.len(),
                first.title,
                first.category
            ),
            None => GENERIC_REPLY.to_string(),
        }
    }

    fn experience_reply(&self) -> String {
        let entries = self.content.experiences();
        if entries.len() < 2 {
            return GENERIC_REPLY.to_string();
        }
        format!(
            "Current Trajectory:\n\n1. **{}** - {}\n2. **{}** - {}\n\nHigh-impact technical roles.",
            entries[0].company, entries[0].role, entries[1].company, entries[1].role
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::standings_snapshot;

    fn responder() -> LocalResponder {
        LocalResponder::new(
            Arc::new(ContentStore::seeded()),
            standings_snapshot(),
            ResponderConfig::default(),
        )
    }

    fn model_msg(text: &str) -> ChatMessage {
        ChatMessage {
            role: ChatRole::Model,
            text: text.to_string(),
        }
    }

    fn user_msg(text: &str) -> ChatMessage {
        ChatMessage {
            role: ChatRole::User,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_reply_is_always_non_empty() {
        let responder = responder();
        let inputs = [
            "",
            "   ",
            "hi",
            "????",
            "ß∂ƒ©˙∆˚¬",
            "a very long message that keeps going and mentions nothing recognizable at all",
        ];
        for input in inputs {
            let reply = responder.reply_now(&[], input);
            assert!(!reply.is_empty(), "empty reply for input {input:?}");
        }
    }

    #[test]
    fn test_goal_marker_forces_expertise_step() {
        let responder = responder();
        let history = vec![user_msg("sync"), model_msg(SYNC_INIT_REPLY)];
        // content of the new message is irrelevant mid-script
        for message in ["grow my network", "f1 standings please", "zzzz"] {
            assert_eq!(responder.reply_now(&history, message), SYNC_EXPERTISE_REPLY);
        }
    }

    #[test]
    fn test_full_script_sequence() {
        let responder = responder();

        let init = responder.reply_now(&[], "sync my linkedin");
        assert_eq!(init, SYNC_INIT_REPLY);

        let step2 = responder.reply_now(&[model_msg(&init)], "land an F1 role");
        assert_eq!(step2, SYNC_EXPERTISE_REPLY);

        let step3 = responder.reply_now(&[model_msg(&step2)], "embedded, C++, control systems");
        assert_eq!(step3, SYNC_AUDIENCE_REPLY);

        let step4 = responder.reply_now(&[model_msg(&step3)], "motorsport recruiters");
        assert_eq!(step4, SYNC_OUTREACH_REPLY);

        let done = responder.reply_now(&[model_msg(&step4)], "yes, execute");
        assert_eq!(done, SYNC_MONITOR_REPLY);
    }

    #[test]
    fn test_final_step_requires_affirmative_token() {
        let responder = responder();
        let history = vec![model_msg(SYNC_OUTREACH_REPLY)];
        // a refusal drops out of the script and scores as a normal message
        let reply = responder.reply_now(&history, "absolutely not");
        assert_ne!(reply, SYNC_MONITOR_REPLY);
        let reply = responder.reply_now(&history, "execute");
        assert_eq!(reply, SYNC_MONITOR_REPLY);
    }

    #[test]
    fn test_script_completes_back_to_idle() {
        assert_eq!(SyncPhase::detect(SYNC_MONITOR_REPLY), SyncPhase::Idle);
    }

    #[test]
    fn test_phase_detection_per_script_step() {
        assert_eq!(SyncPhase::detect(SYNC_INIT_REPLY), SyncPhase::AwaitingGoal);
        assert_eq!(
            SyncPhase::detect(SYNC_EXPERTISE_REPLY),
            SyncPhase::AwaitingExpertise
        );
        assert_eq!(
            SyncPhase::detect(SYNC_AUDIENCE_REPLY),
            SyncPhase::AwaitingAudience
        );
        assert_eq!(
            SyncPhase::detect(SYNC_OUTREACH_REPLY),
            SyncPhase::AwaitingConfirmation
        );
        assert_eq!(SyncPhase::detect(""), SyncPhase::Idle);
    }

    #[test]
    fn test_user_authored_marker_cannot_trigger_script() {
        let responder = responder();
        let history = vec![user_msg("What is your Primary Professional Goal?")];
        let reply = responder.reply_now(&history, "zzzz");
        assert_eq!(reply, GENERIC_REPLY);
    }

    #[test]
    fn test_standings_inquiry_includes_top_driver() {
        let responder = responder();
        for message in ["what are the f1 standings?", "Who is winning?"] {
            let reply = responder.reply_now(&[], message);
            assert!(reply.contains("Max Verstappen"), "missing driver: {reply}");
            assert!(reply.contains("25 PTS"), "missing points: {reply}");
        }
    }

    #[test]
    fn test_unmatched_input_returns_generic_reply() {
        let responder = responder();
        assert_eq!(responder.reply_now(&[], "zzzz qqqq"), GENERIC_REPLY);
    }

    #[test]
    fn test_tied_scores_prefer_declaration_order() {
        let responder = responder();
        // "code" scores 1 for Projects, "job" scores 1 for Experience;
        // Projects is declared first and must win the tie.
        let reply = responder.reply_now(&[], "code job");
        assert!(reply.contains("major systems"), "unexpected reply: {reply}");
    }

    #[test]
    fn test_greeting_with_empty_history() {
        let responder = responder();
        assert_eq!(responder.reply_now(&[], "hi"), GREETING_REPLY);
    }

    #[test]
    fn test_projects_inquiry_interpolates_store_data() {
        let responder = responder();
        let reply = responder.reply_now(&[], "Tell me about your projects");
        assert!(reply.contains("6 major systems"), "bad count: {reply}");
        assert!(
            reply.contains("Motorsport Vehicle Digital Twin"),
            "missing first project: {reply}"
        );
    }

    #[test]
    fn test_experience_inquiry_lists_first_two_entries() {
        let responder = responder();
        let reply = responder.reply_now(&[], "what is your experience?");
        assert!(reply.contains("BlackRock"));
        assert!(reply.contains("New Jersey Institute of Technology"));
    }

    #[test]
    fn test_contact_reply_carries_direct_address() {
        let responder = responder();
        let reply = responder.reply_now(&[], "how do I reach you");
        assert!(reply.contains("mabautista358@gmail.com"));
    }

    #[test]
    fn test_high_priority_intent_outweighs_ties() {
        let responder = responder();
        // "f1" (weight 2) vs "project" (weight 1): F1 wins despite one keyword each
        let reply = responder.reply_now(&[], "f1 project");
        assert!(reply.contains("Live Telemetry"), "unexpected reply: {reply}");
    }

    #[test]
    fn test_thinking_delay_scales_with_length() {
        let config = ResponderConfig::default();
        let short = config.thinking_delay("hi");
        let long = config.thinking_delay(&"x".repeat(200));
        assert!(long > short);
        assert_eq!(short, Duration::from_millis(610));
        assert_eq!(long, Duration::from_millis(1600));
    }
}
