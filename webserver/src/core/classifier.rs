//! Prompt classifier
//!
//! Best-effort keyword heuristic, not a parser: case-insensitive substring
//! search over an ordered intent list, first match wins. Never fails; an
//! unmatched prompt yields the generic reply with no files.

use shared::{AppPlan, FileBundle, GenerateResponse, RequestType};

use crate::core::templates::{INTENTS, Intent, generic_plan};

/// Verbs that turn a chat message into a build turn when an intent also matches
const BUILD_VERBS: [&str; 4] = ["build", "create", "make", "generate"];

const GENERIC_REPLY: &str =
    "I can help you build that! Tell me what kind of app you have in mind, for example a calculator or a todo app.";

/// How a request was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Chat,
    Plan,
    Build,
}

/// Result of classifying a prompt; pure, the caller materializes `files`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub turn: Turn,
    pub intent: Option<Intent>,
    pub response: String,
    pub files: FileBundle,
    pub app_plan: Option<AppPlan>,
    pub show_build_button: Option<bool>,
}

impl Classification {
    pub fn into_response(self) -> GenerateResponse {
        GenerateResponse {
            response: self.response,
            success: true,
            files: self.files,
            show_build_button: self.show_build_button,
            app_plan: self.app_plan,
        }
    }
}

/// Keyword classifier over an ordered intent list
#[derive(Debug, Clone)]
pub struct PromptClassifier {
    intents: Vec<Intent>,
}

impl PromptClassifier {
    pub fn new() -> Self {
        Self {
            intents: INTENTS.to_vec(),
        }
    }

    /// Classifier checking intents in a custom order
    pub fn with_intents(intents: Vec<Intent>) -> Self {
        Self { intents }
    }

    /// First intent whose keyword occurs in the prompt
    pub fn detect_intent(&self, prompt: &str) -> Option<Intent> {
        let lowered = prompt.to_lowercase();
        self.intents
            .iter()
            .copied()
            .find(|intent| lowered.contains(intent.keyword()))
    }

    pub fn classify(&self, prompt: &str, request_type: RequestType) -> Classification {
        let intent = self.detect_intent(prompt);

        match request_type {
            RequestType::Plan => self.plan(prompt, intent),
            RequestType::Build => self.build(intent),
            RequestType::Chat if intent.is_some() && has_build_verb(prompt) => self.build(intent),
            RequestType::Chat => self.chat(intent),
        }
    }

    fn build(&self, intent: Option<Intent>) -> Classification {
        let Some(intent) = intent else {
            return Classification {
                turn: Turn::Build,
                intent: None,
                response: GENERIC_REPLY.to_string(),
                files: FileBundle::new(),
                app_plan: None,
                show_build_button: None,
            };
        };

        let template = intent.template();
        let files = template.bundle();
        let response = format!(
            "I've built a {} for you! Generated {} files: {}.\n\nFeatures:\n{}",
            template.title,
            files.len(),
            files.names().join(", "),
            bullet_list(template.features.iter().copied()),
        );

        Classification {
            turn: Turn::Build,
            intent: Some(intent),
            response,
            files,
            app_plan: None,
            show_build_button: None,
        }
    }

    fn plan(&self, prompt: &str, intent: Option<Intent>) -> Classification {
        let plan = match intent {
            Some(intent) => intent.template().plan(),
            None => generic_plan(prompt),
        };
        let response = format!(
            "Here's the plan for your {}:\n\n{}\n\nFeatures:\n{}\n\nPress Build when you're ready.",
            plan.title,
            plan.description,
            bullet_list(plan.features.iter().map(String::as_str)),
        );

        Classification {
            turn: Turn::Plan,
            intent,
            response,
            files: FileBundle::new(),
            app_plan: Some(plan),
            show_build_button: Some(true),
        }
    }

    fn chat(&self, intent: Option<Intent>) -> Classification {
        let response = match intent {
            Some(intent) => {
                let template = intent.template();
                format!(
                    "{} {} Ask me to build one and I'll generate the files.",
                    template.title, template.description
                )
            }
            None => GENERIC_REPLY.to_string(),
        };

        Classification {
            turn: Turn::Chat,
            intent,
            response,
            files: FileBundle::new(),
            app_plan: None,
            show_build_button: None,
        }
    }
}

impl Default for PromptClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn has_build_verb(prompt: &str) -> bool {
    let lowered = prompt.to_lowercase();
    BUILD_VERBS.iter().any(|verb| lowered.contains(verb))
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(|item| format!("- {item}")).collect::<Vec<_>>().join("\n")
}
