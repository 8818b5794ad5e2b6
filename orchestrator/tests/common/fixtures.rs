//! Canned server responses

use shared::{AppPlan, FileBundle, FileEntry, GenerateResponse, Language};

pub struct TestFixtures;

impl TestFixtures {
    pub const TODO_PROMPT: &'static str = "build me a todo app";

    pub fn todo_bundle() -> FileBundle {
        let mut bundle = FileBundle::new();
        bundle.insert(
            "index.html",
            FileEntry::new("<!DOCTYPE html>\n<html>\n<body><ul id=\"list\"></ul></body>\n</html>\n", Language::Html),
        );
        bundle.insert("style.css", FileEntry::new("body { margin: 0; }\nli { padding: 4px; }\n", Language::Css));
        bundle.insert(
            "script.js",
            FileEntry::new(
                (1..=10).map(|n| format!("console.log({n});\n")).collect::<String>(),
                Language::Javascript,
            ),
        );
        bundle
    }

    pub fn todo_response() -> GenerateResponse {
        GenerateResponse {
            response: "I've created a todo app for you.".to_string(),
            success: true,
            files: Self::todo_bundle(),
            show_build_button: None,
            app_plan: None,
        }
    }

    /// One file of `lines` lines
    pub fn single_file_response(lines: usize) -> GenerateResponse {
        let mut files = FileBundle::new();
        let content: String = (1..=lines).map(|n| format!("line {n}\n")).collect();
        files.insert("notes.txt", FileEntry::new(content, Language::Text));
        GenerateResponse {
            response: "Here you go.".to_string(),
            success: true,
            files,
            show_build_button: None,
            app_plan: None,
        }
    }

    pub fn plan_response() -> GenerateResponse {
        GenerateResponse {
            response: "Here's a plan for your todo app.".to_string(),
            success: true,
            files: FileBundle::new(),
            show_build_button: Some(true),
            app_plan: Some(AppPlan {
                title: "Todo App".to_string(),
                description: "Track tasks".to_string(),
                features: vec!["Add tasks".to_string(), "Mark tasks complete".to_string()],
            }),
        }
    }

    /// Plain-text answer whose files only exist as fenced blocks
    pub fn markdown_response() -> GenerateResponse {
        GenerateResponse {
            response: "Try this:\n\n```js:app.js\nconst x = 1;\nconsole.log(x);\n```\n\n```css\nbody {}\n```\n".to_string(),
            success: true,
            files: FileBundle::new(),
            show_build_button: None,
            app_plan: None,
        }
    }

    pub fn failed_response() -> GenerateResponse {
        GenerateResponse {
            response: "Internal error".to_string(),
            success: false,
            ..GenerateResponse::default()
        }
    }
}
