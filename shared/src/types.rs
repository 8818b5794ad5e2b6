//! Core shared types and identifiers

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::{SharedError, SharedResult};

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Used by `ProcessId::current()` before any binary has initialised itself
static UNSET_PROCESS_ID: ProcessId = ProcessId::Library;

/// Process identifier for any component in the system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// HTTP endpoint process
    WebServer,
    /// Client-side generation orchestrator
    Orchestrator,
    /// Embedded use (tests, other hosts) with no binary entry point
    Library,
}

impl ProcessId {
    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the orchestrator
    pub fn init_orchestrator() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Orchestrator)
    }

    /// Get the global process ID
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&UNSET_PROCESS_ID)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Orchestrator => write!(f, "orchestrator"),
            ProcessId::Library => write!(f, "library"),
        }
    }
}

/// Kind of turn the client is asking the server for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    #[default]
    Chat,
    Plan,
    Build,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestType::Chat => write!(f, "chat"),
            RequestType::Plan => write!(f, "plan"),
            RequestType::Build => write!(f, "build"),
        }
    }
}

impl FromStr for RequestType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(RequestType::Chat),
            "plan" => Ok(RequestType::Plan),
            "build" => Ok(RequestType::Build),
            other => Err(SharedError::UnknownRequestType { value: other.to_string() }),
        }
    }
}

/// Language tag attached to every generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Javascript,
    Typescript,
    Python,
    Json,
    Text,
}

impl Language {
    /// Resolve a code-fence info string (`js`, `python`, ...) to a language
    pub fn from_alias(alias: &str) -> Self {
        match alias.trim().to_lowercase().as_str() {
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "js" | "javascript" | "jsx" => Language::Javascript,
            "ts" | "typescript" | "tsx" => Language::Typescript,
            "py" | "python" => Language::Python,
            "json" => Language::Json,
            _ => Language::Text,
        }
    }

    /// Resolve a file path to a language by its extension
    pub fn from_path(path: &str) -> Self {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_alias)
            .unwrap_or(Language::Text)
    }

    /// File name used when a generated block carries no explicit name
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Language::Html => "index.html",
            Language::Css => "styles.css",
            Language::Javascript => "script.js",
            Language::Typescript => "app.ts",
            Language::Python => "main.py",
            Language::Json => "package.json",
            Language::Text => "file.txt",
        }
    }

    /// Human-facing technology label reported in chat metadata
    pub fn technology(&self) -> &'static str {
        match self {
            Language::Html => "HTML5",
            Language::Css => "CSS3",
            Language::Javascript => "JavaScript",
            Language::Typescript => "TypeScript",
            Language::Python => "Python",
            Language::Json => "JSON",
            Language::Text => "Plain Text",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Json => "json",
            Language::Text => "text",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content and language of a single generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub content: String,
    pub language: Language,
}

impl FileEntry {
    pub fn new(content: impl Into<String>, language: Language) -> Self {
        Self {
            content: content.into(),
            language,
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Ordered set of generated files
///
/// Insertion order is file-creation order and therefore typing order.
/// Serializes as a JSON object keyed by file name, preserving that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileBundle {
    files: Vec<(String, FileEntry)>,
}

impl FileBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|(existing, _)| existing == name)
    }

    pub fn get(&self, name: &str) -> Option<&FileEntry> {
        self.files
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, entry)| entry)
    }

    /// Add a file, suffixing the name (`name2.ext`, `name3.ext`, ...) if it is taken.
    /// Returns the name actually used.
    pub fn insert(&mut self, name: impl Into<String>, entry: FileEntry) -> String {
        let name = self.unique_name(&name.into());
        self.files.push((name.clone(), entry));
        name
    }

    /// Add an unnamed file under its language's conventional name
    pub fn insert_generated(&mut self, content: impl Into<String>, language: Language) -> String {
        self.insert(language.default_file_name(), FileEntry::new(content, language))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileEntry)> {
        self.files.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|(_, entry)| entry.line_count()).sum()
    }

    fn unique_name(&self, name: &str) -> String {
        if !self.contains(name) {
            return name.to_string();
        }

        // Only split the extension off the final path segment
        let (dir, file) = match name.rfind('/') {
            Some(idx) => name.split_at(idx + 1),
            None => ("", name),
        };
        let (stem, ext) = match file.rfind('.') {
            Some(idx) if idx > 0 => file.split_at(idx),
            _ => (file, ""),
        };

        (2..)
            .map(|n| format!("{dir}{stem}{n}{ext}"))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or_else(|| name.to_string())
    }
}

impl FromIterator<(String, FileEntry)> for FileBundle {
    fn from_iter<T: IntoIterator<Item = (String, FileEntry)>>(iter: T) -> Self {
        let mut bundle = FileBundle::new();
        for (name, entry) in iter {
            bundle.insert(name, entry);
        }
        bundle
    }
}

impl Serialize for FileBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for (name, entry) in &self.files {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FileBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BundleVisitor;

        impl<'de> Visitor<'de> for BundleVisitor {
            type Value = FileBundle;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of file name to {content, language}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut bundle = FileBundle::new();
                while let Some((name, entry)) = access.next_entry::<String, FileEntry>()? {
                    bundle.insert(name, entry);
                }
                Ok(bundle)
            }
        }

        deserializer.deserialize_map(BundleVisitor)
    }
}

/// Reject names that would escape the output directory
pub fn validate_file_name(name: &str) -> SharedResult<()> {
    let invalid = |reason: &str| SharedError::InvalidFileName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("empty"));
    }
    if name.starts_with('/') || name.starts_with('\\') {
        return Err(invalid("absolute path"));
    }

    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid("parent directory segment")),
            Component::RootDir | Component::Prefix(_) => return Err(invalid("absolute path")),
        }
    }

    Ok(())
}
