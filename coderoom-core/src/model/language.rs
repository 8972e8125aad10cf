use std::fmt;
use std::str::FromStr;

/// Languages the execution backend accepts.
///
/// The numeric identifiers are the Judge0 CE language ids and must stay
/// in sync with the backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Python,
    C,
    Cpp,
    Java,
    Go,
    Php,
    Ruby,
    Rust,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::JavaScript,
        Language::Python,
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::Go,
        Language::Php,
        Language::Ruby,
        Language::Rust,
        Language::TypeScript,
    ];

    /// Resolve a client-facing tag such as `"python"`. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Go => "go",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
        }
    }

    pub fn judge0_id(self) -> u32 {
        match self {
            Language::JavaScript => 63,
            Language::Python => 71,
            Language::C => 50,
            Language::Cpp => 54,
            Language::Java => 62,
            Language::Go => 60,
            Language::Php => 68,
            Language::Ruby => 72,
            Language::Rust => 73,
            Language::TypeScript => 74,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| s.to_owned())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
