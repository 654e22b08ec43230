//! Comment syntax registry.
//!
//! Maps every supported language identifier to the comment family that governs it.
//! Families carry their marker literals and toggle protocol as data, so adding a
//! language is one table entry rather than another branch in the engines.
//!
//! ## Families
//!
//! | family | line | simple block | nested | protocol |
//! |---|---|---|---|---|
//! | code-slash | `// ` | `/* … */` | `/* … */` | two-state |
//! | markup | none | `<!-- … -->` | `/* … */` | three-state |
//! | style-block | none | `/* … */` | `/* ! … ! */` | two-state |
//! | script-hash | `# ` | `""" … """` | `""" … """` | two-state |
//! | literal-block | `# ` | `=begin … =end` | `=begin … =end` | two-state |

use std::{collections::HashMap, fmt, path::Path, str::FromStr, sync::LazyLock};

use super::error::ToggleError;
use super::region::resolve_region;

/// An opening and closing marker literal, including their padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerPair {
    pub open: &'static str,
    pub close: &'static str,
}

impl MarkerPair {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    /// Opening marker without padding or line breaks (`/* ` -> `/*`).
    pub fn open_token(&self) -> &'static str {
        self.open.trim()
    }

    /// Closing marker without padding or line breaks (` */` -> `*/`).
    pub fn close_token(&self) -> &'static str {
        self.close.trim()
    }

    /// Own-line markers (`=begin` / `=end`) must sit alone on a line at column 0.
    pub fn is_own_line(&self) -> bool {
        self.open.ends_with('\n') || self.close.starts_with('\n')
    }
}

/// Number of distinct states a block toggle cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// unwrapped <-> wrapped
    TwoState,
    /// none -> simple -> nested -> none
    ThreeState,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoState => "two-state",
            Self::ThreeState => "three-state",
        }
    }
}

/// A named comment syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentFamily {
    /// C-like: `// line`, `/* block */`
    CodeSlash,
    /// HTML/XML: `<!-- block -->`
    Markup,
    /// CSS: `/* block */`, nested as `/* ! block ! */`
    StyleBlock,
    /// Python-like: `# line`, `""" block """`
    ScriptHash,
    /// Ruby: `# line`, `=begin` / `=end` embedded documents
    LiteralBlock,
}

impl CommentFamily {
    pub const ALL: [CommentFamily; 5] = [
        Self::CodeSlash,
        Self::Markup,
        Self::StyleBlock,
        Self::ScriptHash,
        Self::LiteralBlock,
    ];

    /// Prefix used for single-line comments, if the family has one.
    pub const fn line_marker(self) -> Option<&'static str> {
        match self {
            Self::CodeSlash => Some("// "),
            Self::ScriptHash | Self::LiteralBlock => Some("# "),
            Self::Markup | Self::StyleBlock => None,
        }
    }

    /// Marker pair of a simple (level 1) block comment.
    pub const fn block_marker(self) -> MarkerPair {
        match self {
            Self::CodeSlash | Self::StyleBlock => MarkerPair::new("/* ", " */"),
            Self::Markup => MarkerPair::new("<!-- ", " -->"),
            Self::ScriptHash => MarkerPair::new("\"\"\" ", " \"\"\""),
            Self::LiteralBlock => MarkerPair::new("=begin\n", "\n=end"),
        }
    }

    /// Inner marker pair inserted just inside the outer one to reach level 2.
    pub const fn nested_marker(self) -> MarkerPair {
        match self {
            Self::CodeSlash | Self::Markup => MarkerPair::new("/* ", " */"),
            Self::StyleBlock => MarkerPair::new("! ", " !"),
            Self::ScriptHash => MarkerPair::new("\"\"\" ", " \"\"\""),
            Self::LiteralBlock => MarkerPair::new("=begin\n", "\n=end"),
        }
    }

    pub const fn protocol(self) -> Protocol {
        match self {
            Self::Markup => Protocol::ThreeState,
            Self::CodeSlash | Self::StyleBlock | Self::ScriptHash | Self::LiteralBlock => {
                Protocol::TwoState
            }
        }
    }

    /// True when `#` and `"""` are comment syntax rather than code.
    pub const fn uses_hash_comments(self) -> bool {
        matches!(self, Self::ScriptHash | Self::LiteralBlock)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeSlash => "code-slash",
            Self::Markup => "markup",
            Self::StyleBlock => "style-block",
            Self::ScriptHash => "script-hash",
            Self::LiteralBlock => "literal-block",
        }
    }
}

impl fmt::Display for CommentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a language picks its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// One family for the whole document.
    Fixed(CommentFamily),
    /// Markup document with embedded script and style regions.
    Composite,
}

/// Supported language identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    Vue,
    JavaScript,
    JavaScriptReact,
    TypeScript,
    TypeScriptReact,
    Html,
    Css,
    Scss,
    Less,
    Json,
    Jsonc,
    Markdown,
    Xml,
    Php,
    Python,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Rust,
    Ruby,
}

impl LanguageId {
    pub const ALL: [LanguageId; 22] = [
        Self::Vue,
        Self::JavaScript,
        Self::JavaScriptReact,
        Self::TypeScript,
        Self::TypeScriptReact,
        Self::Html,
        Self::Css,
        Self::Scss,
        Self::Less,
        Self::Json,
        Self::Jsonc,
        Self::Markdown,
        Self::Xml,
        Self::Php,
        Self::Python,
        Self::Java,
        Self::C,
        Self::Cpp,
        Self::CSharp,
        Self::Go,
        Self::Rust,
        Self::Ruby,
    ];

    /// Editor language identifier (`typescriptreact`, `csharp`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::JavaScript => "javascript",
            Self::JavaScriptReact => "javascriptreact",
            Self::TypeScript => "typescript",
            Self::TypeScriptReact => "typescriptreact",
            Self::Html => "html",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Json => "json",
            Self::Jsonc => "jsonc",
            Self::Markdown => "markdown",
            Self::Xml => "xml",
            Self::Php => "php",
            Self::Python => "python",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Ruby => "ruby",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vue => "Vue",
            Self::JavaScript => "JavaScript",
            Self::JavaScriptReact => "JavaScript React",
            Self::TypeScript => "TypeScript",
            Self::TypeScriptReact => "TypeScript React",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Scss => "SCSS",
            Self::Less => "Less",
            Self::Json => "JSON",
            Self::Jsonc => "JSON with Comments",
            Self::Markdown => "Markdown",
            Self::Xml => "XML",
            Self::Php => "PHP",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Ruby => "Ruby",
        }
    }

    /// Family dispatch table. Ids without a special case use code-slash.
    pub const fn syntax(self) -> Syntax {
        match self {
            Self::Vue => Syntax::Composite,
            Self::Html | Self::JavaScriptReact | Self::TypeScriptReact | Self::Xml => {
                Syntax::Fixed(CommentFamily::Markup)
            }
            Self::Css | Self::Scss | Self::Less => Syntax::Fixed(CommentFamily::StyleBlock),
            Self::Python | Self::Markdown => Syntax::Fixed(CommentFamily::ScriptHash),
            Self::Ruby => Syntax::Fixed(CommentFamily::LiteralBlock),
            _ => Syntax::Fixed(CommentFamily::CodeSlash),
        }
    }

    /// Family governing line `index` of `lines`.
    ///
    /// Only composite documents look at the text; every other language has a
    /// single family.
    pub fn family_at<S: AsRef<str>>(self, lines: &[S], index: usize) -> CommentFamily {
        match self.syntax() {
            Syntax::Fixed(family) => family,
            Syntax::Composite => resolve_region(lines, index).family(),
        }
    }

    /// Detect language from a file extension (case insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let id = match ext.to_lowercase().as_str() {
            "vue" => Self::Vue,
            "js" | "mjs" | "cjs" => Self::JavaScript,
            "jsx" => Self::JavaScriptReact,
            "ts" | "mts" | "cts" => Self::TypeScript,
            "tsx" => Self::TypeScriptReact,
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "scss" => Self::Scss,
            "less" => Self::Less,
            "json" => Self::Json,
            "jsonc" => Self::Jsonc,
            "md" | "markdown" => Self::Markdown,
            "xml" | "svg" => Self::Xml,
            "php" => Self::Php,
            "py" | "pyi" => Self::Python,
            "java" => Self::Java,
            "c" | "h" => Self::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Self::Cpp,
            "cs" => Self::CSharp,
            "go" => Self::Go,
            "rs" => Self::Rust,
            "rb" => Self::Ruby,
            _ => return None,
        };
        Some(id)
    }

    /// Detect language from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleRegistry::global().resolve(s)
    }
}

/// Read-only identifier table, built on first use.
#[derive(Debug)]
pub struct StyleRegistry {
    by_id: HashMap<&'static str, LanguageId>,
}

static REGISTRY: LazyLock<StyleRegistry> = LazyLock::new(StyleRegistry::build);

impl StyleRegistry {
    fn build() -> Self {
        let by_id = LanguageId::ALL
            .iter()
            .map(|id| (id.as_str(), *id))
            .collect();
        Self { by_id }
    }

    pub fn global() -> &'static StyleRegistry {
        &REGISTRY
    }

    /// Resolve a language identifier (case insensitive).
    pub fn resolve(&self, language_id: &str) -> Result<LanguageId, ToggleError> {
        let key = language_id.trim().to_ascii_lowercase();
        self.by_id
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ToggleError::UnsupportedLanguage(language_id.to_string()))
    }

    pub fn is_supported(&self, language_id: &str) -> bool {
        self.resolve(language_id).is_ok()
    }

    /// All supported languages in table order.
    pub fn languages(&self) -> impl Iterator<Item = LanguageId> {
        LanguageId::ALL.into_iter()
    }
}
