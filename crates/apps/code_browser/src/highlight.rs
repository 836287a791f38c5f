//! Regex-driven syntax highlighting keyed by file extension.
//!
//! Each language compiles to one alternation regex (comments, strings, numbers, keywords).
//! Matching runs left to right over the whole file, so a comment marker inside a string stays
//! part of the string, and block comments may span lines before the result is split per line.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::Range;

use leptos::logging::warn;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

const NUMBER_PATTERN: &str = r"(?x:
    (?P<number>
        \b(?:
            0[xX][0-9A-Fa-f_]+ |
            0[bB][01_]+ |
            0[oO][0-7_]+ |
            [0-9][0-9_]*(?:\.[0-9][0-9_]*)?(?:[eE][+-]?[0-9_]+)?
        )\b
    )
)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Token classes emitted by the highlighter.
pub enum HighlightKind {
    /// Anything not matched by a rule.
    Plain,
    /// Reserved word.
    Keyword,
    /// Line or block comment.
    Comment,
    /// Quoted literal.
    String,
    /// Numeric literal.
    Number,
}

impl HighlightKind {
    /// Stable `data-token` value for styling.
    pub fn token(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A run of text with one token class, never spanning a line break.
pub struct HighlightSpan {
    /// Token class.
    pub kind: HighlightKind,
    /// Text of the run.
    pub text: String,
}

impl HighlightSpan {
    fn new(kind: HighlightKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Spans making up one source line.
pub type HighlightedLine = Vec<HighlightSpan>;

#[derive(Debug, Clone, Copy)]
/// Static description of a language's lexical rules.
pub struct LanguageSpec {
    /// Stable identifier.
    pub id: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Lowercase extensions mapped to this language.
    pub extensions: &'static [&'static str],
    /// Reserved words.
    pub keywords: &'static [&'static str],
    /// Whether keywords match case-sensitively.
    pub case_sensitive: bool,
    /// Line comment markers.
    pub line_comments: &'static [&'static str],
    /// Block comment open/close markers.
    pub block_comment: Option<(&'static str, &'static str)>,
    /// String quote characters. Backtick strings may span lines; others end at the line break.
    pub quotes: &'static [char],
}

#[derive(Debug, Error)]
/// Highlighting setup failures.
pub enum HighlightError {
    /// A language produced an invalid regex.
    #[error("invalid highlighting pattern for `{language}`: {source}")]
    Pattern {
        /// Language identifier.
        language: &'static str,
        /// Underlying compile error.
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
/// A compiled language.
pub struct LanguageDefinition {
    spec: LanguageSpec,
    regex: Regex,
}

impl LanguageDefinition {
    /// Compiles `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::Pattern`] when the generated regex does not compile.
    pub fn compile(spec: LanguageSpec) -> Result<Self, HighlightError> {
        let regex = RegexBuilder::new(&build_pattern(&spec))
            .build()
            .map_err(|source| HighlightError::Pattern {
                language: spec.id,
                source,
            })?;
        Ok(Self { spec, regex })
    }

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        self.spec.id
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        self.spec.display_name
    }

    fn tokens(&self, input: &str) -> Vec<(Range<usize>, HighlightKind)> {
        self.regex
            .captures_iter(input)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if whole.is_empty() {
                    return None;
                }
                let kind = if caps.name("comment").is_some() {
                    HighlightKind::Comment
                } else if caps.name("string").is_some() {
                    HighlightKind::String
                } else if caps.name("number").is_some() {
                    HighlightKind::Number
                } else {
                    HighlightKind::Keyword
                };
                Some((whole.range(), kind))
            })
            .collect()
    }

    /// Highlights `text`, returning one entry per line.
    pub fn highlight_lines(&self, text: &str) -> Vec<HighlightedLine> {
        let text = normalize_newlines(text);
        let mut spans = Vec::new();
        let mut cursor = 0;
        for (range, kind) in self.tokens(&text) {
            if range.start > cursor {
                spans.push(HighlightSpan::new(HighlightKind::Plain, &text[cursor..range.start]));
            }
            spans.push(HighlightSpan::new(kind, &text[range.clone()]));
            cursor = range.end;
        }
        if cursor < text.len() {
            spans.push(HighlightSpan::new(HighlightKind::Plain, &text[cursor..]));
        }
        split_lines(spans, text.ends_with('\n'))
    }
}

#[derive(Debug, Default)]
/// Languages indexed by lowercase extension.
pub struct LanguageRegistry {
    languages: Vec<LanguageDefinition>,
    by_extension: HashMap<String, usize>,
}

static BUILTIN: Lazy<LanguageRegistry> = Lazy::new(|| {
    LanguageRegistry::from_specs(BUILTIN_LANGUAGES).unwrap_or_else(|err| {
        warn!("syntax highlighting disabled: {err}");
        LanguageRegistry::default()
    })
});

impl LanguageRegistry {
    /// Compiles every spec; later specs win on shared extensions.
    ///
    /// # Errors
    ///
    /// Returns the first compile failure.
    pub fn from_specs(specs: &[LanguageSpec]) -> Result<Self, HighlightError> {
        let mut registry = Self::default();
        for spec in specs {
            let index = registry.languages.len();
            registry.languages.push(LanguageDefinition::compile(*spec)?);
            for extension in spec.extensions {
                registry
                    .by_extension
                    .insert(extension.to_ascii_lowercase(), index);
            }
        }
        Ok(registry)
    }

    /// Shared registry of the built-in languages, compiled on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Resolves an extension case-insensitively.
    pub fn resolve(&self, extension: &str) -> Option<&LanguageDefinition> {
        if extension.is_empty() {
            return None;
        }
        let index = *self.by_extension.get(&extension.to_ascii_lowercase())?;
        self.languages.get(index)
    }

    /// Highlights `text` as `extension`; unknown or empty extensions yield plain lines.
    pub fn highlight_lines(&self, extension: &str, text: &str) -> Vec<HighlightedLine> {
        match self.resolve(extension) {
            Some(language) => language.highlight_lines(text),
            None => plain_lines(text),
        }
    }
}

/// Highlights `text` with the built-in registry.
pub fn highlight_lines(extension: &str, text: &str) -> Vec<HighlightedLine> {
    LanguageRegistry::builtin().highlight_lines(extension, text)
}

/// Display name of the built-in language for `extension`, or `"Plain text"`.
pub fn language_label(extension: &str) -> &'static str {
    LanguageRegistry::builtin()
        .resolve(extension)
        .map(LanguageDefinition::display_name)
        .unwrap_or("Plain text")
}

fn plain_lines(text: &str) -> Vec<HighlightedLine> {
    let text = normalize_newlines(text);
    let spans = if text.is_empty() {
        Vec::new()
    } else {
        vec![HighlightSpan::new(HighlightKind::Plain, &text)]
    };
    split_lines(spans, text.ends_with('\n'))
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn split_lines(spans: Vec<HighlightSpan>, trailing_newline: bool) -> Vec<HighlightedLine> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        let mut pieces = span.text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.push(HighlightSpan::new(span.kind, piece));
                }
            }
            if pieces.peek().is_some() {
                lines.push(Vec::new());
            }
        }
    }
    if trailing_newline && lines.len() > 1 {
        lines.pop();
    }
    lines
}

fn build_pattern(spec: &LanguageSpec) -> String {
    let mut comments = Vec::new();
    if let Some((open, close)) = spec.block_comment {
        comments.push(format!(
            r"{}(?s:.*?)(?:{}|\z)",
            regex::escape(open),
            regex::escape(close)
        ));
    }
    for marker in spec.line_comments {
        comments.push(format!(r"{}[^\n]*", regex::escape(marker)));
    }

    let strings: Vec<String> = spec
        .quotes
        .iter()
        .map(|quote| {
            let q = regex::escape(&quote.to_string());
            if *quote == '`' {
                format!(r"{q}(?:[^{q}\\]|\\(?s:.))*{q}?")
            } else {
                format!(r"{q}(?:[^{q}\\\n]|\\.)*{q}?")
            }
        })
        .collect();

    let mut alternatives = Vec::new();
    if !comments.is_empty() {
        alternatives.push(format!("(?P<comment>{})", comments.join("|")));
    }
    if !strings.is_empty() {
        alternatives.push(format!("(?P<string>{})", strings.join("|")));
    }
    alternatives.push(NUMBER_PATTERN.to_string());
    if !spec.keywords.is_empty() {
        let words = spec
            .keywords
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        let flags = if spec.case_sensitive { "" } else { "(?i)" };
        alternatives.push(format!(r"(?P<keyword>{flags}\b(?:{words})\b)"));
    }
    alternatives.join("|")
}

const C_FAMILY_QUOTES: &[char] = &['"', '\''];

/// Languages available through [`LanguageRegistry::builtin`].
pub const BUILTIN_LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        id: "rust",
        display_name: "Rust",
        extensions: &["rs"],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
            "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
            "trait", "true", "type", "unsafe", "use", "where", "while",
        ],
        case_sensitive: true,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        quotes: &['"'],
    },
    LanguageSpec {
        id: "go",
        display_name: "Go",
        extensions: &["go"],
        keywords: &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "false", "for", "func", "go", "goto", "if", "import", "interface",
            "map", "nil", "package", "range", "return", "select", "struct", "switch", "true",
            "type", "var",
        ],
        case_sensitive: true,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        quotes: &['"', '\'', '`'],
    },
    LanguageSpec {
        id: "javascript",
        display_name: "JavaScript",
        extensions: &["js", "jsx", "mjs", "cjs"],
        keywords: &[
            "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
            "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
            "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
            "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
            "void", "while", "yield",
        ],
        case_sensitive: true,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        quotes: &['"', '\'', '`'],
    },
    LanguageSpec {
        id: "typescript",
        display_name: "TypeScript",
        extensions: &["ts", "tsx", "mts", "cts"],
        keywords: &[
            "abstract", "any", "as", "async", "await", "boolean", "break", "case", "catch",
            "class", "const", "continue", "default", "else", "enum", "export", "extends",
            "false", "finally", "for", "from", "function", "if", "implements", "import", "in",
            "instanceof", "interface", "let", "new", "null", "number", "private", "protected",
            "public", "readonly", "return", "string", "switch", "this", "throw", "true", "try",
            "type", "typeof", "undefined", "void", "while",
        ],
        case_sensitive: true,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        quotes: &['"', '\'', '`'],
    },
    LanguageSpec {
        id: "python",
        display_name: "Python",
        extensions: &["py", "pyi"],
        keywords: &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ],
        case_sensitive: true,
        line_comments: &["#"],
        block_comment: None,
        quotes: C_FAMILY_QUOTES,
    },
    LanguageSpec {
        id: "java",
        display_name: "Java",
        extensions: &["java", "kt"],
        keywords: &[
            "abstract", "boolean", "break", "case", "catch", "class", "continue", "default",
            "do", "double", "else", "enum", "extends", "false", "final", "finally", "float",
            "for", "if", "implements", "import", "instanceof", "int", "interface", "long", "new",
            "null", "package", "private", "protected", "public", "return", "static", "super",
            "switch", "this", "throw", "throws", "true", "try", "void", "while",
        ],
        case_sensitive: true,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        quotes: C_FAMILY_QUOTES,
    },
    LanguageSpec {
        id: "c",
        display_name: "C/C++",
        extensions: &["c", "h", "cc", "cpp", "cxx", "hpp"],
        keywords: &[
            "auto", "bool", "break", "case", "char", "class", "const", "continue", "default",
            "delete", "do", "double", "else", "enum", "extern", "false", "float", "for", "if",
            "include", "int", "long", "namespace", "new", "nullptr", "return", "short", "signed",
            "sizeof", "static", "struct", "switch", "template", "true", "typedef", "union",
            "unsigned", "using", "void", "while",
        ],
        case_sensitive: true,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        quotes: C_FAMILY_QUOTES,
    },
    LanguageSpec {
        id: "css",
        display_name: "CSS",
        extensions: &["css", "scss"],
        keywords: &["important", "media", "import", "keyframes", "from", "to"],
        case_sensitive: false,
        line_comments: &[],
        block_comment: Some(("/*", "*/")),
        quotes: C_FAMILY_QUOTES,
    },
    LanguageSpec {
        id: "html",
        display_name: "HTML",
        extensions: &["html", "htm", "xml", "svg", "vue"],
        keywords: &[],
        case_sensitive: false,
        line_comments: &[],
        block_comment: Some(("<!--", "-->")),
        quotes: C_FAMILY_QUOTES,
    },
    LanguageSpec {
        id: "json",
        display_name: "JSON",
        extensions: &["json"],
        keywords: &["true", "false", "null"],
        case_sensitive: true,
        line_comments: &[],
        block_comment: None,
        quotes: &['"'],
    },
    LanguageSpec {
        id: "shell",
        display_name: "Shell",
        extensions: &["sh", "bash", "zsh"],
        keywords: &[
            "case", "do", "done", "elif", "else", "esac", "export", "fi", "for", "function", "if",
            "in", "local", "return", "then", "while",
        ],
        case_sensitive: true,
        line_comments: &["#"],
        block_comment: None,
        quotes: C_FAMILY_QUOTES,
    },
    LanguageSpec {
        id: "config",
        display_name: "Config",
        extensions: &["toml", "yaml", "yml", "ini", "cfg"],
        keywords: &["true", "false", "null"],
        case_sensitive: true,
        line_comments: &["#"],
        block_comment: None,
        quotes: C_FAMILY_QUOTES,
    },
    LanguageSpec {
        id: "sql",
        display_name: "SQL",
        extensions: &["sql"],
        keywords: &[
            "and", "as", "by", "create", "delete", "from", "group", "insert", "into", "join",
            "left", "not", "null", "on", "or", "order", "select", "set", "table", "update",
            "values", "where",
        ],
        case_sensitive: false,
        line_comments: &["--"],
        block_comment: Some(("/*", "*/")),
        quotes: &['\''],
    },
];
