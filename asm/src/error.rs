use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown input")]
    UnknownInput,

    #[error("Unknown opcode: `{0}`")]
    UnknownOpcode(String),

    #[error("Unknown symbol: `{0}`")]
    UnknownSymbol(String),

    #[error("Expected a number, got {}", token_or_eol(.0))]
    ExpectedNumber(String),

    #[error("Expected EOL after `:`")]
    ExpectedEolAfterColon,

    #[error("Expected {expected} byte(s), got {actual}")]
    OperandTooWide { expected: u8, actual: u8 },

    #[error("Duplicate symbol: `{name}`, first defined on line {first}")]
    DuplicateSymbol { name: String, first: usize },

    #[error("Program does not fit in the 16-bit address space")]
    AddressOverflow,

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

fn token_or_eol(token: &str) -> &str {
    if token.is_empty() {
        "EOL"
    } else {
        token
    }
}

/// An error tied to a 1-based line of the source.
///
/// Parse errors keep the offending line verbatim; code generation errors
/// carry the line number alone.
#[derive(Error, Debug)]
#[error("Line {line}: {kind}")]
pub struct SourceError {
    pub line: usize,
    pub text: Option<String>,
    pub kind: Error,
}

impl SourceError {
    pub fn new(line: usize, kind: Error) -> Self {
        SourceError {
            line,
            text: None,
            kind,
        }
    }

    pub fn with_text(line: usize, text: &str, kind: Error) -> Self {
        SourceError {
            line,
            text: Some(text.to_string()),
            kind,
        }
    }

    /// Print the error with diagnostic information showing the source
    /// location and, when recorded, the line content.
    pub fn diag(&self, path: &str) {
        cprintln!("<red,bold>error</>: {}", self.kind);
        cprintln!("     <blue>--></> <underline>{}:{}</>", path, self.line);
        if let Some(text) = &self.text {
            cprintln!("      <blue>|</>");
            cprintln!(" <blue>{:>4} |</> {}", self.line, text);
            cprintln!("      <blue>|</>");
        }
    }
}
