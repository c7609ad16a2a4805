use std::str::FromStr;

use arch::op::Mnemonic;

use crate::error::Error;

/// One instruction as written in the source, operand still unresolved.
#[derive(Debug, Clone)]
pub struct Inst {
    /// 1-based source line the instruction came from.
    pub line: usize,
    pub op: Mnemonic,
    /// Verbatim operand text; empty when the mnemonic stood alone.
    pub operand: String,
}

/// A classified logical line.
#[derive(Debug, Clone)]
pub enum Stmt {
    Label(String),
    Inst(Inst),
}

impl Stmt {
    /// Classify a logical line as a label or an instruction.
    ///
    /// Labels are checked first, so `JMP:` declares a label rather than
    /// naming an opcode. A line matching neither shape is `UnknownInput`.
    pub fn parse(line: usize, code: &str) -> Result<Stmt, Error> {
        if is_label_shape(code) {
            Ok(Stmt::Label(parse_label(code)?))
        } else if is_opcode_shape(code) {
            Ok(Stmt::Inst(parse_inst(line, code)?))
        } else {
            Err(Error::UnknownInput)
        }
    }
}

/// Starts with `ident:`, identifier = letter or `_` then word characters.
fn is_label_shape(code: &str) -> bool {
    let mut chars = code.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    let rest = chars.as_str();
    let ident_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    rest[ident_end..].starts_with(':')
}

/// A run of exactly three uppercase letters, then end of line or whitespace.
fn is_opcode_shape(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() >= 3
        && bytes[..3].iter().all(|b| b.is_ascii_uppercase())
        && match bytes.get(3) {
            None => true,
            Some(b) => b.is_ascii_whitespace(),
        }
}

/// A bare identifier and nothing else: letter or `_`, then letters,
/// digits or `_`. Pass 2 uses this to tell symbol references from
/// would-be literals.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split a label line at its colon. Nothing may follow the colon.
fn parse_label(code: &str) -> Result<String, Error> {
    let (name, rest) = code.split_once(':').unwrap_or((code, ""));
    if !rest.is_empty() {
        return Err(Error::ExpectedEolAfterColon);
    }
    Ok(name.to_string())
}

/// Split an instruction line at the first whitespace run and look the
/// mnemonic up in the instruction table.
fn parse_inst(line: usize, code: &str) -> Result<Inst, Error> {
    let (head, tail) = match code.split_once(|c: char| c.is_ascii_whitespace()) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (code, ""),
    };
    let op = Mnemonic::from_str(head).map_err(|_| Error::UnknownOpcode(head.to_string()))?;
    Ok(Inst {
        line,
        op,
        operand: tail.to_string(),
    })
}
