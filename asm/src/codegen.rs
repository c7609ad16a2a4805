use crate::error::{Error, SourceError};
use crate::number::parse_number;
use crate::parser::{is_identifier, Inst};
use crate::symbols::Symbols;

/// Second pass: resolve operands against the symbol table and emit the
/// machine code buffer. Failures carry the line recorded on the
/// instruction during pass 1.
pub fn generate(symbols: &Symbols, insts: &[Inst]) -> Result<Vec<u8>, SourceError> {
    let mut code = vec![];
    for inst in insts {
        let bytes = encode(inst, symbols).map_err(|kind| SourceError::new(inst.line, kind))?;
        code.extend(bytes);
    }
    Ok(code)
}

/// Encode one instruction: the opcode byte, then the operand truncated
/// big-endian to the declared width.
pub fn encode(inst: &Inst, symbols: &Symbols) -> Result<Vec<u8>, Error> {
    let expected = inst.op.operand_bytes();
    let mut bytes = vec![u8::from(inst.op)];

    if expected == 0 && inst.operand.is_empty() {
        return Ok(bytes);
    }

    // Symbols are memory addresses, which are always two bytes wide.
    // A 1-byte operand slot never resolves a symbol.
    let (value, width) = if expected == 2 && is_identifier(&inst.operand) {
        let addr = symbols
            .get(&inst.operand)
            .ok_or_else(|| Error::UnknownSymbol(inst.operand.clone()))?;
        (addr as u64, 2)
    } else {
        parse_number(&inst.operand)?
    };

    if width > expected {
        return Err(Error::OperandTooWide {
            expected,
            actual: width,
        });
    }
    if expected == 2 {
        bytes.push((value >> 8) as u8);
    }
    if expected >= 1 {
        bytes.push(value as u8);
    }
    Ok(bytes)
}
