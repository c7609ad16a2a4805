use crate::error::{Error, SourceError};
use crate::line::logical_lines;
use crate::parser::{Inst, Stmt};
use crate::symbols::Symbols;

/// First pass: collect label addresses and the ordered instruction list.
///
/// The address cursor lives only inside this pass. Labels capture its
/// current value; each instruction advances it by `1 + operand_width`,
/// so the final cursor equals the total emitted byte count. The first
/// failure aborts the pass with the offending line.
pub fn collect(source: &str) -> Result<(Symbols, Vec<Inst>), SourceError> {
    let mut symbols = Symbols::new();
    let mut insts = vec![];
    let mut cursor: u16 = 0;

    for (line, code) in logical_lines(source) {
        match Stmt::parse(line, code) {
            Ok(Stmt::Label(name)) => {
                symbols
                    .insert(name, line, cursor)
                    .map_err(|kind| SourceError::with_text(line, code, kind))?;
            }
            Ok(Stmt::Inst(inst)) => {
                cursor = cursor
                    .checked_add(inst.op.size())
                    .ok_or_else(|| SourceError::with_text(line, code, Error::AddressOverflow))?;
                insts.push(inst);
            }
            Err(kind) => return Err(SourceError::with_text(line, code, kind)),
        }
    }
    Ok((symbols, insts))
}
