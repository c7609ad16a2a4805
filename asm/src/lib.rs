pub mod codegen;
pub mod collect;
pub mod error;
pub mod line;
pub mod number;
pub mod output;
pub mod parser;
pub mod symbols;

/// Assemble SAP8 source text into machine code bytes.
///
/// Runs both passes: label collection, then code generation. Symbols may
/// be referenced before their definition in source order.
pub fn assemble(source: &str) -> Result<Vec<u8>, error::SourceError> {
    let (symbols, insts) = collect::collect(source)?;
    codegen::generate(&symbols, &insts)
}
