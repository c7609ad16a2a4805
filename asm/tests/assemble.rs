use sap8asm::assemble;
use sap8asm::collect::collect;
use sap8asm::error::Error;
use sap8asm::output::Format;

#[test]
fn assembles_the_reference_program() {
    let src = "\
start:
LDI 0x0010
JMP start
HLT
";
    assert_eq!(assemble(src).unwrap(), vec![2, 0, 16, 8, 0, 0, 9]);
}

#[test]
fn forward_references_resolve() {
    // `end` is used before it is declared; pass 1 runs to completion
    // before pass 2 resolves anything.
    let src = "\
JMP end
NOP
end:
HLT
";
    assert_eq!(assemble(src).unwrap(), vec![8, 0, 4, 0, 9]);
}

#[test]
fn final_cursor_equals_emitted_byte_count() {
    let src = "\
NOP
LDA 0x12
LDI 0x1234
STA 1
ADD 2
ADI 3
SUB 4
SUI 5
JMP 6
DCM 7
DCI 8
DOC 9
DOI 10
HLT
total:
";
    let (symbols, insts) = collect(src).unwrap();
    let code = sap8asm::codegen::generate(&symbols, &insts).unwrap();
    let cursor: u16 = insts.iter().map(|inst| inst.op.size()).sum();
    assert_eq!(cursor as usize, code.len());
    assert_eq!(symbols.get("total"), Some(cursor));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "\
; boot sequence
start:      ; entry point

  LDI 0x0010
JMP start   ; loop forever
HLT
";
    assert_eq!(assemble(src).unwrap(), vec![2, 0, 16, 8, 0, 0, 9]);
}

#[test]
fn unknown_symbol_is_fatal() {
    let err = assemble("JMP nowhere\n").unwrap_err();
    assert_eq!(err.line, 1);
    assert!(matches!(err.kind, Error::UnknownSymbol(name) if name == "nowhere"));
}

#[test]
fn label_with_trailing_text_is_fatal() {
    let err = assemble("foo: bar\n").unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.text.as_deref(), Some("foo: bar"));
    assert!(matches!(err.kind, Error::ExpectedEolAfterColon));
}

#[test]
fn lowercase_mnemonic_is_unknown_input() {
    let err = assemble("nop\n").unwrap_err();
    assert!(matches!(err.kind, Error::UnknownInput));
}

#[test]
fn unknown_mnemonic_is_reported_with_its_line() {
    let err = assemble("NOP\nXYZ 1\n").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(matches!(err.kind, Error::UnknownOpcode(op) if op == "XYZ"));
}

#[test]
fn wide_literal_in_byte_slot_is_fatal() {
    let err = assemble("LDA 0x100\n").unwrap_err();
    assert!(matches!(
        err.kind,
        Error::OperandTooWide {
            expected: 1,
            actual: 2
        }
    ));
}

#[test]
fn duplicate_label_is_fatal() {
    let err = assemble("a:\nNOP\na:\nHLT\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(matches!(err.kind, Error::DuplicateSymbol { first: 1, .. }));
}

#[test]
fn any_address_round_trips_through_a_symbol() {
    // Pad with DCM (3 bytes each) so the label lands on the wanted
    // address, then check the emitted high/low bytes.
    for &addr in &[0u16, 255, 258, 0x1233] {
        let mut src = String::new();
        for _ in 0..addr / 3 {
            src.push_str("DCM 0\n");
        }
        src.push_str("here:\nJMP here\n");
        let code = assemble(&src).unwrap();
        let tail = &code[code.len() - 3..];
        assert_eq!(tail, [8, (addr >> 8) as u8, (addr & 0xFF) as u8]);
    }
}

#[test]
fn header_encoding_of_assembled_program() {
    let code = assemble("start:\nLDI 0x0010\nJMP start\nHLT\n").unwrap();
    let text = String::from_utf8(Format::Header.encode(&code)).unwrap();
    assert_eq!(
        text,
        "char program[] = {\n\t002, 000, 016, 008, 000, 000, 009\n\t}"
    );
}
