/// Output encodings for the assembled byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Raw machine code bytes.
    Binary,
    /// C header with the bytes as an array literal.
    Header,
}

impl Format {
    /// Default file extension for the encoding.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Binary => "bin",
            Format::Header => "h",
        }
    }

    pub fn encode(self, code: &[u8]) -> Vec<u8> {
        match self {
            Format::Binary => code.to_vec(),
            Format::Header => header(code).into_bytes(),
        }
    }
}

/// Render the bytes as a C array literal: tab-indented lines of eight
/// comma-separated zero-padded 3-digit values, no trailing comma on the
/// last value. Consumers include this file verbatim, so the layout is
/// fixed.
fn header(code: &[u8]) -> String {
    let mut out = String::from("char program[] = {\n\t");
    for (idx, byte) in code.iter().enumerate() {
        if idx + 1 == code.len() {
            out.push_str(&format!("{:03}", byte));
        } else {
            out.push_str(&format!("{:03}, ", byte));
            if (idx + 1) % 8 == 0 {
                out.push_str("\n\t");
            }
        }
    }
    out.push_str("\n\t}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_is_verbatim() {
        let code = vec![2, 0, 16, 8, 0, 0, 9];
        assert_eq!(Format::Binary.encode(&code), code);
    }

    #[test]
    fn header_layout_is_exact() {
        let code = vec![2, 0, 16, 8, 0, 0, 9];
        let text = String::from_utf8(Format::Header.encode(&code)).unwrap();
        assert_eq!(
            text,
            "char program[] = {\n\t002, 000, 016, 008, 000, 000, 009\n\t}"
        );
    }

    #[test]
    fn header_wraps_after_every_eighth_value() {
        let code: Vec<u8> = (1..=17).collect();
        let text = String::from_utf8(Format::Header.encode(&code)).unwrap();
        assert_eq!(
            text,
            "char program[] = {\n\
             \t001, 002, 003, 004, 005, 006, 007, 008, \n\
             \t009, 010, 011, 012, 013, 014, 015, 016, \n\
             \t017\n\
             \t}"
        );
        // Trailing comma only between values, never after the last
        assert!(!text.contains("017,"));
    }

    #[test]
    fn single_byte_program() {
        let text = String::from_utf8(Format::Header.encode(&[9])).unwrap();
        assert_eq!(text, "char program[] = {\n\t009\n\t}");
    }

    #[test]
    fn extensions_match_formats() {
        assert_eq!(Format::Binary.extension(), "bin");
        assert_eq!(Format::Header.extension(), "h");
    }
}
