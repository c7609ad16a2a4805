use crate::error::Error;

/// Number of bytes needed to represent `value`. Zero needs no bytes, so
/// it fits any operand width.
pub fn byte_width(value: u64) -> u8 {
    let bits = u64::BITS - value.leading_zeros();
    ((bits + 7) / 8) as u8
}

/// Parse a decimal, `0x` hexadecimal or `0b` binary literal.
///
/// Returns the value together with its minimal byte width. Anything that
/// is not a literal, including an empty token, is `ExpectedNumber`.
pub fn parse_number(token: &str) -> Result<(u64, u8), Error> {
    let parsed = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = token.strip_prefix("0b").or_else(|| token.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)
    } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse::<u64>()
    } else {
        return Err(Error::ExpectedNumber(token.to_string()));
    };
    let value = parsed.map_err(|_| Error::ExpectedNumber(token.to_string()))?;
    Ok((value, byte_width(value)))
}
