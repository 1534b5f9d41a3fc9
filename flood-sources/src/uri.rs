//! Query-string encoding for outbound links

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but unreserved marks gets escaped, as browsers' `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query component
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_unreserved_marks() {
        assert_eq!(encode_component("Kota (Lama)"), "Kota%20(Lama)");
        assert_eq!(encode_component("a-b_c.d!e~f*g'h"), "a-b_c.d!e~f*g'h");
    }

    #[test]
    fn test_escapes_reserved_and_non_ascii() {
        assert_eq!(encode_component("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_component("Pulau Pinang #1"), "Pulau%20Pinang%20%231");
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
