//! Dictionary-driven substitution passes.
mod chain;

use crate::dictionary::Dictionary;

pub use chain::ConversionChain;

/// Substitution pass over a dictionary.
///
/// At each position of a token, the longest dictionary key is replaced with
/// the primary value of its entry. Characters covered by no key are copied
/// as is, so nothing is dropped.
#[derive(Clone, Debug)]
pub struct Conversion {
    dict: Dictionary,
}

impl Conversion {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `dict`: Dictionary of substitutions.
    pub const fn new(dict: Dictionary) -> Self {
        Self { dict }
    }

    /// Gets the reference to the dictionary.
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Converts a token.
    pub fn convert(&self, token: &str) -> String {
        let mut output = String::with_capacity(token.len());
        self.convert_into(token, &mut output);
        output
    }

    /// Converts a token and appends the result to `output`.
    pub fn convert_into(&self, token: &str, output: &mut String) {
        if self.dict.key_max_len() == 0 {
            output.push_str(token);
            return;
        }
        let chars: Vec<char> = token.chars().collect();
        let mut pos = 0;
        while pos < chars.len() {
            if let Some(m) = self.dict.match_prefix(&chars[pos..]) {
                output.push_str(m.primary());
                pos += m.len_char();
            } else {
                output.push(chars[pos]);
                pos += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversion(text: &str) -> Conversion {
        Conversion::new(Dictionary::from_text(text).unwrap())
    }

    #[test]
    fn test_identity_fallback() {
        let conv = conversion("a\tb");
        assert_eq!(conv.convert("xyz"), "xyz");
        assert_eq!(conv.convert(""), "");
    }

    #[test]
    fn test_primary_value() {
        let conv = conversion("发\t發 髮\n头发\t頭髮");
        assert_eq!(conv.convert("发"), "發");
        assert_eq!(conv.convert("头发"), "頭髮");
    }

    #[test]
    fn test_longest_match_inside_token() {
        let conv = conversion("干\t幹 乾\n干净\t乾淨\n净\t淨");
        assert_eq!(conv.convert("干净的干"), "乾淨的幹");
    }

    #[test]
    fn test_convert_into_appends() {
        let conv = conversion("a\tA");
        let mut output = "x".to_string();
        conv.convert_into("ab", &mut output);
        assert_eq!(output, "xAb");
    }

    #[test]
    fn test_empty_dictionary() {
        let conv = conversion("");
        assert_eq!(conv.convert("abc"), "abc");
    }
}
