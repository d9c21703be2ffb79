//! Environment variable validation with helpful error messages
//!
//! Invalid values produce a warning with a typo suggestion and fall back to a default.

use std::io::Write;

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse with a custom writer for the warning
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                let suggestion = self.suggest(value);
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name, value, suggestion
                );
                let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                tracing::warn!(var = self.var_name, %value, "ignoring invalid environment value");
                default
            }
        }
    }

    /// Suggest a valid value within two edits
    fn suggest(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        let mut best: Option<(&str, usize)> = None;

        for &valid in self.valid_values {
            let dist = levenshtein(&input, valid);
            match best {
                None => best = Some((valid, dist)),
                Some((_, best_dist)) if dist < best_dist => best = Some((valid, dist)),
                _ => {}
            }
        }

        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Levenshtein distance over bytes, for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("presence", "presence"), 0);
        assert_eq!(levenshtein("presense", "presence"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("sentinal", "sentinel"), 1);
    }

    #[test]
    fn test_invalid_value_returns_default_with_suggestion() {
        let validator = EnvVarValidator::new("AUTOMV_MARKER_POLICY", &["sentinel", "presence"]);
        let mut output = Vec::new();
        let result = validator.parse_with_writer(
            "presense",
            |s| (s == "presence").then_some(2),
            1,
            &mut output,
        );

        assert_eq!(result, 1);
        let msg = String::from_utf8(output).unwrap();
        assert!(msg.contains("AUTOMV_MARKER_POLICY"));
        assert!(msg.contains("Did you mean 'presence'?"), "{msg}");
        assert!(msg.contains("Valid values: sentinel, presence"));
    }

    #[test]
    fn test_valid_value_writes_nothing() {
        let validator = EnvVarValidator::new("X", &["a"]);
        let mut output = Vec::new();
        let result = validator.parse_with_writer("a", |s| (s == "a").then_some(7), 0, &mut output);
        assert_eq!(result, 7);
        assert!(output.is_empty());
    }

    #[test]
    fn test_no_suggestion_for_distant_value() {
        let validator = EnvVarValidator::new("X", &["sentinel", "presence"]);
        let mut output = Vec::new();
        validator.parse_with_writer("completely-different", |_| None::<u8>, 0, &mut output);
        assert!(!String::from_utf8(output).unwrap().contains("Did you mean"));
    }
}
