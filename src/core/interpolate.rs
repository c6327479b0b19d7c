//! Placeholder interpolation for log messages

use super::log_context::{FieldValue, LogContext};

/// Replace every `{key}` token in `template` with the matching context value
///
/// The template is scanned once from left to right, so substituted text is
/// never itself searched for tokens. Tokens whose key is not in the context
/// are copied through unchanged. Keys may contain any character, `}`
/// included; when several keys match at one position the longest wins.
///
/// # Example
///
/// ```
/// use tiered_logger::core::{interpolate, LogContext};
///
/// let context = LogContext::new()
///     .with_field("id", 123)
///     .with_field("action", "login");
///
/// assert_eq!(
///     interpolate("User {id} did {action} {missing}", &context),
///     "User 123 did login {missing}"
/// );
/// ```
pub fn interpolate(template: &str, context: &LogContext) -> String {
    if context.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let candidate = &rest[open + 1..];

        match longest_token(candidate, context) {
            Some((key_len, value)) => {
                output.push_str(&value.to_string());
                rest = &candidate[key_len + 1..];
            }
            None => {
                // Not a known token; keep the brace and resume right after it
                output.push('{');
                rest = candidate;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Longest context key that `text` starts with, followed by a closing brace
fn longest_token<'a>(text: &str, context: &'a LogContext) -> Option<(usize, &'a FieldValue)> {
    context
        .iter()
        .filter(|(key, _)| {
            text.strip_prefix(key)
                .map_or(false, |after| after.starts_with('}'))
        })
        .max_by_key(|(key, _)| key.len())
        .map(|(key, value)| (key.len(), value))
}
