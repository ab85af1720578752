//! Namespace name rules
//!
//! Namespace names are RFC 1123 DNS labels: at most 63 lowercase
//! alphanumerics or `-`, starting and ending with an alphanumeric.

use regex::Regex;
use std::sync::LazyLock;

/// Longest allowed DNS label
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";

static DNS1123_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DNS1123_LABEL_FMT}$")).expect("DNS-1123 label regex is valid")
});

/// Checks a candidate namespace name and explains every rule it breaks
pub trait NamespaceNameValidator {
    /// Return one message per broken rule, empty when the name is valid.
    ///
    /// With `prefix` set the name is treated as the start of a generated
    /// name, so a trailing `-` is tolerated.
    fn validate(&self, name: &str, prefix: bool) -> Vec<String>;
}

impl<F> NamespaceNameValidator for F
where
    F: Fn(&str, bool) -> Vec<String>,
{
    fn validate(&self, name: &str, prefix: bool) -> Vec<String> {
        self(name, prefix)
    }
}

/// Default validator using DNS label rules
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsLabelValidator;

impl NamespaceNameValidator for DnsLabelValidator {
    fn validate(&self, name: &str, prefix: bool) -> Vec<String> {
        let masked;
        let name = if prefix {
            masked = mask_trailing_dash(name);
            masked.as_str()
        } else {
            name
        };

        let mut errs = Vec::new();
        if name.len() > DNS1123_LABEL_MAX_LENGTH {
            errs.push(format!(
                "must be no more than {DNS1123_LABEL_MAX_LENGTH} characters"
            ));
        }
        if !DNS1123_LABEL.is_match(name) {
            errs.push(format!(
                "a lowercase RFC 1123 label must consist of lower case alphanumeric characters \
                 or '-', and must start and end with an alphanumeric character \
                 (e.g. 'my-name', or '123-abc', regex used for validation is '{DNS1123_LABEL_FMT}')"
            ));
        }
        errs
    }
}

/// Swap a single trailing `-` for an alphanumeric so prefixes validate
fn mask_trailing_dash(name: &str) -> String {
    match name.strip_suffix('-') {
        Some(stem) if !stem.is_empty() => format!("{stem}a"),
        _ => name.to_string(),
    }
}
