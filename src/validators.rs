//! Declarative value checks attached to schema attributes.
//!
//! Validators run after the type of a value has been checked, so each check
//! only needs to handle the value shape its attribute type guarantees. A
//! value of an unexpected shape is ignored here; the type check already
//! reported it.
//!
//! The Kubernetes checks follow the apimachinery rules for object names,
//! namespaces, label keys/values and annotation keys (RFC 1123).

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::Diagnostic;

const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
const DNS1123_LABEL_MAX_LENGTH: usize = 63;
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
const LABEL_VALUE_MAX_LENGTH: usize = 63;

static DNS1123_SUBDOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("DNS-1123 subdomain pattern is valid")
});

static DNS1123_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("DNS-1123 label pattern is valid")
});

static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$")
        .expect("qualified name pattern is valid")
});

static LABEL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$")
        .expect("label value pattern is valid")
});

/// A check applied to a configured attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    /// The string must be one of the listed values.
    OneOf {
        /// Accepted values.
        values: Vec<String>,
    },
    /// The integer must be one of the listed values.
    OneOfInt64 {
        /// Accepted values.
        values: Vec<i64>,
    },
    /// The integer must lie within `min..=max`.
    Int64Between {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// The integer must be at least `min`.
    Int64AtLeast {
        /// Inclusive lower bound.
        min: i64,
    },
    /// The string must match the regular expression.
    RegexMatches {
        /// Pattern the whole value is matched against.
        pattern: String,
        /// Human-readable description of the expected format.
        message: String,
    },
    /// A Kubernetes object name (RFC 1123 subdomain).
    Name,
    /// A Kubernetes namespace (RFC 1123 label).
    Namespace,
    /// A map of Kubernetes labels.
    Labels,
    /// A map of Kubernetes annotations.
    Annotations,
}

impl Validator {
    /// Accept only the given strings.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Accept only the given integers.
    pub fn one_of_int64(values: impl IntoIterator<Item = i64>) -> Self {
        Self::OneOfInt64 {
            values: values.into_iter().collect(),
        }
    }

    /// Accept integers within `min..=max`.
    pub fn between(min: i64, max: i64) -> Self {
        Self::Int64Between { min, max }
    }

    /// Accept integers of at least `min`.
    pub fn at_least(min: i64) -> Self {
        Self::Int64AtLeast { min }
    }

    /// Accept strings matching `pattern`.
    pub fn regex_matches(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RegexMatches {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// A TCP/UDP port number.
    pub fn port() -> Self {
        Self::between(1, 65535)
    }

    /// Check `value`, found at `path`, and return a diagnostic per violation.
    pub fn check(&self, path: &str, value: &Value) -> Vec<Diagnostic> {
        match self {
            Self::OneOf { values } => match value.as_str() {
                Some(s) if !values.iter().any(|v| v == s) => vec![invalid_value(
                    path,
                    format!("value must be one of: {:?}, got: {:?}", values, s),
                )],
                _ => vec![],
            },
            Self::OneOfInt64 { values } => match value.as_i64() {
                Some(i) if !values.contains(&i) => vec![invalid_value(
                    path,
                    format!("value must be one of: {:?}, got: {}", values, i),
                )],
                _ => vec![],
            },
            Self::Int64Between { min, max } => match value.as_i64() {
                Some(i) if i < *min || i > *max => vec![invalid_value(
                    path,
                    format!("value must be between {} and {}, got: {}", min, max, i),
                )],
                _ => vec![],
            },
            Self::Int64AtLeast { min } => match value.as_i64() {
                Some(i) if i < *min => vec![invalid_value(
                    path,
                    format!("value must be at least {}, got: {}", min, i),
                )],
                _ => vec![],
            },
            Self::RegexMatches { pattern, message } => match value.as_str() {
                Some(s) => check_pattern(path, pattern, message, s),
                None => vec![],
            },
            Self::Name => value
                .as_str()
                .and_then(|s| check_dns1123_subdomain(s).err())
                .map(|reason| vec![invalid_value(path, reason)])
                .unwrap_or_default(),
            Self::Namespace => value
                .as_str()
                .and_then(|s| check_dns1123_label(s).err())
                .map(|reason| vec![invalid_value(path, reason)])
                .unwrap_or_default(),
            Self::Labels => check_map(path, value, |key, val| {
                check_qualified_name(key)?;
                val.as_str().map_or(Ok(()), check_label_value)
            }),
            Self::Annotations => check_map(path, value, |key, _| check_qualified_name(key)),
        }
    }
}

/// Validate a Kubernetes object name (RFC 1123 subdomain).
pub fn check_dns1123_subdomain(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters, got {}",
            DNS1123_SUBDOMAIN_MAX_LENGTH,
            value.len()
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        return Err(format!(
            "'{}' must consist of lower case alphanumeric characters, '-' or '.', \
             and must start and end with an alphanumeric character",
            value
        ));
    }
    Ok(())
}

/// Validate a Kubernetes namespace (RFC 1123 label).
pub fn check_dns1123_label(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        return Err(format!(
            "must be no more than {} characters, got {}",
            DNS1123_LABEL_MAX_LENGTH,
            value.len()
        ));
    }
    if !DNS1123_LABEL.is_match(value) {
        return Err(format!(
            "'{}' must consist of lower case alphanumeric characters or '-', \
             and must start and end with an alphanumeric character",
            value
        ));
    }
    Ok(())
}

/// Validate a label or annotation key: an optional DNS subdomain prefix and a name.
pub fn check_qualified_name(key: &str) -> Result<(), String> {
    let name = match key.split_once('/') {
        Some((prefix, name)) => {
            if prefix.is_empty() {
                return Err(format!("key '{}': prefix part must be non-empty", key));
            }
            check_dns1123_subdomain(prefix)
                .map_err(|reason| format!("key '{}': prefix part {}", key, reason))?;
            name
        },
        None => key,
    };

    if name.is_empty() {
        return Err(format!("key '{}': name part must be non-empty", key));
    }
    if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        return Err(format!(
            "key '{}': name part must be no more than {} characters",
            key, QUALIFIED_NAME_MAX_LENGTH
        ));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err(format!(
            "key '{}': name part must consist of alphanumeric characters, '-', '_' or '.', \
             and must start and end with an alphanumeric character",
            key
        ));
    }
    Ok(())
}

/// Validate a label value. Empty values are allowed.
pub fn check_label_value(value: &str) -> Result<(), String> {
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        return Err(format!(
            "value '{}' must be no more than {} characters",
            value, LABEL_VALUE_MAX_LENGTH
        ));
    }
    if !LABEL_VALUE.is_match(value) {
        return Err(format!(
            "value '{}' must be empty or consist of alphanumeric characters, '-', '_' or '.', \
             and must start and end with an alphanumeric character",
            value
        ));
    }
    Ok(())
}

fn check_map<F>(path: &str, value: &Value, check_entry: F) -> Vec<Diagnostic>
where
    F: Fn(&str, &Value) -> Result<(), String>,
{
    let Some(map) = value.as_object() else {
        return vec![];
    };

    map.iter()
        .filter_map(|(key, val)| {
            check_entry(key, val)
                .err()
                .map(|reason| invalid_value(&format!("{}.{}", path, key), reason))
        })
        .collect()
}

// Patterns of `RegexMatches` validators, compiled once per process.
static PATTERNS: LazyLock<Mutex<HashMap<String, Regex>>> = LazyLock::new(Default::default);

fn compiled_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    let mut patterns = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(re) = patterns.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern)?;
    patterns.insert(pattern.to_string(), re.clone());
    Ok(re)
}

fn check_pattern(path: &str, pattern: &str, message: &str, value: &str) -> Vec<Diagnostic> {
    match compiled_pattern(pattern) {
        Ok(re) if re.is_match(value) => vec![],
        Ok(_) => vec![invalid_value(path, format!("{}, got: {:?}", message, value))],
        Err(e) => vec![Diagnostic::error(format!("Invalid validator for attribute '{}'", path))
            .with_detail(format!("Failed to compile pattern {:?}: {}", pattern, e))
            .with_attribute(path)],
    }
}

fn invalid_value(path: &str, detail: impl Into<String>) -> Diagnostic {
    Diagnostic::error(format!("Invalid value for attribute '{}'", path))
        .with_detail(detail)
        .with_attribute(path)
}
