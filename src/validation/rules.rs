//! Reusable field-level checks
//!
//! Each rule takes the raw submitted value and the message to report on
//! failure, so the schema stays a list of declarative one-liners.

use once_cell::sync::Lazy;
use regex::Regex;

/// 务实的邮箱格式检查：一个 @、非空本地部分、带点的域名
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

pub fn required(value: &str, message: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn min_len(value: &str, min: usize, message: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn email(value: &str, message: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Accepts a missing or blank value; otherwise the value must parse as an
/// integer >= 1.
pub fn optional_positive_int(value: Option<&str>, message: &str) -> Result<(), String> {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(());
    };
    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(()),
        _ => Err(message.to_string()),
    }
}
