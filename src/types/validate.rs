//! Client-side checks on resource names.
//!
//! Intent and entity names may contain only Unicode letters, digits, underscores,
//! hyphens and dots. Intent names must not start with the reserved `sys-` prefix;
//! entity names may, since that is how a system entity is enabled.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, ErrorContext, Result};

/// Prefix reserved for system entities.
pub const RESERVED_PREFIX: &str = "sys-";

/// Longest name the service accepts.
pub const MAX_NAME_LEN: usize = 128;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}_.\-]+$").expect("name pattern is valid"));

/// Kind of resource a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Intent,
    Entity,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Intent => "intent",
            NameKind::Entity => "entity",
        }
    }

    fn allows_reserved_prefix(&self) -> bool {
        matches!(self, NameKind::Entity)
    }
}

fn has_reserved_prefix(name: &str) -> bool {
    name.to_lowercase().starts_with(RESERVED_PREFIX)
}

pub fn is_valid_name(kind: NameKind, name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && (kind.allows_reserved_prefix() || !has_reserved_prefix(name))
        && NAME_PATTERN.is_match(name)
}

pub(crate) fn check_name(kind: NameKind, name: &str, operation: &str) -> Result<()> {
    if is_valid_name(kind, name) {
        return Ok(());
    }
    let details = if !kind.allows_reserved_prefix() && has_reserved_prefix(name) {
        format!("'{}' uses the reserved prefix '{}'", name, RESERVED_PREFIX)
    } else {
        format!(
            "'{}' must be 1-{} letters, digits, '_', '-' or '.'",
            name, MAX_NAME_LEN
        )
    };
    Err(Error::invalid_argument_with_context(
        format!("invalid {} name", kind.as_str()),
        ErrorContext::new()
            .with_field_path(kind.as_str())
            .with_details(details)
            .with_source(operation),
    ))
}
