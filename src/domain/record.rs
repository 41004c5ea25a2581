//! Record domain model and inline-edit drafts.
//!
//! A [`Record`] is one administrable member: an id, a name, an email address and
//! a [`Role`]. Records are plain values; the table replaces them wholesale when
//! an edit is committed. A [`Draft`] holds the editable fields of one record
//! while the operator is changing them.

use crate::domain::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a record.
///
/// The upstream dataset uses string ids (`"1"`, `"2"`, ...), so the id is kept
/// as text and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access level of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    /// Lowercase wire form, also used for search matching.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }

    /// Capitalized form for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Admin => "Admin",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Member => Self::Admin,
            Self::Admin => Self::Member,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            _ => Err(RosterError::InvalidRole(s.to_string())),
        }
    }
}

/// One member record.
///
/// # Examples
///
/// ```
/// use roster::domain::{Record, Role};
///
/// let ann = Record::new("1", "Ann", "a@x.com", Role::Member);
/// assert!(ann.matches("ANN"));
/// assert!(ann.matches("x.com"));
/// assert!(!ann.matches("admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Record {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Returns `true` if any searchable field contains `term`, ignoring case.
    ///
    /// The searched fields are `id`, `name`, `email` and the lowercase role.
    /// An empty term matches every record.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn searchable_fields(&self) -> [&str; 4] {
        [self.id.as_str(), &self.name, &self.email, self.role.as_str()]
    }

    /// Copies the editable fields into a fresh draft.
    #[must_use]
    pub fn draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Returns a copy of this record with its editable fields taken from `draft`.
    #[must_use]
    pub fn with_draft(&self, draft: &Draft) -> Self {
        Self {
            id: self.id.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role,
        }
    }
}

/// Editable field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Role,
}

impl DraftField {
    /// Next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Role,
            Self::Role => Self::Name,
        }
    }
}

/// In-memory copy of a record's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Draft {
    /// Sets one field from text.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidRole`] if `field` is [`DraftField::Role`]
    /// and `value` names no role. The draft is unchanged in that case.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<()> {
        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Email => self.email = value.to_string(),
            DraftField::Role => self.role = value.parse()?,
        }
        Ok(())
    }

    /// Current text of one field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Role => self.role.as_str(),
        }
    }
}
