//! Common domain type definitions
//!
//! Enumerations shared by the individual model and the relationship engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Gender {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl Gender {
    /// Register code for this gender
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unknown => "U",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The two parent slots of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentRole {
    /// The father slot; requires a male parent
    Father,
    /// The mother slot; requires a female parent
    Mother,
}

impl ParentRole {
    /// Both roles, father first
    pub const ALL: [Self; 2] = [Self::Father, Self::Mother];

    /// Gender a parent must have to fill this role
    #[must_use]
    pub const fn required_gender(self) -> Gender {
        match self {
            Self::Father => Gender::Male,
            Self::Mother => Gender::Female,
        }
    }
}

impl fmt::Display for ParentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Father => f.write_str("father"),
            Self::Mother => f.write_str("mother"),
        }
    }
}

/// Side of the family a grandparent belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lineage {
    /// Through the father
    Paternal,
    /// Through the mother
    Maternal,
}

impl Lineage {
    /// Parent role connecting a child to this lineage
    #[must_use]
    pub const fn parent_role(self) -> ParentRole {
        match self {
            Self::Paternal => ParentRole::Father,
            Self::Maternal => ParentRole::Mother,
        }
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paternal => f.write_str("paternal"),
            Self::Maternal => f.write_str("maternal"),
        }
    }
}
