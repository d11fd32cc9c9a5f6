use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Who is signing in. Decides whether the department grid is shown and
/// whether policy upload is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// HR administrator; always scoped to the HR department.
    Hr,
    Employee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Hr => "HR",
            Role::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Jurisdiction of the policy corpus a question is answered from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRegion {
    #[default]
    India,
    Foreign,
}

impl PolicyRegion {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyRegion::India => "india",
            PolicyRegion::Foreign => "foreign",
        }
    }

    /// Label shown next to the region selector.
    pub fn label(self) -> &'static str {
        match self {
            PolicyRegion::India => "India policy",
            PolicyRegion::Foreign => "Foreign policy",
        }
    }
}

impl fmt::Display for PolicyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyRegion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "india" | "indian" => Ok(PolicyRegion::India),
            "foreign" | "international" => Ok(PolicyRegion::Foreign),
            other => Err(CoreError::UnknownPolicyRegion(other.to_string())),
        }
    }
}
