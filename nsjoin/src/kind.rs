//! Namespace kind selectors

use nix::sched::CloneFlags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The six namespace kinds a join can target
///
/// Selector strings are matched exactly as they appear under
/// `/proc/<pid>/ns/` - case-sensitive, no trimming, no abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NamespaceKind {
    /// Network namespace (`net`)
    Net,
    /// Process ID namespace (`pid`)
    Pid,
    /// Mount namespace (`mnt`)
    Mnt,
    /// Inter-process communication namespace (`ipc`)
    Ipc,
    /// Hostname namespace (`uts`)
    Uts,
    /// UID/GID mapping namespace (`user`)
    User,
}

impl NamespaceKind {
    /// All recognized kinds, in selector order
    pub const ALL: [Self; 6] = [
        Self::Net,
        Self::Pid,
        Self::Mnt,
        Self::Ipc,
        Self::Uts,
        Self::User,
    ];

    /// Selector string for this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Net => "net",
            Self::Pid => "pid",
            Self::Mnt => "mnt",
            Self::Ipc => "ipc",
            Self::Uts => "uts",
            Self::User => "user",
        }
    }

    /// Convert to the clone flag passed to setns(2)
    ///
    /// Every kind maps to exactly one flag; there is no fallthrough.
    #[must_use]
    pub fn to_clone_flags(self) -> CloneFlags {
        match self {
            Self::Net => CloneFlags::CLONE_NEWNET,
            Self::Pid => CloneFlags::CLONE_NEWPID,
            Self::Mnt => CloneFlags::CLONE_NEWNS,
            Self::Ipc => CloneFlags::CLONE_NEWIPC,
            Self::Uts => CloneFlags::CLONE_NEWUTS,
            Self::User => CloneFlags::CLONE_NEWUSER,
        }
    }
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NamespaceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "net" => Ok(Self::Net),
            "pid" => Ok(Self::Pid),
            "mnt" => Ok(Self::Mnt),
            "ipc" => Ok(Self::Ipc),
            "uts" => Ok(Self::Uts),
            "user" => Ok(Self::User),
            _ => Err(Error::UnknownNamespaceKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for NamespaceKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<NamespaceKind> for String {
    fn from(kind: NamespaceKind) -> Self {
        kind.as_str().to_string()
    }
}
