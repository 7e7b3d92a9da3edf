//! Structured unix permission sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single permission bit within one class (user, group or other).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Execute,
}

impl Permission {
    fn bit(self) -> u32 {
        match self {
            Permission::Read => 0o4,
            Permission::Write => 0o2,
            Permission::Execute => 0o1,
        }
    }
}

/// Permissions for the user, group and other classes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePermissions {
    pub user: BTreeSet<Permission>,
    pub group: BTreeSet<Permission>,
    pub other: BTreeSet<Permission>,
}

const ALL: [Permission; 3] = [Permission::Read, Permission::Write, Permission::Execute];

fn class_to_octal(set: &BTreeSet<Permission>) -> u32 {
    set.iter().fold(0, |acc, p| acc | p.bit())
}

fn class_from_octal(bits: u32) -> BTreeSet<Permission> {
    ALL.into_iter().filter(|p| bits & p.bit() != 0).collect()
}

impl FilePermissions {
    /// Encode as the usual three-digit octal mode, e.g. `0o754`.
    pub fn to_octal(&self) -> u32 {
        (class_to_octal(&self.user) << 6) | (class_to_octal(&self.group) << 3) | class_to_octal(&self.other)
    }

    /// Decode the low nine permission bits of `mode`; everything above is ignored.
    pub fn from_octal(mode: u32) -> Self {
        Self {
            user: class_from_octal((mode >> 6) & 0o7),
            group: class_from_octal((mode >> 3) & 0o7),
            other: class_from_octal(mode & 0o7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_octal() {
        let perms = FilePermissions {
            user: [Permission::Read, Permission::Write, Permission::Execute].into(),
            group: [Permission::Read, Permission::Execute].into(),
            other: [Permission::Read].into(),
        };
        assert_eq!(perms.to_octal(), 0o754);
        assert_eq!(FilePermissions::default().to_octal(), 0);
    }

    #[test]
    fn test_from_octal_ignores_type_bits() {
        let perms = FilePermissions::from_octal(0o100_640);
        assert_eq!(perms.user, BTreeSet::from([Permission::Read, Permission::Write]));
        assert_eq!(perms.group, BTreeSet::from([Permission::Read]));
        assert!(perms.other.is_empty());
        assert_eq!(perms.to_octal(), 0o640);
    }
}
