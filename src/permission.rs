//! Permission levels on an ordered access scale.
//!
//! A [`Level`] is one named point on the repository access scale. Its rank is
//! its position in the active [`Scale`]; a higher rank grants more access.
//!
//! # Example
//!
//! ```
//! use permission_gate::permission::{Level, Scale};
//!
//! let scale = Scale::new(false);
//! assert_eq!(scale.parse("write"), Some(Level::Write));
//! assert!(scale.satisfies(Level::Write, "admin"));
//! assert!(!scale.satisfies(Level::Write, "read"));
//! ```

use std::fmt;

/// A repository permission level.
///
/// Variants are declared in rank order, so the derived `Ord` is the access
/// ordering: `None < Read < Write < Admin < TestOnlySuperuser`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    None,
    Read,
    Write,
    Admin,
    /// Extra top level, only active when the test flag is set.
    TestOnlySuperuser,
}

impl Level {
    /// Name used by the permission API and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Read => "read",
            Level::Write => "write",
            Level::Admin => "admin",
            Level::TestOnlySuperuser => "test-only-superuser",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BASE: &[Level] = &[Level::None, Level::Read, Level::Write, Level::Admin];

const WITH_TEST: &[Level] = &[
    Level::None,
    Level::Read,
    Level::Write,
    Level::Admin,
    Level::TestOnlySuperuser,
];

/// The active permission enumeration for one check.
///
/// Built fresh from the test flag on every call; there is no shared list to
/// mutate, so enabling the extra level never leaks into a later check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    levels: &'static [Level],
}

impl Scale {
    /// Base scale, extended with [`Level::TestOnlySuperuser`] when
    /// `allow_test_permission` is set.
    pub fn new(allow_test_permission: bool) -> Self {
        let levels = if allow_test_permission { WITH_TEST } else { BASE };
        Self { levels }
    }

    /// Levels in rank order.
    pub fn levels(&self) -> &'static [Level] {
        self.levels
    }

    /// Parse a level name. Exact, case-sensitive match against the active
    /// levels only.
    pub fn parse(&self, name: &str) -> Option<Level> {
        self.levels.iter().copied().find(|l| l.as_str() == name)
    }

    /// Rank of a level name, or `None` when it is not on this scale.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.levels.iter().position(|l| l.as_str() == name)
    }

    /// Whether an actual permission name reaches `required`.
    ///
    /// Names outside the scale rank below every level and never satisfy.
    pub fn satisfies(&self, required: Level, actual: &str) -> bool {
        match (self.rank(required.as_str()), self.rank(actual)) {
            (Some(required), Some(actual)) => required <= actual,
            _ => false,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(level.as_str())?;
        }
        Ok(())
    }
}
