use std::fmt;

/// How much contract checking a build performs.
///
/// The value for a build is the constant [`PROFILE`]; it is fixed at compile
/// time and every check in the crate branches on it, so the optimiser folds
/// the unchecked path down to the bare method body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildProfile {
    /// Run every check and panic on the first violation.
    Checked,
    /// Run every check, log violations through `tracing` and carry on.
    Observe,
    /// Compile every check away.
    Unchecked,
}

impl BuildProfile {
    /// Whether checks are evaluated at all.
    #[inline(always)]
    pub const fn is_active(self) -> bool {
        !matches!(self, BuildProfile::Unchecked)
    }

    /// Whether a violation stops the current operation.
    #[inline(always)]
    pub const fn aborts(self) -> bool {
        matches!(self, BuildProfile::Checked)
    }

    const fn from_build() -> Self {
        if cfg!(feature = "runtime-no-check") {
            BuildProfile::Unchecked
        } else if cfg!(feature = "runtime-check-and-panic") {
            BuildProfile::Checked
        } else if cfg!(feature = "runtime-check-and-log") {
            BuildProfile::Observe
        } else if cfg!(debug_assertions) {
            BuildProfile::Checked
        } else {
            BuildProfile::Unchecked
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildProfile::Checked => "checked",
            BuildProfile::Observe => "observe",
            BuildProfile::Unchecked => "unchecked",
        };
        f.write_str(name)
    }
}

/// The profile this build of `covenant` was compiled with.
pub const PROFILE: BuildProfile = BuildProfile::from_build();
