//! Typed configuration for the query operations
//!
//! Optional behavior is modeled as explicit enums/structs with stated
//! defaults rather than loosely-typed optional arguments.

/// Which form of commit hash `git rev-parse` should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFormat {
    /// Abbreviated 7-character hash (`git rev-parse --short HEAD`).
    #[default]
    Short,
    /// Full 40-character hash (`git rev-parse HEAD`).
    Long,
}

/// Flags passed to `git describe`.
///
/// The default renders to `--always --dirty=-dev --broken`: always
/// produce output even without a reachable tag, append `-dev` when the
/// working tree has uncommitted changes, and append `-broken` (git's
/// own marker) when the repository is corrupt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Emit `--always` so a short hash is produced when no tag is reachable.
    pub always: bool,
    /// Suffix appended when the tree is dirty; `None` omits `--dirty`.
    pub dirty_mark: Option<String>,
    /// Emit `--broken` so corrupt repositories describe with a suffix
    /// instead of failing. Only applies together with a dirty mark:
    /// git's `--broken` implies its working-tree check, which would
    /// reintroduce a dirty suffix a `None` mark promises to omit.
    pub broken: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        DescribeOptions { always: true, dirty_mark: Some("-dev".to_string()), broken: true }
    }
}

impl DescribeOptions {
    /// Render the full `git describe` argument list.
    pub(crate) fn to_args(&self) -> Vec<String> {
        let mut args = vec!["describe".to_string()];
        if self.always {
            args.push("--always".to_string());
        }
        if let Some(mark) = &self.dirty_mark {
            args.push(format!("--dirty={}", mark));
            if self.broken {
                args.push("--broken".to_string());
            }
        }
        args
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
