//! The five metadata queries
//!
//! This module handles:
//! - Describing HEAD (`git describe`)
//! - Resolving commit hashes (`git rev-parse`)
//! - Detecting a dirty working tree (`git status --porcelain`)
//! - Counting commits since the nearest tag (`git describe` + `git rev-list`)
//! - Resolving the current branch name (`git rev-parse --abbrev-ref`)
//!
//! Every query is stateless and one-shot: one or two blocking git
//! invocations, trim, a little coercion, and a documented default on
//! any failure. Nothing is cached and nothing is retried.

use std::path::Path;

use crate::exec::run_git;
use crate::options::{DescribeOptions, HashFormat};
use crate::sink::{DiagnosticSink, LogSink};

/// Runs the metadata queries, reporting swallowed failures to its sink.
///
/// The free functions in this module use a default reader (logging
/// sink); construct one with [`GitReader::with_sink`] to observe
/// failures directly.
pub struct GitReader {
    sink: Box<dyn DiagnosticSink + Send + Sync>,
}

impl Default for GitReader {
    fn default() -> Self {
        GitReader { sink: Box::new(LogSink) }
    }
}

impl GitReader {
    /// Create a reader that reports caught failures to `sink`.
    pub fn with_sink(sink: impl DiagnosticSink + Send + Sync + 'static) -> Self {
        GitReader { sink: Box::new(sink) }
    }

    /// Run git, returning `None` after reporting any failure to the sink.
    fn run(&self, operation: &str, args: &[&str], cwd: Option<&Path>) -> Option<String> {
        match run_git(args, cwd) {
            Ok(stdout) => Some(stdout),
            Err(e) => {
                self.sink.report(operation, &e);
                None
            }
        }
    }

    /// Human-readable descriptor of HEAD with the default describe flags
    /// (`--always --dirty=-dev --broken`).
    ///
    /// Typically a tag name, `tag-N-gHASH` when N commits past the
    /// nearest tag, or a short hash when no tag is reachable. Returns
    /// `""` on failure (not a repository, no commits).
    pub fn git_ref(&self, cwd: Option<&Path>) -> String {
        self.git_ref_with(&DescribeOptions::default(), cwd)
    }

    /// [`git_ref`](Self::git_ref) with explicit describe flags.
    pub fn git_ref_with(&self, options: &DescribeOptions, cwd: Option<&Path>) -> String {
        let owned = options.to_args();
        let args: Vec<&str> = owned.iter().map(String::as_str).collect();
        self.run("git_ref", &args, cwd).unwrap_or_default()
    }

    /// HEAD commit hash: 7 characters for [`HashFormat::Short`], 40 for
    /// [`HashFormat::Long`]. Returns `""` on failure.
    pub fn git_hash(&self, format: HashFormat, cwd: Option<&Path>) -> String {
        let args: &[&str] = match format {
            HashFormat::Short => &["rev-parse", "--short", "HEAD"],
            HashFormat::Long => &["rev-parse", "HEAD"],
        };
        self.run("git_hash", args, cwd).unwrap_or_default()
    }

    /// Whether the working tree has uncommitted changes (any tracked or
    /// untracked entry in `git status --porcelain`).
    ///
    /// Returns `false` on failure: "cannot determine" is deliberately
    /// treated as "not dirty".
    pub fn is_dirty(&self, cwd: Option<&Path>) -> bool {
        self.run("is_dirty", &["status", "--porcelain"], cwd)
            .map(|stdout| !stdout.is_empty())
            .unwrap_or(false)
    }

    /// Number of commits strictly between the nearest reachable tag and
    /// HEAD. Returns `0` when no tag is reachable but HEAD resolves,
    /// and `-1` on failure (not a repository, no commits).
    ///
    /// Composed from two explicit invocations — resolve the nearest tag
    /// with `git describe --abbrev=0`, then count with
    /// `git rev-list <tag>..HEAD --count` — instead of relying on a host
    /// shell's command substitution.
    pub fn from_closest_tag(&self, cwd: Option<&Path>) -> i64 {
        // An unresolvable tag leaves an empty range bound: `..HEAD`
        // counts zero commits whenever HEAD resolves and fails when it
        // does not.
        let tag =
            self.run("from_closest_tag", &["describe", "--abbrev=0"], cwd).unwrap_or_default();
        let range = format!("{}..HEAD", tag);
        let Some(count) =
            self.run("from_closest_tag", &["rev-list", range.as_str(), "--count"], cwd)
        else {
            return -1;
        };
        match count.parse::<i64>() {
            Ok(n) => n,
            Err(e) => {
                self.sink
                    .report("from_closest_tag", &format!("bad commit count {:?}: {}", count, e));
                -1
            }
        }
    }

    /// Short name of the current branch via `git rev-parse --abbrev-ref
    /// HEAD`.
    ///
    /// Git itself prints the literal `HEAD` in a detached-HEAD state;
    /// that is passed through unchanged. Returns `""` on failure.
    pub fn branch_name(&self, cwd: Option<&Path>) -> String {
        self.run("branch_name", &["rev-parse", "--abbrev-ref", "HEAD"], cwd).unwrap_or_default()
    }
}

/// Human-readable descriptor of HEAD; see [`GitReader::git_ref`].
pub fn git_ref(cwd: Option<&Path>) -> String {
    GitReader::default().git_ref(cwd)
}

/// HEAD commit hash; see [`GitReader::git_hash`].
pub fn git_hash(format: HashFormat, cwd: Option<&Path>) -> String {
    GitReader::default().git_hash(format, cwd)
}

/// Working-tree dirty state; see [`GitReader::is_dirty`].
pub fn is_dirty(cwd: Option<&Path>) -> bool {
    GitReader::default().is_dirty(cwd)
}

/// Commits since the nearest tag; see [`GitReader::from_closest_tag`].
pub fn from_closest_tag(cwd: Option<&Path>) -> i64 {
    GitReader::default().from_closest_tag(cwd)
}

/// Current branch name; see [`GitReader::branch_name`].
pub fn branch_name(cwd: Option<&Path>) -> String {
    GitReader::default().branch_name(cwd)
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
