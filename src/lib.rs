//! Query git repository metadata by shelling out to the `git` CLI.
//!
//! Five operations, each a thin wrapper around one (or two) git
//! invocations:
//!
//! - [`git_ref`] — human-readable descriptor of HEAD via `git describe`
//! - [`git_hash`] — HEAD commit hash, short or long
//! - [`is_dirty`] — whether the working tree has uncommitted changes
//! - [`from_closest_tag`] — commits between the nearest tag and HEAD
//! - [`branch_name`] — short name of the current branch
//!
//! All operations are stateless, synchronous, and infallible: on any
//! failure (not a repository, no commits, git missing) the error is
//! reported to a [`DiagnosticSink`] and a benign default is returned
//! (`""`, `false`, or `-1`). The default sink forwards to `log::error!`,
//! so failures are visible once a logger such as `env_logger` is
//! installed. Use [`GitReader::with_sink`] to substitute your own sink.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let hash = gitref::git_hash(gitref::HashFormat::Short, None);
//! let dirty = gitref::is_dirty(Some(Path::new("/src/myrepo")));
//! println!("built from {}{}", hash, if dirty { "-dev" } else { "" });
//! ```

mod exec;
mod options;
mod query;
mod sink;

pub use options::{DescribeOptions, HashFormat};
pub use query::{GitReader, branch_name, from_closest_tag, git_hash, git_ref, is_dirty};
pub use sink::{DiagnosticSink, LogSink};
