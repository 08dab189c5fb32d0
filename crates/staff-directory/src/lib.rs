//! Staff directory engine for a restaurant back office.
//!
//! The [`directory`] module owns the roster: an ordered record store backed
//! by a single JSON snapshot blob, a pure query engine over it, per-form
//! validation, and one-time credential generation and sharing. [`config`],
//! [`telemetry`], and [`error`] carry the service plumbing shared with the
//! HTTP binary in `services/api`.

pub mod config;
pub mod directory;
pub mod error;
pub mod telemetry;
