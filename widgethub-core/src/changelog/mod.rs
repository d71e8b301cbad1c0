//! widgethub Changelog - release-time changelog extraction
//!
//! # Flow
//!
//! ```text
//! git tag -l --sort=-creatordate
//!     │  newest = to, second newest = from
//!     ▼
//! remove CHANGELOG.md
//!     │
//!     ▼
//! pnpm dlx changelogen --from .. --to .. --output CHANGELOG.md --noAuthors
//!     │
//!     ▼
//! drop every line before "[compare changes]"
//! ```
//!
//! Tag listing and generation are behind the [`TagSource`] and
//! [`ChangelogGenerator`] traits.

mod config;
mod error;
mod extractor;
mod generator;
mod tags;

pub use config::{ChangelogConfig, ChangelogSettings, DEFAULT_CHANGELOG_PATH, DEFAULT_MARKER};
pub use error::ChangelogError;
pub use extractor::{trim_to_marker, ChangelogExtractor, ExtractOutcome};
pub use generator::{generator_args, ChangelogGenerator, CommandGenerator};
pub use tags::{latest_tags, parse_tag_list, GitTagSource, TagRange, TagSource};
