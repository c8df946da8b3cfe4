//! Build regular expressions out of readable method calls.
//!
//! ```
//! use oregex::PatternBuilder;
//!
//! let pattern = PatternBuilder::create(None)
//!     .starts_with("bo")
//!     .has_one_or_more("b")
//!     .ends_with(None);
//!
//! assert_eq!(pattern.build(), "^bo(b)+$");
//! assert!(pattern.is_in("bobbb").unwrap());
//! ```
//!
//! Matching is delegated to a [`PatternEngine`], by default [`RegexEngine`]
//! which compiles the pattern with the `regex` crate on every call.

mod builder;
mod engine;
mod matcher;
mod types;

pub use builder::PatternBuilder;
pub use engine::{PatternEngine, PatternError, RegexEngine, RegexMatcher};
pub use types::{Flags, SearchOptions};
