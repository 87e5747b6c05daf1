//! # Family Graph Model
//!
//! Plain data shared by the builder, the search, and the resolver.
//!
//! Design rule: no lookups, no I/O, no table knowledge here.
//! People refer to each other by `PersonId`, never by ownership.

pub mod person;
pub mod path;

pub use person::{Person, PersonId, Gender};
pub use path::{Hop, KinPath, CombinedPath, PATH_SEPARATOR};
