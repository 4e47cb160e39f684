//! # Random 128-bit Identifiers
//!
//! This crate provides [`SandId`], a compact 16-byte identifier meant as a primary key
//! or reference type for applications and databases. Every bit of a generated
//! `SandId` comes from the operating system's secure random source, so collisions are
//! negligible even after billions of identifiers.
//!
//! ## Generating SandIds
//!
//! ```
//! use sand_id::SandId;
//!
//! # #[cfg(feature = "rand")]
//! let id = SandId::new();
//! ```
//!
//! `SandId`s are generated without any shared state and can be created concurrently
//! from any number of threads.
//!
//! ## Printing and Parsing
//!
//! The canonical text form is 32 lowercase hex digits without separators:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use sand_id::SandId;
//!
//! let id: SandId = "0123456789abcdef0123456789abcdef".parse()?;
//!
//! assert_eq!(id.to_string(), "0123456789abcdef0123456789abcdef");
//! # Ok(()) }
//! ```
//!
//! Identifiers known at compile time can be written with [`SandId::must_parse()`]:
//!
//! ```
//! use sand_id::SandId;
//!
//! const SYSTEM: SandId = SandId::must_parse("00000000000000000000000000000001");
//! ```
//!
//! ## Ordering
//!
//! `SandId`s are ordered byte by byte, most significant byte first. The order is not
//! related to the time of creation; it only makes sorting deterministic.
//!
//! ```
//! use std::cmp::Ordering;
//! use sand_id::{SandId, compare};
//!
//! let a = SandId::must_parse("00000000000000000000000000000001");
//! let b = SandId::must_parse("00000000000000000000000000000002");
//!
//! assert_eq!(compare(a, b), Ordering::Less);
//! assert!(a < b);
//! ```
//!
//! ## Serializing and Deserializing using `Serde` (JSON)
//!
//! With the `serde` feature enabled, a `SandId` serializes to its text form in
//! human-readable formats and to its 16 raw bytes otherwise:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! # #[cfg(feature = "serde")]
//! # {
//! use sand_id::{NullSandId, SandId};
//! # use serde_derive as serde;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Account {
//!     id: SandId,
//!     referrer: NullSandId,
//! }
//!
//! let a1 = Account {
//!     id: SandId::must_parse("0123456789abcdef0123456789abcdef"),
//!     referrer: NullSandId::NULL,
//! };
//!
//! let s = serde_json::to_string(&a1)?;
//!
//! println!("JSON: {s}");
//!
//! let a2: Account = serde_json::from_str(&s)?;
//!
//! assert_eq!(a1, a2);
//! # }
//! # Ok(()) }
//! ```
//!
//! ## Databases
//!
//! The [`sql`] module connects `SandId` and [`NullSandId`] to database layers that
//! exchange untyped values. With the `sqlx` feature enabled, both types can be bound
//! to and read from Postgres `BYTEA` columns directly.
//!
//! ## Feature Flags
//!
//! - **`rand`**: Generates `SandId`s with the `rand` crate, enabled by default.
//! - **`serde`**: Provides support for serialization and deserialization via `Serde`, optional.
//! - **`sqlx`**: Implements the `sqlx` traits for Postgres, optional.
//! - **`tracing`**: Emits `tracing` spans and events for generation and scanning, optional.
//!

mod error;
#[cfg(feature = "rand")]
mod generator;
mod hex;
mod null;
mod sand_id;
#[cfg(feature = "serde")]
mod serde;
pub mod sql;
#[cfg(feature = "sqlx")]
mod sqlx;
mod util;

use std::cmp::Ordering;

pub use error::FormatError;
pub use null::NullSandId;
pub use sand_id::SandId;

/// Tests two `SandId`s for equality of all 16 bytes.
///
/// Same as `a == b`.
///
/// # Example
///
/// ```
/// use sand_id::SandId;
///
/// assert!(sand_id::equal(SandId::NIL, SandId::default()));
/// assert!(!sand_id::equal(SandId::NIL, SandId::MAX));
/// ```
#[must_use]
pub fn equal(a: SandId, b: SandId) -> bool {
    a == b
}

/// Compares two `SandId`s byte by byte, most significant byte first.
///
/// Same as `a.cmp(&b)`. Use `compare(a, b) as i8` for a -1/0/1 result.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use sand_id::SandId;
///
/// assert_eq!(sand_id::compare(SandId::NIL, SandId::MAX), Ordering::Less);
/// assert_eq!(sand_id::compare(SandId::MAX, SandId::MAX) as i8, 0);
/// ```
#[must_use]
pub fn compare(a: SandId, b: SandId) -> Ordering {
    a.cmp(&b)
}

/// Checks a string for being a valid `SandId`.
///
/// To be valid, the string must be 32 characters long and consist of
/// hexadecimal digits only (either case).
///
/// # Errors
///
/// If the string is not valid, an appropriate error is returned.
///
/// # Example
///
/// ```
/// use sand_id::FormatError;
///
/// assert!(sand_id::validate("0123456789abcdef0123456789ABCDEF").is_ok());
///
/// assert_eq!(
///     sand_id::validate("0123456789abcdef"),
///     Err(FormatError::InvalidLength { expected: 32, actual: 16 })
/// );
/// assert_eq!(
///     sand_id::validate("0123456789abcdefghijklmnopqrstuv"),
///     Err(FormatError::InvalidChar { index: 16 })
/// );
/// ```
pub const fn validate(s: &str) -> Result<(), FormatError> {
    hex::validate(s.as_bytes())
}
