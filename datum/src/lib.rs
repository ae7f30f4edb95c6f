#![deny(missing_docs)]
//! # datum — progressive values for asynchronously fetched data
//!
//! **Part of the [datum workspace](../index.html)**
//!
//! A fetched value is rarely just "there" or "not there". It has not
//! been asked for yet, or a request is in flight, or it arrived and a
//! refresh is running, or it is settled. This crate gives those states
//! a type and defines how they combine.
//!
//! Core pieces:
//!
//! - [`datum`]: the four-state [`Datum`] (`Empty`, `Loading`,
//!   `Stale`, `Fresh`) with its combinators and semigroups
//! - [`datum_either`]: [`DatumEither`], a [`Datum`] of a [`Result`]
//!   (six observable states)
//! - [`these`] and [`datum_these`]: [`These`] (`Err`, `Ok`, `Both`)
//!   and [`DatumThese`], a [`Datum`] that keeps partial successes and
//!   merges their errors
//! - [`one_shot`]: the three-state [`OneShot`] (`Empty`, `Loading`,
//!   `Done`) for values that are never refreshed
//! - [`apply`]: the [`Apply`] wrapper selecting the applicative
//!   semigroup instead of the progress semigroup
//! - [`datum_stream_ext`] *(feature = "async")*: folds over
//!   `Stream<Item = Datum<A>>`
//! - [`error`]: [`NotValued`], returned when a value is demanded from
//!   a container that has none
//!
//! ## Concepts
//!
//! Two tags answer two questions: *is there a value?* and *is a
//! request in flight?*
//!
//! - `Empty`: no value, idle.
//! - `Loading`: no value, in flight.
//! - `Stale(a)`: value, in flight (a refresh).
//! - `Fresh(a)`: value, idle.
//!
//! [`Datum::to_stale`] starts a refresh and [`Datum::to_fresh`]
//! finishes one. Combinators never panic: where information is
//! missing the result is `Empty`.
//!
//! Two semigroups exist and are kept apart:
//!
//! - the **progress** semigroup (`impl Semigroup for Datum<A>`):
//!   `Empty` is neutral, `Loading ⊕ Fresh(x) = Stale(x)`;
//! - the **apply** semigroup ([`Apply`]): `Empty` annihilates, then
//!   `Loading`, then staleness, the same precedence as
//!   [`Datum::zip_with`].
//!
//! ## Features
//!
//! - **`async`** *(enabled by default)*: future traversals
//!   (`traverse_future`, `sequence_future`) and [`DatumStreamExt`].
//!   Requires `futures` and `async-trait`.
//! - **`serde`**: `Serialize`/`Deserialize` for [`Datum`],
//!   [`OneShot`] and [`These`].
//!
//! To use only the value types:
//! ```toml
//! datum = { version = "…", default-features = false }
//! ```
//!
//! ## Quick start
//! ```rust
//! use datum::{datum_either, Datum, DatumEither};
//!
//! // A profile that loaded, and a feed that is reloading
//! let profile: DatumEither<String, &str> = datum_either::success("ada");
//! let feed: DatumEither<String, u32> = datum_either::stale_success(12);
//!
//! let header = profile.zip_with_ok(feed, |name, n| format!("{name} ({n})"));
//! assert_eq!(header, datum_either::stale_success("ada (12)".to_string()));
//!
//! // Sequencing stops at the first Empty
//! let all: Datum<Vec<i32>> = vec![Datum::Loading, Datum::Fresh(1), Datum::Empty]
//!     .into_iter()
//!     .collect();
//! assert_eq!(all, Datum::Empty);
//! ```

pub mod apply;
pub mod datum;
pub mod datum_either;
#[cfg(feature = "async")]
pub mod datum_stream_ext;
pub mod datum_these;
pub mod error;
pub mod one_shot;
pub mod these;

pub use apply::Apply;
pub use datum::Datum;
pub use datum_either::DatumEither;
#[cfg(feature = "async")]
pub use datum_stream_ext::DatumStreamExt;
pub use datum_these::DatumThese;
pub use error::NotValued;
pub use one_shot::OneShot;
pub use these::These;

/// Re-export of the algebra traits and wrappers.
pub use datum_algebra;
