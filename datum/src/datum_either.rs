//! Progressive results: a [`Datum`] whose payload is a [`Result`].
//!
//! A [`DatumEither`] has six observable states: `Empty`, `Loading`,
//! and a success or a failure that is either stale or fresh. The
//! refresh transitions and every generic [`Datum`] combinator apply
//! unchanged; the methods here address one channel of the payload.
//!
//! Constructors are free functions so that `Datum::fresh` and
//! `datum_either::success` never compete for the same name.
//!
//! ```rust
//! use datum::datum_either::{self, DatumEither};
//!
//! let user: DatumEither<String, &str> = datum_either::success("ada");
//! let refreshing = user.to_stale();
//! assert!(refreshing.is_stale_success());
//!
//! let label = refreshing.squash(
//!     |loading| String::from(if loading { "…" } else { "-" }),
//!     |e, _| e,
//!     |name, stale| format!("{name}{}", if stale { " (updating)" } else { "" }),
//! );
//! assert_eq!(label, "ada (updating)");
//! ```
use crate::datum::Datum;

/// A progressive value whose payload is a success or a failure.
pub type DatumEither<E, A> = Datum<Result<A, E>>;

/// A fresh success.
pub fn success<E, A>(value: A) -> DatumEither<E, A> {
    Datum::Fresh(Ok(value))
}

/// A fresh failure.
pub fn failure<E, A>(error: E) -> DatumEither<E, A> {
    Datum::Fresh(Err(error))
}

/// A success that is being refreshed.
pub fn stale_success<E, A>(value: A) -> DatumEither<E, A> {
    Datum::Stale(Ok(value))
}

/// A failure that is being retried.
pub fn stale_failure<E, A>(error: E) -> DatumEither<E, A> {
    Datum::Stale(Err(error))
}

/// `Fresh(result)`.
pub fn from_result<E, A>(result: Result<A, E>) -> DatumEither<E, A> {
    Datum::Fresh(result)
}

/// `Some(a)` is a fresh success, `None` a fresh failure built by
/// `on_none`.
pub fn from_option<E, A>(value: Option<A>, on_none: impl FnOnce() -> E) -> DatumEither<E, A> {
    Datum::Fresh(value.ok_or_else(on_none))
}

/// `Some(a)` is a fresh success, `None` is `Empty`.
pub fn from_nullable<E, A>(value: Option<A>) -> DatumEither<E, A> {
    match value {
        Some(a) => success(a),
        None => Datum::Empty,
    }
}

/// `Empty`.
pub fn empty<E, A>() -> DatumEither<E, A> {
    Datum::Empty
}

/// `Loading`.
pub fn loading<E, A>() -> DatumEither<E, A> {
    Datum::Loading
}

impl<E, A> Datum<Result<A, E>> {
    /// Valued with `Ok`.
    pub fn is_success(&self) -> bool {
        matches!(self, Datum::Stale(Ok(_)) | Datum::Fresh(Ok(_)))
    }

    /// Valued with `Err`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Datum::Stale(Err(_)) | Datum::Fresh(Err(_)))
    }

    /// `Stale(Ok(_))`.
    pub fn is_stale_success(&self) -> bool {
        matches!(self, Datum::Stale(Ok(_)))
    }

    /// `Stale(Err(_))`.
    pub fn is_stale_failure(&self) -> bool {
        matches!(self, Datum::Stale(Err(_)))
    }

    /// `Fresh(Ok(_))`.
    pub fn is_fresh_success(&self) -> bool {
        matches!(self, Datum::Fresh(Ok(_)))
    }

    /// `Fresh(Err(_))`.
    pub fn is_fresh_failure(&self) -> bool {
        matches!(self, Datum::Fresh(Err(_)))
    }

    /// Six-way case analysis.
    pub fn fold_either<B>(
        self,
        on_empty: impl FnOnce() -> B,
        on_loading: impl FnOnce() -> B,
        on_stale_failure: impl FnOnce(E) -> B,
        on_stale_success: impl FnOnce(A) -> B,
        on_fresh_failure: impl FnOnce(E) -> B,
        on_fresh_success: impl FnOnce(A) -> B,
    ) -> B {
        match self {
            Datum::Empty => on_empty(),
            Datum::Loading => on_loading(),
            Datum::Stale(Err(e)) => on_stale_failure(e),
            Datum::Stale(Ok(a)) => on_stale_success(a),
            Datum::Fresh(Err(e)) => on_fresh_failure(e),
            Datum::Fresh(Ok(a)) => on_fresh_success(a),
        }
    }

    /// Case analysis where the stale/fresh tag becomes a `stale` flag.
    pub fn refresh_fold<B>(
        self,
        on_empty: impl FnOnce() -> B,
        on_loading: impl FnOnce() -> B,
        on_failure: impl FnOnce(E, bool) -> B,
        on_success: impl FnOnce(A, bool) -> B,
    ) -> B {
        match self {
            Datum::Empty => on_empty(),
            Datum::Loading => on_loading(),
            Datum::Stale(Err(e)) => on_failure(e, true),
            Datum::Stale(Ok(a)) => on_success(a, true),
            Datum::Fresh(Err(e)) => on_failure(e, false),
            Datum::Fresh(Ok(a)) => on_success(a, false),
        }
    }

    /// Like [`refresh_fold`](Self::refresh_fold) with `Empty` and
    /// `Loading` merged into `on_none`, whose flag is `true` for
    /// `Loading`.
    pub fn squash<B>(
        self,
        on_none: impl FnOnce(bool) -> B,
        on_failure: impl FnOnce(E, bool) -> B,
        on_success: impl FnOnce(A, bool) -> B,
    ) -> B {
        match self {
            Datum::Empty => on_none(false),
            Datum::Loading => on_none(true),
            Datum::Stale(Err(e)) => on_failure(e, true),
            Datum::Stale(Ok(a)) => on_success(a, true),
            Datum::Fresh(Err(e)) => on_failure(e, false),
            Datum::Fresh(Ok(a)) => on_success(a, false),
        }
    }

    /// Transform the success channel.
    pub fn map_ok<B>(self, f: impl FnOnce(A) -> B) -> DatumEither<E, B> {
        self.map(|r| r.map(f))
    }

    /// Transform the failure channel.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> DatumEither<F, A> {
        self.map(|r| r.map_err(f))
    }

    /// Transform whichever channel is present.
    pub fn bimap<F, B>(self, f: impl FnOnce(E) -> F, g: impl FnOnce(A) -> B) -> DatumEither<F, B> {
        self.map(|r| match r {
            Ok(a) => Ok(g(a)),
            Err(e) => Err(f(e)),
        })
    }

    /// Chain the success channel.
    ///
    /// Failures keep their own tag; `Empty` and `Loading`
    /// short-circuit. A success takes the continuation's shape.
    pub fn and_then_ok<B>(self, f: impl FnOnce(A) -> DatumEither<E, B>) -> DatumEither<E, B> {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(Err(e)) => Datum::Stale(Err(e)),
            Datum::Fresh(Err(e)) => Datum::Fresh(Err(e)),
            Datum::Stale(Ok(a)) | Datum::Fresh(Ok(a)) => f(a),
        }
    }

    /// Datum precedence first, then the first failure from the left.
    pub fn zip_with_ok<B, C>(
        self,
        other: DatumEither<E, B>,
        f: impl FnOnce(A, B) -> C,
    ) -> DatumEither<E, C> {
        self.zip_with(other, |ra, rb| match (ra, rb) {
            (Ok(a), Ok(b)) => Ok(f(a, b)),
            (Err(e), _) | (Ok(_), Err(e)) => Err(e),
        })
    }

    /// Replace a failure, stale or fresh, with the fallback.
    pub fn alt_failure(self, fallback: impl FnOnce() -> DatumEither<E, A>) -> DatumEither<E, A> {
        match self {
            Datum::Stale(Err(_)) | Datum::Fresh(Err(_)) => fallback(),
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(Ok(a)) => Datum::Stale(Ok(a)),
            Datum::Fresh(Ok(a)) => Datum::Fresh(Ok(a)),
        }
    }

    /// The payload without its tag.
    pub fn into_result(self) -> Option<Result<A, E>> {
        self.into_value()
    }
}

impl<E, F> Datum<Result<F, E>> {
    /// Apply a progressive function result to a progressive argument
    /// result.
    pub fn ap_ok<A, B>(self, fa: DatumEither<E, A>) -> DatumEither<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.zip_with_ok(fa, |f, a| f(a))
    }
}
