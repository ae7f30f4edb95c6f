//! Progressive validation: a [`Datum`] whose payload is [`These`].
//!
//! On top of the six states of [`DatumEither`](crate::DatumEither), a
//! [`DatumThese`] can hold a stale or fresh *partial success*: a value
//! that came back together with an error. Errors are merged with the
//! error type's [`Semigroup`] rather than dropped.
//!
//! ```rust
//! use datum::datum_these::{self, DatumThese};
//!
//! let rows: DatumThese<String, Vec<u32>> =
//!     datum_these::partial_success("row 3 rejected; ".to_string(), vec![1, 2]);
//! let total = rows.map_ok(|r| r.iter().sum::<u32>());
//! assert_eq!(total, datum_these::partial_success("row 3 rejected; ".to_string(), 3));
//! ```
use datum_algebra::Monoid;
use datum_algebra::Semigroup;

use crate::datum::Datum;
use crate::these::These;

/// A progressive value whose payload may carry errors, a value, or
/// both.
pub type DatumThese<E, A> = Datum<These<E, A>>;

/// A fresh success.
pub fn success<E, A>(value: A) -> DatumThese<E, A> {
    Datum::Fresh(These::Ok(value))
}

/// A fresh failure.
pub fn failure<E, A>(error: E) -> DatumThese<E, A> {
    Datum::Fresh(These::Err(error))
}

/// A fresh value with an accompanying error.
pub fn partial_success<E, A>(error: E, value: A) -> DatumThese<E, A> {
    Datum::Fresh(These::Both(error, value))
}

/// A success being refreshed.
pub fn stale_success<E, A>(value: A) -> DatumThese<E, A> {
    Datum::Stale(These::Ok(value))
}

/// A failure being retried.
pub fn stale_failure<E, A>(error: E) -> DatumThese<E, A> {
    Datum::Stale(These::Err(error))
}

/// A partial success being refreshed.
pub fn stale_partial_success<E, A>(error: E, value: A) -> DatumThese<E, A> {
    Datum::Stale(These::Both(error, value))
}

/// `Fresh(these)`.
pub fn from_these<E, A>(these: These<E, A>) -> DatumThese<E, A> {
    Datum::Fresh(these)
}

/// `Some(a)` is a fresh success, `None` a fresh failure built by
/// `on_none`.
pub fn from_option<E, A>(value: Option<A>, on_none: impl FnOnce() -> E) -> DatumThese<E, A> {
    match value {
        Some(a) => success(a),
        None => failure(on_none()),
    }
}

/// `Some(a)` is a fresh success, `None` is `Empty`.
pub fn from_nullable<E, A>(value: Option<A>) -> DatumThese<E, A> {
    match value {
        Some(a) => success(a),
        None => Datum::Empty,
    }
}

/// `Empty`.
pub fn empty<E, A>() -> DatumThese<E, A> {
    Datum::Empty
}

/// `Loading`.
pub fn loading<E, A>() -> DatumThese<E, A> {
    Datum::Loading
}

impl<E, A> Datum<These<E, A>> {
    /// Valued with `Ok`.
    pub fn is_success(&self) -> bool {
        self.is_valued_and(These::is_ok)
    }

    /// Valued with `Err`.
    pub fn is_failure(&self) -> bool {
        self.is_valued_and(These::is_err)
    }

    /// Valued with `Both`.
    pub fn is_partial_success(&self) -> bool {
        self.is_valued_and(These::is_both)
    }

    /// `Stale(Ok(_))`.
    pub fn is_stale_success(&self) -> bool {
        matches!(self, Datum::Stale(These::Ok(_)))
    }

    /// `Stale(Err(_))`.
    pub fn is_stale_failure(&self) -> bool {
        matches!(self, Datum::Stale(These::Err(_)))
    }

    /// `Stale(Both(..))`.
    pub fn is_stale_partial_success(&self) -> bool {
        matches!(self, Datum::Stale(These::Both(_, _)))
    }

    /// `Fresh(Ok(_))`.
    pub fn is_fresh_success(&self) -> bool {
        matches!(self, Datum::Fresh(These::Ok(_)))
    }

    /// `Fresh(Err(_))`.
    pub fn is_fresh_failure(&self) -> bool {
        matches!(self, Datum::Fresh(These::Err(_)))
    }

    /// `Fresh(Both(..))`.
    pub fn is_fresh_partial_success(&self) -> bool {
        matches!(self, Datum::Fresh(These::Both(_, _)))
    }

    /// Eight-way case analysis.
    #[allow(clippy::too_many_arguments)]
    pub fn fold_these<B>(
        self,
        on_empty: impl FnOnce() -> B,
        on_loading: impl FnOnce() -> B,
        on_stale_failure: impl FnOnce(E) -> B,
        on_stale_success: impl FnOnce(A) -> B,
        on_stale_partial: impl FnOnce(E, A) -> B,
        on_fresh_failure: impl FnOnce(E) -> B,
        on_fresh_success: impl FnOnce(A) -> B,
        on_fresh_partial: impl FnOnce(E, A) -> B,
    ) -> B {
        match self {
            Datum::Empty => on_empty(),
            Datum::Loading => on_loading(),
            Datum::Stale(These::Err(e)) => on_stale_failure(e),
            Datum::Stale(These::Ok(a)) => on_stale_success(a),
            Datum::Stale(These::Both(e, a)) => on_stale_partial(e, a),
            Datum::Fresh(These::Err(e)) => on_fresh_failure(e),
            Datum::Fresh(These::Ok(a)) => on_fresh_success(a),
            Datum::Fresh(These::Both(e, a)) => on_fresh_partial(e, a),
        }
    }

    /// Case analysis where the stale/fresh tag becomes a `stale` flag.
    pub fn refresh_fold<B>(
        self,
        on_empty: impl FnOnce() -> B,
        on_loading: impl FnOnce() -> B,
        on_failure: impl FnOnce(E, bool) -> B,
        on_success: impl FnOnce(A, bool) -> B,
        on_partial: impl FnOnce(E, A, bool) -> B,
    ) -> B {
        let (these, stale) = match self {
            Datum::Empty => return on_empty(),
            Datum::Loading => return on_loading(),
            Datum::Stale(t) => (t, true),
            Datum::Fresh(t) => (t, false),
        };
        match these {
            These::Err(e) => on_failure(e, stale),
            These::Ok(a) => on_success(a, stale),
            These::Both(e, a) => on_partial(e, a, stale),
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
        on_partial: impl FnOnce(E, A, bool) -> B,
    ) -> B {
        let (these, stale) = match self {
            Datum::Empty => return on_none(false),
            Datum::Loading => return on_none(true),
            Datum::Stale(t) => (t, true),
            Datum::Fresh(t) => (t, false),
        };
        match these {
            These::Err(e) => on_failure(e, stale),
            These::Ok(a) => on_success(a, stale),
            These::Both(e, a) => on_partial(e, a, stale),
        }
    }

    /// Transform the value channel.
    pub fn map_ok<B>(self, f: impl FnOnce(A) -> B) -> DatumThese<E, B> {
        self.map(|t| t.map(f))
    }

    /// Transform the error channel.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> DatumThese<F, A> {
        self.map(|t| t.map_err(f))
    }

    /// Transform both channels.
    pub fn bimap<F, B>(self, f: impl FnOnce(E) -> F, g: impl FnOnce(A) -> B) -> DatumThese<F, B> {
        self.map(|t| t.bimap(f, g))
    }

    /// Left fold over the value channel.
    pub fn reduce_ok<B>(self, init: B, f: impl FnOnce(B, A) -> B) -> B {
        match self.into_value().and_then(|t| t.into_parts().1) {
            Some(a) => f(init, a),
            None => init,
        }
    }

    /// Map the value channel into a monoid; no value gives
    /// `M::empty()`.
    pub fn fold_map_ok<M: Monoid>(self, f: impl FnOnce(A) -> M) -> M {
        self.into_value()
            .and_then(|t| t.into_parts().1)
            .map_or_else(M::empty, f)
    }

    /// Traverse the value channel with an `Option` effect.
    ///
    /// Failures pass through untouched; a `None` from `f` on a
    /// success or partial success gives `None`.
    pub fn traverse_ok_option<B>(
        self,
        f: impl FnOnce(A) -> Option<B>,
    ) -> Option<DatumThese<E, B>> {
        let traverse = |t: These<E, A>| match t {
            These::Err(e) => Some(These::Err(e)),
            These::Ok(a) => f(a).map(These::Ok),
            These::Both(e, a) => f(a).map(|b| These::Both(e, b)),
        };
        self.traverse_option(traverse)
    }

    /// Replace a total failure, stale or fresh, with the fallback.
    ///
    /// Partial successes carry a value and are kept.
    pub fn alt_failure(self, fallback: impl FnOnce() -> DatumThese<E, A>) -> DatumThese<E, A> {
        match self {
            Datum::Stale(These::Err(_)) | Datum::Fresh(These::Err(_)) => fallback(),
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(t) => Datum::Stale(t),
            Datum::Fresh(t) => Datum::Fresh(t),
        }
    }

    /// The payload without its tag.
    pub fn into_these(self) -> Option<These<E, A>> {
        self.into_value()
    }
}

impl<E: Semigroup, A> Datum<These<E, A>> {
    /// Chain the value channel, accumulating errors.
    ///
    /// `Err` short-circuits keeping its tag. On `Both(e1, a)` the
    /// continuation runs on `a` and `e1` is merged into whatever
    /// error it reports; if the continuation yields `Empty` or
    /// `Loading`, that is the result. The tag follows the
    /// continuation.
    pub fn and_then_ok<B>(self, f: impl FnOnce(A) -> DatumThese<E, B>) -> DatumThese<E, B> {
        match self {
            Datum::Empty => Datum::Empty,
            Datum::Loading => Datum::Loading,
            Datum::Stale(These::Err(e)) => Datum::Stale(These::Err(e)),
            Datum::Fresh(These::Err(e)) => Datum::Fresh(These::Err(e)),
            Datum::Stale(These::Ok(a)) | Datum::Fresh(These::Ok(a)) => f(a),
            Datum::Stale(These::Both(e1, a)) | Datum::Fresh(These::Both(e1, a)) => {
                // Replay the continuation's payload behind the carried error
                f(a).map(|t| These::Both(e1, ()).and_then(|()| t))
            }
        }
    }

    /// Datum precedence first, then the applicative [`These::zip_with`].
    pub fn zip_with_ok<B, C>(
        self,
        other: DatumThese<E, B>,
        f: impl FnOnce(A, B) -> C,
    ) -> DatumThese<E, C> {
        self.zip_with(other, |ta, tb| ta.zip_with(tb, f))
    }
}

impl<E: Semigroup, F> Datum<These<E, F>> {
    /// Apply a progressive function validation to a progressive
    /// argument validation.
    pub fn ap_ok<A, B>(self, fa: DatumThese<E, A>) -> DatumThese<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.zip_with_ok(fa, |f, a| f(a))
    }
}

impl<E, A> Datum<These<E, Option<A>>> {
    /// `DatumThese<E, Option<A>>` → `Option<DatumThese<E, A>>`.
    pub fn transpose_ok(self) -> Option<DatumThese<E, A>> {
        self.traverse_ok_option(|a| a)
    }
}
