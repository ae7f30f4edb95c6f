//! A validation value that can hold an error, a value, or both.
//!
//! [`These`] is the payload of [`DatumThese`](crate::DatumThese). Its
//! `Both` case models a partial success: a usable value that arrived
//! together with warnings or errors.
//!
//! Two combining operations exist and they differ:
//!
//! - [`These::zip_with`] is applicative: an `Err` on either side
//!   discards the value, errors present on both sides are merged.
//! - [`These::combine_with`] (and the [`Semigroup`] instance) follows
//!   the accumulation table below, where `Ok(a) + Err(e)` keeps `a`:
//!
//! ```text
//! Ok(a)      + Ok(b)      = Ok(f(a, b))
//! Ok(a)      + Err(e)     = Both(e, a)
//! Ok(a)      + Both(e, b) = Both(e, f(a, b))
//! Err(e1)    + Err(e2)    = Err(e1 <> e2)
//! Err(e1)    + Both(e2,b) = Err(e1 <> e2)
//! Both(e1,a) + Both(e2,b) = Both(e1 <> e2, f(a, b))
//! ```
//!
//! The mirrored cases behave the same way. This table is not
//! associative when an `Ok` meets two `Err`s: grouping decides whether
//! the value survives.
use std::fmt;

use datum_algebra::Semigroup;

/// An error, a value, or both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum These<E, A> {
    /// Only an error.
    Err(E),
    /// Only a value.
    Ok(A),
    /// A value together with an error.
    Both(E, A),
}

impl<E, A> These<E, A> {
    /// Total case analysis.
    pub fn fold<B>(
        self,
        on_err: impl FnOnce(E) -> B,
        on_ok: impl FnOnce(A) -> B,
        on_both: impl FnOnce(E, A) -> B,
    ) -> B {
        match self {
            These::Err(e) => on_err(e),
            These::Ok(a) => on_ok(a),
            These::Both(e, a) => on_both(e, a),
        }
    }

    /// `Ok(a)` becomes `Ok(a)`, `Err(e)` becomes `Err(e)`.
    pub fn from_result(value: Result<A, E>) -> Self {
        match value {
            Ok(a) => These::Ok(a),
            Err(e) => These::Err(e),
        }
    }

    /// `true` for `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, These::Err(_))
    }

    /// `true` for `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, These::Ok(_))
    }

    /// `true` for `Both`.
    pub fn is_both(&self) -> bool {
        matches!(self, These::Both(_, _))
    }

    /// The error, if any (`Err` or `Both`).
    pub fn err(&self) -> Option<&E> {
        match self {
            These::Err(e) | These::Both(e, _) => Some(e),
            These::Ok(_) => None,
        }
    }

    /// The value, if any (`Ok` or `Both`).
    pub fn ok(&self) -> Option<&A> {
        match self {
            These::Ok(a) | These::Both(_, a) => Some(a),
            These::Err(_) => None,
        }
    }

    /// Split into the optional error and the optional value.
    pub fn into_parts(self) -> (Option<E>, Option<A>) {
        self.fold(
            |e| (Some(e), None),
            |a| (None, Some(a)),
            |e, a| (Some(e), Some(a)),
        )
    }

    /// Borrow both channels.
    pub fn as_ref(&self) -> These<&E, &A> {
        match self {
            These::Err(e) => These::Err(e),
            These::Ok(a) => These::Ok(a),
            These::Both(e, a) => These::Both(e, a),
        }
    }

    /// Transform the value channel.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> These<E, B> {
        match self {
            These::Err(e) => These::Err(e),
            These::Ok(a) => These::Ok(f(a)),
            These::Both(e, a) => These::Both(e, f(a)),
        }
    }

    /// Transform the error channel.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> These<F, A> {
        match self {
            These::Err(e) => These::Err(f(e)),
            These::Ok(a) => These::Ok(a),
            These::Both(e, a) => These::Both(f(e), a),
        }
    }

    /// Transform both channels.
    pub fn bimap<F, B>(self, f: impl FnOnce(E) -> F, g: impl FnOnce(A) -> B) -> These<F, B> {
        match self {
            These::Err(e) => These::Err(f(e)),
            These::Ok(a) => These::Ok(g(a)),
            These::Both(e, a) => These::Both(f(e), g(a)),
        }
    }
}

impl<E: Semigroup, A> These<E, A> {
    /// Applicative combination.
    ///
    /// Any `Err` drops the value; errors found on both sides are
    /// merged left to right.
    pub fn zip_with<B, C>(self, other: These<E, B>, f: impl FnOnce(A, B) -> C) -> These<E, C> {
        match (self, other) {
            (These::Err(e1), These::Err(e2) | These::Both(e2, _))
            | (These::Both(e1, _), These::Err(e2)) => These::Err(e1.combine(&e2)),
            (These::Err(e), These::Ok(_)) | (These::Ok(_), These::Err(e)) => These::Err(e),
            (These::Ok(a), These::Ok(b)) => These::Ok(f(a, b)),
            (These::Ok(a), These::Both(e, b)) | (These::Both(e, a), These::Ok(b)) => {
                These::Both(e, f(a, b))
            }
            (These::Both(e1, a), These::Both(e2, b)) => These::Both(e1.combine(&e2), f(a, b)),
        }
    }

    /// Chain the value channel, accumulating any error already
    /// carried by `Both`.
    pub fn and_then<B>(self, f: impl FnOnce(A) -> These<E, B>) -> These<E, B> {
        match self {
            These::Err(e) => These::Err(e),
            These::Ok(a) => f(a),
            These::Both(e1, a) => match f(a) {
                These::Err(e2) => These::Err(e1.combine(&e2)),
                These::Ok(b) => These::Both(e1, b),
                These::Both(e2, b) => These::Both(e1.combine(&e2), b),
            },
        }
    }

    /// Accumulating combination, values merged by `f`.
    pub fn combine_with(self, other: Self, f: impl FnOnce(A, A) -> A) -> Self {
        match (self, other) {
            (These::Ok(a), These::Ok(b)) => These::Ok(f(a, b)),
            (These::Ok(a), These::Err(e)) | (These::Err(e), These::Ok(a)) => These::Both(e, a),
            (These::Ok(a), These::Both(e, b)) => These::Both(e, f(a, b)),
            (These::Both(e, a), These::Ok(b)) => These::Both(e, f(a, b)),
            (These::Err(e1), These::Err(e2) | These::Both(e2, _))
            | (These::Both(e1, _), These::Err(e2)) => These::Err(e1.combine(&e2)),
            (These::Both(e1, a), These::Both(e2, b)) => These::Both(e1.combine(&e2), f(a, b)),
        }
    }
}

impl<E: Semigroup + Clone, A: Semigroup + Clone> Semigroup for These<E, A> {
    fn combine(&self, other: &Self) -> Self {
        self.clone().combine_with(other.clone(), |a, b| a.combine(&b))
    }
}

/// Collects with [`These::zip_with`] semantics.
///
/// Every error is merged left to right and nothing short-circuits. Any
/// `Err` drops the collected values; otherwise a merged error yields
/// `Both`. An empty iterator gives `Ok` of an empty collection.
impl<E: Semigroup, A, V: FromIterator<A>> FromIterator<These<E, A>> for These<E, V> {
    fn from_iter<I: IntoIterator<Item = These<E, A>>>(iter: I) -> Self {
        let mut errors: Option<E> = None;
        let mut failed = false;
        let mut values = Vec::new();
        for item in iter {
            let (error, value) = item.into_parts();
            if let Some(e) = error {
                errors = Some(match errors {
                    Some(acc) => acc.combine(&e),
                    None => e,
                });
            }
            match value {
                Some(a) if !failed => values.push(a),
                Some(_) => {}
                None => {
                    failed = true;
                    values.clear();
                }
            }
        }
        match errors {
            Some(e) if failed => These::Err(e),
            Some(e) => These::Both(e, values.into_iter().collect()),
            None => These::Ok(values.into_iter().collect()),
        }
    }
}

impl<E, A> From<Result<A, E>> for These<E, A> {
    fn from(value: Result<A, E>) -> Self {
        These::from_result(value)
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for These<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            These::Err(e) => write!(f, "err({e})"),
            These::Ok(a) => write!(f, "ok({a})"),
            These::Both(e, a) => write!(f, "both({e}, {a})"),
        }
    }
}
