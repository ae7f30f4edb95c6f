//! A three-state value for requests that are made once.
//!
//! [`OneShot`] drops the stale/fresh distinction of
//! [`Datum`]: once a value arrives it is simply `Done`. Use it where a
//! refresh never happens, e.g. the result of a form submission.
//!
//! ```rust
//! use datum::OneShot;
//!
//! let submitted = OneShot::done(201);
//! assert_eq!(submitted.map(|code| code / 100), OneShot::done(2));
//! assert_eq!(OneShot::<i32>::loading().zip(submitted), OneShot::loading());
//! ```
use std::cmp::Ordering;
use std::fmt;
#[cfg(feature = "async")]
use std::future::Future;

use datum_algebra::Monoid;
use datum_algebra::Semigroup;

use crate::datum::Datum;
use crate::error::NotValued;

/// Nothing, in flight, or done.
///
/// Derived ordering is `Empty < Loading < Done(_)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OneShot<A> {
    /// Nothing requested.
    #[default]
    Empty,
    /// Request in flight.
    Loading,
    /// Request finished with a value.
    Done(A),
}

impl<A> OneShot<A> {
    /// The `Empty` state.
    pub const fn empty() -> Self {
        OneShot::Empty
    }

    /// The `Loading` state.
    pub const fn loading() -> Self {
        OneShot::Loading
    }

    /// A finished value.
    pub const fn done(value: A) -> Self {
        OneShot::Done(value)
    }

    /// `None` becomes `Empty`.
    pub fn from_option(value: Option<A>) -> Self {
        value.map_or(OneShot::Empty, OneShot::Done)
    }

    /// `Err(_)` becomes `Empty`.
    pub fn from_result<E>(value: Result<A, E>) -> Self {
        value.map_or(OneShot::Empty, OneShot::Done)
    }

    /// Always `Empty`.
    pub fn throw_error<E>(_error: E) -> Self {
        OneShot::Empty
    }

    /// Total case analysis.
    pub fn fold<B>(
        self,
        on_empty: impl FnOnce() -> B,
        on_loading: impl FnOnce() -> B,
        on_done: impl FnOnce(A) -> B,
    ) -> B {
        match self {
            OneShot::Empty => on_empty(),
            OneShot::Loading => on_loading(),
            OneShot::Done(a) => on_done(a),
        }
    }

    /// `true` for `Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, OneShot::Empty)
    }

    /// `true` for `Loading`.
    pub fn is_loading(&self) -> bool {
        matches!(self, OneShot::Loading)
    }

    /// `true` for `Done`.
    pub fn is_done(&self) -> bool {
        matches!(self, OneShot::Done(_))
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> OneShot<&A> {
        match self {
            OneShot::Empty => OneShot::Empty,
            OneShot::Loading => OneShot::Loading,
            OneShot::Done(a) => OneShot::Done(a),
        }
    }

    /// Mutably borrow the payload.
    pub fn as_mut(&mut self) -> OneShot<&mut A> {
        match self {
            OneShot::Empty => OneShot::Empty,
            OneShot::Loading => OneShot::Loading,
            OneShot::Done(a) => OneShot::Done(a),
        }
    }

    /// The payload of a `Done`.
    pub fn value(&self) -> Option<&A> {
        self.as_ref().into_value()
    }

    /// Discard the state and keep the payload, if any.
    pub fn into_value(self) -> Option<A> {
        self.fold(|| None, || None, Some)
    }

    /// Like [`OneShot::into_value`], reporting which state was found.
    pub fn try_into_value(self) -> Result<A, NotValued> {
        self.fold(|| Err(NotValued::Empty), || Err(NotValued::Loading), Ok)
    }

    /// Total extraction with a fallback per non-done state.
    pub fn get_or_else(self, on_empty: impl FnOnce() -> A, on_loading: impl FnOnce() -> A) -> A {
        self.fold(on_empty, on_loading, |a| a)
    }

    /// `true` if done with a payload equal to `x`.
    pub fn contains(&self, x: &A) -> bool
    where
        A: PartialEq,
    {
        self.is_done_and(|a| a == x)
    }

    /// `true` if done and the payload satisfies `predicate`.
    pub fn is_done_and(&self, predicate: impl FnOnce(&A) -> bool) -> bool {
        self.value().is_some_and(predicate)
    }

    /// Transform the payload.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> OneShot<B> {
        match self {
            OneShot::Empty => OneShot::Empty,
            OneShot::Loading => OneShot::Loading,
            OneShot::Done(a) => OneShot::Done(f(a)),
        }
    }

    /// Chain a continuation; its result is returned as is.
    pub fn and_then<B>(self, f: impl FnOnce(A) -> OneShot<B>) -> OneShot<B> {
        match self {
            OneShot::Empty => OneShot::Empty,
            OneShot::Loading => OneShot::Loading,
            OneShot::Done(a) => f(a),
        }
    }

    /// Run a continuation for its shape and keep the original payload.
    pub fn chain_first<B>(self, f: impl FnOnce(&A) -> OneShot<B>) -> OneShot<A> {
        self.and_then(|a| f(&a).map(move |_| a))
    }

    /// `Empty` dominates `Loading`, which dominates `Done`.
    pub fn zip_with<B, C>(self, other: OneShot<B>, f: impl FnOnce(A, B) -> C) -> OneShot<C> {
        match (self, other) {
            (OneShot::Empty, _) | (_, OneShot::Empty) => OneShot::Empty,
            (OneShot::Loading, _) | (_, OneShot::Loading) => OneShot::Loading,
            (OneShot::Done(a), OneShot::Done(b)) => OneShot::Done(f(a, b)),
        }
    }

    /// Pair two values.
    pub fn zip<B>(self, other: OneShot<B>) -> OneShot<(A, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Keep this payload under the combined shape.
    pub fn ap_first<B>(self, other: OneShot<B>) -> OneShot<A> {
        self.zip_with(other, |a, _| a)
    }

    /// Keep the other payload under the combined shape.
    pub fn ap_second<B>(self, other: OneShot<B>) -> OneShot<B> {
        self.zip_with(other, |_, b| b)
    }

    /// `self` if done, else the fallback.
    pub fn alt(self, fallback: impl FnOnce() -> OneShot<A>) -> OneShot<A> {
        match self {
            OneShot::Empty | OneShot::Loading => fallback(),
            OneShot::Done(a) => OneShot::Done(a),
        }
    }

    /// `Done(f(self))`.
    pub fn extend<B>(self, f: impl FnOnce(OneShot<A>) -> B) -> OneShot<B> {
        OneShot::Done(f(self))
    }

    /// `Done(self)`.
    pub fn duplicate(self) -> OneShot<OneShot<A>> {
        self.extend(|o| o)
    }

    /// A failing payload becomes `Empty`.
    pub fn filter(self, predicate: impl FnOnce(&A) -> bool) -> Self {
        match self {
            OneShot::Empty => OneShot::Empty,
            OneShot::Loading => OneShot::Loading,
            OneShot::Done(a) => {
                if predicate(&a) {
                    OneShot::Done(a)
                } else {
                    OneShot::Empty
                }
            }
        }
    }

    /// Map and filter in one step.
    pub fn filter_map<B>(self, f: impl FnOnce(A) -> Option<B>) -> OneShot<B> {
        self.map(f).compact()
    }

    /// Split by `predicate` into `(failing, passing)`.
    pub fn partition(self, predicate: impl FnOnce(&A) -> bool) -> (OneShot<A>, OneShot<A>) {
        self.partition_map(|a| if predicate(&a) { Ok(a) } else { Err(a) })
    }

    /// Split by a function into `(Err side, Ok side)`.
    pub fn partition_map<B, C>(
        self,
        f: impl FnOnce(A) -> Result<C, B>,
    ) -> (OneShot<B>, OneShot<C>) {
        self.map(f).separate()
    }

    /// Left fold over the payload.
    pub fn reduce<B>(self, init: B, f: impl FnOnce(B, A) -> B) -> B {
        match self.into_value() {
            Some(a) => f(init, a),
            None => init,
        }
    }

    /// Right fold over the payload.
    pub fn reduce_right<B>(self, init: B, f: impl FnOnce(A, B) -> B) -> B {
        match self.into_value() {
            Some(a) => f(a, init),
            None => init,
        }
    }

    /// Map into a monoid; non-done states give `M::empty()`.
    pub fn fold_map<M: Monoid>(self, f: impl FnOnce(A) -> M) -> M {
        self.into_value().map_or_else(M::empty, f)
    }

    /// Traverse with an `Option` effect.
    pub fn traverse_option<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<OneShot<B>> {
        match self {
            OneShot::Empty => Some(OneShot::Empty),
            OneShot::Loading => Some(OneShot::Loading),
            OneShot::Done(a) => f(a).map(OneShot::Done),
        }
    }

    /// Traverse with a `Result` effect.
    pub fn traverse_result<B, E>(
        self,
        f: impl FnOnce(A) -> Result<B, E>,
    ) -> Result<OneShot<B>, E> {
        match self {
            OneShot::Empty => Ok(OneShot::Empty),
            OneShot::Loading => Ok(OneShot::Loading),
            OneShot::Done(a) => f(a).map(OneShot::Done),
        }
    }

    /// Traverse with a `Vec` effect.
    pub fn traverse_vec<B>(self, f: impl FnOnce(A) -> Vec<B>) -> Vec<OneShot<B>> {
        match self {
            OneShot::Empty => vec![OneShot::Empty],
            OneShot::Loading => vec![OneShot::Loading],
            OneShot::Done(a) => f(a).into_iter().map(OneShot::Done).collect(),
        }
    }

    /// Filter inside an `Option` effect; `Some(None)` gives `Empty`.
    pub fn wither_option<B>(self, f: impl FnOnce(A) -> Option<Option<B>>) -> Option<OneShot<B>> {
        self.traverse_option(f).map(OneShot::compact)
    }

    /// Filter inside a `Result` effect.
    pub fn wither_result<B, E>(
        self,
        f: impl FnOnce(A) -> Result<Option<B>, E>,
    ) -> Result<OneShot<B>, E> {
        self.traverse_result(f).map(OneShot::compact)
    }

    /// Partition inside a `Result` effect.
    pub fn wilt_result<L, R, E>(
        self,
        f: impl FnOnce(A) -> Result<Result<R, L>, E>,
    ) -> Result<(OneShot<L>, OneShot<R>), E> {
        self.traverse_result(f).map(OneShot::separate)
    }

    /// Traverse with a future effect.
    #[cfg(feature = "async")]
    pub async fn traverse_future<B, Fut>(self, f: impl FnOnce(A) -> Fut) -> OneShot<B>
    where
        Fut: Future<Output = B>,
    {
        match self {
            OneShot::Empty => OneShot::Empty,
            OneShot::Loading => OneShot::Loading,
            OneShot::Done(a) => OneShot::Done(f(a).await),
        }
    }

    /// Structural equality with an explicit payload comparison.
    pub fn eq_by<B>(&self, other: &OneShot<B>, eq: impl FnOnce(&A, &B) -> bool) -> bool {
        match (self, other) {
            (OneShot::Empty, OneShot::Empty) | (OneShot::Loading, OneShot::Loading) => true,
            (OneShot::Done(a), OneShot::Done(b)) => eq(a, b),
            (OneShot::Empty | OneShot::Loading | OneShot::Done(_), _) => false,
        }
    }

    /// Total ordering with an explicit payload comparison, in the
    /// derived order `Empty < Loading < Done(_)`.
    pub fn cmp_by(&self, other: &OneShot<A>, cmp: impl FnOnce(&A, &A) -> Ordering) -> Ordering {
        match (self, other) {
            (OneShot::Done(a), OneShot::Done(b)) => cmp(a, b),
            (
                OneShot::Empty | OneShot::Loading | OneShot::Done(_),
                OneShot::Empty | OneShot::Loading | OneShot::Done(_),
            ) => self.rank().cmp(&other.rank()),
        }
    }

    /// Partial ordering with an explicit payload comparison.
    pub fn partial_cmp_by(
        &self,
        other: &OneShot<A>,
        cmp: impl FnOnce(&A, &A) -> Option<Ordering>,
    ) -> Option<Ordering> {
        match (self, other) {
            (OneShot::Done(a), OneShot::Done(b)) => cmp(a, b),
            (
                OneShot::Empty | OneShot::Loading | OneShot::Done(_),
                OneShot::Empty | OneShot::Loading | OneShot::Done(_),
            ) => Some(self.rank().cmp(&other.rank())),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            OneShot::Empty => 0,
            OneShot::Loading => 1,
            OneShot::Done(_) => 2,
        }
    }
}

impl<F> OneShot<F> {
    /// Apply a one-shot function to a one-shot argument.
    pub fn ap<A, B>(self, fa: OneShot<A>) -> OneShot<B>
    where
        F: FnOnce(A) -> B,
    {
        self.zip_with(fa, |f, a| f(a))
    }
}

impl<A> OneShot<OneShot<A>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> OneShot<A> {
        self.and_then(|inner| inner)
    }
}

impl<A> OneShot<Option<A>> {
    /// `Done(None)` becomes `Empty`.
    pub fn compact(self) -> OneShot<A> {
        self.and_then(OneShot::from_option)
    }

    /// `OneShot<Option<A>>` → `Option<OneShot<A>>`.
    pub fn transpose(self) -> Option<OneShot<A>> {
        self.traverse_option(|a| a)
    }
}

impl<L, R> OneShot<Result<R, L>> {
    /// Split `Err` payloads left and `Ok` payloads right.
    pub fn separate(self) -> (OneShot<L>, OneShot<R>) {
        match self {
            OneShot::Empty => (OneShot::Empty, OneShot::Empty),
            OneShot::Loading => (OneShot::Loading, OneShot::Loading),
            OneShot::Done(Err(l)) => (OneShot::Done(l), OneShot::Empty),
            OneShot::Done(Ok(r)) => (OneShot::Empty, OneShot::Done(r)),
        }
    }
}

impl<A> OneShot<Vec<A>> {
    /// `OneShot<Vec<A>>` → `Vec<OneShot<A>>`.
    pub fn sequence_vec(self) -> Vec<OneShot<A>> {
        self.traverse_vec(|v| v)
    }
}

#[cfg(feature = "async")]
impl<Fut: Future> OneShot<Fut> {
    /// Await the payload future.
    pub async fn sequence_future(self) -> OneShot<Fut::Output> {
        self.traverse_future(|fut| fut).await
    }
}

/// Progress semigroup: `Empty` is neutral, `Loading` absorbs `Done`,
/// two `Done`s combine their payloads.
impl<A: Semigroup + Clone> Semigroup for OneShot<A> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (OneShot::Empty, x) | (x, OneShot::Empty) => x.clone(),
            (OneShot::Loading, OneShot::Loading | OneShot::Done(_))
            | (OneShot::Done(_), OneShot::Loading) => OneShot::Loading,
            (OneShot::Done(x), OneShot::Done(y)) => OneShot::Done(x.combine(y)),
        }
    }
}

impl<A: Semigroup + Clone> Monoid for OneShot<A> {
    fn empty() -> Self {
        OneShot::Empty
    }
}

/// Sequence with the applicative precedence, stopping at the first
/// `Empty`.
impl<A, V: FromIterator<A>> FromIterator<OneShot<A>> for OneShot<V> {
    fn from_iter<I: IntoIterator<Item = OneShot<A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut loading = false;
        for (index, item) in iter.into_iter().enumerate() {
            match item {
                OneShot::Empty => {
                    tracing::trace!(index, "one-shot sequence short-circuited on empty");
                    return OneShot::Empty;
                }
                OneShot::Loading => loading = true,
                OneShot::Done(a) => {
                    if !loading {
                        values.push(a);
                    }
                }
            }
        }
        if loading {
            OneShot::Loading
        } else {
            OneShot::Done(values.into_iter().collect())
        }
    }
}

/// `Stale` and `Fresh` both become `Done`.
impl<A> From<Datum<A>> for OneShot<A> {
    fn from(value: Datum<A>) -> Self {
        value.fold(
            OneShot::empty,
            OneShot::loading,
            OneShot::Done,
            OneShot::Done,
        )
    }
}

impl<A> From<Option<A>> for OneShot<A> {
    fn from(value: Option<A>) -> Self {
        OneShot::from_option(value)
    }
}

impl<A: fmt::Display> fmt::Display for OneShot<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OneShot::Empty => f.write_str("empty"),
            OneShot::Loading => f.write_str("loading"),
            OneShot::Done(a) => write!(f, "done({a})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datum_algebra::Sum;

    #[test]
    fn fold_and_predicates() {
        let show = |o: OneShot<i32>| o.fold(|| "e".to_string(), || "l".to_string(), |n| n.to_string());
        assert_eq!(show(OneShot::Empty), "e");
        assert_eq!(show(OneShot::Loading), "l");
        assert_eq!(show(OneShot::Done(4)), "4");
        assert!(OneShot::<i32>::Empty.is_empty());
        assert!(OneShot::<i32>::Loading.is_loading());
        assert!(OneShot::Done(1).is_done());
        assert!(!OneShot::Done(1).is_loading());
    }

    #[test]
    fn ordering() {
        assert!(OneShot::<i32>::Empty < OneShot::Loading);
        assert!(OneShot::Loading < OneShot::Done(0));
        assert!(OneShot::Done(1) < OneShot::Done(2));
        assert_eq!(OneShot::<i32>::default(), OneShot::Empty);
    }

    #[test]
    fn explicit_comparisons() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(OneShot::Done(1).cmp_by(&OneShot::Done(2), reversed), Ordering::Greater);
        assert_eq!(OneShot::Loading.cmp_by(&OneShot::Done(2), reversed), Ordering::Less);
        assert_eq!(OneShot::Done(0).cmp_by(&OneShot::Empty, reversed), Ordering::Greater);
        assert_eq!(OneShot::<i32>::Empty.cmp_by(&OneShot::Empty, reversed), Ordering::Equal);

        let nan = OneShot::Done(f64::NAN);
        assert_eq!(nan.partial_cmp_by(&OneShot::Done(1.0), f64::partial_cmp), None);
        assert_eq!(nan.partial_cmp_by(&OneShot::Loading, f64::partial_cmp), Some(Ordering::Greater));
        assert_eq!(
            OneShot::Done(1.0).partial_cmp_by(&OneShot::Done(2.0), f64::partial_cmp),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn and_then_returns_continuation_shape() {
        assert_eq!(OneShot::Done(1).and_then(|n| OneShot::Done(n + 1)), OneShot::Done(2));
        assert_eq!(OneShot::Done(1).and_then(|_| OneShot::<i32>::Loading), OneShot::Loading);
        assert_eq!(OneShot::<i32>::Empty.and_then(|n| OneShot::Done(n + 1)), OneShot::Empty);
        assert_eq!(OneShot::Done(OneShot::Done(1)).flatten(), OneShot::Done(1));
        assert_eq!(OneShot::Done(3).chain_first(|_| OneShot::Done(())), OneShot::Done(3));
    }

    #[test]
    fn ap_precedence() {
        type F = fn(i32) -> i32;
        let f: F = |n| n * 2;
        assert_eq!(OneShot::Done(f).ap(OneShot::Done(2)), OneShot::Done(4));
        assert_eq!(OneShot::Done(f).ap(OneShot::Loading), OneShot::Loading);
        assert_eq!(OneShot::<F>::Loading.ap(OneShot::Empty), OneShot::Empty);
        assert_eq!(OneShot::<F>::Empty.ap(OneShot::Loading), OneShot::Empty);
        assert_eq!(OneShot::Done(1).ap_second(OneShot::Done("b")), OneShot::Done("b"));
        assert_eq!(OneShot::Done(1).ap_first(OneShot::Done("b")), OneShot::Done(1));
    }

    #[test]
    fn alt_and_extraction() {
        assert_eq!(OneShot::Empty.alt(|| OneShot::Done(2)), OneShot::Done(2));
        assert_eq!(OneShot::Done(1).alt(|| OneShot::Done(2)), OneShot::Done(1));
        assert_eq!(OneShot::Loading.get_or_else(|| 0, || 1), 1);
        assert_eq!(OneShot::<i32>::Loading.try_into_value(), Err(NotValued::Loading));
        assert!(OneShot::Done(2).contains(&2));
        assert!(!OneShot::Loading.contains(&2));
        assert!(OneShot::Done(2).is_done_and(|n| *n > 1));
        assert_eq!(OneShot::Done(0).extend(|o| o.get_or_else(|| 9, || 8)), OneShot::Done(0));
        assert_eq!(OneShot::<i32>::Empty.extend(|o| o.get_or_else(|| 9, || 8)), OneShot::Done(9));
        assert_eq!(OneShot::Loading.duplicate(), OneShot::Done(OneShot::<i32>::Loading));
    }

    #[test]
    fn wither_and_wilt() {
        let bump = |n: i32| Some((n > 2).then_some(n + 1));
        assert_eq!(OneShot::Empty.wither_option(bump), Some(OneShot::Empty));
        assert_eq!(OneShot::Loading.wither_option(bump), Some(OneShot::Loading));
        assert_eq!(OneShot::Done(1).wither_option(bump), Some(OneShot::Empty));
        assert_eq!(OneShot::Done(3).wither_option(bump), Some(OneShot::Done(4)));
        assert_eq!(
            OneShot::Done(3).wither_result(|n| Ok::<_, &str>(Some(n))),
            Ok(OneShot::Done(3))
        );

        let split = |n: i32| Ok::<_, &str>(if n > 2 { Ok(n + 1) } else { Err(n - 1) });
        assert_eq!(OneShot::Empty.wilt_result(split), Ok((OneShot::Empty, OneShot::Empty)));
        assert_eq!(OneShot::Done(1).wilt_result(split), Ok((OneShot::Done(0), OneShot::Empty)));
        assert_eq!(OneShot::Done(3).wilt_result(split), Ok((OneShot::Empty, OneShot::Done(4))));
    }

    #[test]
    fn filterable() {
        let big = |n: &i32| *n > 2;
        assert_eq!(OneShot::Done(3).filter(big), OneShot::Done(3));
        assert_eq!(OneShot::Done(1).filter(big), OneShot::Empty);
        assert_eq!(OneShot::Loading.filter(big), OneShot::Loading);
        assert_eq!(OneShot::Done(Some(1)).compact(), OneShot::Done(1));
        assert_eq!(OneShot::<Option<i32>>::Done(None).compact(), OneShot::Empty);
        assert_eq!(OneShot::Done(1).partition(big), (OneShot::Done(1), OneShot::Empty));
        assert_eq!(OneShot::Loading.partition(big), (OneShot::Loading, OneShot::Loading));
        assert_eq!(
            OneShot::Done(5).partition_map(|n| if n > 2 { Ok(n) } else { Err(-n) }),
            (OneShot::Empty, OneShot::Done(5))
        );
        assert_eq!(OneShot::Done(5).filter_map(|n| (n > 9).then_some(n)), OneShot::Empty);
    }

    #[test]
    fn foldable_and_traversable() {
        assert_eq!(OneShot::Done(2).reduce(1, |b, a| b + a), 3);
        assert_eq!(OneShot::<i32>::Loading.reduce(1, |b, a| b + a), 1);
        assert_eq!(OneShot::Done("a").reduce_right(String::from("b"), |a, b| b + a), "ba");
        assert_eq!(OneShot::Done(2).fold_map(Sum), Sum(2));
        assert_eq!(OneShot::Done(Some(1)).transpose(), Some(OneShot::Done(1)));
        assert_eq!(OneShot::<Option<i32>>::Done(None).transpose(), None);
        assert_eq!(OneShot::<Option<i32>>::Loading.transpose(), Some(OneShot::Loading));
        assert_eq!(OneShot::Done("1").traverse_result(str::parse::<i32>), Ok(OneShot::Done(1)));
        assert_eq!(
            OneShot::Done(vec![1, 2]).sequence_vec(),
            vec![OneShot::Done(1), OneShot::Done(2)]
        );
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn sequence_future_awaits_payload() {
        let out = OneShot::Done(async { 7 }).sequence_future().await;
        assert_eq!(out, OneShot::Done(7));
        let out = OneShot::<i32>::Empty.traverse_future(|n| async move { n + 1 }).await;
        assert_eq!(out, OneShot::Empty);
    }

    #[test]
    fn progress_semigroup() {
        let o = |x: OneShot<i32>| x.map(Sum);
        assert_eq!(o(OneShot::Empty).combine(&o(OneShot::Done(1))), o(OneShot::Done(1)));
        assert_eq!(o(OneShot::Done(1)).combine(&o(OneShot::Empty)), o(OneShot::Done(1)));
        assert_eq!(o(OneShot::Loading).combine(&o(OneShot::Done(1))), o(OneShot::Loading));
        assert_eq!(o(OneShot::Done(1)).combine(&o(OneShot::Loading)), o(OneShot::Loading));
        assert_eq!(o(OneShot::Loading).combine(&o(OneShot::Loading)), o(OneShot::Loading));
        assert_eq!(o(OneShot::Done(1)).combine(&o(OneShot::Done(2))), o(OneShot::Done(3)));
        assert_eq!(OneShot::<Sum<i32>>::empty(), OneShot::Empty);
    }

    #[test]
    fn from_iterator() {
        let all: OneShot<Vec<i32>> = vec![OneShot::Done(1), OneShot::Done(2)].into_iter().collect();
        assert_eq!(all, OneShot::Done(vec![1, 2]));
        let pending: OneShot<Vec<i32>> = vec![OneShot::Done(1), OneShot::Loading].into_iter().collect();
        assert_eq!(pending, OneShot::Loading);
        let none: OneShot<Vec<i32>> =
            vec![OneShot::Loading, OneShot::Empty, OneShot::Done(1)].into_iter().collect();
        assert_eq!(none, OneShot::Empty);
    }

    #[test]
    fn conversions_and_display() {
        assert_eq!(OneShot::from(Datum::Stale(1)), OneShot::Done(1));
        assert_eq!(OneShot::from(Datum::Fresh(1)), OneShot::Done(1));
        assert_eq!(OneShot::<i32>::from(Datum::Loading), OneShot::Loading);
        assert_eq!(OneShot::from(Some(1)), OneShot::Done(1));
        assert_eq!(OneShot::<i32>::from_result(Err::<i32, ()>(())), OneShot::Empty);
        assert_eq!(OneShot::Done(1).into_value(), Some(1));
        assert_eq!(OneShot::Done(1).to_string(), "done(1)");
        assert_eq!(OneShot::<i32>::Loading.to_string(), "loading");
        assert!(OneShot::Done(1.0_f64).eq_by(&OneShot::Done(1), |a, b| *a == f64::from(*b)));
    }
}
