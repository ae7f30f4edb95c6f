//! Stream extensions for progressive values (feature = `"async"`).
//!
//! Adds `.combine_all_progress()`, `.sequence_all()` and
//! `.latest_valued()` to any `futures::Stream` of [`Datum`]s. These
//! are plain folds: the stream decides when items arrive, nothing here
//! polls, spawns or times out.

use async_trait::async_trait;

use futures::Stream;
use futures::StreamExt;

use datum_algebra::Semigroup;

use crate::datum::Datum;

/// Extension trait for folding `Stream`s of [`Datum`] values.
///
/// Automatically implemented for every suitable `Stream`:
///
/// - [`combine_all_progress`](DatumStreamExt::combine_all_progress):
///   fold with the progress semigroup, starting from `Empty`.
/// - [`sequence_all`](DatumStreamExt::sequence_all): collect with the
///   applicative precedence, stopping at the first `Empty`.
/// - [`latest_valued`](DatumStreamExt::latest_valued): the last item
///   that carried a value.
///
/// # Example
///
/// ```rust
/// use datum::{Datum, DatumStreamExt};
/// use futures::stream;
///
/// # futures::executor::block_on(async {
/// let updates = stream::iter(vec![Datum::Loading, Datum::Fresh(1), Datum::Stale(1)]);
/// assert_eq!(updates.latest_valued().await, Datum::Stale(1));
/// # });
/// ```
#[async_trait]
pub trait DatumStreamExt: Stream + Sized + Unpin + Send {
    /// Fold every item with the progress semigroup.
    ///
    /// An empty stream yields `Empty`.
    async fn combine_all_progress<A>(self) -> Datum<A>
    where
        Self: Stream<Item = Datum<A>>,
        A: Semigroup + Clone + Send,
    {
        let (count, combined) = self
            .fold((0usize, Datum::Empty), |(n, acc), x| async move {
                (n + 1, acc.combine(&x))
            })
            .await;
        tracing::debug!(count, "combined datum stream");
        combined
    }

    /// Collect all payloads into `V` with the applicative precedence.
    ///
    /// Stops reading at the first `Empty`. Any `Loading` makes the
    /// result `Loading`; otherwise the result is `Stale` if any item
    /// was. An empty stream yields `Fresh` of an empty collection.
    async fn sequence_all<A, V>(self) -> Datum<V>
    where
        Self: Stream<Item = Datum<A>>,
        A: Send,
        V: FromIterator<A> + Send,
    {
        let mut s = self;
        let mut values = Vec::new();
        let mut loading = false;
        let mut stale = false;
        let mut index = 0usize;
        while let Some(item) = s.next().await {
            match item {
                Datum::Empty => {
                    tracing::trace!(index, "datum stream short-circuited on empty");
                    return Datum::Empty;
                }
                Datum::Loading => loading = true,
                Datum::Stale(a) => {
                    stale = true;
                    values.push(a);
                }
                Datum::Fresh(a) => values.push(a),
            }
            index += 1;
        }
        tracing::debug!(count = index, loading, stale, "sequenced datum stream");
        if loading {
            Datum::Loading
        } else if stale {
            Datum::Stale(values.into_iter().collect())
        } else {
            Datum::Fresh(values.into_iter().collect())
        }
    }

    /// The last valued item, or the last item if none was valued.
    ///
    /// An empty stream yields `Empty`.
    async fn latest_valued<A>(self) -> Datum<A>
    where
        Self: Stream<Item = Datum<A>>,
        A: Send,
    {
        let mut s = self;
        let mut valued = None;
        let mut last = Datum::Empty;
        while let Some(item) = s.next().await {
            if item.is_valued() {
                valued = Some(item);
            } else {
                last = item;
            }
        }
        valued.unwrap_or(last)
    }
}

#[async_trait]
impl<T> DatumStreamExt for T
where
    T: Stream + Sized + Unpin + Send,
    T::Item: Send,
{
    // Default method bodies from the trait are used.
}
