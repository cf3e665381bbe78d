use std::fmt;
use std::ops::{Index, RangeBounds};

use crate::iter::{IntoIter, Iter};
use crate::search::{insertion_point_left, insertion_point_right, resolve_range};
use crate::ListError;

/// A list kept sorted by a caller supplied sort key.
///
/// The key function may be many to one (e.g. lowercasing strings), so every
/// lookup narrows to the key-equal run by binary search first, then matches
/// by value equality inside that run. Entries with equal keys keep their
/// insertion order.
#[derive(Clone)]
pub struct KeyedSortedList<V, K, F> {
    entries: Vec<(K, V)>,
    sort_key: F,
}

impl<V, K, F> KeyedSortedList<V, K, F>
where
    K: Ord,
    F: Fn(&V) -> K,
{
    /// Create an empty list with the given sort key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let list = KeyedSortedList::new(|v: &i32| *v);
    ///
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new(sort_key: F) -> Self {
        Self {
            entries: Vec::new(),
            sort_key,
        }
    }

    /// Create a list from an iterable of values.
    ///
    /// Keys are computed eagerly for every value, then the entries are
    /// stable-sorted by key, so values with equal keys stay in input order.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let list = KeyedSortedList::from_values(
    ///     ["apple", "lime", "Lemon"],
    ///     |s: &&str| s.to_lowercase(),
    /// );
    ///
    /// let sorted = list.iter().copied().collect::<Vec<_>>();
    /// assert_eq!(sorted, ["apple", "Lemon", "lime"]);
    /// ```
    pub fn from_values(values: impl IntoIterator<Item = V>, sort_key: F) -> Self {
        let mut entries = values
            .into_iter()
            .map(|v| (sort_key(&v), v))
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Self { entries, sort_key }
    }

    /// Returns the element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list contains no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the values in key order.
    ///
    /// Each call starts from the beginning and reflects the current state.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let mut list = KeyedSortedList::from_values([3, 1, 2], |v: &i32| *v);
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    ///
    /// list.add(0);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries)
    }

    /// Returns the value at `index`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.entries.get(index).map(|(_, v)| v)
    }

    /// Returns the value at a signed position, counting from the back for
    /// negative positions: `-1` is the last element.
    ///
    /// Positions outside `[-len, len)` report [`ListError::OutOfRange`].
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let list = KeyedSortedList::from_values([3, 1, 2], |v: &i32| *v);
    ///
    /// assert_eq!(list.get_at(0), Ok(&1));
    /// assert_eq!(list.get_at(-1), Ok(&3));
    /// assert!(list.get_at(3).is_err());
    /// assert!(list.get_at(-4).is_err());
    /// ```
    pub fn get_at(&self, index: isize) -> Result<&V, ListError> {
        let len = self.entries.len();
        let resolved = if index < 0 {
            index.checked_add(len as isize)
        } else {
            Some(index)
        };

        match resolved {
            Some(at) if at >= 0 && (at as usize) < len => Ok(&self.entries[at as usize].1),
            _ => Err(ListError::OutOfRange { index, len }),
        }
    }

    /// Returns the value with the smallest key, or `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, v)| v)
    }

    /// Returns the value with the largest key, or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Insert a value at the leftmost position that keeps the keys sorted.
    ///
    /// Among entries with an equal key the new value goes first; the rest
    /// keep their order.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let mut list = KeyedSortedList::from_values(
    ///     ["apple", "lime", "Lemon"],
    ///     |s: &&str| s.to_lowercase(),
    /// );
    /// list.add("Banana");
    ///
    /// let sorted = list.iter().copied().collect::<Vec<_>>();
    /// assert_eq!(sorted, ["apple", "Banana", "Lemon", "lime"]);
    /// ```
    pub fn add(&mut self, value: V) {
        let key = (self.sort_key)(&value);
        let at = insertion_point_left(&self.entries, &key, |entry| &entry.0);
        self.entries.insert(at, (key, value));
    }

    /// Remove and return the first element equal to `value`.
    ///
    /// Reports [`ListError::NotFound`] when no equal element exists; the
    /// list is left untouched in that case.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let mut list = KeyedSortedList::from_values([2, 1, 2], |v: &i32| *v);
    ///
    /// assert_eq!(list.remove(&2), Ok(2));
    /// assert_eq!(list.len(), 2);
    /// assert!(list.remove(&7).is_err());
    /// ```
    pub fn remove(&mut self, value: &V) -> Result<V, ListError>
    where
        V: PartialEq,
    {
        match self.find(value) {
            Some(index) => Ok(self.entries.remove(index).1),
            None => Err(ListError::NotFound),
        }
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// Reports [`ListError::NotFound`] when absent; use [`find`] for the
    /// non-failing shape.
    ///
    /// [`find`]: KeyedSortedList::find
    #[inline]
    pub fn index_of(&self, value: &V) -> Result<usize, ListError>
    where
        V: PartialEq,
    {
        self.find(value).ok_or(ListError::NotFound)
    }

    /// Returns the position of the first element equal to `value` within a
    /// position window.
    ///
    /// The window filters by position against the key-equal run of the full
    /// list; its end clamps to `len()`. An inverted window reports
    /// [`ListError::InvalidRange`], a miss [`ListError::NotFound`].
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// // sorted: [1, 3, 4, 6, 7, 23, 24]
    /// let list = KeyedSortedList::from_values([1, 3, 4, 24, 6, 7, 23], |v: &i32| *v);
    ///
    /// assert_eq!(list.index_in(&4, ..3), Ok(2));
    /// assert!(list.index_in(&4, ..2).is_err());
    /// ```
    pub fn index_in(
        &self,
        value: &V,
        range: impl RangeBounds<usize>,
    ) -> Result<usize, ListError>
    where
        V: PartialEq,
    {
        let (start, end) = resolve_range(range, self.entries.len())?;
        let (run_start, run_end) = self.key_run(value);

        let lo = run_start.max(start);
        let hi = run_end.min(end);
        if lo >= hi {
            return Err(ListError::NotFound);
        }

        self.entries[lo..hi]
            .iter()
            .position(|(_, v)| v == value)
            .map(|offset| lo + offset)
            .ok_or(ListError::NotFound)
    }

    /// Returns the position of the first element equal to `value`, or
    /// `None` when absent.
    ///
    /// Only the key-equal run is scanned, so differently cased strings
    /// under a lowercasing key do not match each other.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let list = KeyedSortedList::from_values(
    ///     ["apple", "Banana", "lime"],
    ///     |s: &&str| s.to_lowercase(),
    /// );
    ///
    /// assert_eq!(list.find(&"Banana"), Some(1));
    /// assert_eq!(list.find(&"banana"), None);
    /// ```
    pub fn find(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        let (run_start, run_end) = self.key_run(value);

        self.entries[run_start..run_end]
            .iter()
            .position(|(_, v)| v == value)
            .map(|offset| run_start + offset)
    }

    /// Returns the position of the last element equal to `value`, or
    /// `None` when absent.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let list = KeyedSortedList::from_values([2, 1, 2, 3], |v: &i32| *v);
    ///
    /// assert_eq!(list.find(&2), Some(1));
    /// assert_eq!(list.rfind(&2), Some(2));
    /// assert_eq!(list.rfind(&7), None);
    /// ```
    pub fn rfind(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        let (run_start, run_end) = self.key_run(value);

        self.entries[run_start..run_end]
            .iter()
            .rposition(|(_, v)| v == value)
            .map(|offset| run_start + offset)
    }

    /// Returns how many elements equal `value`.
    ///
    /// Counts equality matches inside the key-equal run only, O(log n + m)
    /// for a run of length m.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_keylist::KeyedSortedList;
    ///
    /// let list = KeyedSortedList::from_values([2, 1, 2, 2], |v: &i32| *v);
    ///
    /// assert_eq!(list.count(&2), 3);
    /// assert_eq!(list.count(&5), 0);
    /// ```
    pub fn count(&self, value: &V) -> usize
    where
        V: PartialEq,
    {
        let (run_start, run_end) = self.key_run(value);

        self.entries[run_start..run_end]
            .iter()
            .filter(|(_, v)| v == value)
            .count()
    }

    /// Returns true if an element equal to `value` is present.
    #[inline]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Remove every element.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The key-equal run for `value`'s derived key, as a half-open
    /// position range.
    fn key_run(&self, value: &V) -> (usize, usize) {
        let key = (self.sort_key)(value);
        let run_start = insertion_point_left(&self.entries, &key, |entry| &entry.0);
        let run_end = insertion_point_right(&self.entries, &key, |entry| &entry.0);
        (run_start, run_end)
    }
}

impl<V: fmt::Debug, K, F> fmt::Debug for KeyedSortedList<V, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyedSortedList(")?;
        f.debug_list()
            .entries(self.entries.iter().map(|(_, v)| v))
            .finish()?;
        f.write_str(")")
    }
}

impl<V, K, F> Index<usize> for KeyedSortedList<V, K, F> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.entries[index].1
    }
}

impl<V, K, F> IntoIterator for KeyedSortedList<V, K, F> {
    type Item = V;
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter::new(self.entries)
    }
}

impl<'a, V, K, F> IntoIterator for &'a KeyedSortedList<V, K, F> {
    type Item = &'a V;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        Iter::new(&self.entries)
    }
}
