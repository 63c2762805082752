//! The growable contiguous list.
//!
//! [`List`] keeps an explicit backing store whose length is the
//! capacity, plus a logical size. Slots at or past the logical size hold
//! stale values left over from earlier pushes or removals; they are
//! never handed out. Growth follows the list's [`GrowthPolicy`] rather
//! than `Vec`'s doubling, so capacities are predictable and small lists
//! stay small.
//!
//! Index-taking operations come in three tiers:
//!
//! - `try_*` methods return [`ListError`] on a bad index;
//! - the plain methods (and `Index`/`IndexMut`) panic with the same message;
//! - [`get_unchecked`](List::get_unchecked) and
//!   [`get_unchecked_mut`](List::get_unchecked_mut) skip the check entirely.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::GrowthPolicy;
use crate::error::{ConfigError, ListError};
use crate::order::NaturalOrd;

/// A growable list of `Copy` elements with explicit capacity management.
#[derive(Clone)]
pub struct List<T> {
    /// Backing store. Its length is the capacity.
    storage: Box<[T]>,
    /// Logical element count; `storage[..size]` is the live range.
    size: usize,
    policy: GrowthPolicy,
}

impl<T> List<T> {
    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// `true` if the list holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The growth policy this list was built with.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Borrow the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.size]
    }

    /// Mutably borrow the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.size]
    }

    /// Iterate over the live elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Drop all elements logically without releasing or clearing storage.
    ///
    /// Capacity is unchanged, so the list can be refilled without
    /// reallocating.
    #[inline]
    pub fn reset(&mut self) {
        self.size = 0;
    }

    /// Get a reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Get a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size, "get_unchecked index {index} >= len {}", self.size);
        // SAFETY: caller guarantees index < size <= storage.len().
        unsafe { self.storage.get_unchecked(index) }
    }

    /// Get a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size, "get_unchecked_mut index {index} >= len {}", self.size);
        // SAFETY: caller guarantees index < size <= storage.len().
        unsafe { self.storage.get_unchecked_mut(index) }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.size {
            Ok(())
        } else {
            Err(ListError::OutOfBounds {
                index,
                len: self.size,
            })
        }
    }
}

impl<T: Copy + Default> List<T> {
    /// Create an empty list with the default growth policy and no size hint.
    pub fn new() -> Self {
        Self::with_size_hint(0)
    }

    /// Create an empty list with room for at least `size_hint` elements.
    ///
    /// The starting capacity is `size_hint + 4`, so even a zero hint
    /// does not reallocate on the first push.
    pub fn with_size_hint(size_hint: usize) -> Self {
        Self::build(size_hint, GrowthPolicy::default())
    }

    /// Create an empty list with a custom growth policy.
    ///
    /// # Panics
    ///
    /// Panics if `policy` fails [`GrowthPolicy::validate`]. Use
    /// [`try_with_policy`](Self::try_with_policy) to handle that case.
    pub fn with_policy(size_hint: usize, policy: GrowthPolicy) -> Self {
        match Self::try_with_policy(size_hint, policy) {
            Ok(list) => list,
            Err(e) => panic!("invalid growth policy: {e}"),
        }
    }

    /// Create an empty list with a custom growth policy, validating it first.
    pub fn try_with_policy(size_hint: usize, policy: GrowthPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self::build(size_hint, policy))
    }

    fn build(size_hint: usize, policy: GrowthPolicy) -> Self {
        Self {
            storage: vec![T::default(); policy.initial_capacity(size_hint)].into_boxed_slice(),
            size: 0,
            policy,
        }
    }

    /// Append `value`, growing the backing store if it is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.size == self.storage.len() {
            self.grow();
        }
        self.storage[self.size] = value;
        self.size += 1;
    }

    #[cold]
    fn grow(&mut self) {
        let old_capacity = self.storage.len();
        let new_capacity = self.policy.next_capacity(old_capacity);
        let mut next = vec![T::default(); new_capacity].into_boxed_slice();
        next[..self.size].copy_from_slice(&self.storage[..self.size]);
        self.storage = next;
        tracing::trace!(old_capacity, new_capacity, "list storage grown");
    }

    /// Read the element at `index`.
    pub fn try_get(&self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        Ok(self.storage[index])
    }

    /// Overwrite the element at `index`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_index(index)?;
        self.storage[index] = value;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// Preserves the order of the remaining elements. O(len - index).
    pub fn try_remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        let value = self.storage[index];
        self.storage.copy_within(index + 1..self.size, index);
        self.size -= 1;
        Ok(value)
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Remove `length` consecutive elements starting at `index`.
    ///
    /// Equivalent to calling [`remove(index)`](Self::remove) `length`
    /// times, but shifts the tail only once.
    pub fn try_remove_range(&mut self, index: usize, length: usize) -> Result<(), ListError> {
        let end = index
            .checked_add(length)
            .filter(|&end| end <= self.size)
            .ok_or(ListError::RangeOutOfBounds {
                index,
                length,
                len: self.size,
            })?;
        self.storage.copy_within(end..self.size, index);
        self.size -= length;
        Ok(())
    }

    /// Remove `length` consecutive elements starting at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index + length > len()`.
    pub fn remove_range(&mut self, index: usize, length: usize) {
        self.try_remove_range(index, length)
            .unwrap_or_else(|e| panic!("{e}"));
    }

    /// Remove and return the element at `index`, filling the hole with the
    /// last element. O(1), does not preserve order.
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        let value = self.storage[index];
        self.size -= 1;
        self.storage[index] = self.storage[self.size];
        Ok(value)
    }

    /// Remove and return the element at `index`, filling the hole with the
    /// last element.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.try_swap_remove(index)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Remove and return the last element.
    pub fn try_pop_last(&mut self) -> Result<T, ListError> {
        if self.size == 0 {
            return Err(ListError::Empty);
        }
        self.size -= 1;
        Ok(self.storage[self.size])
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_last(&mut self) -> T {
        self.try_pop_last().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Sort the live elements in ascending natural order.
    ///
    /// The list is rebuilt from a trimmed copy, so afterwards
    /// `capacity() == len()`. The sort is stable.
    pub fn sort(&mut self)
    where
        T: NaturalOrd,
    {
        let mut sorted = self.as_slice().to_vec();
        sorted.sort_by(T::natural_cmp);
        self.replace(sorted);
        tracing::trace!(len = self.size, "list sorted and trimmed");
    }

    /// An independent copy of the live elements with no spare capacity.
    pub fn snapshot(&self) -> Box<[T]> {
        self.as_slice().into()
    }

    /// Replace the whole backing store with `items`.
    ///
    /// Afterwards `len() == capacity() == items.len()`. The growth policy
    /// is kept.
    pub fn replace(&mut self, items: Vec<T>) {
        self.storage = items.into_boxed_slice();
        self.size = self.storage.len();
    }
}

impl<T: Copy + Default> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> From<Vec<T>> for List<T> {
    /// Adopt `items` as the live contents with capacity trimmed to length.
    fn from(items: Vec<T>) -> Self {
        let mut list = Self {
            storage: Box::default(),
            size: 0,
            policy: GrowthPolicy::default(),
        };
        list.replace(items);
        list
    }
}

impl<T: Copy + Default> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Copy + Default> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        if let Err(e) = self.check_index(index) {
            panic!("{e}");
        }
        &self.storage[index]
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        if let Err(e) = self.check_index(index) {
            panic!("{e}");
        }
        &mut self.storage[index]
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    /// Lists are equal when their live elements are; capacity and
    /// policy are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("elements", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pair;
    use proptest::prelude::*;

    fn list_of(values: &[i32]) -> List<i32> {
        values.iter().copied().collect()
    }

    // ── Construction and growth ─────────────────────────────────

    #[test]
    fn new_list_has_headroom() {
        let list = List::<i32>::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 4);
        assert!(list.is_empty());
    }

    #[test]
    fn size_hint_adds_four() {
        let list = List::<f32>::with_size_hint(10);
        assert_eq!(list.capacity(), 14);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn first_growth_follows_formula() {
        let mut list = List::<i32>::new();
        for i in 0..4 {
            list.push(i);
        }
        assert_eq!(list.capacity(), 4);
        list.push(4);
        // 4 + 4/4 + 4
        assert_eq!(list.capacity(), 9);
        assert_eq!(list.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn large_hint_grows_proportionally() {
        let mut list = List::<u8>::with_size_hint(96);
        for _ in 0..100 {
            list.push(1);
        }
        assert_eq!(list.capacity(), 100);
        list.push(1);
        assert_eq!(list.capacity(), 100 + 25 + 4);
    }

    #[test]
    fn custom_policy_capacities() {
        let policy = GrowthPolicy {
            divisor: 1,
            increment: 1,
            initial_headroom: 0,
        };
        let mut list = List::<i32>::with_policy(2, policy);
        assert_eq!(list.capacity(), 2);
        list.extend([1, 2, 3]);
        // 2 + 2/1 + 1
        assert_eq!(list.capacity(), 5);
        assert_eq!(list.policy(), &policy);
    }

    #[test]
    fn invalid_policy_rejected() {
        let policy = GrowthPolicy {
            increment: 0,
            ..GrowthPolicy::default()
        };
        assert_eq!(
            List::<i32>::try_with_policy(0, policy).unwrap_err(),
            ConfigError::ZeroIncrement
        );
    }

    #[test]
    #[should_panic(expected = "invalid growth policy")]
    fn with_policy_panics_on_invalid() {
        let policy = GrowthPolicy {
            divisor: 0,
            ..GrowthPolicy::default()
        };
        let _ = List::<i32>::with_policy(0, policy);
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        let cap = list.capacity();
        list.reset();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), cap);
        list.push(9);
        assert_eq!(list.as_slice(), &[9]);
    }

    // ── Indexed access ──────────────────────────────────────────

    #[test]
    fn checked_get_and_set() {
        let mut list = list_of(&[10, 20, 30]);
        assert_eq!(list.try_get(1), Ok(20));
        list.try_set(1, 25).unwrap();
        assert_eq!(list[1], 25);
        assert_eq!(
            list.try_get(3),
            Err(ListError::OutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            list.try_set(5, 0),
            Err(ListError::OutOfBounds { index: 5, len: 3 })
        );
    }

    #[test]
    fn stale_slots_are_not_readable() {
        let mut list = list_of(&[1, 2, 3]);
        list.pop_last();
        // Slot 2 still holds 3 in storage but is past the logical end.
        assert_eq!(list.get(2), None);
        assert!(list.try_get(2).is_err());
    }

    #[test]
    #[should_panic(expected = "index 4 out of bounds for list of length 2")]
    fn index_out_of_bounds_panics() {
        let list = list_of(&[1, 2]);
        let _ = list[4];
    }

    #[test]
    #[allow(unsafe_code)]
    fn unchecked_access() {
        let mut list = list_of(&[5, 6, 7]);
        // SAFETY: indices are below len.
        unsafe {
            *list.get_unchecked_mut(0) = 50;
            assert_eq!(*list.get_unchecked(0), 50);
            assert_eq!(*list.get_unchecked(2), 7);
        }
    }

    // ── Removal ─────────────────────────────────────────────────

    #[test]
    fn remove_preserves_order() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);
        assert_eq!(list.remove(1), 2);
        assert_eq!(list.as_slice(), &[1, 3, 4, 5]);
        assert_eq!(list.remove(3), 5);
        assert_eq!(list.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn try_remove_out_of_bounds() {
        let mut list = list_of(&[1]);
        assert_eq!(
            list.try_remove(1),
            Err(ListError::OutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_range_middle() {
        let mut list = list_of(&[0, 1, 2, 3, 4, 5, 6]);
        list.remove_range(2, 3);
        assert_eq!(list.as_slice(), &[0, 1, 5, 6]);
    }

    #[test]
    fn remove_range_empty_at_end_is_noop() {
        let mut list = list_of(&[0, 1]);
        list.remove_range(2, 0);
        assert_eq!(list.as_slice(), &[0, 1]);
    }

    #[test]
    fn remove_range_out_of_bounds() {
        let mut list = list_of(&[0, 1, 2]);
        assert_eq!(
            list.try_remove_range(2, 2),
            Err(ListError::RangeOutOfBounds {
                index: 2,
                length: 2,
                len: 3
            })
        );
        assert!(list.try_remove_range(usize::MAX, 2).is_err());
        assert_eq!(list.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn swap_remove_moves_last_into_hole() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.swap_remove(0), 1);
        assert_eq!(list.as_slice(), &[4, 2, 3]);
        assert_eq!(list.swap_remove(2), 3);
        assert_eq!(list.as_slice(), &[4, 2]);
    }

    #[test]
    fn pop_last_until_empty() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.pop_last(), 2);
        assert_eq!(list.pop_last(), 1);
        assert_eq!(list.try_pop_last(), Err(ListError::Empty));
    }

    // ── Sort and snapshot ───────────────────────────────────────

    #[test]
    fn sort_trims_capacity() {
        let mut list = list_of(&[3, 1, 2]);
        assert_eq!(list.capacity(), 4);
        list.sort();
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(list.capacity(), 3);
        list.push(0);
        assert_eq!(list.capacity(), 3 + 3 / 4 + 4);
    }

    #[test]
    fn sort_floats_and_pairs() {
        let mut floats: List<f32> = [1.5, -0.25, 0.0].into_iter().collect();
        floats.sort();
        assert_eq!(floats.as_slice(), &[-0.25, 0.0, 1.5]);

        let mut pairs: List<Pair<i32>> = [Pair::new(2, 1), Pair::new(1, 5), Pair::new(2, 0)]
            .into_iter()
            .collect();
        pairs.sort();
        assert_eq!(
            pairs.as_slice(),
            &[Pair::new(1, 5), Pair::new(2, 0), Pair::new(2, 1)]
        );
    }

    #[test]
    fn sort_empty() {
        let mut list = List::<bool>::new();
        list.sort();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 0);
        list.push(true);
        assert_eq!(list.as_slice(), &[true]);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut list = list_of(&[1, 2, 3]);
        let snap = list.snapshot();
        list.try_set(0, 100).unwrap();
        list.push(4);
        assert_eq!(&*snap, &[1, 2, 3]);
        assert_eq!(snap.len(), 3);
    }

    #[test]
    fn from_vec_trims_capacity() {
        let list = List::from(vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.capacity(), 3);
    }

    #[test]
    fn equality_ignores_capacity() {
        let a = List::from(vec![1, 2]);
        let b = list_of(&[1, 2]);
        assert_ne!(a.capacity(), b.capacity());
        assert_eq!(a, b);
    }

    #[test]
    fn display_joins_with_commas() {
        assert_eq!(list_of(&[1, -2, 3]).to_string(), "[1,-2,3]");
        assert_eq!(List::<i32>::new().to_string(), "[]");
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn appends_are_retrievable_in_order(values in prop::collection::vec(any::<i32>(), 0..300)) {
            let mut list = List::new();
            for &v in &values {
                list.push(v);
            }
            prop_assert_eq!(list.len(), values.len());
            for (i, &v) in values.iter().enumerate() {
                prop_assert_eq!(list[i], v);
            }
        }

        #[test]
        fn capacity_never_decreases_while_pushing(n in 0usize..500) {
            let mut list = List::<i32>::new();
            let mut last = list.capacity();
            for i in 0..n {
                list.push(i as i32);
                prop_assert!(list.capacity() >= last);
                prop_assert!(list.len() <= list.capacity());
                last = list.capacity();
            }
        }

        #[test]
        fn remove_then_reinsert_restores(
            values in prop::collection::vec(any::<i32>(), 1..64),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(values.len());
            let mut list: List<i32> = values.iter().copied().collect();
            let removed = list.remove(index);
            let mut rebuilt = list.as_slice().to_vec();
            rebuilt.insert(index, removed);
            prop_assert_eq!(rebuilt, values);
        }

        #[test]
        fn remove_range_matches_repeated_remove(
            values in prop::collection::vec(any::<i32>(), 0..64),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let index = a.index(values.len() + 1);
            let length = b.index(values.len() - index + 1);
            let mut ranged: List<i32> = values.iter().copied().collect();
            let mut stepped = ranged.clone();
            ranged.remove_range(index, length);
            for _ in 0..length {
                stepped.remove(index);
            }
            prop_assert_eq!(ranged.as_slice(), stepped.as_slice());
        }

        #[test]
        fn swap_remove_keeps_other_elements(
            values in prop::collection::vec(any::<i32>(), 1..64),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(values.len());
            let mut list: List<i32> = values.iter().copied().collect();
            let removed = list.swap_remove(index);
            prop_assert_eq!(removed, values[index]);
            let mut expected = values.clone();
            expected.swap_remove(index);
            prop_assert_eq!(list.as_slice(), expected.as_slice());
        }

        #[test]
        fn sort_matches_std(values in prop::collection::vec(any::<i32>(), 0..128)) {
            let mut list: List<i32> = values.iter().copied().collect();
            list.sort();
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(list.as_slice(), expected.as_slice());
            prop_assert_eq!(list.capacity(), list.len());
        }
    }
}
