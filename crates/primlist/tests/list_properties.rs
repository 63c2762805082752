//! End-to-end behaviour of lists through the facade crate.
//!
//! Each test drives a list through mutation and the codec together, the
//! way a persistence layer would.

use primlist::prelude::*;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────

fn ints(values: &[i32]) -> List<i32> {
    values.iter().copied().collect()
}

fn roundtrip<T: Element + PartialEq + std::fmt::Debug>(list: &List<T>) -> List<T> {
    let bytes = list.to_bytes().unwrap();
    let mut decoded = List::<T>::new();
    decoded.from_bytes(&bytes).unwrap();
    decoded
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn mutate_then_persist_then_restore() {
    let mut list = List::with_size_hint(2);
    list.extend([5, 9, 1, 7, 3, 8]);
    list.remove(1); // [5, 1, 7, 3, 8]
    list.remove_range(1, 2); // [5, 3, 8]
    list.swap_remove(0); // [8, 3]
    list.push(4); // [8, 3, 4]
    list.sort(); // [3, 4, 8]

    let restored = roundtrip(&list);
    assert_eq!(restored.as_slice(), &[3, 4, 8]);
    assert_eq!(restored.capacity(), 3);
}

#[test]
fn decoded_list_grows_with_its_own_policy() {
    let policy = GrowthPolicy {
        divisor: 2,
        increment: 1,
        initial_headroom: 0,
    };
    let mut list = List::<i32>::with_policy(0, policy);
    list.from_bytes(&ints(&[1, 2, 3, 4]).to_bytes().unwrap())
        .unwrap();
    assert_eq!(list.capacity(), 4);
    list.push(5);
    // 4 + 4/2 + 1
    assert_eq!(list.capacity(), 7);
    assert_eq!(list.policy(), &policy);
}

#[test]
fn snapshot_survives_decode_into_source() {
    let mut list = ints(&[1, 2, 3]);
    let snap = list.snapshot();
    list.from_bytes(&ints(&[9]).to_bytes().unwrap()).unwrap();
    assert_eq!(&*snap, &[1, 2, 3]);
    assert_eq!(list.as_slice(), &[9]);
}

#[test]
fn empty_roundtrip_leaves_target_alone() {
    let empty = List::<bool>::new();
    let bytes = empty.to_bytes().unwrap();
    assert!(bytes.is_empty());

    let mut target: List<bool> = [true, true].into_iter().collect();
    target.from_bytes(&bytes).unwrap();
    assert_eq!(target.as_slice(), &[true, true]);
}

#[test]
fn checked_paths_report_bounds() {
    let mut list = ints(&[1, 2]);
    assert_eq!(
        list.try_remove(2),
        Err(ListError::OutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(
        list.try_swap_remove(9),
        Err(ListError::OutOfBounds { index: 9, len: 2 })
    );
    assert!(list.try_remove_range(1, 2).is_err());
    list.reset();
    assert_eq!(list.try_pop_last(), Err(ListError::Empty));
}

#[test]
fn typed_lists_in_one_buffer() {
    // A persistence layer packs several blocks back to back and walks
    // them by each header's total length.
    let mut buf = Vec::new();
    buf.extend(ints(&[1, -2, 3, 0]).to_bytes().unwrap());
    buf.extend(
        [1.5f32, -0.25, 0.0]
            .into_iter()
            .collect::<List<f32>>()
            .to_bytes()
            .unwrap(),
    );
    buf.extend(
        [true, false, true]
            .into_iter()
            .collect::<List<bool>>()
            .to_bytes()
            .unwrap(),
    );

    let mut decoded = Vec::new();
    let mut rest = buf.as_slice();
    while !rest.is_empty() {
        let header = Header::parse(rest).unwrap();
        decoded.push(TypedList::decode(rest).unwrap());
        rest = &rest[header.total_len..];
    }

    let tags: Vec<ListTag> = decoded.iter().map(TypedList::tag).collect();
    assert_eq!(tags, [ListTag::Int32, ListTag::Float32, ListTag::Bool]);
    assert_eq!(decoded.iter().map(TypedList::len).sum::<usize>(), 10);
    match &decoded[1] {
        TypedList::Float(list) => assert_eq!(list.as_slice(), &[1.5, -0.25, 0.0]),
        other => panic!("expected float list, got {other:?}"),
    }
}

#[test]
fn pair_lists_roundtrip() {
    let pairs: List<Pair<i32>> = [(0, 0), (3, -1), (i32::MIN, i32::MAX)]
        .into_iter()
        .map(Pair::from)
        .collect();
    let restored = roundtrip(&pairs);
    assert_eq!(restored, pairs);
    assert_eq!(pairs.bytes_length(), 12 + 3 * 16);
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn roundtrip_after_random_mutation(
        values in prop::collection::vec(any::<i32>(), 1..128),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..16),
    ) {
        let mut list = ints(&values);
        let mut model = values.clone();
        for pick in removals {
            if model.is_empty() {
                break;
            }
            let i = pick.index(model.len());
            prop_assert_eq!(list.remove(i), model.remove(i));
        }
        let restored = roundtrip(&list);
        prop_assert_eq!(restored.as_slice(), model.as_slice());
    }

    #[test]
    fn capacity_only_shrinks_on_sort_or_decode(ops in prop::collection::vec(0u8..4, 0..200)) {
        let mut list = List::<i32>::new();
        let mut last_cap = list.capacity();
        for (i, op) in ops.into_iter().enumerate() {
            match op {
                0 | 1 => list.push(i as i32),
                2 => {
                    let _ = list.try_pop_last();
                }
                _ => {
                    list.sort();
                    prop_assert_eq!(list.capacity(), list.len());
                    last_cap = list.capacity();
                    continue;
                }
            }
            prop_assert!(list.capacity() >= last_cap);
            last_cap = list.capacity();
        }
    }
}
