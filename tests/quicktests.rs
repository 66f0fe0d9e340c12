use std::collections::BTreeMap;

use bidimap::BidiMap;
use quickcheck::{Arbitrary, Gen};

/// The kinds of "things" to do to a bidirectional map in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<K, V> {
    Put(K, V),
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Put(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a map and to two `BTreeMap`s modelling the
/// forward and reverse directions.
fn do_ops(
    ops: &[Op<i8, i8>],
    map: &mut BidiMap<i8, i8>,
    forward: &mut BTreeMap<i8, i8>,
    reverse: &mut BTreeMap<i8, i8>,
) {
    for op in ops {
        match op {
            Op::Put(k, v) => {
                let fresh = !forward.contains_key(k) && !reverse.contains_key(v);
                assert_eq!(map.put(*k, *v), fresh);
                if fresh {
                    forward.insert(*k, *v);
                    reverse.insert(*v, *k);
                }
            }
            Op::Remove(k) => {
                let expected = forward.remove(k);
                if let Some(v) = &expected {
                    reverse.remove(v);
                }
                assert_eq!(map.remove(k), expected);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn matches_both_model_directions(ops: Vec<Op<i8, i8>>) -> bool {
        let mut map = BidiMap::new();
        let mut forward = BTreeMap::new();
        let mut reverse = BTreeMap::new();

        do_ops(&ops, &mut map, &mut forward, &mut reverse);

        map.len() == forward.len()
            && forward
                .iter()
                .all(|(k, v)| map.get_value(k) == Some(v))
            && reverse
                .iter()
                .all(|(v, k)| map.get_key(v) == Some(k))
    }
}

quickcheck::quickcheck! {
    fn key_traversal_matches_sorted_model(ops: Vec<Op<i8, i8>>) -> bool {
        let mut map = BidiMap::new();
        let mut forward = BTreeMap::new();
        let mut reverse = BTreeMap::new();

        do_ops(&ops, &mut map, &mut forward, &mut reverse);

        // `BTreeMap` iterates in ascending key order, which is exactly the
        // ordering law for the key-side traversal.
        let expected: Vec<(i8, i8)> = forward.iter().map(|(k, v)| (*k, *v)).collect();
        let actual: Vec<(i8, i8)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        expected == actual
    }
}

quickcheck::quickcheck! {
    fn value_traversal_matches_sorted_model(ops: Vec<Op<i8, i8>>) -> bool {
        let mut map = BidiMap::new();
        let mut forward = BTreeMap::new();
        let mut reverse = BTreeMap::new();

        do_ops(&ops, &mut map, &mut forward, &mut reverse);

        let expected: Vec<(i8, i8)> = reverse.iter().map(|(v, k)| (*k, *v)).collect();
        let actual: Vec<(i8, i8)> = map.iter_by_values().map(|(k, v)| (*k, *v)).collect();
        expected == actual
    }
}

quickcheck::quickcheck! {
    fn both_traversals_hold_the_same_pairs(ops: Vec<Op<i8, i8>>) -> bool {
        let mut map = BidiMap::new();
        let mut forward = BTreeMap::new();
        let mut reverse = BTreeMap::new();

        do_ops(&ops, &mut map, &mut forward, &mut reverse);

        let mut by_keys: Vec<(i8, i8)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let mut by_values: Vec<(i8, i8)> = map.iter_by_values().map(|(k, v)| (*k, *v)).collect();
        let sizes_agree = by_keys.len() == map.len() && by_values.len() == map.len();

        by_keys.sort();
        by_values.sort();
        sizes_agree && by_keys == by_values
    }
}
