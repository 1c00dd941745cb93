extern crate ordered_trees;
extern crate rand;

use ordered_trees::bst::{Bst, BstMap};
use ordered_trees::Error;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

const NUM_OF_OPERATIONS: usize = 10_000;

fn seeded_rng() -> rand::XorShiftRng {
    rand::SeedableRng::from_seed([1, 1, 1, 1])
}

#[test]
fn int_test_bst_random_operations() {
    let mut rng = seeded_rng();
    let mut tree = Bst::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0u32, 1000);

        if rng.gen::<bool>() {
            assert_eq!(tree.insert(key), expected.insert(key));
        } else {
            assert_eq!(tree.remove(&key), expected.remove(&key));
        }
        assert_eq!(tree.len(), expected.len());
    }

    assert_eq!(tree.in_order(), expected.iter().collect::<Vec<&u32>>());
    assert_eq!(tree.pre_order().len(), expected.len());
    assert_eq!(tree.post_order().len(), expected.len());
    for key in 0..1000 {
        assert_eq!(tree.contains(&key), expected.contains(&key));
    }
}

#[test]
fn int_test_bst_in_order_is_sorted() {
    let mut rng = seeded_rng();
    let mut tree = Bst::new();

    for _ in 0..NUM_OF_OPERATIONS {
        tree.insert(rng.next_u32());
    }

    let items = tree.in_order();
    assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn int_test_bst_sorted_chain_teardown() {
    let mut tree = Bst::new();
    for key in 0..5000u32 {
        tree.insert(key);
    }
    assert_eq!(tree.height(), 4999);
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn int_test_bst_map_random_operations() {
    let mut rng = seeded_rng();
    let mut map = BstMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0u32, 500);
        let value = rng.next_u32();

        match rng.gen_range(0, 3) {
            0 => {
                *map.upsert(key) = value;
                expected.insert(key, value);
            },
            1 => {
                assert_eq!(map.remove(&key), expected.remove(&key).is_some());
            },
            _ => {
                assert_eq!(map.get(&key).ok(), expected.get(&key));
            },
        }
    }

    let actual = map.entries();
    assert_eq!(actual.len(), expected.len());
    for (actual, expected) in actual.into_iter().zip(expected.iter()) {
        assert_eq!(actual, expected);
    }
}

#[test]
fn int_test_bst_map_complex_sequence() {
    let mut map: BstMap<String, (u32, String)> = BstMap::new();
    map[&String::from("one")] = (1, String::from("A"));
    map[&String::from("two")] = (2, String::from("B"));
    map[&String::from("three")] = (3, String::from("C"));

    assert_eq!(map[&String::from("one")].1, "A");
    assert_eq!(map[&String::from("two")].0, 2);

    map.upsert(String::from("one")).1 = String::from("Apple");
    assert_eq!(map[&String::from("one")].1, "Apple");

    assert!(map.remove(&String::from("two")));
    assert_eq!(map.get(&String::from("two")), Err(Error::OutOfRange));
    assert!(!map.remove(&String::from("two")));

    map[&String::from("four")] = (4, String::from("D"));
    assert_eq!(map[&String::from("four")].0, 4);

    assert!(map.remove(&String::from("one")));
    assert!(map.remove(&String::from("three")));
    assert!(map.remove(&String::from("four")));
    assert!(map.is_empty());
    assert_eq!(map.get(&String::from("one")), Err(Error::OutOfRange));
}
