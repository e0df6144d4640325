// Copyright 2024 Developers of the Combinate project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cross-cutting enumeration tests: canonical orders, counting identities,
//! and the producer contracts.

use combinate::prelude::*;

fn factorial(n: usize) -> usize {
    (1..=n).product::<usize>().max(1)
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result: usize = 1;
    for i in 0..k.min(n - k) {
        result = result * (n - i) / (i + 1);
    }
    result
}

#[test]
fn canonical_orders() {
    let items = [1, 2, 3];

    assert_eq!(
        items.combinations(2).into_vec(),
        vec![vec![1, 2], vec![1, 3], vec![2, 3]]
    );
    assert_eq!(
        items.permutations(2).into_vec(),
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![2, 1],
            vec![2, 3],
            vec![3, 1],
            vec![3, 2],
        ]
    );
    assert_eq!(
        items.repeated_combinations(2).into_vec(),
        vec![
            vec![1, 1],
            vec![1, 2],
            vec![1, 3],
            vec![2, 2],
            vec![2, 3],
            vec![3, 3],
        ]
    );

    let tuples: Vec<Vec<i32>> = items.repeated_permutations(2).iter().collect();
    assert_eq!(tuples.len(), 9);
    assert_eq!(tuples[0], vec![1, 1]);
    assert_eq!(tuples[1], vec![1, 2]); // rightmost slot varies fastest
    assert_eq!(tuples[8], vec![3, 3]);
}

#[test]
fn counting_identities() {
    for n in 0..=7usize {
        let elems: Vec<u8> = (0..n as u8).collect();
        assert_eq!(elems.permutations(n).len(), factorial(n));
        for k in 0..=n {
            assert_eq!(elems.combinations(k).len(), binomial(n, k));
        }
        for k in 0..=3usize {
            let repeated = elems.repeated_permutations(k as isize);
            assert_eq!(repeated.len(), n.pow(k as u32));
            if n > 0 {
                assert_eq!(
                    elems.repeated_combinations(k).len(),
                    binomial(n + k - 1, k)
                );
            }
        }
    }
}

#[test]
fn vacuous_requests_produce_nothing() {
    let items = [1, 2, 3];
    assert!(items.combinations(4).is_empty());
    assert!(items.permutations(4).is_empty());

    let empty: [i32; 0] = [];
    for k in 1..4 {
        assert!(empty.combinations(k).is_empty());
        assert!(empty.permutations(k).is_empty());
        assert!(empty.repeated_combinations(k).is_empty());
        assert_eq!(empty.repeated_permutations(k as isize).iter().count(), 0);
    }
}

#[test]
fn zero_length_produces_one_empty_item() {
    let items = [1, 2, 3];
    let empty: [i32; 0] = [];
    for slice in [&items[..], &empty[..]] {
        assert_eq!(slice.combinations(0).into_vec(), vec![Vec::<i32>::new()]);
        assert_eq!(slice.permutations(0).into_vec(), vec![Vec::<i32>::new()]);
        assert_eq!(
            slice.repeated_combinations(0).into_vec(),
            vec![Vec::<i32>::new()]
        );
        let tuples: Vec<Vec<i32>> = slice.repeated_permutations(0).iter().collect();
        assert_eq!(tuples, vec![Vec::<i32>::new()]);
    }
}

#[test]
fn repeated_permutations_len_without_materializing() {
    // 10^18 tuples: countable, never collectable.
    let digits = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(digits.repeated_permutations(18).len(), 1_000_000_000_000_000_000);
    assert_eq!(digits.repeated_permutations(-3).len(), 0);
}

#[test]
fn producers_are_restartable() {
    let items = ['x', 'y', 'z'];
    let combos = items.combinations(2);
    assert_eq!(
        combos.iter().collect::<Vec<_>>(),
        combos.iter().collect::<Vec<_>>()
    );

    let tuples = items.repeated_permutations(2);
    assert_eq!(
        tuples.iter().collect::<Vec<_>>(),
        tuples.iter().collect::<Vec<_>>()
    );
}

#[test]
fn consumer_sees_items_in_emission_order() {
    let items = [1u8, 2, 3, 4];
    let mut seen = Vec::new();
    items.combinations_each(2, |item| seen.push(item.to_vec()));
    assert_eq!(seen, items.combinations(2).into_vec());
}

// Equal-valued elements make the repeated-combination extension anchor
// ambiguous: the anchor is found by first-occurrence equality, so a later
// duplicate re-opens earlier extension ranges. The assertion below records
// what the rule happens to produce today ([1, 1] yields four items where a
// distinct-valued pair yields C(3, 2) = 3); it is not a supported contract.
#[test]
#[ignore = "equal-valued input is unsupported; enumeration may repeat items"]
fn repeated_combinations_with_equal_values() {
    let out = [1, 1].repeated_combinations(2);
    assert_eq!(out.len(), 4);
}
