use proptest::prelude::*;
use chtholly::ChthollyTree;

/// Naive oracle for the k-th smallest in `model[lo..=hi]` (1-based k).
fn naive_kth(model: &[i64], lo: usize, hi: usize, k: usize) -> Option<i64> {
    let mut sub: Vec<i64> = model[lo..=hi].to_vec();
    sub.sort_unstable();
    if k == 0 || k > sub.len() {
        None
    } else {
        Some(sub[k - 1])
    }
}

/// Naive oracle for `sum of v^x mod y`, computed in i128 so it cannot
/// share an overflow bug with the implementation under test.
fn naive_powsum(model: &[i64], lo: usize, hi: usize, x: u64, y: i64) -> i64 {
    let y = y as i128;
    let mut acc = 0i128;
    for &v in &model[lo..=hi] {
        let mut pw = 1 % y;
        let base = (v as i128).rem_euclid(y);
        for _ in 0..x {
            pw = pw * base % y;
        }
        acc = (acc + pw) % y;
    }
    acc as i64
}

fn assert_partition(t: &ChthollyTree) {
    let mut expected_start = 0;
    for (start, end, _) in t.runs() {
        assert_eq!(start, expected_start);
        assert!(end >= start);
        expected_start = end + 1;
    }
    assert_eq!(expected_start, t.len());
}

proptest! {
    /// Every operation agrees with a plain Vec<i64> oracle, and the run
    /// partition stays gap-free and overlap-free throughout.
    #[test]
    fn test_tree_matches_model(
        init in prop::collection::vec(-100i64..100, 1..60),
        ops in prop::collection::vec(
            (0u8..4, any::<u16>(), any::<u16>(), -50i64..50),
            1..40,
        ),
    ) {
        let n = init.len();
        let mut tree = ChthollyTree::new(&init);
        let mut model = init.clone();

        for (kind, a, b, x) in ops {
            let mut lo = a as usize % n;
            let mut hi = b as usize % n;
            if lo > hi {
                std::mem::swap(&mut lo, &mut hi);
            }

            match kind {
                0 => {
                    tree.add(lo, hi, x).unwrap();
                    for v in &mut model[lo..=hi] {
                        *v += x;
                    }
                }
                1 => {
                    tree.assign(lo, hi, x).unwrap();
                    for v in &mut model[lo..=hi] {
                        *v = x;
                    }
                }
                2 => {
                    let k = (x.unsigned_abs() as usize) % (hi - lo + 1) + 1;
                    let got = tree.kth(lo, hi, k).unwrap();
                    prop_assert_eq!(Some(got), naive_kth(&model, lo, hi, k));
                }
                _ => {
                    let exp = (x.unsigned_abs() % 8) as u64;
                    let y = x.abs() % 97 + 1;
                    let got = tree.powsum(lo, hi, exp, y).unwrap();
                    prop_assert_eq!(got, naive_powsum(&model, lo, hi, exp, y));
                }
            }
            assert_partition(&tree);
        }

        for (i, &expected) in model.iter().enumerate() {
            prop_assert_eq!(tree.get(i).unwrap(), expected);
        }
        prop_assert!(tree.run_count() <= n);
    }

    /// add(l, r, x) then add(l, r, -x) restores the sequence.
    #[test]
    fn test_add_is_invertible(
        init in prop::collection::vec(-100i64..100, 1..50),
        a in any::<u16>(),
        b in any::<u16>(),
        x in -1000i64..1000,
    ) {
        let n = init.len();
        let mut lo = a as usize % n;
        let mut hi = b as usize % n;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let mut tree = ChthollyTree::new(&init);
        tree.add(lo, hi, x).unwrap();
        tree.add(lo, hi, -x).unwrap();

        for (i, &expected) in init.iter().enumerate() {
            prop_assert_eq!(tree.get(i).unwrap(), expected);
        }
    }

    /// Assigning the same value twice changes nothing after the first time.
    #[test]
    fn test_assign_is_idempotent(
        init in prop::collection::vec(-100i64..100, 1..50),
        a in any::<u16>(),
        b in any::<u16>(),
        x in -1000i64..1000,
    ) {
        let n = init.len();
        let mut lo = a as usize % n;
        let mut hi = b as usize % n;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let mut tree = ChthollyTree::new(&init);
        tree.assign(lo, hi, x).unwrap();
        let once: Vec<i64> = (0..n).map(|i| tree.get(i).unwrap()).collect();
        let runs_once = tree.run_count();

        tree.assign(lo, hi, x).unwrap();
        let twice: Vec<i64> = (0..n).map(|i| tree.get(i).unwrap()).collect();

        prop_assert_eq!(once, twice);
        prop_assert_eq!(tree.run_count(), runs_once);
    }

    /// Walking k = 1..=length recovers the sorted sub-range, so the answers
    /// are non-decreasing in k.
    #[test]
    fn test_kth_walk_is_sorted_subrange(
        init in prop::collection::vec(-100i64..100, 1..40),
        a in any::<u16>(),
        b in any::<u16>(),
    ) {
        let n = init.len();
        let mut lo = a as usize % n;
        let mut hi = b as usize % n;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let mut tree = ChthollyTree::new(&init);
        let len = hi - lo + 1;
        let got: Vec<i64> = (1..=len).map(|k| tree.kth(lo, hi, k).unwrap()).collect();

        let mut expected = init[lo..=hi].to_vec();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    /// powsum with exponent 1 is just the sub-range sum mod y.
    #[test]
    fn test_powsum_exponent_one_is_mod_sum(
        init in prop::collection::vec(-100i64..100, 1..50),
        a in any::<u16>(),
        b in any::<u16>(),
        y in 1i64..500,
    ) {
        let n = init.len();
        let mut lo = a as usize % n;
        let mut hi = b as usize % n;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let mut tree = ChthollyTree::new(&init);
        let got = tree.powsum(lo, hi, 1, y).unwrap();

        let sum: i64 = init[lo..=hi].iter().sum();
        prop_assert_eq!(got, sum.rem_euclid(y));
    }
}
