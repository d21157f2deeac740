#![no_main]
use libfuzzer_sys::fuzz_target;
use chtholly::ChthollyTree;

fuzz_target!(|data: (Vec<i64>, Vec<(u8, u16, u16, i64)>)| {
    let (values, ops) = data;
    if values.is_empty() || values.len() > 256 {
        return;
    }
    let n = values.len();
    // Keep values small enough that repeated adds cannot overflow i64.
    let values: Vec<i64> = values.into_iter().map(|v| v % 1_000_000_000).collect();

    let mut tree = ChthollyTree::new(&values);
    let mut model = values.clone();

    for (kind, a, b, x) in ops {
        let mut lo = a as usize % n;
        let mut hi = b as usize % n;
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        let x = x % 1_000_000;

        match kind % 4 {
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
                let mut sub = model[lo..=hi].to_vec();
                sub.sort_unstable();
                assert_eq!(got, sub[k - 1]);
            }
            _ => {
                let exp = (x.unsigned_abs() % 8) as u64;
                let y = x.abs() % 997 + 1;
                let got = tree.powsum(lo, hi, exp, y).unwrap();

                let ym = y as i128;
                let mut expected = 0i128;
                for &v in &model[lo..=hi] {
                    let mut pw = 1 % ym;
                    let base = (v as i128).rem_euclid(ym);
                    for _ in 0..exp {
                        pw = pw * base % ym;
                    }
                    expected = (expected + pw) % ym;
                }
                assert_eq!(got as i128, expected);
            }
        }
    }

    // Runs must still partition [0, n) exactly.
    let mut expected_start = 0;
    for (start, end, _) in tree.runs() {
        assert_eq!(start, expected_start);
        assert!(end >= start);
        expected_start = end + 1;
    }
    assert_eq!(expected_start, n);

    for (i, &expected) in model.iter().enumerate() {
        assert_eq!(tree.get(i).unwrap(), expected);
    }
});
