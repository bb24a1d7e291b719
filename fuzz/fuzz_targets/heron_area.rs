#![no_main]
use libfuzzer_sys::fuzz_target;

use heronian::heron::{compute_area, heronian_area};

fuzz_target!(|sides: (u32, u32, u32)| {
    let (a, b, c) = sides;
    let exact = heronian_area(a, b, c);
    match compute_area(a, b, c) {
        Ok(area) => {
            assert!(area > 0.0);
            if let Some(n) = exact {
                assert_eq!(heronian_area(c, a, b), Some(n));
                assert!(((area - n as f64) / n as f64).abs() < 1e-9);
            }
        }
        Err(_) => assert!(exact.is_none()),
    }
});
