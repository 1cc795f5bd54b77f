//! Digit-sum reduction to a single digit or a master number.

/// Numbers that are never reduced further.
pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

/// Whether `n` is 11, 22, or 33.
pub fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum digits repeatedly until the value is at most 9 or a master number.
pub fn reduce(mut n: u64) -> u64 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_points() {
        for n in 0..=9 {
            assert_eq!(reduce(n), n);
        }
        for n in MASTER_NUMBERS {
            assert_eq!(reduce(n), n);
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(reduce(29), 11);
        assert_eq!(reduce(38), 11);
        assert_eq!(reduce(30), 3);
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(99), 9);
        assert_eq!(reduce(2046), 3);
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    proptest! {
        #[test]
        fn result_is_digit_or_master(n in any::<u64>()) {
            let r = reduce(n);
            prop_assert!(r <= 9 || is_master(r));
        }

        #[test]
        fn reduction_is_idempotent(n in any::<u64>()) {
            prop_assert_eq!(reduce(reduce(n)), reduce(n));
        }

        #[test]
        fn reduction_keeps_residue_mod_nine(n in any::<u64>()) {
            prop_assert_eq!(reduce(n) % 9, n % 9);
        }
    }
}
