use crate::core::model::{Composition, GcPercent, Sequence};
use crate::simd;

// Counts exact `G`/`C` bytes only, callers pass uppercase input.
pub fn gc_percent(seq: &str) -> GcPercent {
    if seq.is_empty() {
        return GcPercent::ZERO;
    }
    let gc = simd::count_bases(seq.as_bytes()).gc();
    percent_of(gc, seq.chars().count())
}

pub fn composition(seq: &Sequence) -> Composition {
    let counts = simd::count_bases(seq.as_bytes());
    let length = seq.len();
    let gc_percent = if length == 0 {
        GcPercent::ZERO
    } else {
        percent_of(counts.gc(), length)
    };
    Composition {
        length,
        gc_count: counts.gc(),
        at_count: counts.at(),
        gc_percent,
    }
}

fn percent_of(gc: u64, len: usize) -> GcPercent {
    let pct = (gc as f64 / len as f64) * 100.0;
    GcPercent::from_hundredths(round_hundredths(pct))
}

/// Rounds a non-negative finite `x` to the nearest hundredth, ties to even,
/// using the exact value of the double rather than a scaled approximation.
pub fn round_hundredths(x: f64) -> u32 {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    let bits = x.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1u64 << 52) - 1);
    // x == mant * 2^exp exactly
    let (mant, exp) = if exp_bits == 0 {
        (frac, -1074)
    } else {
        (frac | (1u64 << 52), exp_bits - 1075)
    };
    let scaled = mant as u128 * 100;
    if exp >= 0 {
        return (scaled << exp) as u32;
    }
    let shift = (-exp) as u32;
    if shift >= 127 {
        return 0;
    }
    let q = scaled >> shift;
    let r = scaled - (q << shift);
    let half = 1u128 << (shift - 1);
    let rounded = if r > half || (r == half && q & 1 == 1) {
        q + 1
    } else {
        q
    };
    rounded as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        Sequence {
            bases: s.to_string(),
            headers: 1,
            source_bytes: s.len(),
        }
    }

    #[test]
    fn empty_sequence_is_zero() {
        assert_eq!(gc_percent(""), GcPercent::ZERO);
        let c = composition(&seq(""));
        assert_eq!(c.length, 0);
        assert_eq!(c.gc_count, 0);
        assert_eq!(c.at_count, 0);
        assert_eq!(c.gc_percent, GcPercent::ZERO);
    }

    #[test]
    fn balanced_sequence_is_fifty() {
        let c = composition(&seq("ACGTACGT"));
        assert_eq!(c.length, 8);
        assert_eq!(c.gc_count, 4);
        assert_eq!(c.at_count, 4);
        assert_eq!(c.gc_percent.to_string(), "50.0");
        assert_eq!(gc_percent("ACGTACGT"), c.gc_percent);
    }

    #[test]
    fn ambiguity_codes_count_in_neither_class() {
        let c = composition(&seq("ACGN"));
        assert_eq!(c.length, 4);
        assert_eq!(c.gc_count, 2);
        assert_eq!(c.at_count, 1);
        assert_ne!(c.gc_count + c.at_count, c.length as u64);
    }

    #[test]
    fn composition_agrees_with_standalone_percent() {
        for s in ["", "G", "ACGN", "GATTACA", "CCGGAATTNN", "ACGTÄG"] {
            let c = composition(&seq(s));
            assert_eq!(c.gc_percent, gc_percent(s), "{s}");
            assert_eq!(c.length, s.chars().count(), "{s}");
        }
    }

    #[test]
    fn lowercase_is_not_counted() {
        assert_eq!(gc_percent("gc"), GcPercent::ZERO);
        assert_eq!(gc_percent("GC").to_string(), "100.0");
    }

    #[test]
    fn acgt_only_tallies_cover_length() {
        for s in ["A", "GATTACA", "CCCCGGGG", "ACGTTGCAACGT"] {
            let c = composition(&seq(s));
            assert_eq!(c.gc_count + c.at_count, c.length as u64, "{s}");
        }
    }

    #[test]
    fn percent_stays_in_range() {
        for s in ["G", "A", "N", "GGGA", "ACGTN-", "CCCCCCC"] {
            let p = gc_percent(s);
            assert!(p <= GcPercent::from_hundredths(10_000), "{s}: {p}");
        }
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1/3 and 2/3
        assert_eq!(gc_percent("GAA"), GcPercent::from_hundredths(3333));
        assert_eq!(gc_percent("GCA"), GcPercent::from_hundredths(6667));
        // 629 of 1182
        let s = "G".repeat(629) + &"A".repeat(553);
        assert_eq!(gc_percent(&s).to_string(), "53.21");
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round_hundredths(12.125), 1212);
        assert_eq!(round_hundredths(12.375), 1238);
        assert_eq!(round_hundredths(0.5), 50);
        assert_eq!(round_hundredths(100.0), 10000);
        assert_eq!(round_hundredths(0.0), 0);
    }

    #[test]
    fn near_ties_follow_binary_value() {
        // All three are stored slightly below the written decimal.
        assert_eq!(round_hundredths(1.005), 100);
        assert_eq!(round_hundredths(1.015), 101);
        assert_eq!(round_hundredths(2.675), 267);
    }
}
