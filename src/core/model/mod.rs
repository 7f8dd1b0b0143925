use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sequence {
    pub bases: String,
    // more than one means several records were flattened into `bases`
    pub headers: u32,
    pub source_bytes: usize,
}

impl Sequence {
    pub fn as_bytes(&self) -> &[u8] {
        self.bases.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.bases.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

// Hundredths of a percent.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct GcPercent(u32);

impl GcPercent {
    pub const ZERO: GcPercent = GcPercent(0);

    pub fn from_hundredths(hundredths: u32) -> Self {
        GcPercent(hundredths)
    }
}

// Shortest decimal with at least one fractional digit: 50.0, 53.25, 12.1.
impl fmt::Display for GcPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Composition {
    pub length: usize,
    pub gc_count: u64,
    pub at_count: u64,
    pub gc_percent: GcPercent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_display_keeps_one_fraction_digit() {
        assert_eq!(GcPercent::from_hundredths(5000).to_string(), "50.0");
        assert_eq!(GcPercent::from_hundredths(5325).to_string(), "53.25");
        assert_eq!(GcPercent::from_hundredths(1210).to_string(), "12.1");
        assert_eq!(GcPercent::from_hundredths(5).to_string(), "0.05");
        assert_eq!(GcPercent::ZERO.to_string(), "0.0");
        assert_eq!(GcPercent::from_hundredths(10000).to_string(), "100.0");
    }

    #[test]
    fn sequence_length_counts_chars() {
        let seq = Sequence {
            bases: "ACGTÄ".to_string(),
            headers: 1,
            source_bytes: 10,
        };
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.as_bytes().len(), 6);
        assert!(!seq.is_empty());
    }
}
