use super::BaseCounts;

pub fn count_bases(seq: &[u8]) -> BaseCounts {
    let mut counts = BaseCounts::default();
    for &b in seq {
        match b {
            b'A' => counts.a += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            b'T' => counts.t += 1,
            b'N' => counts.n += 1,
            _ => {}
        }
    }
    counts
}
