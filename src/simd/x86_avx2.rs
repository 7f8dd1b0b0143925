#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::BaseCounts;

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn count_bases_avx2(seq: &[u8]) -> BaseCounts {
    let mut a = 0u32;
    let mut c = 0u32;
    let mut g = 0u32;
    let mut t = 0u32;
    let mut n = 0u32;
    let mut i = 0usize;
    let len = seq.len();

    let va = _mm256_set1_epi8(b'A' as i8);
    let vc = _mm256_set1_epi8(b'C' as i8);
    let vg = _mm256_set1_epi8(b'G' as i8);
    let vt = _mm256_set1_epi8(b'T' as i8);
    let vn = _mm256_set1_epi8(b'N' as i8);

    while i + 32 <= len {
        let ptr = unsafe { seq.as_ptr().add(i) as *const __m256i };
        let v = unsafe { _mm256_loadu_si256(ptr) };
        let ma = _mm256_movemask_epi8(_mm256_cmpeq_epi8(v, va)) as u32;
        let mc = _mm256_movemask_epi8(_mm256_cmpeq_epi8(v, vc)) as u32;
        let mg = _mm256_movemask_epi8(_mm256_cmpeq_epi8(v, vg)) as u32;
        let mt = _mm256_movemask_epi8(_mm256_cmpeq_epi8(v, vt)) as u32;
        let mn = _mm256_movemask_epi8(_mm256_cmpeq_epi8(v, vn)) as u32;
        a += ma.count_ones();
        c += mc.count_ones();
        g += mg.count_ones();
        t += mt.count_ones();
        n += mn.count_ones();
        i += 32;
    }

    for &b in &seq[i..] {
        match b {
            b'A' => a += 1,
            b'C' => c += 1,
            b'G' => g += 1,
            b'T' => t += 1,
            b'N' => n += 1,
            _ => {}
        }
    }

    BaseCounts {
        a: a as u64,
        c: c as u64,
        g: g as u64,
        t: t as u64,
        n: n as u64,
    }
}
