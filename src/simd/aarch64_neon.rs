#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::BaseCounts;

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn count_bases_neon(seq: &[u8]) -> BaseCounts {
    let mut a = 0u32;
    let mut c = 0u32;
    let mut g = 0u32;
    let mut t = 0u32;
    let mut n = 0u32;
    let mut i = 0usize;
    let len = seq.len();

    let va = vdupq_n_u8(b'A');
    let vc = vdupq_n_u8(b'C');
    let vg = vdupq_n_u8(b'G');
    let vt = vdupq_n_u8(b'T');
    let vn = vdupq_n_u8(b'N');
    let ones = vdupq_n_u8(1);

    while i + 16 <= len {
        let v = unsafe { vld1q_u8(seq.as_ptr().add(i)) };

        let ma = vceqq_u8(v, va);
        let mc = vceqq_u8(v, vc);
        let mg = vceqq_u8(v, vg);
        let mt = vceqq_u8(v, vt);
        let mn = vceqq_u8(v, vn);

        a += vaddvq_u8(vandq_u8(ma, ones)) as u32;
        c += vaddvq_u8(vandq_u8(mc, ones)) as u32;
        g += vaddvq_u8(vandq_u8(mg, ones)) as u32;
        t += vaddvq_u8(vandq_u8(mt, ones)) as u32;
        n += vaddvq_u8(vandq_u8(mn, ones)) as u32;

        i += 16;
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
