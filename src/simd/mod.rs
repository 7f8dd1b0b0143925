#[cfg(target_arch = "aarch64")]
mod aarch64_neon;
mod scalar;
#[cfg(target_arch = "x86_64")]
mod x86_avx2;

// Exact uppercase bytes only; lowercase counts nowhere.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BaseCounts {
    pub a: u64,
    pub c: u64,
    pub g: u64,
    pub t: u64,
    pub n: u64,
}

impl BaseCounts {
    pub fn gc(&self) -> u64 {
        self.g + self.c
    }

    pub fn at(&self) -> u64 {
        self.a + self.t
    }

    fn add_assign(&mut self, other: &BaseCounts) {
        self.a += other.a;
        self.c += other.c;
        self.g += other.g;
        self.t += other.t;
        self.n += other.n;
    }
}

// Vector lanes accumulate into u32 counters; longer inputs are fed in blocks.
const BLOCK: usize = 1 << 30;

pub fn count_bases(seq: &[u8]) -> BaseCounts {
    let mut total = BaseCounts::default();
    for block in seq.chunks(BLOCK) {
        total.add_assign(&count_block(block));
    }
    total
}

fn count_block(seq: &[u8]) -> BaseCounts {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("avx2") {
            // SAFETY: avx2 support checked above.
            return unsafe { x86_avx2::count_bases_avx2(seq) };
        }
        return scalar::count_bases(seq);
    }
    #[cfg(target_arch = "aarch64")]
    unsafe {
        // SAFETY: neon is part of the aarch64 baseline.
        return aarch64_neon::count_bases_neon(seq);
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        return scalar::count_bases(seq);
    }
}
