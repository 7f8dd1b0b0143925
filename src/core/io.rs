use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub enum SourceData {
    Empty,
    Mapped(Mmap),
    Owned(Vec<u8>),
}

pub struct MmapSource {
    data: SourceData,
}

impl MmapSource {
    pub fn open(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let meta = file
            .metadata()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if meta.is_dir() {
            anyhow::bail!("{} is a directory, not a FASTA file", path.display());
        }
        let data = if !meta.is_file() {
            // pipes and procfs-style files report no usable size
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SourceData::Owned(buf)
        } else if meta.len() == 0 {
            SourceData::Empty
        } else {
            // SAFETY: read-only file mapping.
            let mmap = unsafe { Mmap::map(&file) }
                .with_context(|| format!("mmap failed for {}", path.display()))?;
            SourceData::Mapped(mmap)
        };
        Ok(Self { data })
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.data {
            SourceData::Empty => &[],
            SourceData::Mapped(m) => &m[..],
            SourceData::Owned(v) => v,
        }
    }
}
