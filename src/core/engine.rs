use crate::core::fasta;
use crate::core::metrics;
use crate::report;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const DEFAULT_FOLDER: &str = "./fasta";

pub const DEFAULT_GENES: [&str; 8] = [
    "TP53", "BRCA1", "KRAS", "MYC", "FBXW7", "ARID1A", "PPP2R2A", "TET2",
];

pub struct RunConfig {
    pub folder: PathBuf,
    pub genes: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            genes: DEFAULT_GENES.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl RunConfig {
    pub fn gene_path(&self, gene: &str) -> PathBuf {
        self.folder.join(format!("{}.fasta", gene))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunOutput {
    pub reported: usize,
    pub skipped: usize,
}

pub fn run(cfg: &RunConfig, out: &mut dyn Write) -> Result<RunOutput> {
    let stats = stats_enabled();
    let mut output = RunOutput::default();

    report::text::write_title(out)?;

    for gene in &cfg.genes {
        let t_gene = Instant::now();
        let path = cfg.gene_path(gene);
        if !path.exists() {
            report::text::write_skip(out, gene)?;
            out.flush()?;
            output.skipped += 1;
            continue;
        }

        let sequence = fasta::read_sequence(&path)
            .with_context(|| format!("failed to read sequence for {}", gene))?;
        let comp = metrics::composition(&sequence);
        report::text::write_gene(out, gene, &comp)?;
        out.flush()?;
        output.reported += 1;

        if stats {
            eprintln!(
                "KIRA_STATS gene={} path={} bytes={} bases={} headers={}",
                gene,
                path.display(),
                sequence.source_bytes,
                comp.length,
                sequence.headers
            );
            if sequence.headers > 1 {
                eprintln!(
                    "KIRA_STATS gene={} records_flattened={}",
                    gene, sequence.headers
                );
            }
        }
        log_stage(stats, "engine.gene", t_gene);
    }

    Ok(output)
}

fn stats_enabled() -> bool {
    matches!(std::env::var("KIRA_STATS").as_deref(), Ok("1"))
}

fn log_stage(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("KIRA_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
