use crate::cli::args::{Cli, Commands, RunArgs};
use crate::core::engine::{self, RunConfig};
use anyhow::{Result, bail};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::time::{Duration, Instant};

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    stage(stats, "preflight", || {
        if args.folder.as_os_str().is_empty() {
            bail!("--folder must not be empty");
        }
        if let Some(gene) = args.genes.iter().find(|g| g.trim().is_empty()) {
            bail!("gene identifier must not be blank: {:?}", gene);
        }
        Ok(())
    })?;

    let t_cfg = Instant::now();
    let config = build_config(args);
    stage_done(stats, "config", t_cfg);

    let t_engine = Instant::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let output = engine::run(&config, &mut out)?;
    out.flush()?;
    stage_done(stats, "engine", t_engine);

    if stats {
        eprintln!(
            "KIRA_STATS folder={} genes={} reported={} skipped={}",
            config.folder.display(),
            config.genes.len(),
            output.reported,
            output.skipped
        );
        eprintln!("KIRA_STATS total={}", fmt_dur(t0.elapsed()));
    }

    Ok(())
}

fn build_config(args: RunArgs) -> RunConfig {
    let mut config = RunConfig {
        folder: args.folder,
        ..RunConfig::default()
    };
    if !args.genes.is_empty() {
        config.genes = args.genes;
    }
    config
}

fn stats_enabled() -> bool {
    matches!(env::var("KIRA_STATS").as_deref(), Ok("1"))
}

fn stage<F>(stats: bool, name: &str, f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let t = Instant::now();
    let res = f();
    if stats {
        eprintln!("KIRA_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
    res
}

fn stage_done(stats: bool, name: &str, t: Instant) {
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
