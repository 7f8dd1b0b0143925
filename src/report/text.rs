use crate::core::model::Composition;
use anyhow::Result;
use std::io::Write;

pub const TITLE: &str = "📊 GC Content Report for Selected Cancer Genes:";

pub fn write_title(w: &mut dyn Write) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", TITLE)?;
    writeln!(w)?;
    Ok(())
}

pub fn write_skip(w: &mut dyn Write, gene: &str) -> Result<()> {
    writeln!(w, "[!] Skipping {}: FASTA file not found.", gene)?;
    Ok(())
}

pub fn write_gene(w: &mut dyn Write, gene: &str, comp: &Composition) -> Result<()> {
    writeln!(w, "{}", gene)?;
    writeln!(w, "    ➤ Length     : {} bp", comp.length)?;
    writeln!(w, "    ➤ GC Content : {}%", comp.gc_percent)?;
    writeln!(w, "    ➤ GC Count   : {}", comp.gc_count)?;
    writeln!(w, "    ➤ AT Count   : {}", comp.at_count)?;
    writeln!(w)?;
    Ok(())
}
