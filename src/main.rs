use clap::Parser;
use logo_replica::batch::{BatchError, run_batch};
use logo_replica::extract::{IdSource, declared_mime, extract};
use logo_replica::output;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logo-replica")]
#[command(about = "Replicate a new logo into the sizes and formats of legacy image files")]
#[command(long_about = "\
Replicate a new logo into the sizes and formats of legacy image files

Point it at the new artwork and the old files it should replace. Each
reference contributes its filename, pixel dimensions, and format; the source
image is resampled to every reference's exact size (no cropping, no aspect
preservation) and re-encoded in the reference's format. PNG, JPEG, and WebP
are written natively; anything else falls back to PNG.

The result is a single ZIP with one entry per reference, named exactly like
the original file, under a resized_logos/ folder:

  logo-replica --source new-logo.png old/logo.png old/logo-sm.jpg \\
      --out replicas.zip

Unreadable reference files are skipped with a warning; failures of single
items are reported but never abort the batch.")]
#[command(version)]
struct Cli {
    /// The new high-resolution image every replica is generated from
    #[arg(long)]
    source: PathBuf,

    /// Legacy image files whose name, size, and format are replicated
    #[arg(required = true)]
    references: Vec<PathBuf>,

    /// Output archive path
    #[arg(long, default_value = "replicas.zip")]
    out: PathBuf,

    /// Also write the per-item report as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let source_bytes = std::fs::read(&cli.source)?;

    let ids = IdSource::new();
    let mut specs = Vec::new();
    for path in &cli.references {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        match extract(&bytes, &name, declared_mime(path), &ids) {
            Ok(spec) => specs.push(spec),
            Err(err) => eprintln!("skipping {}: {}", path.display(), err),
        }
    }

    let outcome = match run_batch(&source_bytes, &specs, render_progress) {
        Ok(outcome) => outcome,
        Err(BatchError::NoTargets) => {
            eprintln!("no usable reference images; nothing to do");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    println!();

    output::print_report(&outcome.report);

    std::fs::write(&cli.out, &outcome.archive)?;
    println!("archive written to {}", cli.out.display());

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&outcome.report)?;
        std::fs::write(path, json)?;
    }

    Ok(())
}

/// Single-line progress display, overwritten in place.
fn render_progress(percent: u8) {
    print!("\rprocessing... {percent:>3}%");
    let _ = std::io::stdout().flush();
}
