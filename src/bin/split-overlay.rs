use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

/// Generate the split QWERTY overlay: `img/<page>.png` x4 and `split-qwerty.cfg`.
#[derive(Parser, Debug)]
#[command(name = "split-overlay", version)]
struct Cli {
    /// Directory receiving `img/` and the cfg file.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON settings overriding the built-in geometry and style.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Only write the cfg file.
    #[arg(long)]
    cfg_only: bool,

    /// Render the page images in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Print diagnostics about label font resolution (path + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => split_overlay::Settings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => split_overlay::Settings::default(),
    };
    let set = settings.page_set().context("build page set")?;

    let font = split_overlay::FontSource::probe();
    if cli.dump_fonts {
        dump_font_diagnostics(&font, &settings.style);
    }

    let opts = split_overlay::GenerateOpts {
        out_dir: cli.out_dir.clone(),
        images: !cli.cfg_only,
        parallel: cli.parallel,
        threads: cli.threads,
        ..Default::default()
    };
    let report = split_overlay::generate(&set, &settings.style, &font, &opts)
        .with_context(|| format!("generate overlay into '{}'", cli.out_dir.display()))?;

    for path in &report.images {
        eprintln!("wrote {}", path.display());
    }
    for (name, count) in &report.desc_counts {
        eprintln!("  {name}: {count} descriptors");
    }
    eprintln!("wrote {}", report.cfg_path.display());
    Ok(())
}

fn dump_font_diagnostics(font: &split_overlay::FontSource, style: &split_overlay::Style) {
    let renderer = split_overlay::OverlayRenderer::new(style.clone(), font);
    eprintln!("label font diagnostics:");
    eprintln!("  source: {}", font.describe());
    eprintln!("  stack:  {}", renderer.font_stack());
    if let split_overlay::FontSource::File { bytes, .. } = font {
        eprintln!("  sha256: {}", sha256_hex(bytes));
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
