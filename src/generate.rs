use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::emit::cfg::CfgDocument;
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::pages::{PageSet, PageSpec};
use crate::render::cpu::OverlayRenderer;
use crate::render::fonts::FontSource;
use crate::render::style::Style;

/// Options controlling where and how outputs are written.
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Root directory for `img/` and the cfg file.
    pub out_dir: PathBuf,
    /// Cfg file name inside `out_dir`.
    pub cfg_file_name: String,
    /// Render and save the page images. When false only the cfg is written.
    pub images: bool,
    /// Render pages on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            cfg_file_name: "split-qwerty.cfg".to_string(),
            images: true,
            parallel: false,
            threads: None,
        }
    }
}

/// What a generation run wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// PNG files, in overlay index order.
    pub images: Vec<PathBuf>,
    /// The cfg file.
    pub cfg_path: PathBuf,
    /// `(page name, descriptor count)` in overlay index order.
    pub desc_counts: Vec<(String, usize)>,
}

/// Render every page image, then write the cfg.
///
/// Re-running overwrites previous outputs. A failure part way leaves whatever was already
/// written in place.
#[tracing::instrument(skip(set, style, font, opts), fields(out_dir = %opts.out_dir.display()))]
pub fn generate(
    set: &PageSet,
    style: &Style,
    font: &FontSource,
    opts: &GenerateOpts,
) -> OverlayResult<GenerateReport> {
    let mut report = GenerateReport::default();

    if opts.images {
        let img_dir = opts.out_dir.join("img");
        std::fs::create_dir_all(&img_dir).map_err(|e| OverlayError::io(&img_dir, e))?;

        report.images = if opts.parallel {
            let pool = build_thread_pool(opts.threads)?;
            pool.install(|| {
                set.specs()
                    .par_iter()
                    .map(|spec| {
                        let mut renderer = OverlayRenderer::new(style.clone(), font);
                        write_page_image(&mut renderer, spec, &opts.out_dir)
                    })
                    .collect::<OverlayResult<Vec<_>>>()
            })?
        } else {
            let mut renderer = OverlayRenderer::new(style.clone(), font);
            set.specs()
                .iter()
                .map(|spec| write_page_image(&mut renderer, spec, &opts.out_dir))
                .collect::<OverlayResult<Vec<_>>>()?
        };
    }

    let doc = CfgDocument::build(set);
    let cfg_path = opts.out_dir.join(&opts.cfg_file_name);
    std::fs::write(&cfg_path, doc.to_text()).map_err(|e| OverlayError::io(&cfg_path, e))?;
    tracing::info!(path = %cfg_path.display(), "wrote cfg");

    report.cfg_path = cfg_path;
    report.desc_counts = doc
        .pages
        .iter()
        .map(|b| (b.page.name(), b.desc_count()))
        .collect();
    Ok(report)
}

fn write_page_image(
    renderer: &mut OverlayRenderer,
    spec: &PageSpec,
    out_dir: &Path,
) -> OverlayResult<PathBuf> {
    let img = renderer.render_page(spec)?;
    let path = out_dir.join(spec.page.image_rel_path());
    img.save_png(&path)?;
    tracing::info!(path = %path.display(), width = img.width, height = img.height, "wrote image");
    Ok(path)
}

fn build_thread_pool(threads: Option<usize>) -> OverlayResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(OverlayError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| OverlayError::render(format!("failed to build rayon thread pool: {e}")))
}
