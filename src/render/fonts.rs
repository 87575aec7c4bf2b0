use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Font files tried in order before falling back to the system sans-serif.
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFNSMono.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Where label glyphs come from.
#[derive(Clone, Debug)]
pub enum FontSource {
    /// A font file found on disk.
    File {
        /// Path the bytes were read from.
        path: PathBuf,
        /// Raw font file contents.
        bytes: Arc<Vec<u8>>,
    },
    /// Whatever the platform resolves `sans-serif` to. Labels may come out empty when the
    /// platform has no fonts at all.
    SystemDefault,
}

impl FontSource {
    /// Probe [`FONT_CANDIDATES`].
    pub fn probe() -> Self {
        Self::probe_paths(FONT_CANDIDATES.iter().map(Path::new))
    }

    /// First readable, non-empty file among `paths`, else [`FontSource::SystemDefault`]. Never
    /// fails.
    pub fn probe_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            match std::fs::read(path) {
                Ok(bytes) if !bytes.is_empty() => {
                    tracing::debug!(path = %path.display(), "using font file");
                    return Self::File {
                        path: path.to_path_buf(),
                        bytes: Arc::new(bytes),
                    };
                }
                Ok(_) => tracing::warn!(path = %path.display(), "font file is empty"),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "font file unreadable"),
            }
        }
        tracing::warn!("no font file found, falling back to system sans-serif");
        Self::SystemDefault
    }

    /// Short human description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::SystemDefault => "system sans-serif".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
