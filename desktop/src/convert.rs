use std::{fmt, fs, io::Write, path::Path, path::PathBuf};

use image::GrayImage;
use log::{debug, info, warn};
use monopack_core::{GrayGrid, OutputFormat, PackedBitmap, Threshold, emit, pack};
use tempfile::NamedTempFile;

use crate::preview;

#[derive(Debug)]
pub enum ConvertError {
    Decode(image::ImageError),
    Pack(monopack_core::Error),
    Preview(image::ImageError),
    Io(PathBuf, std::io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Decode(e) => write!(f, "failed to decode input image: {e}"),
            ConvertError::Pack(e) => write!(f, "{e}"),
            ConvertError::Preview(e) => write!(f, "failed to write preview: {e}"),
            ConvertError::Io(path, e) => write!(f, "failed to write {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Decode(e) | ConvertError::Preview(e) => Some(e),
            ConvertError::Pack(e) => Some(e),
            ConvertError::Io(_, e) => Some(e),
        }
    }
}

impl From<monopack_core::Error> for ConvertError {
    fn from(e: monopack_core::Error) -> Self {
        ConvertError::Pack(e)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything a conversion needs besides the input path.
#[derive(Debug, Clone)]
pub struct Options {
    pub name: String,
    pub threshold: Threshold,
    pub format: OutputFormat,
    pub output: PathBuf,
    pub preview: Option<PathBuf>,
}

impl Options {
    /// Name derived from the input's file stem, output in the working dir.
    pub fn for_input(input: &Path, format: OutputFormat) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let mut name = emit::sanitize_name(&stem);
        // Stems like `int` or `width` are valid syntax but reserved
        if !format.accepts_name(&name) {
            name.push_str("_img");
        }
        Self {
            output: PathBuf::from(&name).with_extension(format.extension()),
            name,
            threshold: Threshold::DEFAULT,
            format,
            preview: None,
        }
    }
}

/// Decode any supported image file into 8-bit luma.
pub fn load_image(path: &Path) -> Result<GrayImage> {
    let image = image::open(path).map_err(ConvertError::Decode)?;
    debug!(
        "Decoded {} ({:?}, {}x{})",
        path.display(),
        image.color(),
        image.width(),
        image.height()
    );
    Ok(image.into_luma8())
}

pub fn pack_image(image: &GrayImage, threshold: Threshold) -> Result<PackedBitmap> {
    let grid = GrayGrid::new(
        image.width() as usize,
        image.height() as usize,
        image.as_raw(),
    )?;
    Ok(pack(&grid, threshold))
}

/// Temporary file next to `target`, so committing it is a same-directory rename.
pub(crate) fn staging_file(target: &Path) -> Result<NamedTempFile> {
    let dir = target
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    tempfile::Builder::new()
        .prefix(".monopack-")
        .tempfile_in(dir)
        .map_err(|e| ConvertError::Io(target.to_path_buf(), e))
}

fn stage_source(target: &Path, source: &str) -> Result<NamedTempFile> {
    let mut file = staging_file(target)?;
    file.write_all(source.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| ConvertError::Io(target.to_path_buf(), e))?;
    Ok(file)
}

fn commit(file: NamedTempFile, target: &Path) -> Result<()> {
    file.persist(target)
        .map(drop)
        .map_err(|e| ConvertError::Io(target.to_path_buf(), e.error))
}

/// Decode `input`, pack it and write the rendered source to `options.output`.
///
/// The source and the optional preview are staged in temporary files and only
/// moved into place once both are complete; on error neither is left behind.
pub fn convert(input: &Path, options: &Options) -> Result<PackedBitmap> {
    let image = load_image(input)?;
    let bitmap = pack_image(&image, options.threshold)?;
    if bitmap.is_empty() {
        warn!("{} has no pixels, emitting an empty bitmap", input.display());
    }
    let source = emit::render(options.format, &options.name, &bitmap)?;

    let staged_source = stage_source(&options.output, &source)?;
    let staged_preview = match &options.preview {
        Some(path) => preview::stage(&bitmap, path)?.map(|file| (file, path)),
        None => None,
    };

    commit(staged_source, &options.output)?;
    if let Some((file, path)) = staged_preview {
        if let Err(e) = commit(file, path) {
            if let Err(remove) = fs::remove_file(&options.output) {
                warn!("Failed to remove {}: {remove}", options.output.display());
            }
            return Err(e);
        }
        info!("Wrote preview {}", path.display());
    }
    info!(
        "Wrote {} ({}x{}, {} bytes, threshold {})",
        options.output.display(),
        bitmap.width(),
        bitmap.height(),
        bitmap.byte_count(),
        options.threshold.value()
    );
    Ok(bitmap)
}
