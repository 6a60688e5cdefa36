//! steglens-io - Image file I/O
//!
//! Decodes PNG and PNM files into [`Image`] values and encodes grey or
//! colour rasters back out. The format of an input is detected from its
//! magic bytes; the output format is chosen by the caller.
//!
//! # Example
//!
//! ```no_run
//! use steglens_io::{ImageFormat, read_gray, write_image};
//!
//! let raster = read_gray("input.png").unwrap();
//! write_image(&raster, "copy.pgm", ImageFormat::Pnm).unwrap();
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use steglens_core::{Image, Raster, RgbRaster};

/// Read an image from a file path.
///
/// The format is detected from the file's magic bytes.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    debug!("read_image: {} ({} bytes)", path.display(), data.len());
    read_image_mem(&data)
}

/// Decode an image held in memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    let image = decode(format, data)?;
    debug!(
        "decoded {:?}: {}x{} with {} channel(s)",
        format,
        image.width(),
        image.height(),
        image.channels()
    );
    Ok(image)
}

/// Read an image and reduce it to a grey raster.
///
/// Colour pixels become `round(0.299 R + 0.587 G + 0.114 B)` (ties to
/// even); grey+alpha keeps its grey channel; grey input passes through.
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let image = read_image(path)?;
    Ok(steglens_color::image_to_gray(&image)?)
}

/// Write a grey raster to a file.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!(
        "write_image: {} {}x{} as {:?}",
        path.display(),
        raster.width(),
        raster.height(),
        format
    );
    let mut writer = BufWriter::new(File::create(path)?);
    encode_gray(raster, format, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a colour raster to a file.
pub fn write_rgb_image<P: AsRef<Path>>(
    rgb: &RgbRaster,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    debug!(
        "write_rgb_image: {} {}x{} as {:?}",
        path.display(),
        rgb.width(),
        rgb.height(),
        format
    );
    let mut writer = BufWriter::new(File::create(path)?);
    encode_rgb(rgb, format, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode either image kind into an in-memory buffer.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match image {
        Image::Gray(raster) => encode_gray(raster, format, &mut buffer)?,
        Image::Rgb(rgb) => encode_rgb(rgb, format, &mut buffer)?,
    }
    Ok(buffer)
}

fn decode(format: ImageFormat, data: &[u8]) -> IoResult<Image> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

fn encode_gray<W: Write>(raster: &Raster, format: ImageFormat, writer: W) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png_gray(raster, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm_gray(raster, writer),
        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

fn encode_rgb<W: Write>(rgb: &RgbRaster, format: ImageFormat, writer: W) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png_rgb(rgb, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm_rgb(rgb, writer),
        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

#[allow(dead_code)]
fn disabled(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} support is not enabled", format))
}
