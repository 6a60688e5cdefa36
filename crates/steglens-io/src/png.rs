//! PNG image format support
//!
//! Decoding expands palettes and low bit depths to 8 bits per sample and
//! keeps the high byte of 16-bit samples. Grey images decode to
//! [`Image::Gray`]; grey+alpha, RGB and RGBA decode to [`Image::Rgb`].

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use steglens_core::{Image, Raster, RasterMut, RgbRaster, color};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    // Byte step between consecutive samples; 16-bit samples keep the high byte
    let step = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };

    match color_type {
        ColorType::Grayscale => {
            let mut raster = RasterMut::new(width, height)?;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                let row = raster.row_mut(y);
                for (x, dst) in row.iter_mut().enumerate() {
                    *dst = data[row_start + x * step];
                }
            }
            Ok(Image::Gray(raster.into()))
        }
        ColorType::GrayscaleAlpha | ColorType::Rgb | ColorType::Rgba => {
            let channels = color_type.samples();
            let mut pixels = Vec::with_capacity(width as usize * height as usize);
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width as usize {
                    let idx = row_start + x * channels * step;
                    let sample = |c: usize| data[idx + c * step];
                    let pixel = match color_type {
                        ColorType::GrayscaleAlpha => {
                            let g = sample(0);
                            color::compose_rgba(g, g, g, sample(1))
                        }
                        ColorType::Rgb => color::compose_rgb(sample(0), sample(1), sample(2)),
                        _ => color::compose_rgba(sample(0), sample(1), sample(2), sample(3)),
                    };
                    pixels.push(pixel);
                }
            }
            Ok(Image::Rgb(RgbRaster::from_data(width, height, pixels)?))
        }
        ColorType::Indexed => Err(IoError::UnsupportedFormat(format!(
            "unexpanded PNG palette: {:?} {:?}",
            color_type, bit_depth
        ))),
    }
}

/// Write a grayscale raster as an 8-bit PNG
pub fn write_png_gray<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

/// Write a colour raster as an 8-bit RGB PNG.
///
/// An alpha channel is written only when some pixel is not fully opaque.
pub fn write_png_rgb<W: Write>(rgb: &RgbRaster, writer: W) -> IoResult<()> {
    let has_alpha = rgb.data().iter().any(|&p| color::alpha(p) != 255);
    let (color_type, channels) = if has_alpha {
        (ColorType::Rgba, 4)
    } else {
        (ColorType::Rgb, 3)
    };

    let mut encoder = Encoder::new(writer, rgb.width(), rgb.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(rgb.data().len() * channels);
    for &pixel in rgb.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b]);
        if has_alpha {
            data.push(a);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
