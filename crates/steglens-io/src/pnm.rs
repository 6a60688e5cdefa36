//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ASCII, P5 binary) and PPM (P3 ASCII, P6 binary) with a
//! maximum value of at most 255; samples are rescaled to `[0, 255]` when
//! the maximum is smaller. Writes binary P5 for grey rasters and P6 for
//! colour rasters (alpha is dropped).

use crate::{IoError, IoResult};
use std::io::{Read, Write};
use steglens_core::{Image, Raster, RgbRaster, color};

/// Read a PNM image (P2/P3/P5/P6) from a reader.
///
/// # Returns
/// [`Image::Gray`] for PGM input, [`Image::Rgb`] for PPM input.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut parser = Parser::new(&bytes);

    let magic = parser.token()?;
    let (channels, ascii) = match magic {
        b"P2" => (1, true),
        b"P3" => (3, true),
        b"P5" => (1, false),
        b"P6" => (3, false),
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM magic: {}",
                String::from_utf8_lossy(magic)
            )));
        }
    };
    let width = parser.number()?;
    let height = parser.number()?;
    let maxval = parser.number()?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} (only 1..=255 supported)",
            maxval
        )));
    }

    let count = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions {}x{} are too large", width, height))
        })?;

    // The header is untrusted: never reserve more than the data can hold
    let samples = if ascii {
        let mut samples = Vec::new();
        for _ in 0..count {
            samples.push(scale_sample(parser.number()?, maxval)?);
        }
        samples
    } else {
        parser
            .binary(count)?
            .iter()
            .map(|&v| scale_sample(u32::from(v), maxval))
            .collect::<IoResult<Vec<u8>>>()?
    };

    if channels == 1 {
        Ok(Image::Gray(Raster::from_data(width, height, samples)?))
    } else {
        let pixels = samples
            .chunks_exact(3)
            .map(|p| color::compose_rgb(p[0], p[1], p[2]))
            .collect();
        Ok(Image::Rgb(RgbRaster::from_data(width, height, pixels)?))
    }
}

/// Write a grey raster as binary PGM (P5).
pub fn write_pnm_gray<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", raster.width(), raster.height())?;
    writer.write_all(raster.data())?;
    Ok(())
}

/// Write a colour raster as binary PPM (P6).
pub fn write_pnm_rgb<W: Write>(rgb: &RgbRaster, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", rgb.width(), rgb.height())?;
    let mut data = Vec::with_capacity(rgb.data().len() * 3);
    for &pixel in rgb.data() {
        let (r, g, b) = color::extract_rgb(pixel);
        data.extend_from_slice(&[r, g, b]);
    }
    writer.write_all(&data)?;
    Ok(())
}

fn scale_sample(value: u32, maxval: u32) -> IoResult<u8> {
    if value > maxval {
        return Err(IoError::InvalidData(format!(
            "PNM sample {} exceeds maxval {}",
            value, maxval
        )));
    }
    Ok(((value * 255 + maxval / 2) / maxval) as u8)
}

/// Header and ASCII-raster tokenizer
struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(data: &'a [u8]) -> Self {
        Parser { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments (which run to end of line).
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<&'a [u8]> {
        self.skip_separators();
        let start = self.pos;
        while let Some(&b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() || b == b'#' {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("unexpected end of PNM data".to_string()));
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "expected a number in PNM data, got {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }

    /// Consume the single whitespace byte after the header, then `len` raw bytes.
    fn binary(&mut self, len: usize) -> IoResult<&'a [u8]> {
        match self.data.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => self.pos += 1,
            _ => {
                return Err(IoError::InvalidData(
                    "missing separator before PNM raster".to_string(),
                ));
            }
        }
        let remaining = self.data.len() - self.pos;
        if len > remaining {
            return Err(IoError::InvalidData(format!(
                "truncated PNM raster: expected {} bytes, got {}",
                len, remaining
            )));
        }
        let end = self.pos + len;
        let raw = &self.data[self.pos..end];
        self.pos = end;
        Ok(raw)
    }
}
