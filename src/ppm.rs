//! Reading and writing of raster buffers as image files
//!
//! Test and demo plumbing: dump a filled buffer to disk, load one back,
//! compare two files pixel by pixel.

use std::path::Path;

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Read an image file into a flat RGBA buffer
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize), FileError> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write a flat RGBA buffer to an image file; format follows the extension
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), FileError> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::RGBA(8))?;
    Ok(())
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, FileError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    if d1.len() != d2.len() {
        debug!("files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("{} [{},{},{}]: {} {}", i, (i/4)%w1, (i/4)/w1, i%4, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
