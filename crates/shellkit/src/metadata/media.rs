//! Minimal header readers for the media facts the portable provider reports.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

/// Read the playback duration of a RIFF/WAVE file.
///
/// Returns `Ok(None)` when the file is not a WAVE file or lacks the
/// `fmt ` or `data` chunk.
pub fn wav_duration(path: &Path) -> io::Result<Option<Duration>> {
    let mut file = File::open(path)?;

    let mut riff = [0u8; 12];
    if file.read_exact(&mut riff).is_err() || &riff[0..4] != b"RIFF" || &riff[8..12] != b"WAVE" {
        return Ok(None);
    }

    let mut byte_rate: Option<u32> = None;
    let mut data_len: Option<u32> = None;

    let mut header = [0u8; 8];
    while file.read_exact(&mut header).is_ok() {
        let id = [header[0], header[1], header[2], header[3]];
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        match &id {
            b"fmt " => {
                let mut fmt = [0u8; 16];
                if size < 16 || file.read_exact(&mut fmt).is_err() {
                    return Ok(None);
                }
                byte_rate = Some(u32::from_le_bytes([fmt[8], fmt[9], fmt[10], fmt[11]]));
                skip(&mut file, u64::from(size) - 16)?;
            }
            b"data" => {
                data_len = Some(size);
                skip(&mut file, u64::from(size))?;
            }
            _ => skip(&mut file, u64::from(size))?,
        }

        // chunks are word aligned
        if size % 2 == 1 {
            skip(&mut file, 1)?;
        }

        if byte_rate.is_some() && data_len.is_some() {
            break;
        }
    }

    match (byte_rate, data_len) {
        (Some(rate), Some(len)) if rate > 0 => Ok(Some(Duration::from_secs_f64(
            f64::from(len) / f64::from(rate),
        ))),
        _ => Ok(None),
    }
}

fn skip(file: &mut File, bytes: u64) -> io::Result<()> {
    let offset = i64::try_from(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    file.seek(SeekFrom::Current(offset))?;
    Ok(())
}

/// Pixel dimensions from the first bytes of an image file.
///
/// Recognises whatever `imagesize` does (PNG, JPEG, GIF, BMP, WEBP and
/// more). A JPEG header must reach its start-of-frame marker.
#[must_use]
pub fn image_dimensions(header: &[u8]) -> Option<(u32, u32)> {
    let size = imagesize::blob_size(header).ok()?;
    Some((u32::try_from(size.width).ok()?, u32::try_from(size.height).ok()?))
}
