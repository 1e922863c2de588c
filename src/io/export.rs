//! Looping GIF export for generated frame sequences

use crate::io::configuration::FRAME_DELAY_MS;
use crate::io::error::{MosaicError, Result};
use crate::mosaic::generator::FrameSequence;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Write a frame sequence as an infinitely looping GIF
///
/// Frames play in sequence order, each shown for [`FRAME_DELAY_MS`].
///
/// # Errors
///
/// Returns an error if:
/// - The sequence has no frames (no file is created)
/// - The parent directory cannot be created
/// - The file cannot be created or the GIF cannot be encoded
pub fn export_gif<P: AsRef<Path>>(frames: &FrameSequence, output_path: P) -> Result<()> {
    export_frames(frames.frames(), output_path, FRAME_DELAY_MS)
}

/// Write arbitrary RGBA frames as an infinitely looping GIF
///
/// The first frame is the base image and the rest are appended in order.
///
/// # Errors
///
/// Returns an error if:
/// - `frames` is empty (no file is created)
/// - The parent directory cannot be created
/// - The file cannot be created or the GIF cannot be encoded
pub fn export_frames<P: AsRef<Path>>(
    frames: &[RgbaImage],
    output_path: P,
    frame_delay_ms: u32,
) -> Result<()> {
    let output_path = output_path.as_ref();

    if frames.is_empty() {
        return Err(MosaicError::EmptySequence {
            path: output_path.to_path_buf(),
        });
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| MosaicError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let export_error = |e| MosaicError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    };

    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
    encoder
        .encode_frames(frames.iter().map(|frame| {
            Frame::from_parts(
                frame.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(frame_delay_ms, 1),
            )
        }))
        .map_err(export_error)?;

    tracing::info!(
        path = %output_path.display(),
        frames = frames.len(),
        "animation exported"
    );
    Ok(())
}
