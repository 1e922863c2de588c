//! Tests for looping GIF export

#[cfg(test)]
mod tests {
    use crewtile::io::export::{export_frames, export_gif};
    use crewtile::mosaic::generator::FrameSequence;
    use crewtile::mosaic::layout::MosaicLayout;
    use crewtile::{ErrorKind, MosaicError};
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgba, RgbaImage};
    use std::fs;
    use std::io::BufReader;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sequence(frame_count: u8) -> FrameSequence {
        let layout = MosaicLayout::new((2, 1), (4, 4), 2).unwrap();
        let mut sequence = FrameSequence::new(layout);
        for index in 0..frame_count {
            let mut frame = RgbaImage::new(8, 4);
            frame.put_pixel(u32::from(index), 0, Rgba([200, 10, 50, 255]));
            sequence.push(frame);
        }
        sequence
    }

    fn decode(path: &Path) -> Vec<image::Frame> {
        let file = fs::File::open(path).unwrap();
        let decoder = GifDecoder::new(BufReader::new(file)).unwrap();
        decoder.into_frames().collect_frames().unwrap()
    }

    // Tests every frame is written in order with a 50ms delay
    // Verified by writing only the first frame
    #[test]
    fn test_export_writes_all_frames() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("mosaic.gif");

        export_gif(&sequence(6), &output).unwrap();

        let frames = decode(&output);
        assert_eq!(frames.len(), 6);
        for frame in &frames {
            assert_eq!(frame.buffer().dimensions(), (8, 4));
            assert_eq!(Duration::from(frame.delay()), Duration::from_millis(50));
        }
    }

    // Tests the animation is flagged to loop forever
    // Verified by leaving the encoder at its default repeat setting
    #[test]
    fn test_export_loops_forever() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("mosaic.gif");

        export_gif(&sequence(2), &output).unwrap();

        let bytes = fs::read(&output).unwrap();
        let marker = b"NETSCAPE2.0";
        let position = bytes
            .windows(marker.len())
            .position(|window| window == marker)
            .expect("looping extension present");
        let loop_count = &bytes[position + marker.len() + 2..position + marker.len() + 4];
        assert_eq!(loop_count, &[0, 0]);
    }

    // Tests an empty sequence fails without creating a file
    // Verified by removing the empty check
    #[test]
    fn test_export_empty_sequence() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("empty.gif");

        let error = export_gif(&sequence(0), &output).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Export);
        assert!(matches!(error, MosaicError::EmptySequence { .. }));
        assert!(!output.exists());
    }

    // Tests missing parent directories are created
    // Verified by skipping directory creation
    #[test]
    fn test_export_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("deeper").join("out.gif");

        export_gif(&sequence(1), &output).unwrap();

        assert!(output.exists());
    }

    // Tests an unwritable target is an export error
    // Verified by ignoring directory creation failures
    #[test]
    fn test_export_unwritable_target() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let error = export_gif(&sequence(1), blocker.join("out.gif")).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Export);
        assert!(matches!(error, MosaicError::FileSystem { .. }));
    }

    // Tests raw frames honour a custom delay
    // Verified by always using the default delay
    #[test]
    fn test_export_frames_custom_delay() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("slow.gif");
        let frames = sequence(3).into_frames();

        export_frames(&frames, &output, 200).unwrap();

        let decoded = decode(&output);
        assert_eq!(decoded.len(), 3);
        assert_eq!(Duration::from(decoded[0].delay()), Duration::from_millis(200));
    }
}
