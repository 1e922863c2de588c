//! Tests for sprite set loading and validation

#[cfg(test)]
mod tests {
    use crate::{test_sprite, test_sprites, write_sprite_dir};
    use crewtile::mosaic::sprites::{SpriteSet, frame_path};
    use crewtile::{ErrorKind, MosaicError};
    use image::RgbaImage;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests a full set of equal frames is accepted
    // Verified by taking the size from the last frame
    #[test]
    fn test_from_frames_valid() {
        let set = SpriteSet::from_frames(test_sprites(6, 4)).unwrap();

        assert_eq!(set.len(), 6);
        assert!(!set.is_empty());
        assert_eq!((set.width(), set.height()), (6, 4));
        assert_eq!(set.frames().len(), 6);
        assert_eq!(set.get(5), Some(&test_sprite(5, 6, 4)));
        assert_eq!(set.get(6), None);
    }

    // Tests the frame count must be exactly six
    // Verified by accepting any non-empty set
    #[test]
    fn test_from_frames_wrong_count() {
        let mut frames = test_sprites(4, 4);
        frames.pop();

        let error = SpriteSet::from_frames(frames).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Asset);
        assert!(error.to_string().contains("expected 6 frames, found 5"));

        let empty = SpriteSet::from_frames(Vec::new()).unwrap_err();
        assert_eq!(empty.kind(), ErrorKind::Asset);
    }

    // Tests a frame with a different size is rejected
    // Verified by skipping the per-frame size comparison
    #[test]
    fn test_from_frames_mismatched_size() {
        let mut frames = test_sprites(4, 4);
        frames[3] = test_sprite(3, 5, 4);

        let error = SpriteSet::from_frames(frames).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Asset);
        assert!(error.to_string().contains("frame 3 is 5x4, expected 4x4"));
    }

    // Tests zero-sized frames are rejected
    // Verified by removing the zero-size check
    #[test]
    fn test_from_frames_zero_size() {
        let frames = vec![RgbaImage::new(0, 4); 6];

        let error = SpriteSet::from_frames(frames).unwrap_err();
        assert!(matches!(error, MosaicError::InvalidSpriteSet { .. }));
    }

    // Tests frame file naming
    // Verified by changing the file extension
    #[test]
    fn test_frame_path() {
        assert_eq!(
            frame_path(Path::new("sprites"), 3),
            Path::new("sprites").join("3.png")
        );
    }

    // Tests loading six PNG frames from disk
    // Verified by loading frames in reverse order
    #[test]
    fn test_load_dir() {
        let temp_dir = TempDir::new().unwrap();
        write_sprite_dir(temp_dir.path(), 6, 4);

        let set = SpriteSet::load_dir(temp_dir.path()).unwrap();

        assert_eq!((set.width(), set.height()), (6, 4));
        assert_eq!(set.frames(), test_sprites(6, 4).as_slice());
    }

    // Tests a missing frame aborts loading with its path
    // Verified by skipping unreadable frames
    #[test]
    fn test_load_dir_missing_frame() {
        let temp_dir = TempDir::new().unwrap();
        write_sprite_dir(temp_dir.path(), 4, 4);
        fs::remove_file(temp_dir.path().join("4.png")).unwrap();

        let error = SpriteSet::load_dir(temp_dir.path()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Asset);
        match error {
            MosaicError::AssetLoad { path, .. } => {
                assert_eq!(path, temp_dir.path().join("4.png"));
            }
            other => unreachable!("Expected AssetLoad, got {other:?}"),
        }
    }

    // Tests a corrupt frame aborts loading
    // Verified by replacing decode failures with blank frames
    #[test]
    fn test_load_dir_corrupt_frame() {
        let temp_dir = TempDir::new().unwrap();
        write_sprite_dir(temp_dir.path(), 4, 4);
        fs::write(temp_dir.path().join("0.png"), "not a png").unwrap();

        let error = SpriteSet::load_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(error, MosaicError::AssetLoad { .. }));
    }

    // Tests a frame of the wrong size on disk fails validation
    // Verified by validating only the in-memory constructor
    #[test]
    fn test_load_dir_mismatched_frame() {
        let temp_dir = TempDir::new().unwrap();
        write_sprite_dir(temp_dir.path(), 4, 4);
        test_sprite(2, 8, 4)
            .save(temp_dir.path().join("2.png"))
            .unwrap();

        let error = SpriteSet::load_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(error, MosaicError::InvalidSpriteSet { .. }));
    }
}
