//! Tests for art document encoding and storage

#[cfg(test)]
mod tests {
    use pixelgrid::io::document::ArtDocument;
    use pixelgrid::{Color, EditorError, Grid};
    use std::fs;
    use tempfile::TempDir;

    const RED: Color = Color::rgb(0xff, 0, 0);

    // Tests pixels are flattened row-major
    // Verified by flattening column-major
    #[test]
    fn test_from_grid_row_major() -> pixelgrid::Result<()> {
        let grid = Grid::new(3, 2, Color::WHITE)?.set(0, 2, RED)?;
        let document = ArtDocument::from_grid(&grid);

        assert_eq!(document.width, 3);
        assert_eq!(document.height, 2);
        assert_eq!(document.pixels.len(), 6);
        assert_eq!(document.pixels[2], RED);
        assert_eq!(ArtDocument::from(&grid), document);
        assert_eq!(document.to_grid()?, grid);
        Ok(())
    }

    // Tests the JSON shape seen by storage clients
    // Verified by renaming the pixels field
    #[test]
    fn test_json_shape() -> pixelgrid::Result<()> {
        let grid = Grid::new(2, 2, Color::TRANSPARENT)?.set_index(3, RED)?;
        let json = serde_json::to_value(ArtDocument::from_grid(&grid))
            .map_err(|e| pixelgrid::io::error::invalid_document(&e))?;

        assert_eq!(json["width"], 2);
        assert_eq!(json["height"], 2);
        assert_eq!(json["pixels"][0], "transparent");
        assert_eq!(json["pixels"][3], "#ff0000");
        Ok(())
    }

    // Tests inconsistent documents are rejected
    // Verified by padding short pixel lists
    #[test]
    fn test_to_grid_rejects_mismatch() {
        let document = ArtDocument {
            width: 2,
            height: 2,
            pixels: vec![RED; 3],
        };
        assert!(matches!(
            document.to_grid(),
            Err(EditorError::InvalidDocument { .. })
        ));

        let document = ArtDocument {
            width: 40,
            height: 1,
            pixels: vec![RED; 40],
        };
        assert!(matches!(
            document.to_grid(),
            Err(EditorError::InvalidDimension { .. })
        ));
    }

    // Tests documents survive a trip through the filesystem
    // Verified by writing without creating the parent directory
    #[test]
    fn test_write_and_read() -> pixelgrid::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested/art.json");
        let grid = Grid::new(4, 3, Color::WHITE)?.set(2, 3, RED)?;
        let document = ArtDocument::from_grid(&grid);

        document.write_to_path(&path, false)?;
        assert!(!fs::read_to_string(&path)?.contains('\n'));
        assert_eq!(ArtDocument::read_from_path(&path)?, document);

        document.write_to_path(&path, true)?;
        assert!(fs::read_to_string(&path)?.contains('\n'));
        assert_eq!(ArtDocument::read_from_path(&path)?.to_grid()?, grid);
        Ok(())
    }

    // Tests reading reports missing files, bad JSON and bad documents
    // Verified by accepting documents with the wrong pixel count
    #[test]
    fn test_read_errors() -> pixelgrid::Result<()> {
        let temp_dir = TempDir::new()?;

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            ArtDocument::read_from_path(&missing),
            Err(EditorError::FileSystem { .. })
        ));

        let garbage = temp_dir.path().join("garbage.json");
        fs::write(&garbage, "{ not json")?;
        assert!(matches!(
            ArtDocument::read_from_path(&garbage),
            Err(EditorError::Script { .. })
        ));

        let short = temp_dir.path().join("short.json");
        fs::write(&short, r##"{"width": 2, "height": 2, "pixels": ["#000000"]}"##)?;
        assert!(matches!(
            ArtDocument::read_from_path(&short),
            Err(EditorError::InvalidDocument { .. })
        ));
        Ok(())
    }
}
