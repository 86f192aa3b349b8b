//! Tests for edit script decoding and replay

#[cfg(test)]
mod tests {
    use pixelgrid::io::script::EditScript;
    use pixelgrid::{Color, EditIntent, EditorError, SessionConfig};
    use std::fs;
    use tempfile::TempDir;

    const RED: Color = Color::rgb(0xff, 0, 0);

    fn decode(text: &str) -> pixelgrid::Result<EditScript> {
        serde_json::from_str(text).map_err(|e| pixelgrid::io::error::invalid_document(&e))
    }

    // Tests every field falls back to the editor defaults
    // Verified by requiring the intents field
    #[test]
    fn test_defaults() -> pixelgrid::Result<()> {
        let script = decode("{}")?;

        assert_eq!(script, EditScript::default());
        assert_eq!(script.width, 10);
        assert_eq!(script.height, 10);
        assert_eq!(script.fill, Color::WHITE);
        assert!(script.intents.is_empty());
        Ok(())
    }

    // Tests the session settings carry the script's grid and the history limit
    // Verified by ignoring the script fill
    #[test]
    fn test_session_config() -> pixelgrid::Result<()> {
        let script = decode(r#"{"width": 4, "height": 5, "fill": "transparent"}"#)?;
        let config = script.session_config(Some(8));

        assert_eq!(config.width, 4);
        assert_eq!(config.height, 5);
        assert_eq!(config.fill, Color::TRANSPARENT);
        assert_eq!(config.history_limit, Some(8));
        assert_eq!(config.draw_color, SessionConfig::default().draw_color);
        Ok(())
    }

    // Tests replay applies intents in order and reports progress
    // Verified by replaying intents in reverse
    #[test]
    fn test_replay() -> pixelgrid::Result<()> {
        let script = EditScript {
            width: 3,
            height: 3,
            fill: Color::WHITE,
            intents: vec![
                EditIntent::Paint {
                    index: 4,
                    color: Some(RED),
                },
                EditIntent::Fill {
                    index: 0,
                    color: Some(Color::BLACK),
                },
                EditIntent::Undo,
                EditIntent::StrokeBegin { index: 0 },
                EditIntent::StrokeMove { index: 1 },
            ],
        };

        let mut steps = Vec::new();
        let session = script.replay_with(&script.session_config(None), |applied| {
            steps.push(applied);
        })?;

        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        assert!(!session.is_stroking());
        assert_eq!(session.grid().get_index(4)?, RED);
        assert_eq!(session.grid().count(Color::BLACK), 2);
        assert_eq!(session.history().undo_len(), 2);
        Ok(())
    }

    // Tests a failing intent is reported with its position
    // Verified by counting steps from one
    #[test]
    fn test_replay_failure_step() -> pixelgrid::Result<()> {
        let script = decode(
            r#"{"width": 2, "height": 2, "intents": [
                {"op": "paint", "index": 0},
                {"op": "resize", "width": 2, "height": 33}
            ]}"#,
        )?;

        let result = script.replay(&script.session_config(None));
        assert!(matches!(
            result,
            Err(EditorError::Replay { step: 1, ref source })
                if matches!(**source, EditorError::InvalidDimension { .. })
        ));
        Ok(())
    }

    // Tests an invalid initial grid fails before any intent runs
    // Verified by clamping the script dimensions
    #[test]
    fn test_replay_invalid_grid() -> pixelgrid::Result<()> {
        let script = decode(r#"{"width": 1, "height": 4}"#)?;
        assert!(matches!(
            script.replay(&script.session_config(None)),
            Err(EditorError::InvalidDimension { .. })
        ));
        Ok(())
    }

    // Tests loading scripts from disk
    // Verified by swallowing decode errors
    #[test]
    fn test_from_path() -> pixelgrid::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cat.json");
        fs::write(&path, r#"{"intents": [{"op": "redo"}]}"#)?;
        assert_eq!(EditScript::from_path(&path)?.intents, vec![EditIntent::Redo]);

        fs::write(&path, r#"{"intents": [{"op": "teleport"}]}"#)?;
        assert!(matches!(
            EditScript::from_path(&path),
            Err(EditorError::Script { .. })
        ));

        assert!(matches!(
            EditScript::from_path(&temp_dir.path().join("missing.json")),
            Err(EditorError::FileSystem { .. })
        ));
        Ok(())
    }

    // Tests a misspelled script key fails to load
    // Verified by removing deny_unknown_fields
    #[test]
    fn test_from_path_rejects_unknown_fields() -> pixelgrid::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("typo.json");

        fs::write(&path, r#"{"widht": 4, "intents": []}"#)?;
        assert!(matches!(
            EditScript::from_path(&path),
            Err(EditorError::Script { .. })
        ));

        fs::write(
            &path,
            r##"{"intents": [{"op": "fill", "index": 0, "colour": "#ff0000"}]}"##,
        )?;
        assert!(matches!(
            EditScript::from_path(&path),
            Err(EditorError::Script { .. })
        ));
        Ok(())
    }
}
