//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::Scene;
use crate::rasterizer::RasterError;

/// Error type for scene loading
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid scene: {0}")]
    Invalid(#[from] RasterError),
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), SceneError> {
    fs::write(path, scene_to_string(scene)?)?;
    Ok(())
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<Scene, SceneError> {
    let scene: Scene = ron::from_str(s)?;
    scene.validate()?;
    Ok(scene)
}

/// Pretty-printed RON for a scene
pub fn scene_to_string(scene: &Scene) -> Result<String, SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    Ok(ron::ser::to_string_pretty(scene, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{Color, Point, Rectangle, Shape, Triangle};

    const SAMPLE: &str = r#"(
        width: 10,
        height: 8,
        output: "sample",
        shapes: [
            Rectangle((ll: (x: 1, y: 1), ur: (x: 3, y: 3), color: red)),
            Circle((center: (x: 5, y: 4), radius: 2, color: blue)),
            Triangle((pt0: (x: 0, y: 0), pt1: (x: 4, y: 0), pt2: (x: 0, y: 4), color: yellow)),
        ],
    )"#;

    #[test]
    fn test_parse_sample() {
        let scene = load_scene_from_str(SAMPLE).unwrap();
        assert_eq!((scene.width, scene.height), (10, 8));
        assert_eq!(scene.output, "sample");
        assert_eq!(scene.shapes.len(), 3);
        assert_eq!(
            scene.shapes[0],
            Shape::Rectangle(Rectangle::new(Point::new(1, 1), Point::new(3, 3), Color::Red))
        );
        assert_eq!(scene.shapes[2].color(), Color::Yellow);
    }

    #[test]
    fn test_defaults() {
        let scene = load_scene_from_str("()").unwrap();
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let src = "(shapes: [Rectangle((ll: (x: 0, y: 0), ur: (x: 1, y: 1), color: magenta))])";
        assert!(matches!(load_scene_from_str(src), Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        for src in [
            "(width: 4294967296, height: 4294967296)",
            "(width: 100000, height: 100000)",
        ] {
            assert!(matches!(
                load_scene_from_str(src),
                Err(SceneError::Invalid(RasterError::ScreenTooLarge { .. }))
            ));
        }
    }

    #[test]
    fn test_pretty_output_reloads() {
        let scene = Scene::new(4, 4).with_shape(Triangle::new(
            Point::new(0, 0),
            Point::new(3, 1),
            Point::new(1, 3),
            Color::Brown,
        ));
        let text = scene_to_string(&scene).unwrap();
        assert!(text.contains("brown"));
        assert_eq!(load_scene_from_str(&text).unwrap(), scene);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("shape-raster-missing-scene.ron");
        assert!(matches!(load_scene(&path), Err(SceneError::Io(_))));
    }
}
