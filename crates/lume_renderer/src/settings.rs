//! Render settings and the frame-limited pipeline mode.

use serde::{Deserialize, Serialize};

/// Toggles that drive a render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Accumulate frames into a running average instead of restarting
    /// every frame
    pub accumulate: bool,

    /// Skip render calls entirely
    pub pause: bool,

    /// Jitter primary ray directions
    pub antialiasing: bool,

    /// Test occlusion toward each directional light
    pub cast_shadows: bool,

    /// Number of path segments traced per pixel; zero renders black
    pub bounces: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accumulate: false,
            pause: false,
            antialiasing: false,
            cast_shadows: true,
            bounces: 2,
        }
    }
}

/// A bounded render job: its own settings plus a frame limit.
///
/// Once the renderer's frame index reaches the limit, control reverts to
/// the editor settings, which are paused, and accumulation restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPipeline {
    pub settings: Settings,
    pub frame_limit: u32,
}

impl RenderPipeline {
    /// Create a new pipeline.
    pub fn new(settings: Settings, frame_limit: u32) -> Self {
        Self {
            settings,
            frame_limit,
        }
    }
}

/// Which settings drive the next render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// The renderer's persistent editor settings are active.
    Editor,
    /// A pipeline's settings are active until its frame limit is reached.
    Pipeline {
        settings: Settings,
        frame_limit: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.accumulate);
        assert!(!settings.pause);
        assert!(!settings.antialiasing);
        assert!(settings.cast_shadows);
        assert_eq!(settings.bounces, 2);
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = Settings {
            accumulate: true,
            bounces: 8,
            ..Default::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
