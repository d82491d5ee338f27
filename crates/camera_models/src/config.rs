use std::fs::{read_to_string, write};
use std::path::Path;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::camera::{MouseSensitivity, PitchLimits};

/// Default location of the camera configuration file.
pub const CONFIG_PATH: &str = "config/camera.toml";

// =================================================================================================
//
//                                            Global
//
// =================================================================================================

/// Author-time camera configuration, loaded once at startup and read-only
/// afterwards. Orbit distance is deliberately absent: it is derived from the
/// spawn transforms, never configured.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, Default)]
pub struct CameraConfig {
    #[serde(default)]
    pub sensitivity: MouseSensitivity,
    #[serde(default)]
    pub pitch_limits: PitchLimits,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl CameraConfig {

    /// Loads the configuration file at `path` and deserializes it.
    ///
    /// Missing or malformed files fall back to the built-in defaults with a
    /// warning, so the binary stays runnable without a `config/` folder.
    ///
    /// # Returns
    /// - `CameraConfig`: The deserialized configuration, or defaults.
    pub fn load(path: &str) -> Self {
        let content = match read_to_string(Path::new(path)) {
            Ok(content) => content,
            Err(err) => {
                warn!("Could not read '{path}' ({err}), using default camera config");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                warn!("Failed to parse '{path}' ({err}), using default camera config");
                Self::default()
            }
        }
    }

    /// Saves a specified file with his name.
    fn save<T: Serialize>(data: &T, path: &str) {
        let toml_string = toml::to_string_pretty(data).expect("Failed to serialize to TOML");
        write(Path::new(path), toml_string).expect("Failed to write config file");
    }

    /// Saves all known config files that found in config/ folder.
    /// This func used `CameraConfig::save` for saving.
    pub fn save_all(&self) {
        Self::save(self, CONFIG_PATH);
    }

}

// =================================================================================================
//
//                                            Input
//
// =================================================================================================

/// Serializable input configuration for the orbit camera. Stores a
/// human-readable mouse button name that is converted into the engine
/// `MouseButton` at runtime.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct InputConfig {
    /// Button that must be held to orbit (the activation button).
    pub activation_button: ActivationButton,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            activation_button: ActivationButton::Right,
        }
    }
}

impl InputConfig {
    pub fn get_activation_button(&self) -> MouseButton {
        self.activation_button.to_mouse_button()
    }
}

/// Mouse buttons that can be bound as the orbit activation button.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
}

impl ActivationButton {
    pub fn to_mouse_button(self) -> MouseButton {
        match self {
            ActivationButton::Left => MouseButton::Left,
            ActivationButton::Right => MouseButton::Right,
            ActivationButton::Middle => MouseButton::Middle,
            ActivationButton::Back => MouseButton::Back,
            ActivationButton::Forward => MouseButton::Forward,
        }
    }
}

// =================================================================================================
//
//                                            Window
//
// =================================================================================================

/// Serializable window configuration for the demo binary.
/// Stores a human-readable resolution string (e.g., `"1270x720"`) and a
/// toggle for vertical sync.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,

    /// Window resolution string in the form `"<width>x<height>"`.
    pub window_resolution: String,

    /// Whether to enable vertical sync.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Orbit Camera"),
            window_resolution: String::from("1270x720"),
            vsync: true,
        }
    }
}

impl WindowConfig {

    /// Parses and returns the configured window width in pixels.
    ///
    /// Falls back to `1280` if parsing fails.
    pub fn get_window_width(&self) -> u32 {
        let (width, _) = parse_resolution(self.window_resolution.as_str())
            .unwrap_or_else(|_| (1280, 720));
        width
    }

    /// Parses and returns the configured window height in pixels.
    ///
    /// Falls back to `720` if parsing fails.
    pub fn get_window_height(&self) -> u32 {
        let (_, height) = parse_resolution(self.window_resolution.as_str())
            .unwrap_or_else(|_| (1280, 720));
        height
    }
}

// =================================================================================================
//
//                                         Internal Func
//
// =================================================================================================

/// Parses a resolution string in the form `"<width>x<height>"` (case-insensitive `x`)
/// into a pair of positive pixel dimensions.
///
/// Accepts optional surrounding whitespace and trims each side. Width and
/// height must parse to numbers greater than zero; otherwise an error string
/// is returned.
///
/// # Parameters
/// * `s` - Input string like `"1280x720"` or `"1920X1080"`.
fn parse_resolution(s: &str) -> Result<(u32, u32), String> {
    let (w_str, h_str) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Wrong Format: '{}'. Example z. B. 1280x720", s))?;

    let w: u32 = w_str.trim().parse()
        .map_err(|_| format!("Width is not a number: '{}'", w_str.trim()))?;
    let h: u32 = h_str.trim().parse()
        .map_err(|_| format!("Height is not a number: '{}'", h_str.trim()))?;

    if w == 0 || h == 0 {
        return Err("Width / Height needs a positive number like > 0".into());
    }
    Ok((w, h))
}
