use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crop_selection::{ArrowKey, Bounds, Config, Handle, Point, Ratio};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{GraphZoom, HostOptions, PointerEvent, Target};

/// A recorded cropper session: the image, the configuration and the input to replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Size of the image being cropped.
    pub image: Bounds,
    /// Preview and page placement.
    #[serde(default)]
    pub host: HostOptions,
    /// Selection constraints.
    #[serde(default)]
    pub cropper: Config,
    /// Graph window to zoom on each completed selection.
    pub zoom: Option<GraphZoom>,
    /// Input to replay, in order.
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One input event, pointer positions are page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Pointer pressed on `target`.
    Down {
        /// The element pressed.
        target: Target,
        /// Page x.
        x: i32,
        /// Page y.
        y: i32,
    },
    /// Pointer moved.
    Move {
        /// Page x.
        x: i32,
        /// Page y.
        y: i32,
        /// Shift is held.
        #[serde(default)]
        shift: bool,
    },
    /// Pointer released.
    Up,
    /// Arrow key pressed.
    Key {
        /// The key.
        key: ArrowKey,
        /// Shift is held.
        #[serde(default)]
        shift: bool,
    },
    /// The page scrolled, the value is the new total scroll.
    Scroll {
        /// Horizontal scroll.
        x: i32,
        /// Vertical scroll.
        y: i32,
    },
    /// The cropper was attached to the image.
    Attach,
    /// The cropper was removed.
    Detach,
}

impl ScriptEvent {
    /// The pointer event this corresponds to, if any.
    pub fn pointer(&self) -> Option<PointerEvent> {
        match *self {
            Self::Down { target, x, y } => Some(PointerEvent::Down {
                target,
                position: Point::new(x, y),
            }),
            Self::Move { x, y, shift } => Some(PointerEvent::Move {
                position: Point::new(x, y),
                shift,
            }),
            Self::Up => Some(PointerEvent::Up),
            _ => None,
        }
    }
}

/// Errors from loading a script.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("Failed to open script file:\n{0}")]
    OpenFile(#[source] io::Error),

    /// The file could not be read.
    #[error("Failed to read script file:\n{0}")]
    ReadFile(#[source] io::Error),

    /// The example script could not be written.
    #[error("Failed to save script file:\n{0}")]
    SaveFile(#[from] SaveError),

    /// The file is not a valid script.
    #[error("Failed to deserialize script:\n{0}")]
    Deserialize(#[from] toml::de::Error),

    /// The image has no pixels.
    #[error("The image must be at least 1x1, got {width}x{height}")]
    EmptyImage {
        /// Width given.
        width: i32,
        /// Height given.
        height: i32,
    },

    /// The zoom window is empty or has no plot area.
    #[error("The zoom window must end after it starts and have a usable width")]
    InvalidZoom,
}

/// Errors from saving a script.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The script could not be serialized.
    #[error("Failed to serialize script:\n{0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file could not be written.
    #[error("Failed to write file:\n{0}")]
    Write(#[from] io::Error),
}

impl Script {
    /// Loads the script at `path`, writing the example script there first if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, LoadError> {
        let file = fs::File::open(path);

        if file
            .as_ref()
            .is_err_and(|e| e.kind() == io::ErrorKind::NotFound)
        {
            info!("No script at {}, writing the example", path.display());
            let script = Self::default();
            script.save(path)?;

            return Ok(script);
        }

        let mut file = file.map_err(LoadError::OpenFile)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(LoadError::ReadFile)?;

        Self::parse(&contents)
    }

    /// Parses and validates a script.
    pub fn parse(contents: &str) -> Result<Self, LoadError> {
        let script: Self = toml::from_str(contents)?;
        script.validate()?;

        Ok(script)
    }

    /// Writes the script to `path` as TOML.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let toml_string = toml::to_string_pretty(self)?;

        fs::write(path, toml_string.as_bytes())?;
        Ok(())
    }

    fn validate(&self) -> Result<(), LoadError> {
        if self.image.width <= 0 || self.image.height <= 0 {
            return Err(LoadError::EmptyImage {
                width: self.image.width,
                height: self.image.height,
            });
        }

        if let Some(zoom) = self.zoom {
            if zoom.end <= zoom.start || zoom.usable_width <= 0 {
                return Err(LoadError::InvalidZoom);
            }
        }

        Ok(())
    }
}

impl Default for Script {
    /// A 4:3 crop drawn, nudged and resized on an 800x600 image.
    fn default() -> Self {
        Self {
            image: Bounds::new(800, 600),
            host: HostOptions::default(),
            cropper: Config {
                ratio: Ratio::new(4, 3),
                min_width: 40,
                ..Config::default()
            },
            zoom: None,
            events: vec![
                ScriptEvent::Attach,
                ScriptEvent::Down {
                    target: Target::Area,
                    x: 100,
                    y: 100,
                },
                ScriptEvent::Move {
                    x: 300,
                    y: 180,
                    shift: false,
                },
                ScriptEvent::Up,
                ScriptEvent::Key {
                    key: ArrowKey::Right,
                    shift: true,
                },
                ScriptEvent::Down {
                    target: Target::Handle(Handle::SE),
                    x: 310,
                    y: 250,
                },
                ScriptEvent::Move {
                    x: 500,
                    y: 300,
                    shift: false,
                },
                ScriptEvent::Up,
                ScriptEvent::Detach,
            ],
        }
    }
}
