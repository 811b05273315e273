//! Session configuration - grid size and gravity timing

use thiserror::Error;

use crate::shapes::MAX_SHAPE_SIDE;
use crate::types::{GRID_HEIGHT, GRID_WIDTH, TICKS_PER_DROP};

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least {min} columns, got {got}")]
    WidthTooSmall { min: u32, got: u32 },
    #[error("grid width must be at most {max} columns, got {got}")]
    WidthTooLarge { max: u32, got: u32 },
    #[error("grid height must be at least {min} rows, got {got}")]
    HeightTooSmall { min: u32, got: u32 },
    #[error("grid height must be at most {max} rows, got {got}")]
    HeightTooLarge { max: u32, got: u32 },
    #[error("ticks per drop must be positive")]
    ZeroDropInterval,
    #[error("block size must be positive")]
    ZeroBlockSize,
}

/// Largest accepted grid side
pub const MAX_GRID_SIDE: u32 = u8::MAX as u32;

/// Values fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Ticks between forced downward steps
    pub ticks_per_drop: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            ticks_per_drop: TICKS_PER_DROP,
        }
    }
}

impl GameConfig {
    /// Derive a configuration from a pixel canvas and a frame rate
    ///
    /// Grid size is the canvas divided by the block size; a forced drop
    /// happens twice per second.
    ///
    /// ```
    /// use blockfall_core::GameConfig;
    ///
    /// let cfg = GameConfig::from_canvas(640, 480, 30, 60).unwrap();
    /// assert_eq!(cfg, GameConfig::default());
    /// ```
    pub fn from_canvas(
        width_px: u32,
        height_px: u32,
        block_px: u32,
        fps: u32,
    ) -> Result<Self, ConfigError> {
        if block_px == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Self::from_dimensions(width_px / block_px, height_px / block_px, fps / 2)
    }

    /// Build and validate a configuration from raw dimensions
    pub fn from_dimensions(
        width: u32,
        height: u32,
        ticks_per_drop: u32,
    ) -> Result<Self, ConfigError> {
        if width > MAX_GRID_SIDE {
            return Err(ConfigError::WidthTooLarge {
                max: MAX_GRID_SIDE,
                got: width,
            });
        }
        if height > MAX_GRID_SIDE {
            return Err(ConfigError::HeightTooLarge {
                max: MAX_GRID_SIDE,
                got: height,
            });
        }
        let cfg = Self {
            width: width as u8,
            height: height as u8,
            ticks_per_drop,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that every catalog shape fits the grid and gravity can fire
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = MAX_SHAPE_SIDE as u32;
        if (self.width as u32) < min {
            return Err(ConfigError::WidthTooSmall {
                min,
                got: self.width as u32,
            });
        }
        if (self.height as u32) < min {
            return Err(ConfigError::HeightTooSmall {
                min,
                got: self.height as u32,
            });
        }
        if self.ticks_per_drop == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLOCK_SIZE_PX, CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, FRAMES_PER_SECOND};

    #[test]
    fn test_default_matches_reference_canvas() {
        assert_eq!(
            GameConfig::from_canvas(CANVAS_WIDTH_PX, CANVAS_HEIGHT_PX, BLOCK_SIZE_PX, FRAMES_PER_SECOND),
            Ok(GameConfig::default())
        );
        assert_eq!(
            GameConfig::default(),
            GameConfig {
                width: 21,
                height: 16,
                ticks_per_drop: 30
            }
        );
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_canvas_derives_grid() {
        let cfg = GameConfig::from_canvas(300, 600, 30, 30).unwrap();
        assert_eq!((cfg.width, cfg.height, cfg.ticks_per_drop), (10, 20, 15));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            GameConfig::from_dimensions(3, 20, 30),
            Err(ConfigError::WidthTooSmall { min: 4, got: 3 })
        );
        assert_eq!(
            GameConfig::from_dimensions(10, 0, 30),
            Err(ConfigError::HeightTooSmall { min: 4, got: 0 })
        );
        assert_eq!(
            GameConfig::from_dimensions(10, 20, 0),
            Err(ConfigError::ZeroDropInterval)
        );
        assert_eq!(
            GameConfig::from_dimensions(300, 20, 30),
            Err(ConfigError::WidthTooLarge { max: 255, got: 300 })
        );
        assert_eq!(
            GameConfig::from_canvas(640, 480, 0, 60),
            Err(ConfigError::ZeroBlockSize)
        );
        assert_eq!(
            GameConfig::from_canvas(640, 480, 30, 1),
            Err(ConfigError::ZeroDropInterval)
        );
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = GameConfig::from_dimensions(2, 20, 30).unwrap_err();
        assert_eq!(err.to_string(), "grid width must be at least 4 columns, got 2");
    }
}
