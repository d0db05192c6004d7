//! Startup settings for the window and the board.

use thiserror::Error;

/// Side length of one cell in pixels
pub const CELL_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("viewport {width}x{height} is smaller than one {cell_size}px cell")]
    ViewportTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("random density {0} is not within 0.0..=1.0")]
    InvalidDensity(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub title: String,
    /// Pixel size of the board area, excluding the side panel
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub panel_width: u32,
    pub cell_size: u32,
    /// Share of cells alive after a randomize
    pub random_density: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_owned(),
            viewport_width: 960,
            viewport_height: 640,
            panel_width: 180,
            cell_size: CELL_SIZE,
            random_density: 0.3,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.viewport_width < self.cell_size || self.viewport_height < self.cell_size {
            return Err(ConfigError::ViewportTooSmall {
                width: self.viewport_width,
                height: self.viewport_height,
                cell_size: self.cell_size,
            });
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(ConfigError::InvalidDensity(self.random_density));
        }
        Ok(())
    }

    /// Board size in cells: viewport pixels divided by the cell size
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.viewport_width / self.cell_size) as usize,
            (self.viewport_height / self.cell_size) as usize,
        )
    }

    pub fn window_width(&self) -> u32 {
        self.viewport_width + self.panel_width
    }
}
