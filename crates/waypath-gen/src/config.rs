//! Generator parameters and their validation.

use std::fmt;
use std::ops::RangeInclusive;

/// Allowed maze side lengths.
pub const MAZE_SIDE: RangeInclusive<i32> = 5..=50;
/// Allowed number of targets in a city.
pub const CITY_BINS: RangeInclusive<usize> = 1..=15;

/// Parameters for [`MazeGen`](crate::MazeGen).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    /// Probability in `0.0..=1.0` that a free cell becomes a wall.
    pub wall_density: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            wall_density: 0.25,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), GenError> {
        if !MAZE_SIDE.contains(&self.rows) {
            return Err(GenError::Rows(self.rows));
        }
        if !MAZE_SIDE.contains(&self.cols) {
            return Err(GenError::Cols(self.cols));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(GenError::WallDensity(self.wall_density));
        }
        Ok(())
    }
}

/// Parameters for [`CityGen`](crate::CityGen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityConfig {
    /// Number of targets besides the depot.
    pub bins: usize,
    /// Side of the square coordinate area `[0, grid_size)²`.
    pub grid_size: i32,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            bins: 8,
            grid_size: 10,
        }
    }
}

impl CityConfig {
    pub fn validate(&self) -> Result<(), GenError> {
        if !CITY_BINS.contains(&self.bins) {
            return Err(GenError::Bins(self.bins));
        }
        if self.grid_size < 1 {
            return Err(GenError::GridSize(self.grid_size));
        }
        // The depot takes one position; each bin needs another.
        let area = self.grid_size as usize * self.grid_size as usize;
        if self.bins >= area {
            return Err(GenError::Crowded {
                bins: self.bins,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }
}

/// Invalid generator parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GenError {
    Rows(i32),
    Cols(i32),
    WallDensity(f64),
    Bins(usize),
    GridSize(i32),
    /// More bins than free positions.
    Crowded { bins: usize, grid_size: i32 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows(n) => write!(
                f,
                "rows must be within {}..={}, got {n}",
                MAZE_SIDE.start(),
                MAZE_SIDE.end()
            ),
            Self::Cols(n) => write!(
                f,
                "cols must be within {}..={}, got {n}",
                MAZE_SIDE.start(),
                MAZE_SIDE.end()
            ),
            Self::WallDensity(d) => write!(f, "wall density must be within 0..=1, got {d}"),
            Self::Bins(n) => write!(
                f,
                "bins must be within {}..={}, got {n}",
                CITY_BINS.start(),
                CITY_BINS.end()
            ),
            Self::GridSize(n) => write!(f, "grid size must be at least 1, got {n}"),
            Self::Crowded { bins, grid_size } => write!(
                f,
                "{bins} bins do not fit on a {grid_size}x{grid_size} grid next to the depot"
            ),
        }
    }
}

impl std::error::Error for GenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MazeConfig::default().validate(), Ok(()));
        assert_eq!(CityConfig::default().validate(), Ok(()));
    }

    #[test]
    fn maze_bounds() {
        let ok = MazeConfig {
            rows: 5,
            cols: 50,
            wall_density: 1.0,
        };
        assert_eq!(ok.validate(), Ok(()));
        let small = MazeConfig { rows: 4, ..ok };
        assert_eq!(small.validate(), Err(GenError::Rows(4)));
        let wide = MazeConfig { cols: 51, ..ok };
        assert_eq!(wide.validate(), Err(GenError::Cols(51)));
        let dense = MazeConfig {
            wall_density: 1.5,
            ..ok
        };
        assert_eq!(dense.validate(), Err(GenError::WallDensity(1.5)));
        let nan = MazeConfig {
            wall_density: f64::NAN,
            ..ok
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn city_bounds() {
        assert_eq!(
            CityConfig { bins: 0, grid_size: 10 }.validate(),
            Err(GenError::Bins(0))
        );
        assert_eq!(
            CityConfig { bins: 16, grid_size: 10 }.validate(),
            Err(GenError::Bins(16))
        );
        assert_eq!(
            CityConfig { bins: 1, grid_size: 0 }.validate(),
            Err(GenError::GridSize(0))
        );
        // A 3x3 grid has 8 positions besides the depot.
        assert_eq!(CityConfig { bins: 8, grid_size: 3 }.validate(), Ok(()));
        assert_eq!(
            CityConfig { bins: 9, grid_size: 3 }.validate(),
            Err(GenError::Crowded {
                bins: 9,
                grid_size: 3
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GenError::Rows(3).to_string(),
            "rows must be within 5..=50, got 3"
        );
        assert_eq!(
            GenError::Bins(20).to_string(),
            "bins must be within 1..=15, got 20"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn city_config_from_json() {
        let c: CityConfig = serde_json::from_str(r#"{"bins":4,"grid_size":6}"#).unwrap();
        assert_eq!(c, CityConfig { bins: 4, grid_size: 6 });
    }
}
