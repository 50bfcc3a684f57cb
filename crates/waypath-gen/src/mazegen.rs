//! Random maze generation.

use rand::Rng;
use waypath_core::Maze;

use crate::config::{GenError, MazeConfig};

/// Maze generator scattering walls over an open grid.
///
/// The result is not guaranteed to be solvable; a search on an unsolvable
/// maze simply returns an empty path.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator after validating `config`.
    pub fn new(config: MazeConfig, rng: R) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// Generate a fresh maze.
    ///
    /// Each cell other than the start and the goal independently becomes a
    /// wall with probability `wall_density`.
    pub fn generate(&mut self) -> Maze {
        let mut maze = Maze::new(self.config.rows, self.config.cols);
        let density = self.config.wall_density;
        for p in maze.bounds().iter() {
            if p == maze.start() || p == maze.goal() {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < density {
                maze.set_wall(p, true);
            }
        }
        log::debug!(
            "generated {}x{} maze with {} walls",
            maze.rows(),
            maze.cols(),
            maze.wall_count()
        );
        maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn gen_with(rows: i32, cols: i32, wall_density: f64, seed: u64) -> Maze {
        let config = MazeConfig {
            rows,
            cols,
            wall_density,
        };
        MazeGen::new(config, StdRng::seed_from_u64(seed))
            .unwrap()
            .generate()
    }

    #[test]
    fn dimensions_follow_config() {
        let maze = gen_with(7, 12, 0.3, 1);
        assert_eq!(maze.rows(), 7);
        assert_eq!(maze.cols(), 12);
        assert_eq!(maze.len(), 84);
    }

    #[test]
    fn endpoints_stay_open() {
        let maze = gen_with(10, 10, 1.0, 7);
        assert!(maze.is_passable(maze.start()));
        assert!(maze.is_passable(maze.goal()));
        assert_eq!(maze.wall_count(), 98);
    }

    #[test]
    fn zero_density_is_open() {
        let maze = gen_with(20, 20, 0.0, 3);
        assert_eq!(maze.wall_count(), 0);
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(gen_with(15, 15, 0.25, 42), gen_with(15, 15, 0.25, 42));
    }

    #[test]
    fn density_is_roughly_honoured() {
        let maze = gen_with(50, 50, 0.5, 9);
        let walls = maze.wall_count();
        assert!((1000..1500).contains(&walls), "{walls} walls");
    }

    #[test]
    fn rejects_invalid_config() {
        let config = MazeConfig {
            rows: 2,
            ..MazeConfig::default()
        };
        assert!(MazeGen::new(config, StdRng::seed_from_u64(0)).is_err());
    }
}
