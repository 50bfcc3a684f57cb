//! Random city generation for the routing demo.

use rand::Rng;
use waypath_core::{CityGraph, Point};

use crate::config::{CityConfig, GenError};

/// City generator: a central depot and randomly placed bins.
pub struct CityGen<R: Rng> {
    pub rng: R,
    pub config: CityConfig,
}

impl<R: Rng> CityGen<R> {
    /// Create a generator after validating `config`.
    pub fn new(config: CityConfig, rng: R) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// The depot position, the centre of the coordinate area.
    pub fn depot(&self) -> Point {
        let c = self.config.grid_size / 2;
        Point::new(c, c)
    }

    /// Draw distinct bin positions, none of them on the depot.
    pub fn bins(&mut self) -> Vec<Point> {
        let depot = self.depot();
        let size = self.config.grid_size;
        let mut bins = Vec::with_capacity(self.config.bins);
        while bins.len() < self.config.bins {
            let p = Point::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if p != depot && !bins.contains(&p) {
                bins.push(p);
            }
        }
        bins
    }

    /// Generate a complete graph over the depot and fresh bins.
    pub fn generate(&mut self) -> CityGraph {
        let bins = self.bins();
        let graph = CityGraph::complete(self.depot(), &bins);
        log::debug!(
            "generated city with {} bins, {} edges",
            graph.bin_count(),
            graph.edges().len()
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn city(bins: usize, grid_size: i32, seed: u64) -> CityGraph {
        let config = CityConfig { bins, grid_size };
        CityGen::new(config, StdRng::seed_from_u64(seed))
            .unwrap()
            .generate()
    }

    #[test]
    fn depot_is_centred() {
        let g = city(5, 10, 1);
        assert_eq!(g.node(0).pos, Point::new(5, 5));
        assert!(g.node(0).is_depot);
        assert_eq!(g.bin_count(), 5);
    }

    #[test]
    fn bins_are_distinct_and_in_range() {
        let g = city(15, 5, 2);
        let mut seen: Vec<Point> = g.nodes().iter().map(|n| n.pos).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 16);
        for n in g.nodes() {
            assert!((0..5).contains(&n.pos.x) && (0..5).contains(&n.pos.y));
        }
    }

    #[test]
    fn fills_a_crowded_grid() {
        // 3 bins on a 2x2 grid take every position except the depot.
        let g = city(3, 2, 4);
        assert_eq!(g.len(), 4);
        assert_eq!(g.edges().len(), 6);
    }

    #[test]
    fn same_seed_same_city() {
        let a = city(8, 10, 99);
        let b = city(8, 10, 99);
        let pa: Vec<Point> = a.nodes().iter().map(|n| n.pos).collect();
        let pb: Vec<Point> = b.nodes().iter().map(|n| n.pos).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CityConfig {
            bins: 4,
            grid_size: 2,
        };
        let err = CityGen::new(config, StdRng::seed_from_u64(0)).err();
        assert_eq!(
            err,
            Some(GenError::Crowded {
                bins: 4,
                grid_size: 2
            })
        );
    }
}
