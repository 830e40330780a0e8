//! Obstacle factory.
//!
//! Obstacles are sampled independently of each other and of the devices:
//! kind, position and size are fresh uniform draws and no overlap rejection
//! is performed.

use super::capacity::{CapacityClass, CapacityExceeded, capacity};
use super::environment::Environment;
use super::sampler::UniformSampler;
use super::types::{Obstacle, ObstacleKind, ObstacleShape, Point};
use crate::config::{ConfigError, ObstacleConfig, SizeRange};

/// Stateful obstacle generator for a single scenario.
#[derive(Debug, Clone)]
pub struct ObstacleFactory {
    environment: Environment,
    config: ObstacleConfig,
    obstacle_max: usize,
    /// Wall length range for this environment: `[wall_length_min, shorter side * fraction]`.
    wall_length: SizeRange,
    obstacle_counter: usize,
}

impl ObstacleFactory {
    pub fn new(environment: &Environment, config: &ObstacleConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let shorter_side = environment.width().min(environment.height());
        let wall_length = SizeRange::new(config.wall_length_min, config.wall_length_max(shorter_side));
        if config.kinds.contains(&ObstacleKind::Wall) && wall_length.max < wall_length.min {
            return Err(ConfigError::Invalid(format!(
                "Wall length bound {:.2} for this environment is below the minimum wall length {}",
                wall_length.max, wall_length.min
            )));
        }

        let obstacle_max = capacity(environment.area(), config.occupancy_fraction, config.min_separation);
        log::debug!("Obstacle factory ceiling for area {:.2} m²: {} obstacles", environment.area(), obstacle_max);

        Ok(Self {
            environment: environment.clone(),
            config: config.clone(),
            obstacle_max,
            wall_length,
            obstacle_counter: 0,
        })
    }

    /// Create the next obstacle.
    ///
    /// Draw order: kind, position (x before y), then the kind's dimensions
    /// (radius for humans; width before length/height for rectangles).
    ///
    /// | Kind      | Shape     | Dimensions                                     |
    /// |-----------|-----------|------------------------------------------------|
    /// | human     | circle    | radius in `human_radius`                       |
    /// | stairs    | rectangle | `stairs_width` x `stairs_length`               |
    /// | wall      | rectangle | `wall_width` x [`wall_length_min`, side·fraction] |
    /// | furniture | rectangle | `furniture_width` x `furniture_height`         |
    pub fn create_obstacle<S: UniformSampler>(&mut self, sampler: &mut S) -> Result<Obstacle, CapacityExceeded> {
        if self.obstacle_counter >= self.obstacle_max {
            log::debug!("Obstacle request rejected: ceiling of {} reached", self.obstacle_max);
            return Err(CapacityExceeded {
                class: CapacityClass::Obstacle,
                limit: self.obstacle_max,
            });
        }

        self.obstacle_counter += 1;
        let obstacle_id = self.obstacle_counter as u64;
        let kind = *sampler.choose(&self.config.kinds);
        let position = sampler.point_within(&self.environment);

        let shape = match kind {
            ObstacleKind::Human => ObstacleShape::Circle {
                radius: sample(sampler, self.config.human_radius),
            },
            ObstacleKind::Stairs => rectangle(sampler, position, self.config.stairs_width, self.config.stairs_length),
            ObstacleKind::Wall => rectangle(sampler, position, self.config.wall_width, self.wall_length),
            ObstacleKind::Furniture => rectangle(sampler, position, self.config.furniture_width, self.config.furniture_height),
        };
        let area = shape.area();

        Ok(Obstacle {
            obstacle_id,
            kind,
            position,
            shape,
            area,
        })
    }

    pub fn obstacle_max(&self) -> usize {
        self.obstacle_max
    }

    pub fn obstacles_created(&self) -> usize {
        self.obstacle_counter
    }

    /// Wall length range in effect for this environment.
    pub fn wall_length(&self) -> SizeRange {
        self.wall_length
    }
}

fn sample<S: UniformSampler>(sampler: &mut S, range: SizeRange) -> f64 {
    sampler.uniform(range.min, range.max)
}

fn rectangle<S: UniformSampler>(sampler: &mut S, position: Point, width: SizeRange, length: SizeRange) -> ObstacleShape {
    let width = sample(sampler, width);
    let length = sample(sampler, length);
    ObstacleShape::Rectangle {
        width,
        length,
        far_corner: Point {
            x: position.x + width,
            y: position.y + length,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::sampler::{RandSampler, ScriptedSampler};
    use crate::generation::types::EnvironmentType;
    use std::f64::consts::PI;

    fn env_40() -> Environment {
        Environment::from_dimensions(40.0, 40.0, EnvironmentType::Outdoor).unwrap()
    }

    fn config_with(kinds: &[ObstacleKind]) -> ObstacleConfig {
        ObstacleConfig {
            kinds: kinds.to_vec(),
            ..ObstacleConfig::default()
        }
    }

    #[test]
    fn ceiling_follows_capacity_model() {
        let factory = ObstacleFactory::new(&env_40(), &ObstacleConfig::default()).unwrap();
        assert_eq!(factory.obstacle_max(), 16);
        // 40 * 0.4
        assert_eq!(factory.wall_length(), SizeRange::new(2.0, 16.0));
    }

    #[test]
    fn ceiling_rejects_further_requests() {
        let mut factory = ObstacleFactory::new(&env_40(), &ObstacleConfig::default()).unwrap();
        let mut sampler = RandSampler::seeded(5);
        for expected_id in 1..=16 {
            assert_eq!(factory.create_obstacle(&mut sampler).unwrap().obstacle_id, expected_id);
        }
        let err = factory.create_obstacle(&mut sampler).unwrap_err();
        assert_eq!(
            err,
            CapacityExceeded {
                class: CapacityClass::Obstacle,
                limit: 16
            }
        );
        assert_eq!(factory.obstacles_created(), 16);
    }

    #[test]
    fn human_is_a_circle_with_matching_area() {
        let mut factory = ObstacleFactory::new(&env_40(), &config_with(&[ObstacleKind::Human])).unwrap();
        // kind, x, y, radius
        let mut sampler = ScriptedSampler::new([0.0, 0.25, 0.75, 1.0]);
        let human = factory.create_obstacle(&mut sampler).unwrap();
        assert_eq!(human.kind, ObstacleKind::Human);
        assert_eq!(human.position, Point::new(-10.0, 10.0));
        let radius = human.radius().unwrap();
        assert!((radius - 1.5).abs() < 1e-12);
        assert_eq!(human.far_corner(), None);
        assert_eq!(human.area, PI * radius * radius);
    }

    #[test]
    fn stairs_span_from_position_to_far_corner() {
        let mut factory = ObstacleFactory::new(&env_40(), &config_with(&[ObstacleKind::Stairs])).unwrap();
        // kind, x, y, width, length
        let mut sampler = ScriptedSampler::new([0.0, 0.5, 0.5, 0.5, 1.0]);
        let stairs = factory.create_obstacle(&mut sampler).unwrap();
        match stairs.shape {
            ObstacleShape::Rectangle { width, length, far_corner } => {
                assert_eq!(width, 2.0);
                assert_eq!(length, 4.0);
                assert_eq!(far_corner, Point::new(2.0, 4.0));
                assert_eq!(stairs.area, width * length);
            }
            ObstacleShape::Circle { .. } => panic!("stairs must be rectangular"),
        }
    }

    #[test]
    fn wall_length_is_bounded_by_shorter_side() {
        let env = Environment::from_dimensions(50.0, 25.0, EnvironmentType::IndoorLos).unwrap();
        let mut factory = ObstacleFactory::new(&env, &config_with(&[ObstacleKind::Wall])).unwrap();
        assert_eq!(factory.wall_length(), SizeRange::new(2.0, 10.0));
        let mut sampler = RandSampler::seeded(9);
        while let Ok(wall) = factory.create_obstacle(&mut sampler) {
            if let ObstacleShape::Rectangle { width, length, .. } = wall.shape {
                assert!((0.25..=0.4).contains(&width));
                assert!((2.0..=10.0).contains(&length));
                assert_eq!(wall.area, width * length);
            } else {
                panic!("walls must be rectangular");
            }
        }
    }

    #[test]
    fn furniture_uses_its_own_ranges() {
        let mut factory = ObstacleFactory::new(&env_40(), &config_with(&[ObstacleKind::Furniture])).unwrap();
        let mut sampler = ScriptedSampler::new([0.0, 0.0, 0.0, 0.0, 1.0]);
        let furniture = factory.create_obstacle(&mut sampler).unwrap();
        assert_eq!(furniture.kind, ObstacleKind::Furniture);
        assert_eq!(furniture.far_corner(), Some(Point::new(-19.5, -18.0)));
        assert_eq!(furniture.area, 0.5 * 2.0);
    }

    #[test]
    fn every_obstacle_area_matches_its_shape() {
        let mut config = ObstacleConfig::default();
        config.kinds.push(ObstacleKind::Furniture);
        let env = Environment::from_dimensions(80.0, 80.0, EnvironmentType::Outdoor).unwrap();
        let mut sampler = RandSampler::seeded(21);
        let mut factory = ObstacleFactory::new(&env, &config).unwrap();
        while let Ok(obstacle) = factory.create_obstacle(&mut sampler) {
            assert!(env.contains(&obstacle.position));
            match obstacle.shape {
                ObstacleShape::Circle { radius } => {
                    assert_eq!(obstacle.kind, ObstacleKind::Human);
                    assert_eq!(obstacle.area, PI * radius * radius);
                }
                ObstacleShape::Rectangle { width, length, far_corner } => {
                    assert_ne!(obstacle.kind, ObstacleKind::Human);
                    assert_eq!(obstacle.area, width * length);
                    assert_eq!(far_corner.x, obstacle.position.x + width);
                    assert_eq!(far_corner.y, obstacle.position.y + length);
                }
            }
        }
        assert_eq!(factory.obstacles_created(), factory.obstacle_max());
    }

    #[test]
    fn overlapping_placements_are_not_rejected() {
        let mut factory = ObstacleFactory::new(&env_40(), &config_with(&[ObstacleKind::Human])).unwrap();
        // Same kind, position and radius every time
        let mut sampler = ScriptedSampler::new([0.0, 0.5, 0.5, 0.5]);
        let first = factory.create_obstacle(&mut sampler).unwrap();
        let second = factory.create_obstacle(&mut sampler).unwrap();
        assert_eq!(first.position, second.position);
        assert_eq!(first.shape, second.shape);
        assert_ne!(first.obstacle_id, second.obstacle_id);
    }

    #[test]
    fn wall_bound_below_minimum_fails_at_construction() {
        let env = Environment::from_dimensions(4.0, 40.0, EnvironmentType::IndoorNlos).unwrap();
        assert!(matches!(
            ObstacleFactory::new(&env, &ObstacleConfig::default()),
            Err(ConfigError::Invalid(_))
        ));
        assert!(ObstacleFactory::new(&env, &config_with(&[ObstacleKind::Human, ObstacleKind::Stairs])).is_ok());
    }
}
