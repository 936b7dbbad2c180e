use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Rejected arena configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("paddles overlap: arena width {width} is too narrow")]
    ArenaTooNarrow { width: f32 },

    #[error("ball diameter {diameter} does not fit arena height {arena}")]
    BallTooLarge { diameter: f32, arena: f32 },

    #[error("ball speed {speed} would skip over a paddle; must be below {limit}")]
    BallTooFast { speed: f32, limit: f32 },

    #[error("max serve angle {0} must be in [0, pi/2)")]
    ServeAngle(f32),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub max_serve_angle: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            max_serve_angle: Params::MAX_SERVE_ANGLE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.paddle_margin < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "paddle_margin",
                value: self.paddle_margin,
            });
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.arena_width {
            return Err(ConfigError::ArenaTooNarrow {
                width: self.arena_width,
            });
        }
        if 2.0 * self.ball_radius >= self.arena_height {
            return Err(ConfigError::BallTooLarge {
                diameter: 2.0 * self.ball_radius,
                arena: self.arena_height,
            });
        }
        // Hits are found by overlap, so one tick must not carry the ball across a paddle
        let limit = self.paddle_width + 2.0 * self.ball_radius;
        if self.ball_speed >= limit {
            return Err(ConfigError::BallTooFast {
                speed: self.ball_speed,
                limit,
            });
        }
        if !(0.0..FRAC_PI_2).contains(&self.max_serve_angle) {
            return Err(ConfigError::ServeAngle(self.max_serve_angle));
        }
        Ok(())
    }

    /// X position (left edge) of a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Starting Y (top edge) for both paddles: vertically centred
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle Y (top edge) to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 10.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 670.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-30.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(120.0), 120.0);
    }

    #[test]
    fn test_paddle_spawn_is_centred() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 200.0);
        assert_eq!(config.ball_spawn(), glam::Vec2::new(350.0, 250.0));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = Config::from_json(r#"{ "ball_speed": 8.0 }"#).unwrap();
        assert_eq!(config.ball_speed, 8.0);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
    }

    #[test]
    fn test_rejects_tall_paddle() {
        let config = Config {
            paddle_height: 600.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_ball_faster_than_paddle_thickness() {
        let config = Config {
            ball_speed: 34.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooFast { limit, .. }) if limit == 34.0
        ));

        let config = Config {
            ball_speed: 60.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooFast { .. })
        ));

        let config = Config {
            ball_speed: 33.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_vertical_serve() {
        let config = Config {
            max_serve_angle: FRAC_PI_2,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ServeAngle(_))));
    }

    #[test]
    fn test_rejects_zero_speed_from_json() {
        let err = Config::from_json(r#"{ "paddle_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "paddle_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
