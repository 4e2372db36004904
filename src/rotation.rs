use std::f32::consts::TAU;
use bevy::prelude::*;
use thiserror::Error;

pub struct RotationPlugin;

impl Plugin for RotationPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<RotationSpeed>()
            .add_system(spin);
    }
}

/// Radians per second applied to every `Spin`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RotationSpeed(pub f32);

impl Default for RotationSpeed {
    fn default() -> RotationSpeed {
        RotationSpeed(0.5)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("Could not change speed, not a valid number: {0}")]
    NotANumber(String),
    #[error("Could not change speed, no value given")]
    MissingValue,
}

pub fn parse_level(argument: Option<&str>) -> Result<i32, RotationError> {
    let argument = argument.ok_or(RotationError::MissingValue)?;
    argument
        .parse::<i32>()
        .map_err(|_| RotationError::NotANumber(argument.to_string()))
}

impl RotationSpeed {
    pub fn from_level(level: i32) -> RotationSpeed {
        RotationSpeed(level as f32 / 10.0)
    }

    /// Sets the speed from a console argument and returns the level.
    /// The speed is left alone when the argument is rejected.
    pub fn change(&mut self, argument: Option<&str>) -> Result<i32, RotationError> {
        let level = parse_level(argument)?;
        *self = RotationSpeed::from_level(level);
        Ok(level)
    }
}

#[derive(Component, Debug, Clone)]
pub struct Spin {
    pub axis: Vec3,
    pub angle: f32,
    pub base: Quat,
}

impl Spin {
    pub fn new(axis: Vec3, base: Quat) -> Spin {
        Spin { axis: axis.normalize(), angle: 0.0, base }
    }

    pub fn advance(&mut self, radians: f32) {
        self.angle = (self.angle + radians).rem_euclid(TAU);
    }

    pub fn apply(&self, transform: &mut Transform) {
        transform.rotation = self.base * Quat::from_axis_angle(self.axis, self.angle);
    }
}

fn spin(
    time: Res<Time>,
    speed: Res<RotationSpeed>,
    mut spinning: Query<(&mut Spin, &mut Transform)>,
) {
    let radians = speed.0 * time.delta_seconds();
    for (mut spin, mut transform) in spinning.iter_mut() {
        spin.advance(radians);
        spin.apply(&mut transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::utils::{Duration, Instant};

    #[test]
    fn default_speed_is_half() {
        assert_eq!(RotationSpeed::default(), RotationSpeed(0.5));
    }

    #[test]
    fn level_is_divided_by_ten() {
        for level in 1 ..= 10 {
            let mut speed = RotationSpeed::default();
            let argument = level.to_string();
            assert_eq!(speed.change(Some(&argument)), Ok(level));
            assert_eq!(speed, RotationSpeed(level as f32 / 10.0));
        }
        assert_eq!(RotationSpeed::from_level(-20), RotationSpeed(-2.0));
        assert_eq!(RotationSpeed::from_level(0), RotationSpeed(0.0));
    }

    #[test]
    fn bad_argument_keeps_speed() {
        let mut speed = RotationSpeed::from_level(7);
        assert_eq!(
            speed.change(Some("abc")),
            Err(RotationError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            speed.change(Some("2.5")),
            Err(RotationError::NotANumber("2.5".to_string()))
        );
        assert_eq!(speed.change(None), Err(RotationError::MissingValue));
        assert_eq!(speed, RotationSpeed::from_level(7));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RotationError::NotANumber("abc".to_string()).to_string(),
            "Could not change speed, not a valid number: abc"
        );
        assert_eq!(
            RotationError::MissingValue.to_string(),
            "Could not change speed, no value given"
        );
    }

    #[test]
    fn angle_wraps() {
        let mut spin = Spin::new(Vec3::Y, Quat::IDENTITY);
        spin.advance(TAU + 1.0);
        assert!((spin.angle - 1.0).abs() < 1e-5);
        spin.advance(-2.0);
        assert!((spin.angle - (TAU - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn apply_keeps_base_tilt() {
        let tilt = Quat::from_rotation_x(20f32.to_radians());
        let mut spin = Spin::new(Vec3::Y, tilt);
        let mut transform = Transform::default();
        spin.advance(0.3);
        spin.apply(&mut transform);
        let expected = tilt * Quat::from_rotation_y(0.3);
        assert!(transform.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn spin_system_accumulates_speed_times_delta() {
        let mut app = App::new();
        app
            .insert_resource(Time::default())
            .insert_resource(RotationSpeed::from_level(3))
            .add_system(spin);
        let cube = app.world
            .spawn((Transform::default(), Spin::new(Vec3::Y, Quat::IDENTITY)))
            .id();

        let ticks = 25;
        let delta = Duration::from_millis(100);
        let start = Instant::now();
        app.world.resource_mut::<Time>().update_with_instant(start);
        for i in 1 ..= ticks {
            app.world
                .resource_mut::<Time>()
                .update_with_instant(start + delta * i);
            app.update();
        }

        let expected = (ticks as f32 * 0.3 * delta.as_secs_f32()).rem_euclid(TAU);
        let spin = app.world.get::<Spin>(cube).unwrap();
        assert!((spin.angle - expected).abs() < 1e-3);
        let transform = app.world.get::<Transform>(cube).unwrap();
        assert!(transform
            .rotation
            .abs_diff_eq(Quat::from_rotation_y(expected), 1e-3));
    }
}
