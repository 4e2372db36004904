use bevy::prelude::*;
use crate::rotation::Spin;
use crate::settings::Settings;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(setup);
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<Settings>,
) {
    commands.insert_resource(ClearColor(settings.background));

    commands.spawn(Camera3dBundle {
        projection: Projection::Perspective(PerspectiveProjection {
            fov: 45f32.to_radians(),
            ..default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 10.0)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    let tilt = Quat::from_rotation_x(20f32.to_radians());
    commands.spawn((
        Spin::new(Vec3::Y, tilt),
        PbrBundle {
            mesh: meshes.add(Mesh::from(shape::Cube { size: 2.0 })),
            material: materials.add(StandardMaterial {
                base_color: Color::BLUE,
                unlit: true,
                ..default()
            }),
            transform: Transform::from_xyz(0.1, -0.2, 0.0)
                .with_rotation(tilt),
            ..default()
        },
    ));

    info!("scene ready");
}
