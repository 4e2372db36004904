use bevy::prelude::*;
use bevy_framepace::FramepacePlugin;
use crate::settings::Settings;

pub mod console;
pub mod rotation;
pub mod scene;
pub mod settings;

pub fn main() {
    let settings = Settings::default();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(settings.window_plugin())
                .set(settings.log_plugin())
                .set(settings.render_plugin()),
        )
        .add_plugin(FramepacePlugin)
        .insert_resource(settings.framepace())
        .insert_resource(settings)
        .add_plugin(crate::rotation::RotationPlugin)
        .add_plugin(crate::scene::ScenePlugin)
        .add_plugin(crate::console::ConsolePlugin)
        .run();
}
