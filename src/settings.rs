use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::render::settings::{Backends, WgpuSettings};
use bevy::render::RenderPlugin;
use bevy_framepace::{FramepaceSettings, Limiter};

/// Startup configuration. Everything is fixed at compile time; this just
/// keeps the numbers in one place.
#[derive(Resource, Debug, Clone)]
pub struct Settings {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub frame_rate: f64,
    pub log_level: Level,
    pub log_filter: String,
    pub background: Color,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            title: "Console Demo".to_string(),
            width: 800.0,
            height: 600.0,
            frame_rate: 30.0,
            // Engine chatter only from warn upwards, like a shipped game.
            log_level: Level::WARN,
            log_filter: "wgpu=error,spin_console=info".to_string(),
            background: Color::rgb_u8(100, 149, 237),
        }
    }
}

impl Settings {
    pub fn window_plugin(&self) -> WindowPlugin {
        WindowPlugin {
            primary_window: Some(Window {
                title: self.title.clone(),
                resolution: (self.width, self.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }
    }

    pub fn log_plugin(&self) -> LogPlugin {
        LogPlugin {
            level: self.log_level,
            filter: self.log_filter.clone(),
        }
    }

    pub fn render_plugin(&self) -> RenderPlugin {
        RenderPlugin {
            wgpu_settings: WgpuSettings {
                backends: Some(Backends::all()),
                ..default()
            },
        }
    }

    pub fn framepace(&self) -> FramepaceSettings {
        FramepaceSettings {
            limiter: Limiter::from_framerate(self.frame_rate),
        }
    }
}
