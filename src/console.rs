use bevy::prelude::*;
use bevy_console::{
    AddConsoleCommand, ConsoleCommand, ConsoleConfiguration, PrintConsoleLine,
    ToggleConsoleKey,
};
use bevy_egui::{egui, EguiContexts};
use clap::Parser;
use crate::rotation::RotationSpeed;

pub const GREETING: [&str; 2] = [
    "You can change speed by using the command 'rotation [1-10]'",
    "Example: rotation 5",
];

pub const HINT: [&str; 2] = [
    "This is an example of a game that uses a developer console",
    "Use the grave key (button next to 1) to toggle the console on and off",
];

pub struct ConsolePlugin;

impl Plugin for ConsolePlugin {
    fn build(&self, app: &mut App) {
        // bevy_console brings its own egui plugin and the help, clear and
        // exit commands.
        app
            .add_plugin(bevy_console::ConsolePlugin)
            .insert_resource(ConsoleConfiguration {
                keys: vec![ToggleConsoleKey::KeyCode(KeyCode::Grave)],
                left_pos: 10.0,
                top_pos: 10.0,
                width: 780.0,
                height: 300.0,
                ..Default::default()
            })
            .add_console_command::<RotationCommand, _>(rotation_command)
            .add_startup_system(greet)
            .add_system(show_hint);
    }
}

/// Changes how fast the cube spins
#[derive(Parser, ConsoleCommand)]
#[command(name = "rotation")]
struct RotationCommand {
    /// Speed level, divided by ten to get radians per second. Anything after
    /// the first value is ignored.
    #[arg(allow_hyphen_values = true, num_args = 0..)]
    values: Vec<String>,
}

fn rotation_command(
    mut log: ConsoleCommand<RotationCommand>,
    mut speed: ResMut<RotationSpeed>,
) {
    if let Some(Ok(RotationCommand { values })) = log.take() {
        match speed.change(values.first().map(String::as_str)) {
            Ok(level) => {
                info!("rotation speed set to {} rad/s", speed.0);
                log.reply_ok(changed_message(level));
            }
            Err(err) => {
                warn!("rejected rotation command: {}", err);
                log.reply_failed(err.to_string());
            }
        }
    }
}

fn changed_message(level: i32) -> String {
    format!("Rotation speed changed: {}", level)
}

fn greet(mut lines: EventWriter<PrintConsoleLine>) {
    for line in GREETING {
        lines.send(PrintConsoleLine::new(line.into()));
    }
}

fn show_hint(mut contexts: EguiContexts) {
    egui::Area::new("usage_hint")
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -40.0))
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.vertical_centered(|ui| {
                for line in HINT {
                    ui.label(egui::RichText::new(line).color(egui::Color32::BLACK));
                }
            });
        });
}
