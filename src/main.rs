use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use battle_bikes::bike::BikePlugin;
use battle_bikes::config::{self, ConfigError};
use battle_bikes::engine::Engine;
use battle_bikes::game::{BACKGROUND_COLOR, CELL_SIZE, Simulation};
use battle_bikes::rendering::RenderingPlugin;
use battle_bikes::ui::{GAME_TITLE, UiPlugin};

fn main() -> Result<(), ConfigError> {
    let (settings, engine_config) = config::parse_args(std::env::args().skip(1))?;
    let engine = Engine::new(engine_config)?;

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(
                        (engine_config.grid_width as f32 * CELL_SIZE + 20.0) as u32,
                        (engine_config.grid_height as f32 * CELL_SIZE + 20.0) as u32,
                    ),
                    title: GAME_TITLE.to_string(),
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(settings)
        .insert_resource(Simulation(engine))
        .add_plugins((BikePlugin, RenderingPlugin, UiPlugin))
        .run();

    Ok(())
}
