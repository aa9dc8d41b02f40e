//! UI plugin - shows score, countdown and effect timers in the window title.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::fmt::Write as _;

use crate::engine::{CountdownStep, Phase, WorldSnapshot};
use crate::game::Simulation;

pub const GAME_TITLE: &str = "Battle Bikes";

/// Plugin for the heads-up display.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_window_title);
    }
}

/// Status line for the current run.
pub fn hud_text(snapshot: &WorldSnapshot) -> String {
    let mut text = format!("{GAME_TITLE} | Score: {}", snapshot.score);

    match snapshot.phase {
        Phase::Starting => match snapshot.countdown_step() {
            Some(CountdownStep::Number(n)) => {
                let _ = write!(text, " | Get Ready! {n}");
            }
            Some(CountdownStep::Go) => text.push_str(" | GO!"),
            None => {}
        },
        Phase::Paused => text.push_str(" | PAUSED - Press ESC to resume"),
        Phase::GameOver => text.push_str(" | Game Over! Press ENTER to restart"),
        Phase::Running => {}
    }

    if let Some(left) = snapshot.speed_boost {
        let _ = write!(text, " | Boost {:.1}s", left.as_secs_f32());
    }
    if let Some(left) = snapshot.invincibility {
        let _ = write!(text, " | Invincible {:.1}s", left.as_secs_f32());
    }
    text
}

fn update_window_title(
    simulation: Res<Simulation>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let title = hud_text(&simulation.snapshot());
    for mut window in &mut windows {
        if window.title != title {
            window.title = title.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::Engine;
    use std::time::Duration;

    fn snapshot() -> WorldSnapshot {
        let config = EngineConfig {
            seed: Some(11),
            ..Default::default()
        };
        Engine::new(config).unwrap().snapshot()
    }

    #[test]
    fn countdown_is_shown_while_starting() {
        let snapshot = snapshot();
        assert_eq!(hud_text(&snapshot), "Battle Bikes | Score: 0 | Get Ready! 3");
    }

    #[test]
    fn phases_and_effects_are_listed() {
        let mut snapshot = snapshot();
        snapshot.phase = Phase::Paused;
        snapshot.countdown = None;
        snapshot.score = 45;
        snapshot.speed_boost = Some(Duration::from_millis(2500));
        assert_eq!(
            hud_text(&snapshot),
            "Battle Bikes | Score: 45 | PAUSED - Press ESC to resume | Boost 2.5s"
        );

        snapshot.phase = Phase::GameOver;
        snapshot.speed_boost = None;
        snapshot.invincibility = Some(Duration::from_millis(4000));
        assert_eq!(
            hud_text(&snapshot),
            "Battle Bikes | Score: 45 | Game Over! Press ENTER to restart | Invincible 4.0s"
        );
    }
}
