//! Rendering plugin - draws the simulation snapshot every frame with immediate-mode shapes.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::config::Settings;
use crate::engine::{TrailGlyph, TrailSegment};
use crate::game::{
    ARENA_COLOR, CELL_SIZE, CORNER_RADIUS, Cell, Direction, Simulation, Z_ARENA, Z_BIKE, Z_FOOD,
    Z_TRAIL,
};

/// Trail thickness relative to a cell.
const TRAIL_WIDTH: f32 = 0.4;
const TRAIL_ALPHA: f32 = 0.65;
const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.55);
const Z_OVERLAY: f32 = 3.0;

/// Plugin for drawing the arena, trail, bike and food.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, draw_world);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Maps grid cells (y down, origin top-left) onto world space (y up, origin centered).
#[derive(Clone, Copy, Debug)]
struct GridProjection {
    width: i32,
    height: i32,
}

impl GridProjection {
    fn cell_center(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.x as f32 - self.width as f32 / 2.0 + 0.5) * CELL_SIZE,
            (self.height as f32 / 2.0 - cell.y as f32 - 0.5) * CELL_SIZE,
        )
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32 * CELL_SIZE, self.height as f32 * CELL_SIZE)
    }
}

/// Unit vector in world space for a grid heading.
fn world_offset(direction: Direction) -> Vec2 {
    let (dx, dy) = direction.delta();
    Vec2::new(dx as f32, -dy as f32)
}

/// Rectangles making up one trail piece, as (offset from cell center, size).
fn trail_pieces(segment: &TrailSegment) -> Vec<(Vec2, Vec2)> {
    let thin = CELL_SIZE * TRAIL_WIDTH;
    match segment.glyph() {
        TrailGlyph::Horizontal => vec![(Vec2::ZERO, Vec2::new(CELL_SIZE, thin))],
        TrailGlyph::Vertical => vec![(Vec2::ZERO, Vec2::new(thin, CELL_SIZE))],
        TrailGlyph::Corner(shape) => shape
            .edges()
            .into_iter()
            .map(|edge| {
                // Each arm runs from just past the center out to the cell edge.
                let length = (CELL_SIZE + thin) / 2.0;
                let offset = world_offset(edge) * (CELL_SIZE - thin) / 4.0;
                let size = if edge.is_horizontal() {
                    Vec2::new(length, thin)
                } else {
                    Vec2::new(thin, length)
                };
                (offset, size)
            })
            .collect(),
    }
}

/// System to redraw the world from the current snapshot.
fn draw_world(
    mut painter: ShapePainter,
    simulation: Res<Simulation>,
    settings: Res<Settings>,
    time: Res<Time>,
) {
    let snapshot = simulation.snapshot();
    let grid = GridProjection {
        width: snapshot.grid_width,
        height: snapshot.grid_height,
    };
    let bike_color = settings.bike_color.color();

    painter.reset();
    painter.set_translation(Vec3::new(0.0, 0.0, Z_ARENA));
    painter.color = ARENA_COLOR;
    painter.rect(grid.size());

    painter.color = bike_color.with_alpha(TRAIL_ALPHA);
    for segment in &snapshot.trail {
        let center = grid.cell_center(segment.cell);
        for (offset, size) in trail_pieces(segment) {
            painter.set_translation((center + offset).extend(Z_TRAIL));
            painter.rect(size);
        }
    }

    let food_center = grid.cell_center(snapshot.food.cell);
    painter.set_translation(food_center.extend(Z_FOOD));
    painter.color = snapshot.food.kind.color();
    painter.circle(CELL_SIZE * 0.4);

    // Blink while invincible.
    let blink = snapshot.invincibility.is_some() && (time.elapsed_secs() * 8.0) as u32 % 2 == 0;
    let head_color = if blink { Color::WHITE } else { bike_color };
    let head_size = CELL_SIZE * 0.9;
    let head_center = grid.cell_center(snapshot.head());

    painter.set_translation(head_center.extend(Z_BIKE));
    painter.color = head_color;
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    painter.corner_radii = Vec4::splat(CORNER_RADIUS / (head_size / 2.0));
    painter.rect(Vec2::splat(head_size));
    painter.corner_radii = Vec4::ZERO;

    let nose = head_center + world_offset(snapshot.direction) * CELL_SIZE * 0.3;
    painter.set_translation(nose.extend(Z_BIKE + 0.1));
    painter.color = Color::BLACK;
    painter.circle(CELL_SIZE * 0.12);

    if snapshot.is_paused() || snapshot.is_game_over() {
        painter.set_translation(Vec3::new(0.0, 0.0, Z_OVERLAY));
        painter.color = OVERLAY_COLOR;
        painter.rect(grid.size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CornerShape;

    #[test]
    fn projection_puts_the_origin_top_left() {
        let grid = GridProjection {
            width: 40,
            height: 30,
        };
        let top_left = grid.cell_center(Cell::new(0, 0));
        assert_eq!(top_left, Vec2::new(-19.5 * CELL_SIZE, 14.5 * CELL_SIZE));
        let bottom_right = grid.cell_center(Cell::new(39, 29));
        assert_eq!(bottom_right, Vec2::new(19.5 * CELL_SIZE, -14.5 * CELL_SIZE));
    }

    #[test]
    fn up_points_up_on_screen() {
        assert_eq!(world_offset(Direction::Up), Vec2::Y);
        assert_eq!(world_offset(Direction::Down), Vec2::NEG_Y);
        assert_eq!(world_offset(Direction::Right), Vec2::X);
    }

    #[test]
    fn corner_arms_reach_their_edges() {
        let segment = TrailSegment::corner(Cell::new(3, 3), Direction::Right, Direction::Up);
        assert_eq!(
            segment.glyph(),
            TrailGlyph::Corner(CornerShape::TopLeft)
        );

        let pieces = trail_pieces(&segment);
        assert_eq!(pieces.len(), 2);
        for (offset, size) in pieces {
            let far_edge = offset.abs() + size / 2.0;
            // One axis touches the cell border, the other stays centered.
            assert!(
                (far_edge.x - CELL_SIZE / 2.0).abs() < 1e-4
                    || (far_edge.y - CELL_SIZE / 2.0).abs() < 1e-4
            );
            assert!(offset.x <= 0.0 && offset.y >= 0.0);
        }
    }
}
