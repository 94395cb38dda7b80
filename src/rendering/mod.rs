use crate::application::Simulation;
use macroquad::prelude::*;

/// Upper bound on the drawn cell size; narrow rows keep cells square
/// instead of stretching across the window.
pub const MAX_CELL_SIZE: f32 = 10.0;

/// Cell size that fits the row across the window width
fn cell_size_for(row_len: usize) -> f32 {
    (screen_width() / row_len.max(1) as f32).min(MAX_CELL_SIZE)
}

/// Draw every produced row as a band of cells, newest at the bottom.
/// Off cells stay the background color ("0" is white in the classic
/// rendering); on cells are black. Once the output outgrows the
/// window the view follows the newest rows, and rows scrolled out of
/// sight are culled rather than drawn.
pub fn draw_rows(sim: &Simulation) {
    let cell = cell_size_for(sim.current.len());
    let total_height = sim.history.len() as f32 * cell;
    let offset_y = (total_height - screen_height()).max(0.0);
    let first_visible = (offset_y / cell) as usize;

    for (y, row) in sim.history.iter().enumerate().skip(first_visible) {
        let screen_y = y as f32 * cell - offset_y;
        if screen_y > screen_height() {
            break;
        }

        for (x, state) in row.cells().iter().enumerate() {
            if state.is_on() {
                draw_rectangle(x as f32 * cell, screen_y, cell, cell, BLACK);
            }
        }
    }
}

/// Draw the status overlay with rule and generation info
pub fn draw_status(sim: &Simulation) {
    let labels = [
        (format!("Rule {}", sim.table.rule()), 18.0),
        (format!("Generation: {}", sim.generation), 14.0),
        (
            format!("{} | Step: {:.2}ms", sim.algorithm.name(), sim.last_step_time_ms),
            12.0,
        ),
    ];

    let mut y = 22.0;
    for (text, size) in labels {
        draw_text(&text, 8.0, y, size, DARKGRAY);
        y += size + 4.0;
    }
}
