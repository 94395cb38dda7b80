use clap::Parser;
use elementary::{SimConfig, Simulation, rendering};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Elementary Cellular Automaton".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = SimConfig::parse();

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    loop {
        sim = sim.tick(get_frame_time());

        clear_background(WHITE);
        rendering::draw_rows(&sim);
        rendering::draw_status(&sim);

        next_frame().await;
    }
}
