use std::thread;

use gridlife::grid::pattern_glider;
use gridlife::{Game, GRID_SIZE, TICK_INTERVAL};

fn main() {
    env_logger::init();

    log::info!("gridlife - edge-bounded Conway's Game of Life core");
    log::info!("Board: {GRID_SIZE}×{GRID_SIZE}, tick: {TICK_INTERVAL:?}");

    let mut game = Game::new();
    game.place_pattern(&pattern_glider(), None);
    log::info!("Seeded a glider, population {}", game.population());

    game.start();
    for _ in 0..10 {
        thread::sleep(TICK_INTERVAL);
        log::info!(
            "Generation {} | population {}",
            game.generation(),
            game.population()
        );
    }
    game.stop();
    log::info!("Stopped at generation {}", game.generation());

    game.reset();
    log::info!(
        "Reset: generation {}, population {}",
        game.generation(),
        game.population()
    );
}
