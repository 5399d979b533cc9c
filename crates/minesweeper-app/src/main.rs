//! Headless demo driver: runs a short scripted session against the game
//! loop and logs what happened. A real front end would replace the
//! script with a window's pointer events and draw the snapshots.

use std::sync::{Arc, Mutex};
use std::thread::sleep;
use std::time::Duration;

use minesweeper_app::game_loop::spawn_game_loop;
use minesweeper_app::input::Viewport;
use minesweeper_app::state::GameLoopCommand;
use minesweeper_core::commands::PlayerCommand;
use minesweeper_sim::engine::SimConfig;

fn main() {
    env_logger::init();

    let viewport = Viewport::new(800.0, 600.0);
    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(SimConfig::default(), Arc::clone(&latest_snapshot));

    log::info!("Space Minesweeper starting (headless demo)");
    cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::StartGame))
        .expect("game loop thread gone");

    // Scripted flight plan: aim, then fly to a few points while mines
    // accumulate and the population cap starts detonating the oldest.
    let waypoints: [(f32, f32); 4] = [
        (600.0, 150.0),
        (200.0, 450.0),
        (650.0, 500.0),
        (400.0, 300.0),
    ];
    for (x, y) in waypoints {
        let _ = cmd_tx.send(GameLoopCommand::Player(viewport.pointer_moved(x, y)));
        sleep(Duration::from_millis(300));
        let _ = cmd_tx.send(GameLoopCommand::Player(viewport.pointer_pressed(x, y)));
        sleep(Duration::from_secs(2));
    }

    if let Some(snapshot) = latest_snapshot.lock().ok().and_then(|s| s.clone()) {
        log::info!(
            "session summary: frame {}, {:.1}s elapsed, {} mines live, {} explosions in flight",
            snapshot.time.frame,
            snapshot.time.elapsed_secs,
            snapshot.mines.len(),
            snapshot.explosions.len()
        );
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
