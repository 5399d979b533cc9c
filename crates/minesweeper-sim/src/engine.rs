//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs
//! all systems once per frame, and produces `GameStateSnapshot`s.
//! Completely headless (no renderer dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use minesweeper_core::commands::PlayerCommand;
use minesweeper_core::components::{Helm, Ship};
use minesweeper_core::enums::GamePhase;
use minesweeper_core::events::GameEvent;
use minesweeper_core::state::GameStateSnapshot;
use minesweeper_core::types::{Position, Rotation, SimTime};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    /// Latest pointer position in normalized device coordinates.
    /// Written by `PointerMoved`, read as the ship's aim reference.
    pointer: Position,
    /// Seconds since the last mine spawn.
    spawn_timer: f32,
    /// Creation-order counter for mines.
    next_mine_seq: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            pointer: Position::default(),
            spawn_timer: 0.0,
            next_mine_seq: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next update boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    pub fn update(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the latest stored pointer position.
    pub fn pointer(&self) -> Position {
        self.pointer
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PointerMoved { position } => {
                self.pointer = position;
            }
            PlayerCommand::PointerPressed { position } => {
                // Face the pointer position stored by the last move, not
                // the pressed position. The original game reads the aim
                // reference before it is updated, and that ordering is
                // observable behavior.
                let aim = self.pointer;
                for (_entity, (pos, rot, helm, _ship)) in self
                    .world
                    .query_mut::<(&Position, &mut Rotation, &mut Helm, &Ship)>()
                {
                    helm.target = Some(position);
                    if let Some(bearing) = pos.bearing_to(&aim) {
                        rot.0 = bearing;
                    }
                }
            }
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    world_setup::setup_session(&mut self.world, &mut self.rng);
                    self.time = SimTime::default();
                    self.spawn_timer = 0.0;
                    self.next_mine_seq = 0;
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order. Motion runs before spawning, so a newly
    /// spawned mine starts homing on the following frame.
    fn run_systems(&mut self, dt: f32) {
        // 1. Ship seek-then-aim
        systems::ship_motion::run(&mut self.world, self.pointer, dt);
        // 2. Mine pure pursuit
        systems::mine_homing::run(&mut self.world, dt);
        // 3. Explosion growth and expiry
        systems::explosion::run(&mut self.world, dt, &mut self.despawn_buffer, &mut self.events);
        // 4. Timed spawning + population cap eviction
        systems::mine_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            &mut self.next_mine_seq,
            dt,
            &mut self.events,
        );
    }
}
