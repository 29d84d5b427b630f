use std::fmt;
use std::io::{self, BufRead, Write};

use log::info;

use crate::constants::*;
use crate::entities::{Pod, Thrust};
use crate::rendering::{self, CommandOutput};
use crate::terminal_io::{TokenReader, TurnInput};
use crate::types::{Checkpoint, Point, Vector};

/// Snapshot of everything the strategy may look at for one turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct World {
    pub player: Pod,
    pub opponent: Pod,
    pub checkpoint: Checkpoint,
    pub direction: Vector,
}

/// Target point and thrust to send back to the referee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub target: Point,
    pub thrust: Thrust,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.thrust)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoostPolicy {
    /// Boost on the first turn, full thrust afterwards.
    #[default]
    OneShot,
    /// Ask for a boost every turn, whether or not one is left.
    Always,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Aim against the projected drift so it carries the pod onto the checkpoint.
    DriftCompensation { boost: BoostPolicy },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::DriftCompensation { boost: BoostPolicy::default() }
    }
}

impl Strategy {
    pub fn decide(&self, world: World) -> Turn {
        match *self {
            Strategy::DriftCompensation { boost } => {
                let projected_velocity = world.player.velocity.to_point().scale(DRIFT_PROJECTION_TURNS);
                let thrust = match boost {
                    BoostPolicy::OneShot => world.player.available_thrust(),
                    BoostPolicy::Always => Thrust::Boost,
                };
                Turn {
                    target: world.checkpoint - projected_velocity,
                    thrust,
                }
            }
        }
    }
}

pub struct Game<R: BufRead, W: Write> {
    input: TokenReader<R>,
    output: CommandOutput<W>,
    strategy: Strategy,
    player: Pod,
    opponent: Pod,
    checkpoint: Checkpoint,
    direction: Vector,
    max_turns: Option<u64>,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(input: R, output: W, strategy: Strategy, max_turns: Option<u64>) -> Self {
        Game {
            input: TokenReader::new(input),
            output: CommandOutput::new(output),
            strategy,
            player: Pod::new(),
            opponent: Pod::new(),
            checkpoint: Checkpoint::default(),
            direction: Vector::default(),
            max_turns,
        }
    }

    /// Plays turns until `max_turns` is reached. Running out of input is
    /// reported as an `UnexpectedEof` error for the caller to treat as shutdown.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            "Race started with {:?} (pod radius {}, checkpoint radius {})",
            self.strategy,
            Pod::RADIUS,
            Checkpoint::RADIUS
        );
        while self.max_turns.is_none_or(|limit| self.turns_played() < limit) {
            self.play_turn()?;
        }
        info!("Turn limit reached after {} turns", self.turns_played());
        Ok(())
    }

    pub fn play_turn(&mut self) -> io::Result<Turn> {
        let input = self.input.read_turn()?;
        self.update(input);

        let world = self.world();
        rendering::log_world(self.turns_played() + 1, &world);

        let turn = self.strategy.decide(world);
        self.output.write_turn(&turn)?;
        if turn.thrust.is_boost() {
            self.player.consume_boost();
        }
        Ok(turn)
    }

    fn update(&mut self, input: TurnInput) {
        self.player.observe(input.player);
        self.checkpoint = input.checkpoint;
        self.direction = input.direction;
        self.opponent.observe(input.opponent);
    }

    pub fn world(&self) -> World {
        World {
            player: self.player,
            opponent: self.opponent,
            checkpoint: self.checkpoint,
            direction: self.direction,
        }
    }

    pub fn turns_played(&self) -> u64 {
        self.output.lines_written()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}
