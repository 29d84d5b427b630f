use std::io::{self, Write};

use log::{debug, error};

use crate::game::{Turn, World};

// --- CommandOutput: one referee command per line, flushed every turn ---
pub struct CommandOutput<W: Write> {
    sink: W,
    lines_written: u64,
}

impl<W: Write> CommandOutput<W> {
    pub fn new(sink: W) -> Self {
        CommandOutput { sink, lines_written: 0 }
    }

    pub fn write_turn(&mut self, turn: &Turn) -> io::Result<()> {
        writeln!(self.sink, "{}", turn).map_err(|e| { error!("Failed to write command: {}", e); e })?;
        self.sink.flush().map_err(|e| { error!("Failed to flush command: {}", e); e })?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Human-readable world dump for the diagnostic log.
pub fn describe_world(world: &World) -> String {
    let player = &world.player;
    let captured = if world.checkpoint.contains(player.location()) { ", inside" } else { "" };
    let boost = if player.boost_available() { "ready" } else { "spent" };
    format!(
        "player {} speed {} boost {} | opponent {} | checkpoint {} ({} away{}) | reported {} at {}°",
        player,
        player.speed() as i32,
        boost,
        world.opponent,
        world.checkpoint,
        player.distance(*world.checkpoint) as i32,
        captured,
        world.direction.magnitude() as i32,
        world.direction.heading() as i32,
    )
}

pub fn log_world(turn_number: u64, world: &World) {
    debug!("--- Turn {} ---", turn_number);
    debug!("{}", describe_world(world));
}
