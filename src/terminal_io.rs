use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::types::{Checkpoint, Point, Vector};

/// One turn's worth of referee input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnInput {
    pub player: Point,
    pub checkpoint: Checkpoint,
    pub direction: Vector,
    pub opponent: Point,
}

// --- TokenReader: whitespace-delimited tokens, lines may split anywhere ---
pub struct TokenReader<R: BufRead> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        TokenReader { source, pending: VecDeque::new() }
    }

    fn next_token(&mut self, field: &str) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input ended before {}", field),
                ));
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn parse<T: FromStr>(&mut self, field: &str) -> io::Result<T> {
        let token = self.next_token(field)?;
        token.parse::<T>().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid {}: {:?}", field, token),
            )
        })
    }

    fn read_point(&mut self, field: &str) -> io::Result<Point> {
        let x = self.parse::<i32>(field)?;
        let y = self.parse::<i32>(field)?;
        Ok(Point::new(x, y))
    }

    pub fn read_turn(&mut self) -> io::Result<TurnInput> {
        let player = self.read_point("player position")?;
        let checkpoint = Checkpoint::from(self.read_point("checkpoint position")?);
        let magnitude = self.parse::<f64>("checkpoint distance")?;
        let angle = self.parse::<f64>("checkpoint angle")?;
        let opponent = self.read_point("opponent position")?;
        Ok(TurnInput {
            player,
            checkpoint,
            direction: Vector::from_polar(magnitude, angle),
            opponent,
        })
    }
}

pub fn is_end_of_input(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::UnexpectedEof
}
