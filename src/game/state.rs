use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{DROP_INTERVAL_MS, PREVIEW_COUNT};
use crate::game::arena::{collides, empty_arena, merge, sweep, Arena};
use crate::game::piece::{Piece, PieceKind};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

pub struct Game {
    pub arena: Arena,
    pub active: Piece,
    pub next: Vec<PieceKind>,
    pub score: u32,
    pub phase: Phase,
    drop_interval: Duration,
    drop_accum: Duration,
    last_time: Instant,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Build a game around a caller-supplied generator, so tests can seed
    /// the piece sequence.
    pub fn with_rng(mut rng: StdRng) -> Self {
        let first = Self::draw(&mut rng);
        let mut game = Self {
            arena: empty_arena(),
            active: Piece::new(first),
            next: Vec::new(),
            score: 0,
            phase: Phase::Running,
            drop_interval: Duration::from_millis(DROP_INTERVAL_MS),
            drop_accum: Duration::ZERO,
            last_time: Instant::now(),
            rng,
        };
        game.fill_queue();
        game
    }

    fn draw(rng: &mut StdRng) -> PieceKind {
        PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
    }

    fn fill_queue(&mut self) {
        while self.next.len() < PREVIEW_COUNT {
            let kind = Self::draw(&mut self.rng);
            self.next.push(kind);
        }
    }

    /// Promotes the preview piece to active and refills the queue. If the
    /// fresh piece already overlaps settled cells there is no legal spawn:
    /// the game is over, and the colliding piece stays put so the final
    /// frame still shows it.
    fn spawn_piece(&mut self) {
        let kind = self.next.remove(0);
        self.fill_queue();
        self.active = Piece::new(kind);

        if collides(&self.arena, &self.active) {
            self.phase = Phase::GameOver;
        }
    }

    fn lock_piece(&mut self) {
        merge(&mut self.arena, &self.active);
        self.score += sweep(&mut self.arena);
        self.spawn_piece();
    }

    /// Horizontal step; `dir` is -1 or +1. Undone if it would collide.
    pub fn move_piece(&mut self, dir: i32) {
        if self.phase != Phase::Running {
            return;
        }
        self.active.x += dir;
        if collides(&self.arena, &self.active) {
            self.active.x -= dir;
        }
    }

    /// Clockwise rotation with the alternating wall-kick search: try net
    /// offsets 1, -1, 2, -2, ... and take the first legal one. Once the
    /// raw offset exceeds the shape width the rotation is reverted and the
    /// piece is left exactly where it was.
    pub fn rotate_piece(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let original_x = self.active.x;
        let width = self.active.width();
        self.active = self.active.rotated();

        let mut offset = 1;
        while collides(&self.arena, &self.active) {
            self.active.x += offset;
            offset = -(offset + offset.signum());
            if offset > width {
                // Three more clockwise turns restore the original orientation
                self.active = self.active.rotated().rotated().rotated();
                self.active.x = original_x;
                return;
            }
        }
    }

    /// One row down; a blocked drop locks the piece (merge, sweep, spawn).
    /// Either way the gravity accumulator starts over.
    pub fn soft_drop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.active.y += 1;
        if collides(&self.arena, &self.active) {
            self.active.y -= 1;
            self.lock_piece();
        }
        self.drop_accum = Duration::ZERO;
    }

    /// Straight to the lowest legal row, then an unconditional lock.
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        while !collides(&self.arena, &self.active) {
            self.active.y += 1;
        }
        self.active.y -= 1;
        self.lock_piece();
        self.drop_accum = Duration::ZERO;
    }

    /// Advances simulated time to `now`. Gravity only accumulates while
    /// running; a full interval triggers an automatic soft drop.
    pub fn update(&mut self, now: Instant) {
        let delta = now.saturating_duration_since(self.last_time);
        self.last_time = now;

        if self.phase == Phase::Running {
            self.drop_accum += delta;
            if self.drop_accum > self.drop_interval {
                self.soft_drop();
            }
        }
    }

    /// Running <-> Paused. Resuming re-captures the clock so time spent
    /// paused never counts toward the next drop. Ignored at game over.
    pub fn toggle_pause(&mut self, now: Instant) {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => {
                self.phase = Phase::Running;
                self.last_time = now;
            }
            Phase::GameOver => {}
        }
    }

    /// Back to a blank arena and zero score, with a fresh spawn.
    pub fn restart(&mut self, now: Instant) {
        self.arena = empty_arena();
        self.score = 0;
        self.phase = Phase::Running;
        self.spawn_piece();
        self.drop_accum = Duration::ZERO;
        self.last_time = now;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
