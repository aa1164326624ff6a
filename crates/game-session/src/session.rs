use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use twenty48_core::engine::{Game, Move};

/// Everything a caller needs right after one swipe: whether the board
/// changed, the running score, and the terminal checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: bool,
    pub score: u64,
    pub game_over: bool,
    /// Latched on the first appearance of a 2048 tile; stays set for the
    /// rest of the game even if the tile later merges away. The engine's
    /// own predicate stays live.
    pub won: bool,
}

/// One game driven a move at a time, the way a presentation layer would:
/// swipe, read back the outcome, and only then decide what to show.
///
/// The session owns its RNG (seeded, so whole games replay deterministically)
/// and serializes moves by construction: `swipe` takes `&mut self`.
pub struct GameSession {
    game: Game,
    rng: StdRng,
    won: bool,
}

impl GameSession {
    /// Start a session with a fresh game, seeding the RNG for replayable
    /// spawns.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = Game::new(&mut rng);
        GameSession {
            game,
            rng,
            won: false,
        }
    }

    /// Start a session with an OS-entropy RNG.
    pub fn from_entropy() -> Self {
        let mut rng = StdRng::from_entropy();
        let game = Game::new(&mut rng);
        GameSession {
            game,
            rng,
            won: false,
        }
    }

    /// Apply one swipe and report the resulting state snapshot.
    pub fn swipe(&mut self, direction: Move) -> MoveOutcome {
        let moved = self.game.apply_move(direction, &mut self.rng);
        if moved && self.game.has_won() {
            self.won = true;
        }
        MoveOutcome {
            moved,
            score: self.game.score(),
            game_over: self.game.is_game_over(),
            won: self.won,
        }
    }

    /// The game under the session, for grid/score reads.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Start over with a fresh game; the win latch clears.
    pub fn restart(&mut self) {
        self.game.reset(&mut self.rng);
        self.won = false;
    }
}

/// Summary of one finished self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub seed: u64,
    pub score: u64,
    pub highest_tile: u32,
    /// Successful moves only; swipes that changed nothing are not counted.
    pub steps: u64,
    pub won: bool,
}

/// Play one game with uniformly random moves until no move is legal.
///
/// Directions draw from their own seeded stream so the policy and the tile
/// spawns stay independent; the same seed replays the same game.
pub fn play_random_game(seed: u64) -> GameOutcome {
    let mut session = GameSession::new(seed);
    let mut dir_rng = StdRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut steps = 0u64;
    let mut won = false;
    loop {
        let direction = Move::ALL[dir_rng.gen_range(0..Move::ALL.len())];
        let outcome = session.swipe(direction);
        if outcome.moved {
            steps += 1;
        }
        won = outcome.won;
        if outcome.game_over {
            break;
        }
    }
    GameOutcome {
        seed,
        score: session.game().score(),
        highest_tile: session.game().highest_tile(),
        steps,
        won,
    }
}
