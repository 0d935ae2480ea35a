use clap::Parser;
use log::info;
use rand::RngExt;

use twenty_forty_eight::{
    is_session_over, logging::setup_logging, new_session, new_session_seeded, play_move,
    Direction, GameOverRule, Result,
};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum GameOverRuleCli {
    Literal,
    Strict,
}

impl From<GameOverRuleCli> for GameOverRule {
    fn from(cli: GameOverRuleCli) -> Self {
        match cli {
            GameOverRuleCli::Literal => GameOverRule::Literal,
            GameOverRuleCli::Strict => GameOverRule::Strict,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twenty_forty_eight")]
struct Config {
    /// Board height
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Board width
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Seed for a reproducible run; omitted means entropy-seeded
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Stop after this many moves even if the game is not over
    #[arg(short = 'm', long, default_value_t = 10_000)]
    max_moves: usize,

    /// Game-over semantics (literal keeps the zero-adjacency quirk)
    #[arg(long, value_enum, default_value = "literal")]
    rule: GameOverRuleCli,
}

fn main() -> Result<()> {
    setup_logging();
    let config = Config::parse();

    let mut session = match config.seed {
        Some(seed) => new_session_seeded(config.height, config.width, seed)?,
        None => new_session(config.height, config.width)?,
    };
    session.rule = config.rule.clone().into();
    info!(
        "starting {}x{} autoplay, rule {:?}, seed {:?}",
        config.height, config.width, session.rule, config.seed
    );

    let mut rng = rand::rng();
    let mut moves_played = 0;
    for _ in 0..config.max_moves {
        if is_session_over(&session) {
            break;
        }
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let changed = play_move(&mut session, direction)?;
        if changed {
            moves_played += 1;
            info!("move {moves_played}: {direction:?}");
        }
    }

    info!("finished after {moves_played} moves, game over: {}", is_session_over(&session));
    println!("{}", session.board);
    Ok(())
}
