use std::io::Write;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use chess_analyzer::board::{
    evaluate, find_best_move_with_config, Move, Position, SearchConfig, DEFAULT_DEPTH, START_FEN,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fixed-depth chess position analyzer", long_about = None)]
struct Args {
    /// Position record (FEN) to start from
    #[arg(long, default_value = START_FEN)]
    fen: String,

    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Number of engine moves to play
    #[arg(long, default_value_t = 1)]
    plies: u32,

    /// Moves in coordinate notation (e2e4,e7e5) applied before searching
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,

    /// Add the mobility term to the evaluation
    #[arg(long)]
    mobility: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    })
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut position = Position::from_fen(&args.fen);

    for text in &args.moves {
        let mv: Move = text
            .parse()
            .with_context(|| format!("invalid move '{text}'"))?;
        ensure!(
            position.generate_moves().contains(&mv),
            "move {mv} is not available in {}",
            position.to_fen()
        );
        position = position.apply_move(mv);
    }

    let config = SearchConfig {
        depth: args.depth,
        use_mobility: args.mobility,
    };
    log::debug!("start {} eval {}", position.to_fen(), evaluate(&position));

    for _ in 0..args.plies {
        if position.generate_moves().is_empty() {
            println!("Game Over.");
            break;
        }

        let result = find_best_move_with_config(&position, &config);
        let Some(best) = result.best_move else {
            println!("No valid moves.");
            break;
        };
        position = position.apply_move(best);

        println!("Move: {best}");
        println!("{}", result.score);
    }

    log::debug!("final {}", position.to_fen());
    Ok(())
}
