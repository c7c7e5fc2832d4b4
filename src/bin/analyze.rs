use std::env;
use std::process::ExitCode;
use std::time::Duration;

use chess_search::board::{Board, START_FEN};
use chess_search::{EngineConfig, EngineController};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("usage: analyze [\"<fen>\"] [budget_ms]");
        return ExitCode::FAILURE;
    }

    let fen = args.get(1).map_or(START_FEN, String::as_str);
    let board = match Board::try_from_fen(fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid FEN: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = EngineConfig::default();
    let budget = match args.get(2) {
        Some(ms) => match ms.parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                eprintln!("invalid budget: {ms}");
                return ExitCode::FAILURE;
            }
        },
        None => config.default_budget(),
    };

    let mut engine = EngineController::with_config(config);
    engine.set_board(board);
    match engine.best_move(budget) {
        Ok(Some(mv)) => {
            println!("{mv:?}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("no legal moves");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            ExitCode::FAILURE
        }
    }
}
