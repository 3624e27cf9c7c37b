//! Gridtac - N-by-N tic-tac-toe in the terminal.
//!
//! A thin presentation loop over the engine: renders the grid, forwards
//! cell indices from stdin, and persists scores between sessions.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridtac::{Cell, FileStore, GameConfig, GameResult, ScoreStorage, TicTacToe};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            let config = GameConfig::new(cli.field_size);
            match cli.win_length {
                Some(length) => config.with_win_combo_length(length),
                None => config,
            }
        }
    };

    let mut game = TicTacToe::new(&config)?;
    let mut storage = ScoreStorage::new(FileStore::open(&cli.scores)?);
    storage.sync_scores(game.score_board_mut());

    info!(
        field_size = game.field_size(),
        win_combo_length = game.win_combo_length(),
        "Game ready"
    );

    println!(
        "Gridtac: {0}x{0} board, {1} in a row wins.",
        game.field_size(),
        game.win_combo_length()
    );
    println!("Enter a cell index (0-{}), or 'reset', 'scores', 'quit'.", game.board().cell_count() - 1);
    print_scores(&game);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(&game);
        prompt(&game)?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            "r" | "reset" => {
                game.reset_game();
                continue;
            }
            "scores" => {
                print_scores(&game);
                continue;
            }
            "" => continue,
            _ => {}
        }

        let Ok(position) = input.parse::<usize>() else {
            println!("Enter a cell index, 'reset', 'scores', or 'quit'.");
            continue;
        };

        match game.make_move(position) {
            Ok(None) => {}
            Ok(Some(result)) => {
                print_board(&game);
                announce(&game, &result);
                storage.save_scores(game.score_board())?;
                println!("Type 'reset' for the next round.");
            }
            // A stray move against a finished or occupied board is not
            // user-fatal; drop it like the browser UI drops a bad click.
            Err(err) => {
                debug!(error = %err, position, "Ignoring illegal move");
            }
        }
    }

    storage.save_scores(game.score_board())?;
    Ok(())
}

fn prompt(game: &TicTacToe) -> Result<()> {
    if game.is_over() {
        print!("> ");
    } else {
        print!("{}> ", game.player(game.current_player()).symbol());
    }
    std::io::stdout().flush()?;
    Ok(())
}

fn print_board(game: &TicTacToe) {
    let size = game.field_size();
    let mut out = String::new();

    for row in 0..size {
        for col in 0..size {
            let index = row * size + col;
            match game.board().get(index) {
                Some(Cell::Occupied(slot)) => out.push_str(game.player(slot).symbol()),
                _ => out.push('.'),
            }
            out.push(' ');
        }
        out.push('\n');
    }

    println!("{out}");
}

fn announce(game: &TicTacToe, result: &GameResult) {
    match result {
        GameResult::Win { player, combination } => {
            println!(
                "{} wins with {:?}!",
                game.player(*player).symbol(),
                combination
            );
        }
        GameResult::Draw => println!("It's a draw!"),
    }
    print_scores(game);
}

fn print_scores(game: &TicTacToe) {
    let scores = game.score_board().scores();
    println!(
        "Scores: {} {} - {} {} - draws {}",
        game.first_player().symbol(),
        scores.first_player_score,
        game.second_player().symbol(),
        scores.second_player_score,
        scores.draw_score
    );
}
