use std::io::{BufRead, Write};

use anyhow::Context;
use sweeper_core::*;

use crate::command::{Command, USAGE};
use crate::printer::Printer;

/// Feeds commands from `input` into the game until it ends, the input runs
/// out or the player quits.
pub fn play<R: BufRead, W: Write>(game: &mut Game<Printer<W>>, input: R) -> anyhow::Result<()> {
    show_board(game);
    game.observer_mut().message(USAGE);

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Print) => show_board(game),
            Ok(Command::Help) => game.observer_mut().message(USAGE),
            Ok(Command::Reveal(coords)) => match game.reveal(coords) {
                Ok(outcome) => {
                    log::debug!("Reveal {:?}: {:?}", coords, outcome);
                    if outcome.has_update() && !outcome.is_final() {
                        show_board(game);
                    }
                }
                Err(err) => game.observer_mut().message(&format!("{coords:?}: {err}")),
            },
            Ok(Command::Flag(coords)) => match game.toggle_flag(coords) {
                Ok(outcome) => {
                    log::debug!("Flag {:?}: {:?}", coords, outcome);
                    if outcome.has_update() {
                        show_board(game);
                    }
                }
                Err(err) => game.observer_mut().message(&format!("{coords:?}: {err}")),
            },
            Err(err) => game
                .observer_mut()
                .message(&format!("{err:#}\n{USAGE}")),
        }

        game.observer_mut()
            .take_error()
            .context("failed to write output")?;

        if game.is_ended() {
            show_board(game);
            break;
        }
    }

    game.observer_mut()
        .take_error()
        .context("failed to write output")
}

fn show_board<W: Write>(game: &mut Game<Printer<W>>) {
    let drawing = game.board().to_string();
    game.observer_mut().board(&drawing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::OutputFormat;

    fn run(bombs: &[Coord2], format: OutputFormat, input: &str) -> (Game<Printer<Vec<u8>>>, String) {
        let board = Board::from_bomb_coords((3, 3), bombs).unwrap();
        let mut game = Game::with_observer(board, Printer::new(Vec::new(), format));
        play(&mut game, input.as_bytes()).unwrap();
        let out = std::mem::replace(game.observer_mut(), Printer::new(Vec::new(), format));
        (game, String::from_utf8(out.into_inner()).unwrap())
    }

    #[test]
    fn text_session_reports_win() {
        let (game, out) = run(&[(0, 0)], OutputFormat::Text, "r 2 2\n");

        assert_eq!(game.state(), GameState::Won);
        assert!(out.contains("Congratulations"));
        assert!(out.ends_with(".1 \n11 \n   \n"));
    }

    #[test]
    fn text_session_survives_bad_input() {
        let (game, out) = run(&[(0, 0)], OutputFormat::Text, "x\nr 9 9\nf 0 0\nq\nr 2 2\n");

        assert!(!game.is_ended());
        assert!(out.contains("unknown command"));
        assert!(out.contains("out of bounds"));
        assert!(out.contains("Bombs left: 0"));
        assert!(game.board()[(0, 0)].is_flagged());
    }

    #[test]
    fn json_session_emits_notifications() {
        let (game, out) = run(&[(0, 0)], OutputFormat::Json, "f 1 1\nr 0 0\n");

        assert_eq!(game.state(), GameState::Lost);
        let events: Vec<Notification> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            events,
            [
                Notification::CellChanged {
                    row: 1,
                    col: 1,
                    state: DisplayState::Flagged
                },
                Notification::FlagBudgetChanged { budget: 0 },
                Notification::CellChanged {
                    row: 0,
                    col: 0,
                    state: DisplayState::ExposedBomb
                },
                Notification::GameEnded { won: false },
            ]
        );
    }
}
