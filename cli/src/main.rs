use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use sweeper_core::*;

mod command;
mod logging;
mod printer;
mod session;

use printer::{OutputFormat, Printer};

#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::BEGINNER,
            Preset::Intermediate => GameConfig::INTERMEDIATE,
            Preset::Expert => GameConfig::EXPERT,
        }
    }
}

/// Play a game of minesweeper in the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size preset, individual dimensions override it
    #[arg(long, value_enum, default_value_t)]
    preset: Preset,
    /// Number of columns
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    width: Option<Coord>,
    /// Number of rows
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    height: Option<Coord>,
    /// Number of bombs
    #[arg(long)]
    bombs: Option<CellCount>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Output format for notifications
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
    #[command(flatten)]
    verbosity: Verbosity,
}

impl Cli {
    fn config(&self) -> Result<GameConfig> {
        let preset = GameConfig::from(self.preset);
        let height = self.height.unwrap_or(preset.height());
        let width = self.width.unwrap_or(preset.width());
        GameConfig::new((height, width), self.bombs.unwrap_or(preset.bombs))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity.log_level_filter());

    let config = cli.config().context("invalid board configuration")?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Starting {:?} with seed {}", config, seed);

    let printer = Printer::new(io::stdout().lock(), cli.format);
    let mut game = Game::generate(config, RandomMinefieldGenerator::new(seed), printer)?;
    session::play(&mut game, io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_beginner() {
        let cli = Cli::parse_from(["sweeper"]);

        assert_eq!(cli.config(), Ok(GameConfig::BEGINNER));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn dimensions_override_preset() {
        let cli = Cli::parse_from(["sweeper", "--preset", "expert", "--width", "8", "--bombs", "5"]);

        assert_eq!(cli.config(), Ok(GameConfig::new_unchecked((16, 8), 5)));
    }

    #[test]
    fn rejects_invalid_configuration() {
        let cli = Cli::parse_from(["sweeper", "--width", "2", "--height", "2", "--bombs", "4"]);
        assert_eq!(cli.config(), Err(GameError::TooManyBombs));

        assert!(Cli::try_parse_from(["sweeper", "--width", "0"]).is_err());
    }

    #[test]
    fn parses_json_format_and_seed() {
        let cli = Cli::parse_from(["sweeper", "--format", "json", "--seed", "12", "-vv"]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.seed, Some(12));
    }
}
