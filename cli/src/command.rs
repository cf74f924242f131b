use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::{Coord, Coord2};

pub const USAGE: &str = "commands: r ROW COL (reveal), f ROW COL (flag), p (print), h (help), q (quit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Print,
    Help,
    Quit,
}

fn parse_coords<'a>(mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = args.next().context("missing row")?;
    let col = args.next().context("missing column")?;
    if let Some(extra) = args.next() {
        bail!("unexpected argument {extra:?}");
    }
    let row: Coord = row.parse().with_context(|| format!("invalid row {row:?}"))?;
    let col: Coord = col.parse().with_context(|| format!("invalid column {col:?}"))?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        Ok(match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(words)?),
            "f" | "flag" => Command::Flag(parse_coords(words)?),
            "p" | "print" => Command::Print,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => bail!("unknown command {other:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("r 3 4".parse::<Command>().unwrap(), Command::Reveal((3, 4)));
        assert_eq!("  FLAG 0 9 ".parse::<Command>().unwrap(), Command::Flag((0, 9)));
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!("r 3".parse::<Command>().is_err());
        assert!("r 3 4 5".parse::<Command>().is_err());
        assert!("f -1 2".parse::<Command>().is_err());
        assert!("r 256 0".parse::<Command>().is_err());
        assert!("dig 1 1".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
