use std::{
    io::{BufRead, Write},
    str::FromStr,
    time::Duration,
};

use anyhow::{Context, bail};
use libgame::{board::GameBoard, seed::SeedMode};
use log::{debug, warn};
use strum::VariantNames;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Settings taken from the command line: `[size|-] [seed|-] [interval_ms]`.
/// Anything left out (or given as `-`) is asked for interactively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub size: Option<usize>,
    pub seed: Option<SeedMode>,
    pub interval: Duration,
}

impl ClientConfig {
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args
            .into_iter()
            .map(|arg| (arg != "-").then_some(arg));

        let size = args
            .next()
            .flatten()
            .map(|size| size.parse::<usize>().with_context(|| format!("Invalid size {size:?}")))
            .transpose()?;

        let seed = args
            .next()
            .flatten()
            .map(|seed| {
                SeedMode::from_str(&seed).with_context(|| {
                    format!("Invalid seed {seed:?}, expected one of {:?}", SeedMode::VARIANTS)
                })
            })
            .transpose()?;

        let interval = args
            .next()
            .flatten()
            .map(|millis| {
                millis
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .with_context(|| format!("Invalid interval {millis:?}"))
            })
            .transpose()?
            .unwrap_or(DEFAULT_INTERVAL);

        if let Some(extra) = args.next() {
            bail!("Unexpected argument {:?}", extra.unwrap_or_else(|| "-".to_owned()));
        }

        Ok(Self {
            size,
            seed,
            interval,
        })
    }

    pub fn board<R, W>(&self, input: &mut R, output: &mut W) -> anyhow::Result<GameBoard>
    where
        R: BufRead,
        W: Write,
    {
        match self.size {
            Some(size) => GameBoard::new(size).context("Creating board"),
            None => prompt_board(input, output, "Enter the board width or height > "),
        }
    }

    pub fn seed_mode<R, W>(&self, input: &mut R, output: &mut W) -> anyhow::Result<SeedMode>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(seed) = self.seed {
            return Ok(seed);
        }

        let choice = prompt_choice(input, output, "Enter seed > ", SeedMode::VARIANTS)?;
        SeedMode::from_str(&choice).context("Parsing seed")
    }
}

/// Asks for a board size until one parses and yields a valid board.
pub fn prompt_board<R, W>(input: &mut R, output: &mut W, message: &str) -> anyhow::Result<GameBoard>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, message)?;

        let size = match line.parse::<usize>() {
            Ok(size) => size,
            Err(e) => {
                debug!("Rejected size {line:?}: {e}");
                continue;
            }
        };

        match GameBoard::new(size) {
            Ok(board) => return Ok(board),
            Err(e) => warn!("{e}"),
        }
    }
}

/// Asks until the answer is one of `accepted`. An empty `accepted` takes any answer.
pub fn prompt_choice<R, W>(
    input: &mut R,
    output: &mut W,
    message: &str,
    accepted: &[&str],
) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, message)?;

        if accepted.is_empty() || accepted.contains(&line.as_str()) {
            return Ok(line);
        }

        debug!("Rejected choice {line:?}, expected one of {accepted:?}");
    }
}

fn prompt_line<R, W>(input: &mut R, output: &mut W, message: &str) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Reading input")? == 0 {
        bail!("Input closed");
    }

    Ok(line.trim().to_owned())
}
