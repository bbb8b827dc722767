use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use connect_four_minimax::ai::{Agent, MinimaxAgent, RandomAgent};
use connect_four_minimax::config::{AppConfig, PlayerKind};
use connect_four_minimax::game::{Game, GameOutcome, Player};

/// Play Connect Four in the terminal against a minimax engine.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Who plays first
    #[arg(long, value_enum)]
    player_one: Option<PlayerKind>,

    /// Who plays second
    #[arg(long, value_enum)]
    player_two: Option<PlayerKind>,

    /// Override search depth for both engines
    #[arg(long)]
    depth: Option<i32>,

    /// Search root moves in parallel
    #[arg(long)]
    parallel: bool,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Write debug-level logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

enum Seat {
    Human,
    Engine(Box<dyn Agent>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_file.as_deref())?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(kind) = cli.player_one {
        config.players.one = kind;
    }
    if let Some(kind) = cli.player_two {
        config.players.two = kind;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.parallel {
        config.search.parallel = true;
    }
    if cli.seed.is_some() {
        config.players.seed = cli.seed;
    }
    config.validate().context("validating configuration")?;

    let mut seats = [
        make_seat(config.players.one, &config, 0),
        make_seat(config.players.two, &config, 1),
    ];
    info!(
        "starting game: {:?} vs {:?}, depth {}",
        config.players.one, config.players.two, config.search.depth
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    while !game.is_terminal() {
        println!("{}\n", game.position());
        let player = game.to_move();
        let column = match &mut seats[seat_index(player)] {
            Seat::Human => prompt_column(&mut input, &game, player)?,
            Seat::Engine(agent) => {
                let column = agent
                    .select_action(&game)
                    .with_context(|| format!("{} failed to choose a move", agent.name()))?;
                if let Some(score) = agent.last_score() {
                    println!("Player {} score: {}", player.token(), score);
                }
                println!("Move: {column}");
                column
            }
        };
        game.apply_move_mut(column)
            .with_context(|| format!("applying column {column}"))?;
    }

    println!("{}\n", game.position());
    let result = match game.outcome() {
        Some(GameOutcome::Winner(player)) => format!("{} wins", player.name()),
        Some(GameOutcome::Draw) => "Draw".to_string(),
        None => unreachable!("loop exits only on a terminal game"),
    };
    println!("{result}");
    info!("game over after {} moves: {}", game.history().len(), result);
    Ok(())
}

fn seat_index(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

fn make_seat(kind: PlayerKind, config: &AppConfig, offset: u64) -> Seat {
    match kind {
        PlayerKind::Human => Seat::Human,
        PlayerKind::Minimax => Seat::Engine(Box::new(
            MinimaxAgent::new(config.search.depth)
                .with_window(config.search.alpha, config.search.beta)
                .with_parallel(config.search.parallel),
        )),
        PlayerKind::Random => Seat::Engine(Box::new(match config.players.seed {
            Some(seed) => RandomAgent::with_seed(seed.wrapping_add(offset)),
            None => RandomAgent::new(),
        })),
    }
}

/// Read a column from stdin, re-prompting until a playable one is entered.
fn prompt_column(input: &mut impl BufRead, game: &Game, player: Player) -> Result<usize> {
    let legal = game.legal_actions();
    loop {
        print!("{} column (0-6): ", player.name());
        io::stdout().flush().context("flushing stdout")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("reading column")? == 0 {
            bail!("input closed before the game finished");
        }
        match line.trim().parse::<usize>() {
            Ok(column) if legal.contains(&column) => return Ok(column),
            Ok(column) => println!("column {column} is not playable"),
            Err(_) => println!("enter a number between 0 and 6"),
        }
    }
}

fn setup_logging(log_file: Option<&Path>) -> Result<()> {
    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    let log_dispatcher = if let Some(path) = log_file {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(path).context("opening log file")?),
            )
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Warn)
                    .chain(io::stderr()),
            )
    } else {
        log_dispatcher
            .level(log::LevelFilter::Warn)
            .chain(io::stderr())
    };

    log_dispatcher.apply().context("installing logger")?;
    Ok(())
}
