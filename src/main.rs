use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use rust_2048::{Error, GameConfig, PlayerKind, RunReport, RunnerConfig, RunnerKind, SpawnPolicy};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play or simulate 2048 on arbitrary board sizes")]
struct Cli {
    /// Width of the playing board
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Height of the playing board
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Power of 2 required to win (at most 13)
    #[arg(long = "win-power", default_value_t = 11, value_parser = clap::value_parser!(u32).range(0..=13))]
    win_power: u32,

    /// Random tiles added per board-changing move
    #[arg(long = "tiles-per-move", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    tiles_per_move: u32,

    /// Apply --tiles-per-move after every move, or only once at start
    #[arg(long = "start-only")]
    start_only: bool,

    /// Player strategy: console, random or greedy
    #[arg(long, default_value = "console")]
    player: PlayerKind,

    /// Runner: single, untilwin, multiwin or parallel
    #[arg(long, default_value = "single")]
    runner: RunnerKind,

    /// Wins to collect with the multiwin runner
    #[arg(long, default_value_t = 10)]
    wins: u64,

    /// Worker threads for the parallel runner (0 = one per core)
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// Stop repeated runners after this many games
    #[arg(long = "max-games", value_name = "N")]
    max_games: Option<u64>,

    /// Abandon a game after this many player choices
    #[arg(long = "max-moves", value_name = "N")]
    max_moves: Option<u64>,

    /// Master seed for reproducible game boards
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if cli.player.is_interactive() && cli.runner != RunnerKind::Single {
        return Err(Error::Unsupported(format!(
            "the console player cannot be used with the {} runner",
            cli.runner
        ))
        .into());
    }

    let spawn_policy = if cli.start_only {
        SpawnPolicy::StartOnly
    } else {
        SpawnPolicy::EveryMove
    };
    let game = GameConfig::new(cli.width.into(), cli.height.into())
        .with_win_power(cli.win_power)
        .with_tiles_per_move(cli.tiles_per_move)
        .with_spawn_policy(spawn_policy);

    let mut runner_config = RunnerConfig::new();
    if let Some(max) = cli.max_games {
        runner_config = runner_config.with_max_games(max);
    }
    if let Some(max) = cli.max_moves {
        runner_config = runner_config.with_max_moves(max);
    }
    if let Some(seed) = cli.seed {
        runner_config = runner_config.with_seed(seed);
    }
    if cli.runner == RunnerKind::Parallel {
        runner_config = runner_config.with_progress_every(10_000);
    }

    let runner = cli.runner.build(runner_config, cli.wins, cli.workers);
    let players = cli.player.factory();

    info!(
        "{} runner, {} player, {}x{} board, target {}",
        runner.name(),
        cli.player,
        game.width,
        game.height,
        game.win_value()
    );

    let report = runner.run(&game, players.as_ref())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !cli.player.is_interactive() {
        print_report(cli.runner, &report);
    }
    Ok(())
}

fn print_report(kind: RunnerKind, report: &RunReport) {
    match kind {
        RunnerKind::MultiWin => {
            println!("\nAverage {} games to win", report.avg_games_to_win());
            println!("\nAverage {} moves in winning games", report.avg_winning_moves());
            println!("\nAverage {} score in winning games", report.avg_winning_score());
        }
        _ => {
            let Some(last) = &report.last else {
                println!("\nNo games played");
                return;
            };
            if kind == RunnerKind::Single {
                println!("\nYOU {}!", if last.is_win() { "WON" } else { "LOST" });
            } else if last.is_win() {
                println!("\nWinning took {} games", report.games);
            } else {
                println!("\nNo win in {} games", report.games);
            }
            println!("\nScore: {}\tMoves: {}\n", last.score, last.moves);
            println!("{}", last.board);
        }
    }
}
