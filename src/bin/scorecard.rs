//! Command-line scorecard client.
//!
//! Loads the room from the server, applies one command, saves the whole room
//! and prints leaderboard, active round and history. Save failures are logged
//! and the local result is still shown.
//!
//! Example: `scorecard --room friday score 1 6 4`

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use padel_scorecard::client::RoomClient;
use padel_scorecard::models::lenient::parse_count;
use padel_scorecard::render::render_room;
use padel_scorecard::{
    apply, Command, MatchPatch, Outcome, PlayerIndex, RoomState, Roster, RoundId, SessionError,
    Side,
};

#[derive(Parser)]
#[command(name = "scorecard")]
#[command(about = "Four-player padel round-robin scorekeeper")]
#[command(version)]
struct Cli {
    /// Room code shared by everyone keeping score
    #[arg(long)]
    room: String,

    /// Server base URL
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Comma-separated roster of four names
    #[arg(long)]
    players: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print leaderboard, active round and history
    Show,

    /// Enter the score of a match in the active round
    Score {
        /// Match number, 1-6
        #[arg(value_name = "MATCH")]
        match_number: usize,
        score1: String,
        score2: String,
    },

    /// Set a player's fault count for the active round
    Fault {
        /// Player name or number 1-4
        player: String,
        count: String,
    },

    /// Complete the active round and archive it
    Finish,

    /// Load a completed round back into the active round
    Edit {
        round_id: RoundId,

        /// Discard scores already entered in the active round
        #[arg(long)]
        force: bool,
    },

    /// Clear the active round
    Reset,

    /// Fill the active round with random results
    Fill,

    /// Change a match of a completed round directly on the server
    Patch {
        round_id: RoundId,

        /// Match number, 1-6
        #[arg(value_name = "MATCH")]
        match_number: usize,

        #[arg(long)]
        score1: Option<String>,

        #[arg(long)]
        score2: Option<String>,
    },
}

/// 1-based match number to index.
fn match_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(i) => Ok(i),
        None => bail!("Match numbers start at 1"),
    }
}

/// Player by name (case-insensitive) or 1-based number.
fn resolve_player(roster: &Roster, player: &str) -> Result<PlayerIndex> {
    let player = player.trim();
    if let Some(i) = roster
        .names()
        .iter()
        .position(|n| n.eq_ignore_ascii_case(player))
    {
        return Ok(i);
    }
    match player.parse::<usize>() {
        Ok(n) if (1..=roster.names().len()).contains(&n) => Ok(n - 1),
        _ => bail!("Unknown player {:?}", player),
    }
}

/// Local round commands; `None` for commands handled elsewhere.
fn round_commands(command: &Commands, roster: &Roster) -> Result<Option<Vec<Command>>> {
    let commands = match command {
        Commands::Score {
            match_number,
            score1,
            score2,
        } => {
            let match_index = match_index(*match_number)?;
            vec![
                Command::SetScore {
                    match_index,
                    side: Side::One,
                    score: parse_count(score1),
                },
                Command::SetScore {
                    match_index,
                    side: Side::Two,
                    score: parse_count(score2),
                },
            ]
        }
        Commands::Fault { player, count } => vec![Command::SetFault {
            player: resolve_player(roster, player)?,
            count: parse_count(count),
        }],
        Commands::Finish => vec![Command::FinishRound],
        Commands::Edit { round_id, force } => vec![Command::EditRound {
            id: *round_id,
            force: *force,
        }],
        Commands::Reset => vec![Command::ResetRound],
        Commands::Fill => vec![Command::FillRandom],
        Commands::Show | Commands::Patch { .. } => return Ok(None),
    };
    Ok(Some(commands))
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Finished(record) => println!("Round saved! The loser was: {}", record.loser_name),
        Outcome::Reopened(id) => println!(
            "Round {} loaded for editing. Make your changes and run `finish` when done.",
            id
        ),
        Outcome::Updated => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();

    let roster = match &cli.players {
        Some(list) => Roster::parse(list).context("Invalid --players")?,
        None => Roster::default(),
    };
    let client = RoomClient::new(&cli.server, cli.room.clone());

    let loaded = client.fetch().await;
    let mut state = match &loaded {
        Ok(Some(state)) => state.clone(),
        Ok(None) => {
            log::info!("Room {:?} is new", cli.room);
            RoomState::default()
        }
        Err(e) => {
            log::error!("Error fetching room {:?}: {}", cli.room, e);
            RoomState::default()
        }
    };

    if let Some(commands) = round_commands(&cli.command, &roster)? {
        // Saving on top of a room we could not read would wipe it.
        if loaded.is_err() {
            bail!("Could not load room {:?}; not saving over it", cli.room);
        }
        let mut rng = rand::thread_rng();
        for command in commands {
            let outcome = match apply(&mut state, &roster, command, Utc::now(), &mut rng) {
                Ok(outcome) => outcome,
                Err(SessionError::UnsavedScores) => {
                    bail!("The active round has unsaved scores; rerun with --force to discard them")
                }
                Err(e) => return Err(e.into()),
            };
            report(&outcome);
        }
        client.save_logged(&state).await;
    } else if let Commands::Patch {
        round_id,
        match_number,
        score1,
        score2,
    } = &cli.command
    {
        let patch = MatchPatch {
            score1: score1.as_deref().map(parse_count),
            score2: score2.as_deref().map(parse_count),
        };
        if patch.is_empty() {
            bail!("Give --score1 and/or --score2");
        }
        match client
            .patch_match(*round_id, match_index(*match_number)?, &patch)
            .await
        {
            Ok(()) => match client.fetch().await {
                Ok(Some(fresh)) => state = fresh,
                Ok(None) => {}
                Err(e) => log::error!("Error fetching room {:?}: {}", cli.room, e),
            },
            Err(e) => log::error!("Error patching round {}: {}", round_id, e),
        }
    }

    print!("{}", render_room(&state, &roster));
    Ok(())
}
