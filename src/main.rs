use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use draft_assist::config::Config;
use draft_assist::data::loader;
use draft_assist::data::models::{DraftState, Role, TeamSide, TeamState};
use draft_assist::display::output::{
    display_draft_state, display_error, display_info, display_open_gaps, display_recommendations,
    display_success,
};
use draft_assist::error::AppError;
use draft_assist::scoring::ScoringContext;

#[derive(Parser, Debug)]
#[command(name = "Draft Assist")]
#[command(about = "Score and rank champion picks for the current draft", long_about = None)]
struct Args {
    /// Path to the champion catalog snapshot (champions.json)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Path to the counter matchup snapshot (counters.json)
    #[arg(long)]
    counters: Option<PathBuf>,

    /// Locked ally pick, repeatable. Format: role=champion-id
    #[arg(long = "ally", value_name = "ROLE=ID")]
    allies: Vec<String>,

    /// Known enemy pick, repeatable. Format: role=champion-id
    #[arg(long = "enemy", value_name = "ROLE=ID")]
    enemies: Vec<String>,

    /// Champion banned by your team, repeatable
    #[arg(long = "ally-ban", value_name = "ID")]
    ally_bans: Vec<String>,

    /// Champion banned by the enemy team, repeatable
    #[arg(long = "enemy-ban", value_name = "ID")]
    enemy_bans: Vec<String>,

    /// Which side the recommendation is for
    #[arg(short, long, default_value = "ally")]
    side: String,

    /// Number of top picks to display
    #[arg(short, long, default_value = "10")]
    top: usize,

    /// Emit the ranked pool as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::resolve(args.data.clone(), args.counters.clone())?;

    let side = match args.side.as_str() {
        "ally" => TeamSide::Ally,
        "enemy" => TeamSide::Enemy,
        other => return Err(AppError::InvalidDraftArg(format!("--side {other}")).into()),
    };

    if !args.json {
        display_info(&format!(
            "Loading catalog from {}",
            config.champions_path.display()
        ));
    }
    let catalog = loader::load_catalog(&config.champions_path)
        .context("champion catalog failed validation")?;
    let matrix = loader::load_counters(&config.counters_path, &catalog)
        .context("counter snapshot failed validation")?;
    if !args.json {
        display_success(&format!(
            "{} champions, patch {} (fetched {})",
            catalog.champions.len(),
            catalog.patch,
            catalog.fetched_at.format("%Y-%m-%d %H:%M UTC")
        ));
        display_success(&format!("{} counter matchups loaded", matrix.len()));
    }

    let mut draft = DraftState {
        ally_bans: args.ally_bans.clone(),
        enemy_bans: args.enemy_bans.clone(),
        ..DraftState::default()
    };
    fill_team(&mut draft.ally, &args.allies)?;
    fill_team(&mut draft.enemy, &args.enemies)?;

    // Fail fast on ban ids the catalog does not know
    let known: HashSet<&str> = catalog.champions.iter().map(|c| c.id.as_str()).collect();
    for id in draft.ally_bans.iter().chain(&draft.enemy_bans) {
        if !known.contains(id.as_str()) {
            return Err(AppError::UnknownChampion(id.clone()).into());
        }
    }

    let context = ScoringContext::prepare(&catalog.champions, &draft, side, &matrix)?;
    if !args.json {
        display_draft_state(&draft, context.stage());
        display_open_gaps(&context.composition().gap_labels());
    }

    let scored = context.score_batch(&catalog.champions);

    // Picked and banned champions leave the candidate pool; the engine
    // itself scores everything
    let unavailable: HashSet<&str> = draft
        .ally
        .picked_ids()
        .into_iter()
        .chain(draft.enemy.picked_ids())
        .chain(draft.ally_bans.iter().map(String::as_str))
        .chain(draft.enemy_bans.iter().map(String::as_str))
        .collect();

    let pool: Vec<_> = scored
        .into_iter()
        .filter(|s| !unavailable.contains(s.champion_id.as_str()))
        .collect();

    if args.json {
        let payload = serde_json::json!({
            "patch": &catalog.patch,
            "fetchedAt": catalog.fetched_at,
            "stage": context.stage().label(),
            "draft": &draft,
            "openGaps": context.composition().gap_labels(),
            "recommendations": pool.iter().take(args.top).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        display_recommendations(&pool, args.top);
    }

    Ok(())
}

/// Parse repeated `role=champion-id` assignments into team slots.
fn fill_team(team: &mut TeamState, assignments: &[String]) -> Result<(), AppError> {
    for assignment in assignments {
        let (role_label, champion_id) = assignment
            .split_once('=')
            .ok_or_else(|| AppError::InvalidDraftArg(assignment.clone()))?;

        let role = Role::from_label(role_label)
            .ok_or_else(|| AppError::InvalidDraftArg(assignment.clone()))?;

        if team.slot(role).is_some() {
            return Err(AppError::InvalidDraftArg(format!(
                "{assignment} (role {role_label} already assigned)"
            )));
        }
        team.set_slot(role, champion_id.to_string());
    }
    Ok(())
}
