use colored::*;
use tabled::{settings::Style, Table, Tabled};

use crate::data::models::{DraftState, ALL_ROLES};
use crate::scoring::{DraftStage, ScoredChampion};

#[derive(Tabled)]
struct RecommendationRow {
    rank: String,
    champion: String,
    score: String,
    base: String,
    synergy: String,
    counter: String,
    comp: String,
    threat: String,
    flex: String,
    risk: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_draft_state(draft: &DraftState, stage: DraftStage) {
    println!(
        "\n{}",
        format!(
            "🗺️  DRAFT STATE ({} picks, {} stage)",
            draft.total_picks(),
            stage.label()
        )
        .bold()
        .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    for role in ALL_ROLES {
        let ally = draft.ally.slot(role).unwrap_or("—");
        let enemy = draft.enemy.slot(role).unwrap_or("—");
        println!(
            "  {:<8} {:<20} {}",
            role.label(),
            ally.green(),
            enemy.red()
        );
    }

    if !draft.ally_bans.is_empty() || !draft.enemy_bans.is_empty() {
        println!(
            "\n  {} {} | {} {}",
            "bans:".bold(),
            draft.ally_bans.join(", ").green(),
            "vs".dimmed(),
            draft.enemy_bans.join(", ").red()
        );
    }
    println!();
}

pub fn display_open_gaps(gaps: &[&str]) {
    if gaps.is_empty() {
        println!("{} Team composition has no open gaps", "✓".green());
    } else {
        println!(
            "{} Open composition gaps: {}",
            "ℹ️".cyan(),
            gaps.join(", ").yellow()
        );
    }
}

pub fn display_recommendations(scored: &[ScoredChampion], top_n: usize) {
    println!("\n{}", "🎯 PICK RECOMMENDATIONS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if scored.is_empty() {
        println!("{}", "No candidates left to score".yellow());
        return;
    }

    let mut rows = vec![];
    for (idx, s) in scored.iter().take(top_n).enumerate() {
        let b = &s.breakdown;
        rows.push(RecommendationRow {
            rank: format!("#{}", idx + 1),
            champion: s.name.clone(),
            score: format!("{:.2}", s.final_score),
            base: format!("{:.0}", b.base),
            synergy: format!("{:.0}", b.synergy),
            counter: format!("{:.0}", b.counter),
            comp: format!("{:.0}", b.composition),
            threat: format!("{:.0}", b.threat),
            flex: format!("{:.0}", b.flexibility),
            risk: format!("{:.0}", b.risk),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• Score: weighted blend of all components for the current draft stage");
    println!("• Components are 0-100; risk is a penalty subtracted from the blend\n");

    if let Some(top) = scored.first() {
        println!("{}", format!("Top Pick: {}", top.name).bold().green());
        for explanation in &top.explanations {
            if explanation.starts_with("Warning:") {
                println!("  {} {}", "⚠️".yellow(), explanation.yellow());
            } else {
                println!("  • {}", explanation);
            }
        }
        println!();
    }
}
