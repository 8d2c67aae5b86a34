//! Implementation of the `scandojo play` command: the interactive training
//! loop. Reads one line at a time; local commands are dispatched here, and
//! everything else is submitted to the session as a candidate nmap command.

use anyhow::{bail, Context, Result};
use console::style;
use std::io::Write as _;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

use crate::adapters::{FileProgressStore, GeminiClient};
use crate::cli::output::{create_spinner, difficulty_style};
use crate::domain::errors::DomainError;
use crate::domain::models::{LevelUp, Mission};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{HintOutcome, SessionService, SubmitOutcome, MAX_HINTS};

/// Inputs handled without an AI round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocalCommand {
    Help,
    Clear,
    Status,
    History,
    Mission,
    NewMission,
    Hint,
    Explain,
    Quit,
}

fn parse_local(input: &str) -> Option<LocalCommand> {
    match input.trim().to_lowercase().as_str() {
        "help" => Some(LocalCommand::Help),
        "clear" => Some(LocalCommand::Clear),
        "status" => Some(LocalCommand::Status),
        "history" => Some(LocalCommand::History),
        "mission" => Some(LocalCommand::Mission),
        "new" => Some(LocalCommand::NewMission),
        "hint" => Some(LocalCommand::Hint),
        "explain" => Some(LocalCommand::Explain),
        "quit" | "exit" => Some(LocalCommand::Quit),
        _ => None,
    }
}

pub async fn execute(json_mode: bool) -> Result<()> {
    if json_mode {
        bail!("The play command is interactive and does not support --json");
    }

    let config = ConfigLoader::load()?;
    let client = GeminiClient::new(config.gateway.clone())?;
    if !client.has_api_key() {
        bail!(
            "No Gemini API key configured. Set gateway.api_key in \
             .scandojo/config.yaml or export GEMINI_API_KEY (run 'scandojo init' \
             first if the config directory is missing)"
        );
    }

    let store = Arc::new(FileProgressStore::new(config.storage.progress_path));
    let mut session = SessionService::open(Arc::new(client), store).await;

    print_banner();
    println!("{}", style("[+] AI Engine configured.").green());
    generate_mission(&mut session).await;

    run_loop(&mut session).await
}

async fn run_loop(session: &mut SessionService) -> Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", style("dojo>").cyan().bold());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            // EOF (ctrl-d)
            println!();
            break;
        };

        match parse_local(&line) {
            Some(command) => {
                session.record_input(&line);
                if handle_local(session, command).await {
                    break;
                }
            }
            None => handle_submission(session, &line).await,
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Returns true when the player asked to quit.
async fn handle_local(session: &mut SessionService, command: LocalCommand) -> bool {
    match command {
        LocalCommand::Help => print_help(),
        LocalCommand::Clear => clear_terminal(),
        LocalCommand::Status => print_status(session),
        LocalCommand::History => print_history(session),
        LocalCommand::Mission => match session.mission() {
            Some(mission) => print_mission(mission, "[MISSION]"),
            None => println!(
                "{}",
                style("[!] No active mission. Type 'new' to start.").yellow()
            ),
        },
        LocalCommand::NewMission => generate_mission(session).await,
        LocalCommand::Hint => handle_hint(session).await,
        LocalCommand::Explain => handle_explain(session).await,
        LocalCommand::Quit => return true,
    }
    false
}

async fn generate_mission(session: &mut SessionService) {
    let spinner = create_spinner("Generating new mission...");
    let result = session.new_mission().await;
    spinner.finish_and_clear();

    match result {
        Ok(mission) => print_mission(mission, "[NEW MISSION]"),
        Err(error) => {
            println!(
                "{}",
                style(format!("[!] Mission generation failed: {error}")).red()
            );
            println!("{}", style("[!] Type 'new' to retry.").yellow());
        }
    }
}

async fn handle_submission(session: &mut SessionService, line: &str) {
    let spinner = create_spinner("Scanning...");
    let result = session.submit(line).await;
    spinner.finish_and_clear();

    match result {
        Ok(SubmitOutcome::Correct {
            verdict,
            total_xp,
            level_up,
            ..
        }) => {
            println!();
            for output_line in verdict.simulated_output.lines() {
                println!("{}", style(output_line).green());
            }
            println!();
            println!("{}", style(format!("[✓] {}", verdict.feedback)).green());
            println!("{}", style(format!("[+] XP Awarded! Total: {total_xp}")).cyan());
            if let Some(promotion) = level_up {
                print_level_up(promotion);
            }
            println!("{}", style("[*] Type 'new' for the next mission.").cyan());
        }
        Ok(SubmitOutcome::Incorrect { verdict }) => {
            println!();
            println!("{}", style(format!("[✗] {}", verdict.feedback)).red());
            println!(
                "{}",
                style("[!] Scan failed. Try again, get a hint, or type 'explain'.").yellow()
            );
        }
        Err(error) if error.is_local() => print_local_error(&error),
        Err(error) => {
            println!("{}", style(format!("[!] Validation error: {error}")).red());
            println!("{}", style("[!] Please try again.").yellow());
        }
    }
}

async fn handle_hint(session: &mut SessionService) {
    let message = if session.hints_used() + 1 >= MAX_HINTS {
        "Generating answer..."
    } else {
        "Getting hint..."
    };
    let spinner = create_spinner(message);
    let result = session.hint().await;
    spinner.finish_and_clear();

    match result {
        Ok(HintOutcome::Hint(hint)) => {
            println!();
            println!("{}", style(format!("[HINT] {hint}")).yellow());
            println!(
                "{}",
                style(format!("Hints Used: {}/{MAX_HINTS}", session.hints_used())).yellow()
            );
            println!();
        }
        Ok(HintOutcome::FullAnswer(answer)) => {
            println!();
            println!("{}", style("[ANSWER REVEALED]").yellow());
            println!("{}", style(answer).cyan());
            println!();
            println!("[!] Try entering the command to complete the mission.");
        }
        Err(error) if error.is_local() => print_local_error(&error),
        Err(_) => println!("{}", style("[!] Could not generate hint. Try again.").red()),
    }
}

async fn handle_explain(session: &mut SessionService) {
    let spinner = create_spinner("Generating explanation...");
    let result = session.explain().await;
    spinner.finish_and_clear();

    match result {
        Ok(explanation) => {
            println!();
            println!("{}", style("[EXPLANATION]").cyan());
            println!("{explanation}");
            println!();
        }
        Err(error) if error.is_local() => print_local_error(&error),
        Err(_) => println!(
            "{}",
            style("[!] Could not generate explanation. Try again.").red()
        ),
    }
}

fn print_local_error(error: &DomainError) {
    match error {
        DomainError::EmptyCommand => {
            println!("{}", style("[!] Command cannot be empty.").red());
        }
        DomainError::InvalidCommandFormat => {
            println!("{}", style("[!] Please enter a valid nmap command.").red());
        }
        DomainError::NoActiveMission => {
            println!(
                "{}",
                style("[!] No active mission. Type 'new' to start.").yellow()
            );
        }
        DomainError::MissionAlreadyComplete => {
            println!(
                "{}",
                style("[!] Mission already completed. Type 'new' for the next one!").cyan()
            );
        }
        other => println!("{}", style(format!("[!] {other}")).red()),
    }
}

fn print_banner() {
    println!("{}", style("=".repeat(60)).green());
    println!(
        "{}",
        style("  WELCOME TO NMAP DOJO - AI-POWERED TRAINING").green().bold()
    );
    println!("{}", style("=".repeat(60)).green());
    println!();
    println!("{}", style("Type 'help' for available commands.").cyan());
    println!("{}", style("Complete missions to earn XP and level up!").cyan());
    println!();
}

fn print_mission(mission: &Mission, header: &str) {
    println!();
    println!(
        "{}",
        style(format!("{header} {}", mission.title)).cyan().bold()
    );
    println!("{}", mission.description);
    println!("{}", style(format!("Target: {}", mission.target_ip)).yellow());
    println!(
        "Difficulty: {}",
        difficulty_style(mission.difficulty).apply_to(mission.difficulty.as_str())
    );
    println!("Topic: {}", mission.topic_category);
    println!();
}

fn print_level_up(promotion: LevelUp) {
    println!();
    println!("{}", style("=".repeat(50)).yellow());
    println!(
        "{}",
        style(format!("  LEVEL UP! You are now Level {}!", promotion.to))
            .yellow()
            .bold()
    );
    if promotion.unlocks_advanced() {
        println!("{}", style("  Advanced Red Team missions unlocked!").green());
    }
    println!("{}", style("=".repeat(50)).yellow());
    println!();
}

fn print_status(session: &SessionService) {
    let progress = session.progress();
    println!();
    println!("{}", style("[STATUS]").cyan());
    println!("{}", style(format!("  XP: {}", progress.xp)).green());
    println!("{}", style(format!("  Level: {}", progress.level)).green());
    println!("  Missions Completed: {}", progress.missions_completed);
    if session.mission().is_some() {
        println!("  Hints Used: {}/{MAX_HINTS}", session.hints_used());
    }
    match progress.xp_to_next_level() {
        Some(remaining) => {
            println!("{}", style(format!("  XP to next level: {remaining}")).yellow());
        }
        None => println!("{}", style("  Max level reached!").green()),
    }
    if progress.advanced_unlocked() {
        println!("{}", style("  Advanced topics unlocked!").cyan());
    }
    println!();
}

fn print_history(session: &SessionService) {
    if session.history().is_empty() {
        println!("{}", style("[!] No commands in history yet.").yellow());
        return;
    }
    println!();
    println!("{}", style("[HISTORY]").cyan());
    for (i, entry) in session.history().iter().enumerate() {
        println!("  {:>2}  {entry}", i + 1);
    }
    println!();
}

fn clear_terminal() {
    console::Term::stdout().clear_screen().ok();
    println!("{}", style("[*] Terminal cleared.").cyan());
}

fn print_help() {
    println!();
    println!("{}", style("[HELP] Available Commands:").cyan());
    println!("  nmap [flags] [target] - Run an nmap command");
    println!("  new                   - Generate a new mission");
    println!("  mission               - Show the current mission briefing");
    println!("  hint                  - Get a hint (reduces XP for this mission)");
    println!("  explain               - Explain why the last attempt missed");
    println!("  history               - Show recent commands");
    println!("  status                - Show current progress");
    println!("  clear                 - Clear the terminal");
    println!("  help                  - Show this help message");
    println!("  quit                  - Leave the dojo");
    println!();
    println!("{}", style("[TIPS]").yellow());
    println!("  - Type 'hint' if you're stuck (two hints reveal the answer)");
    println!("  - Complete missions to earn XP and level up!");
    println!();
}
