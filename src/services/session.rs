//! Training session controller.
//!
//! Owns the player's progress and the per-mission state, and sequences the
//! mission lifecycle: new mission → hints → submission → verdict → XP award
//! → level-up detection → persistence. One logical operation runs at a time;
//! methods take `&mut self` and the caller awaits each to completion, so at
//! most one gateway call is ever in flight.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::topic::next_topic;
use crate::domain::models::{CommandHistory, Difficulty, LevelUp, Mission, Progress, Verdict};
use crate::domain::ports::{ProgressStore, TextGenerator};
use crate::services::generator::MissionGenerator;
use crate::services::prompts;
use crate::services::validator::CommandValidator;

/// Partial hints allowed before the full answer is disclosed.
pub const MAX_HINTS: u8 = 2;

/// XP for a correct command with no hints.
pub const XP_NO_HINTS: u64 = 100;
/// XP for a correct command after one hint.
pub const XP_ONE_HINT: u64 = 50;
/// XP for a correct command after the full answer was revealed.
pub const XP_TWO_HINTS: u64 = 25;

/// XP awarded for a successful submission, by hints consumed.
pub const fn xp_award(hints_used: u8) -> u64 {
    match hints_used {
        0 => XP_NO_HINTS,
        1 => XP_ONE_HINT,
        _ => XP_TWO_HINTS,
    }
}

/// Result of a validated submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The proctor accepted the command; the mission is complete.
    Correct {
        /// The verdict, including simulated scan output.
        verdict: Verdict,
        /// XP gained by this submission.
        xp_awarded: u64,
        /// XP total after the award.
        total_xp: u64,
        /// Present when the award crossed a level threshold.
        level_up: Option<LevelUp>,
    },
    /// The proctor rejected the command; the mission stays active and the
    /// explain affordance is available.
    Incorrect {
        /// The verdict, including feedback.
        verdict: Verdict,
    },
}

/// Result of a hint request.
#[derive(Debug, Clone)]
pub enum HintOutcome {
    /// A partial hint; the hint budget is not yet exhausted.
    Hint(String),
    /// The full answer, disclosed once the budget is used up.
    FullAnswer(String),
}

/// The live training session: progress, active mission, hint budget, and
/// command history, driven through the generator/validator services.
pub struct SessionService {
    id: Uuid,
    started_at: DateTime<Utc>,
    generator: MissionGenerator,
    validator: CommandValidator,
    gateway: Arc<dyn TextGenerator>,
    store: Arc<dyn ProgressStore>,
    progress: Progress,
    mission: Option<Mission>,
    hints_used: u8,
    mission_completed: bool,
    history: CommandHistory,
}

impl SessionService {
    /// Opens a session: loads saved progress (defaults when the store is
    /// empty or unreadable) and starts idle with no mission.
    pub async fn open(gateway: Arc<dyn TextGenerator>, store: Arc<dyn ProgressStore>) -> Self {
        let progress = store.load().await;
        let id = Uuid::new_v4();
        info!(
            session_id = %id,
            xp = progress.xp,
            level = progress.level,
            missions_completed = progress.missions_completed,
            "training session opened"
        );

        Self {
            id,
            started_at: Utc::now(),
            generator: MissionGenerator::new(gateway.clone()),
            validator: CommandValidator::new(gateway.clone()),
            gateway,
            store,
            progress,
            mission: None,
            hints_used: 0,
            mission_completed: false,
            history: CommandHistory::new(),
        }
    }

    /// Replaces the retry policies, for tests that must not sleep.
    #[cfg(test)]
    fn set_retry_policies(&mut self, policy: crate::services::retry::RetryPolicy) {
        self.generator = MissionGenerator::with_retry(self.gateway.clone(), policy);
        self.validator = CommandValidator::with_retry(self.gateway.clone(), policy);
    }

    /// Generates and installs the next mission.
    ///
    /// Valid in any state. The topic cursor, hint budget, and completion
    /// flag are committed only on success; a failed generation leaves the
    /// prior state (including a completed mission) untouched. Command
    /// history persists across missions.
    ///
    /// # Errors
    /// Propagates the generator's terminal error once its retries are
    /// exhausted; the player re-triggers manually.
    #[instrument(skip(self))]
    pub async fn new_mission(&mut self) -> DomainResult<&Mission> {
        let (topic, next_index) = next_topic(self.progress.level, self.progress.last_topic_index);
        let difficulty = Difficulty::for_level(self.progress.level);
        info!(topic, %difficulty, "requesting mission");

        let mission = self.generator.generate(topic, difficulty).await?;

        self.progress.last_topic_index = next_index;
        self.hints_used = 0;
        self.mission_completed = false;
        Ok(&*self.mission.insert(mission))
    }

    /// Submits a candidate command for the active mission.
    ///
    /// Local checks run before any AI call: an empty command is rejected
    /// outright; every non-empty command enters the history; a command not
    /// starting with `nmap` is rejected; hint and mission preconditions
    /// apply. A correct verdict awards XP, completes the mission, and saves
    /// progress immediately (a save failure is logged and swallowed).
    ///
    /// # Errors
    /// Local failures (`EmptyCommand`, `InvalidCommandFormat`,
    /// `NoActiveMission`, `MissionAlreadyComplete`) and the validator's
    /// terminal error. A validator failure leaves all state unchanged.
    #[instrument(skip(self))]
    pub async fn submit(&mut self, command: &str) -> DomainResult<SubmitOutcome> {
        let command = command.trim();
        if command.is_empty() {
            return Err(DomainError::EmptyCommand);
        }

        self.history.push(command);

        if !command.starts_with("nmap") {
            return Err(DomainError::InvalidCommandFormat);
        }

        let mission = self.mission.clone().ok_or(DomainError::NoActiveMission)?;
        if self.mission_completed {
            return Err(DomainError::MissionAlreadyComplete);
        }

        let verdict = self.validator.validate(&mission, command).await?;

        if !verdict.correct {
            return Ok(SubmitOutcome::Incorrect { verdict });
        }

        let xp_awarded = xp_award(self.hints_used);
        let level_up = self.progress.add_xp(xp_awarded);
        self.mission_completed = true;
        self.progress.missions_completed += 1;

        if let Err(error) = self.store.save(&self.progress).await {
            warn!(%error, "progress save failed; continuing");
        }

        if let Some(promotion) = level_up {
            info!(from = promotion.from, to = promotion.to, "level up");
        }
        info!(
            xp_awarded,
            total_xp = self.progress.xp,
            missions_completed = self.progress.missions_completed,
            "mission completed"
        );

        Ok(SubmitOutcome::Correct {
            verdict,
            xp_awarded,
            total_xp: self.progress.xp,
            level_up,
        })
    }

    /// Requests a hint for the active mission.
    ///
    /// Consumes one unit of the hint budget before calling out (saturating
    /// at the cap, with no rollback on failure). Below the cap this is a
    /// partial hint; at the cap the full answer is disclosed instead, and
    /// repeated requests keep returning the full answer. Single attempt, no
    /// retry, free-text response.
    ///
    /// # Errors
    /// `NoActiveMission` / `MissionAlreadyComplete` before any call; the
    /// gateway's `Service` error otherwise.
    #[instrument(skip(self))]
    pub async fn hint(&mut self) -> DomainResult<HintOutcome> {
        let mission = self.mission.clone().ok_or(DomainError::NoActiveMission)?;
        if self.mission_completed {
            return Err(DomainError::MissionAlreadyComplete);
        }

        self.hints_used = (self.hints_used + 1).min(MAX_HINTS);

        if self.hints_used >= MAX_HINTS {
            let answer = self.gateway.generate(&prompts::answer_prompt(&mission)).await?;
            Ok(HintOutcome::FullAnswer(answer.trim().to_string()))
        } else {
            let hint = self.gateway.generate(&prompts::hint_prompt(&mission)).await?;
            Ok(HintOutcome::Hint(hint.trim().to_string()))
        }
    }

    /// Explains why the last attempt missed, for the active mission.
    ///
    /// One-shot free-text request, no retry, no effect on the hint budget.
    ///
    /// # Errors
    /// `NoActiveMission` / `MissionAlreadyComplete` before any call; the
    /// gateway's `Service` error otherwise.
    #[instrument(skip(self))]
    pub async fn explain(&self) -> DomainResult<String> {
        let mission = self.mission.as_ref().ok_or(DomainError::NoActiveMission)?;
        if self.mission_completed {
            return Err(DomainError::MissionAlreadyComplete);
        }

        let explanation = self
            .gateway
            .generate(&prompts::explanation_prompt(mission))
            .await?;
        Ok(explanation.trim().to_string())
    }

    /// Records an input line the presentation layer handled locally
    /// (`help`, `clear`, `status`, ...) under the same history discipline
    /// submissions use.
    pub fn record_input(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.history.push(text);
        }
    }

    /// Session identifier used in logs.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was opened.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The active mission, if any.
    pub const fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Current progress record.
    pub const fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Hints consumed for the active mission.
    pub const fn hints_used(&self) -> u8 {
        self.hints_used
    }

    /// Whether the active mission has been solved.
    pub const fn is_completed(&self) -> bool {
        self.mission_completed
    }

    /// Command history, oldest first.
    pub const fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Recalls the previous (older) history entry.
    pub fn recall_previous(&mut self) -> Option<&str> {
        self.history.recall_previous()
    }

    /// Recalls the next (newer) history entry.
    pub fn recall_next(&mut self) -> Option<&str> {
        self.history.recall_next()
    }
}
