//! Sample-data seeding use-case.
//!
//! # Responsibility
//! - Populate categories, priorities, tasks, subtasks and notes with
//!   synthetic values, in that order.
//! - Report one outcome per step for the CLI to render.
//!
//! # Invariants
//! - Categories and priorities are insert-if-absent by name.
//! - A step whose dependency table is empty inserts nothing and is reported
//!   as skipped; later steps still run and perform their own check.
//! - Dependency tables are read once per step; references are drawn with a
//!   uniform random index into that snapshot.
//! - No transactional batching: every insert is its own unit of work.

use crate::model::category::Category;
use crate::model::note::Note;
use crate::model::priority::Priority;
use crate::model::subtask::SubTask;
use crate::model::task::{Task, TaskStatus};
use crate::repo::{KinRepository, KinTable, RepoError};
use crate::service::sample_data;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Fixed priority levels as `(name, color)`.
pub const PRIORITY_LEVELS: [(&str, &str); 3] = [
    ("Low", "#4CAF50"),
    ("Medium", "#FFC107"),
    ("High", "#F44336"),
];

const TASK_COMPLETED_PROBABILITY: f64 = 0.3;
const SUBTASK_COMPLETED_PROBABILITY: f64 = 0.5;

pub const SEED_SUCCESS_MESSAGE: &str = "Initial task data created successfully.";

pub type SeedResult<T> = Result<T, SeedError>;

/// Failure that stops a seeding run.
#[derive(Debug)]
pub enum SeedError {
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Number of records requested per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    pub categories: usize,
    pub tasks: usize,
    pub subtasks: usize,
    pub notes: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            categories: 5,
            tasks: 20,
            subtasks: 50,
            notes: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    Categories,
    Priorities,
    Tasks,
    SubTasks,
    Notes,
}

impl SeedStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Priorities => "priorities",
            Self::Tasks => "tasks",
            Self::SubTasks => "subtasks",
            Self::Notes => "notes",
        }
    }
}

/// A step found its dependency tables empty and did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPrerequisite {
    pub step: SeedStep,
    /// Dependency tables that were empty, in schema order.
    pub missing: Vec<KinTable>,
}

impl Display for MissingPrerequisite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.missing.contains(&KinTable::Tasks) {
            f.write_str("No tasks found. Create tasks first.")
        } else {
            f.write_str("No categories or priorities found. Create them first.")
        }
    }
}

impl Error for MissingPrerequisite {}

/// Result of one seeding step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// `requested` records were processed; `inserted` of them are new rows.
    Created {
        step: SeedStep,
        requested: usize,
        inserted: usize,
    },
    Skipped(MissingPrerequisite),
}

impl StepOutcome {
    pub fn step(&self) -> SeedStep {
        match self {
            Self::Created { step, .. } => *step,
            Self::Skipped(missing) => missing.step,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Status line shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::Created {
                step: SeedStep::Priorities,
                requested,
                ..
            } => {
                let names: Vec<&str> = PRIORITY_LEVELS.iter().map(|(name, _)| *name).collect();
                format!("{requested} priorities created ({}).", names.join(", "))
            }
            Self::Created {
                step, requested, ..
            } => format!("{requested} {} created.", step.as_str()),
            Self::Skipped(missing) => missing.to_string(),
        }
    }
}

/// Outcomes of a full seeding run, in step order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<StepOutcome>,
}

impl SeedReport {
    pub fn skipped(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_skipped())
    }

    pub fn messages(&self) -> Vec<String> {
        self.outcomes.iter().map(StepOutcome::message).collect()
    }
}

/// Rows removed by [`SeedService::clear_data`], counted at the roots of the
/// cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearSummary {
    pub categories: usize,
    pub priorities: usize,
}

/// Seeding service over a repository and a random source.
pub struct SeedService<R: KinRepository, G: Rng> {
    repo: R,
    rng: G,
    today: NaiveDate,
}

impl<R: KinRepository, G: Rng> SeedService<R, G> {
    /// Creates a service that dates tasks relative to the local current day.
    pub fn new(repo: R, rng: G) -> Self {
        Self {
            repo,
            rng,
            today: Local::now().date_naive(),
        }
    }

    /// Overrides the reference day used for due dates.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Runs all five steps in order. Skipped steps do not stop the run;
    /// repository failures do.
    pub fn run(&mut self, config: &SeedConfig) -> SeedResult<SeedReport> {
        let started_at = Instant::now();
        let outcomes = vec![
            self.create_categories(config.categories)?,
            self.create_priorities()?,
            self.create_tasks(config.tasks)?,
            self.create_subtasks(config.subtasks)?,
            self.create_notes(config.notes)?,
        ];
        let report = SeedReport { outcomes };

        info!(
            "event=seed_run module=seed status=ok skipped_steps={} duration_ms={}",
            report.skipped().count(),
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    /// Get-or-creates `count` categories with random title-cased names.
    /// Name collisions coalesce, so fewer than `count` rows may be inserted.
    pub fn create_categories(&mut self, count: usize) -> SeedResult<StepOutcome> {
        let mut inserted = 0;
        for _ in 0..count {
            let name = sample_data::category_name(&mut self.rng);
            let (_, was_inserted) = self.repo.get_or_create_category(&name)?;
            if was_inserted {
                inserted += 1;
            }
        }
        Ok(created(SeedStep::Categories, count, inserted))
    }

    /// Get-or-creates the fixed Low/Medium/High priorities.
    pub fn create_priorities(&mut self) -> SeedResult<StepOutcome> {
        let mut inserted = 0;
        for (name, color) in PRIORITY_LEVELS {
            let (_, was_inserted) = self.repo.get_or_create_priority(name, Some(color))?;
            if was_inserted {
                inserted += 1;
            }
        }
        Ok(created(SeedStep::Priorities, PRIORITY_LEVELS.len(), inserted))
    }

    /// Creates `count` tasks referencing random existing categories and
    /// priorities.
    pub fn create_tasks(&mut self, count: usize) -> SeedResult<StepOutcome> {
        let categories = self.repo.list_categories()?;
        let priorities = self.repo.list_priorities()?;
        let missing: Vec<KinTable> = [
            (KinTable::Categories, categories.is_empty()),
            (KinTable::Priorities, priorities.is_empty()),
        ]
        .into_iter()
        .filter_map(|(table, empty)| empty.then_some(table))
        .collect();
        if !missing.is_empty() {
            return Ok(skipped(SeedStep::Tasks, missing));
        }

        for _ in 0..count {
            let category: &Category = pick(&mut self.rng, &categories);
            let priority: &Priority = pick(&mut self.rng, &priorities);
            let mut task = Task::new(
                sample_data::task_title(&mut self.rng),
                sample_data::task_description(&mut self.rng),
                category.uuid,
                priority.uuid,
            );
            task.due_date = Some(sample_data::due_date(&mut self.rng, self.today));
            task.status = TaskStatus::from_completed(
                self.rng.gen_bool(TASK_COMPLETED_PROBABILITY),
            );
            self.repo.create_task(&task)?;
        }
        Ok(created(SeedStep::Tasks, count, count))
    }

    /// Creates `count` subtasks under random existing tasks.
    pub fn create_subtasks(&mut self, count: usize) -> SeedResult<StepOutcome> {
        let tasks = self.repo.list_tasks()?;
        if tasks.is_empty() {
            return Ok(skipped(SeedStep::SubTasks, vec![KinTable::Tasks]));
        }

        for _ in 0..count {
            let title = sample_data::subtask_title(&mut self.rng);
            let completed = self.rng.gen_bool(SUBTASK_COMPLETED_PROBABILITY);
            let parent = pick(&mut self.rng, &tasks);
            let subtask = SubTask::new(title, parent.uuid).with_completed(completed);
            self.repo.create_subtask(&subtask)?;
        }
        Ok(created(SeedStep::SubTasks, count, count))
    }

    /// Creates `count` notes attached to random existing tasks.
    pub fn create_notes(&mut self, count: usize) -> SeedResult<StepOutcome> {
        let tasks = self.repo.list_tasks()?;
        if tasks.is_empty() {
            return Ok(skipped(SeedStep::Notes, vec![KinTable::Tasks]));
        }

        for _ in 0..count {
            let content = sample_data::note_content(&mut self.rng);
            let task = pick(&mut self.rng, &tasks);
            self.repo.create_note(&Note::new(task.uuid, content))?;
        }
        Ok(created(SeedStep::Notes, count, count))
    }

    /// Deletes every category and priority; tasks, subtasks and notes go
    /// with them through cascade.
    pub fn clear_data(&mut self) -> SeedResult<ClearSummary> {
        let mut summary = ClearSummary::default();
        for category in self.repo.list_categories()? {
            self.repo.delete_category(category.uuid)?;
            summary.categories += 1;
        }
        for priority in self.repo.list_priorities()? {
            self.repo.delete_priority(priority.uuid)?;
            summary.priorities += 1;
        }

        info!(
            "event=seed_clear module=seed status=ok categories={} priorities={}",
            summary.categories, summary.priorities
        );
        Ok(summary)
    }
}

fn pick<'a, T, G: Rng>(rng: &mut G, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn created(step: SeedStep, requested: usize, inserted: usize) -> StepOutcome {
    info!(
        "event=seed_step module=seed status=ok step={} requested={requested} inserted={inserted}",
        step.as_str()
    );
    StepOutcome::Created {
        step,
        requested,
        inserted,
    }
}

fn skipped(step: SeedStep, missing: Vec<KinTable>) -> StepOutcome {
    let tables: Vec<&str> = missing.iter().map(|table| table.as_str()).collect();
    warn!(
        "event=seed_step module=seed status=skipped step={} error_code=missing_prerequisite missing={}",
        step.as_str(),
        tables.join(",")
    );
    StepOutcome::Skipped(MissingPrerequisite { step, missing })
}
