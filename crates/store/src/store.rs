//! The authoritative task and project store.
//!
//! `TaskStore` owns the in-memory task list, project list, and active
//! filter, and writes the whole record through to durable storage after
//! every mutation. All reads are served from memory.
//!
//! Mutations referencing unknown ids are deliberate no-ops ("last write
//! wins, missing writes vanish"), but observable ones: every such
//! operation returns whether it changed anything, so callers and tests
//! can distinguish "applied" from "ignored".

use chrono::Utc;

use kanri_protocol::{
    Project, ProjectId, Task, TaskFilter, TaskId, TaskStatus, filter_tasks,
};

use crate::error::{Result, StoreError};
use crate::persistence::{Storage, StoreState};

/// The single source of truth for tasks, projects, and the active filter.
///
/// Created by loading (or initializing) the persisted record; every
/// mutating operation updates memory first and then persists. If
/// persistence fails the error propagates, but the in-memory state keeps
/// the mutation - it stays authoritative for the session.
///
/// # Examples
///
/// ```no_run
/// use kanri_protocol::{Task, TaskStatus};
/// use kanri_store::{Storage, TaskStore};
///
/// # fn main() -> kanri_store::Result<()> {
/// let mut store = TaskStore::open(Storage::at_default_location()?)?;
///
/// let task = Task::new("Write release notes");
/// let id = task.id;
/// store.add_task(task)?;
/// store.move_task(id, TaskStatus::InProgress)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TaskStore {
    state: StoreState,
    storage: Storage,
}

impl TaskStore {
    /// Opens the store, loading the persisted record if present.
    ///
    /// An absent state file initializes empty collections and a match-all
    /// filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file exists but cannot be read or
    /// parsed.
    pub fn open(storage: Storage) -> Result<Self> {
        let state = storage.load()?;
        Ok(Self { state, storage })
    }

    /// Returns every task, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Returns every project, in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> &TaskFilter {
        &self.state.filter
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the project with the given id, if present.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.state.projects.iter().find(|p| p.id == id)
    }

    /// Returns the tasks matching the active filter, in insertion order.
    pub fn filtered_tasks(&self) -> impl Iterator<Item = &Task> {
        filter_tasks(&self.state.tasks, &self.state.filter)
    }

    /// Adds a task to the store.
    ///
    /// The store stamps `created_at` and `updated_at`; whatever the caller
    /// put there is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty after trimming, if a task
    /// with the same id already exists, or if persistence fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanri_protocol::Task;
    /// use kanri_store::{Storage, StoreError, TaskStore};
    ///
    /// # fn main() -> kanri_store::Result<()> {
    /// let mut store = TaskStore::open(Storage::at_default_location()?)?;
    /// assert!(matches!(
    ///     store.add_task(Task::new("   ")),
    ///     Err(StoreError::EmptyTitle)
    /// ));
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_task(&mut self, mut task: Task) -> Result<()> {
        if task.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if self.task(task.id).is_some() {
            return Err(StoreError::DuplicateTaskId(task.id));
        }

        let now = Utc::now();
        task.created_at = now;
        task.updated_at = now;
        self.state.tasks.push(task);
        self.persist()
    }

    /// Replaces the task whose id matches, wholesale.
    ///
    /// Returns `Ok(false)` if no task has that id (the task is NOT
    /// inserted). The stored `created_at` is preserved and `updated_at`
    /// is stamped by the store, so `updated_at >= created_at` always
    /// holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the new title is empty after trimming, or if
    /// persistence fails.
    pub fn update_task(&mut self, task: Task) -> Result<bool> {
        if task.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let Some(existing) = self.state.tasks.iter_mut().find(|t| t.id == task.id) else {
            return Ok(false);
        };

        let created_at = existing.created_at;
        *existing = task;
        existing.created_at = created_at;
        existing.updated_at = Utc::now();

        self.persist()?;
        Ok(true)
    }

    /// Removes the task with the given id.
    ///
    /// Returns `Ok(false)` if no task has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn delete_task(&mut self, id: TaskId) -> Result<bool> {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|t| t.id != id);

        if self.state.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Adds a project to the store.
    ///
    /// The store stamps `created_at` and `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming, if a project
    /// with the same id already exists, or if persistence fails.
    pub fn add_project(&mut self, mut project: Project) -> Result<()> {
        if project.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.project(project.id).is_some() {
            return Err(StoreError::DuplicateProjectId(project.id));
        }

        let now = Utc::now();
        project.created_at = now;
        project.updated_at = now;
        self.state.projects.push(project);
        self.persist()
    }

    /// Replaces the project whose id matches, wholesale.
    ///
    /// Returns `Ok(false)` if no project has that id (the project is NOT
    /// inserted).
    ///
    /// # Errors
    ///
    /// Returns an error if the new name is empty after trimming, or if
    /// persistence fails.
    pub fn update_project(&mut self, project: Project) -> Result<bool> {
        if project.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        let Some(existing) = self
            .state
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
        else {
            return Ok(false);
        };

        let created_at = existing.created_at;
        *existing = project;
        existing.created_at = created_at;
        existing.updated_at = Utc::now();

        self.persist()?;
        Ok(true)
    }

    /// Removes the project with the given id and clears the weak
    /// `project_id` reference on every task pointing at it.
    ///
    /// The tasks themselves are kept. The removal and the reference sweep
    /// persist together as one write.
    ///
    /// Returns `Ok(false)` if no project has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn delete_project(&mut self, id: ProjectId) -> Result<bool> {
        let Some(pos) = self.state.projects.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        self.state.projects.remove(pos);

        for task in &mut self.state.tasks {
            if task.project_id == Some(id) {
                task.set_project(None);
            }
        }

        self.persist()?;
        Ok(true)
    }

    /// Replaces the active filter wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn set_filter(&mut self, filter: TaskFilter) -> Result<()> {
        self.state.filter = filter;
        self.persist()
    }

    /// Moves the task with the given id to the target status.
    ///
    /// This is the status-transition command behind dropping a card on a
    /// lane. Any status is reachable from any other in a single step.
    /// Returns `Ok(false)` without touching anything when the id is
    /// unknown (e.g. a stale drop event) or when the task is already in
    /// the target status (idempotent).
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanri_protocol::{Task, TaskStatus};
    /// use kanri_store::{Storage, TaskStore};
    ///
    /// # fn main() -> kanri_store::Result<()> {
    /// let mut store = TaskStore::open(Storage::at_default_location()?)?;
    /// let task = Task::new("Draft announcement");
    /// let id = task.id;
    /// store.add_task(task)?;
    ///
    /// assert!(store.move_task(id, TaskStatus::Done)?);
    /// // Already there: a no-op
    /// assert!(!store.move_task(id, TaskStatus::Done)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn move_task(&mut self, id: TaskId, status: TaskStatus) -> Result<bool> {
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        if task.status == status {
            return Ok(false);
        }

        task.set_status(status);
        self.persist()?;
        Ok(true)
    }

    /// Writes the whole record through to storage.
    fn persist(&self) -> Result<()> {
        self.storage.save(&self.state)
    }
}
