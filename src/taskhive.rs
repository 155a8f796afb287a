use log::debug;

use crate::{
  config::Config,
  storage::{JsonStore, Store},
  task::Task,
};

// Drafts of this length or shorter (after trimming) are not committable.
const MIN_TASK_TEXT_CHARS: usize = 3;

pub struct TaskHive {
  store: Box<dyn Store>,
  tasks: Vec<Task>,
  draft: String,
  show_completed: bool,
  pending_delete: Option<uuid::Uuid>,
}

impl TaskHive {
  pub fn new() -> Self {
    let config = Config::new();

    let slot_path = std::path::Path::new(config.storage_file_path.as_str());
    if let Some(slot_dir) = slot_path.parent() {
      let _ = std::fs::create_dir_all(slot_dir);
    }
    debug!("taskhive storage slot: {}", config.storage_file_path);

    Self::with_store(Box::new(JsonStore::new(config.storage_file_path.as_str())))
  }

  pub fn with_store(mut store: Box<dyn Store>) -> Self {
    // Absent or unparseable slot means a fresh empty list, never an error.
    let tasks: Vec<Task> = store
      .load()
      .and_then(|raw| serde_json::from_str(raw.as_str()).ok())
      .unwrap_or_default();

    debug!("restored {} tasks from the slot", tasks.len());

    Self {
      store,
      tasks,
      draft: String::new(),
      show_completed: true,
      pending_delete: None,
    }
  }

  pub fn draft(&self) -> &str {
    self.draft.as_str()
  }

  pub fn set_draft(&mut self, draft: &str) {
    self.draft = draft.to_owned();
  }

  pub fn add_task(&mut self) -> Option<Task> {
    if self.draft.trim().chars().count() <= MIN_TASK_TEXT_CHARS {
      return None;
    }

    // The committed text is the draft as typed, untrimmed.
    let task = Task::new(self.draft.as_str());
    self.tasks.push(task.clone());
    self.draft.clear();
    self.flush();

    return Some(task);
  }

  pub fn toggle_completion(&mut self, task_id: uuid::Uuid) -> bool {
    let task = match self.tasks.iter_mut().find(|t| t.id() == task_id) {
      Some(task) => task,
      None => return false,
    };

    task.toggle();
    self.flush();
    return true;
  }

  /// First request on an id marks it for deletion, a second request on the
  /// same id commits the removal. A request on a different id while one is
  /// pending only moves the mark. Returns true when a task was removed.
  pub fn request_delete(&mut self, task_id: uuid::Uuid) -> bool {
    let position = match self.position_by_id(task_id) {
      Some(position) => position,
      None => return false,
    };

    if self.pending_delete != Some(task_id) {
      self.pending_delete = Some(task_id);
      return false;
    }

    self.tasks.remove(position);
    self.pending_delete = None;
    self.flush();
    return true;
  }

  pub fn cancel_delete(&mut self) {
    self.pending_delete = None;
  }

  /// Pops the task into the draft and removes it from the list. The draft is
  /// the only thing left of the task: committing it later via `add_task`
  /// assigns a fresh id, and abandoning the draft loses the task for good.
  pub fn edit_task(&mut self, task_id: uuid::Uuid) -> bool {
    let position = match self.position_by_id(task_id) {
      Some(position) => position,
      None => return false,
    };

    let task = self.tasks.remove(position);
    self.draft = task.text().to_owned();
    if self.pending_delete == Some(task_id) {
      self.pending_delete = None;
    }
    self.flush();
    return true;
  }

  pub fn show_completed(&self) -> bool {
    self.show_completed
  }

  pub fn set_show_completed(&mut self, show_completed: bool) {
    self.show_completed = show_completed;
  }

  pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
    let show_completed = self.show_completed;
    self
      .tasks
      .iter()
      .filter(move |t| show_completed || !t.is_completed())
  }

  pub fn tasks(&self) -> &[Task] {
    self.tasks.as_slice()
  }

  pub fn pending_delete(&self) -> Option<uuid::Uuid> {
    self.pending_delete
  }

  pub fn is_pending_delete(&self, task_id: uuid::Uuid) -> bool {
    self.pending_delete == Some(task_id)
  }

  fn position_by_id(&self, task_id: uuid::Uuid) -> Option<usize> {
    self.tasks.iter().position(|t| t.id() == task_id)
  }

  fn flush(&mut self) {
    match serde_json::to_string_pretty(&self.tasks) {
      Ok(payload) => self.store.save(payload.as_str()),
      Err(err) => debug!("can't serialize tasks: {}", err),
    }
  }
}
