use super::store::Store;

/// In-memory slot for tests and hosts that keep persistence to themselves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
  slot: Option<String>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self { slot: None }
  }

  pub fn with_slot(payload: &str) -> Self {
    Self {
      slot: Some(payload.to_owned()),
    }
  }

  pub fn slot(&self) -> Option<&str> {
    self.slot.as_deref()
  }
}

impl Store for MemoryStore {
  fn load(&mut self) -> Option<String> {
    self.slot.clone()
  }

  fn save(&mut self, payload: &str) {
    self.slot = Some(payload.to_owned());
  }
}
