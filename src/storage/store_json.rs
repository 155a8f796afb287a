use std::io::{Read, Seek, Write};

use log::debug;

use super::store::Store;

pub struct JsonStore {
  filepath: String,
  file: std::fs::File,
}

impl JsonStore {
  pub fn new(filepath: &str) -> Self {
    Self {
      filepath: filepath.to_owned(),
      file: std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .read(true)
        .open(filepath)
        .unwrap(),
    }
  }

  pub fn storage_path(&self) -> &str {
    self.filepath.as_str()
  }

  fn read_slot(&mut self) -> std::io::Result<String> {
    self.file.rewind()?;
    let mut raw = String::new();
    self.file.read_to_string(&mut raw)?;
    return Ok(raw);
  }

  fn write_slot(&mut self, payload: &str) -> std::io::Result<()> {
    self.file.set_len(0)?;
    self.file.rewind()?;
    self.file.write_all(payload.as_bytes())?;
    self.file.flush()
  }
}

impl Store for JsonStore {
  fn load(&mut self) -> Option<String> {
    let raw = match self.read_slot() {
      Ok(raw) => raw,
      Err(err) => {
        debug!("can't read slot from: {}, err: {}", self.filepath, err);
        return None;
      }
    };

    if raw.is_empty() {
      return None;
    }

    debug!("loaded {} bytes from: {}", raw.len(), self.filepath);
    return Some(raw);
  }

  fn save(&mut self, payload: &str) {
    if let Err(err) = self.write_slot(payload) {
      debug!("can't write slot to: {}, err: {}", self.filepath, err);
    }
  }
}

#[cfg(test)]
mod test {
  use super::{JsonStore, Store};

  fn get_new_store() -> JsonStore {
    let tmp_file = tempfile::Builder::new()
      .prefix("taskhive")
      .suffix(".json")
      .tempfile()
      .unwrap();

    JsonStore::new(tmp_file.into_temp_path().to_str().unwrap())
  }

  #[test]
  fn store_load_from_empty_slot() {
    let mut store = get_new_store();
    assert!(store.load().is_none());
  }

  #[test]
  fn store_save_then_load() {
    let mut store = get_new_store();
    store.save(r#"[{"id":"a","todo":"hello","isCompleted":false}]"#);

    let raw = store.load().unwrap();
    assert_eq!(raw, r#"[{"id":"a","todo":"hello","isCompleted":false}]"#);
  }

  #[test]
  fn store_save_overwrites_longer_payload() {
    let mut store = get_new_store();
    store.save("a long first payload that must not leave a tail behind");
    store.save("short");

    assert_eq!(store.load().unwrap(), "short");
  }

  #[test]
  fn store_survives_reopen() {
    let tmp_path = tempfile::Builder::new()
      .prefix("taskhive")
      .suffix(".json")
      .tempfile()
      .unwrap()
      .into_temp_path();
    let filepath = tmp_path.to_str().unwrap().to_owned();

    let mut store = JsonStore::new(filepath.as_str());
    assert_eq!(store.storage_path(), filepath.as_str());
    store.save("persisted");
    drop(store);

    let mut reopened = JsonStore::new(filepath.as_str());
    assert_eq!(reopened.load().unwrap(), "persisted");
  }
}
