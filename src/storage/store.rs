/// A single named slot in some key-value medium. The engine mirrors the
/// whole serialized task list into it after every mutation.
pub trait Store {
  fn load(&mut self) -> Option<String>;
  fn save(&mut self, payload: &str);
}
