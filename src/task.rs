#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Task {
  id: uuid::Uuid,
  #[serde(rename = "todo", alias = "text")]
  text: String,
  #[serde(rename = "isCompleted")]
  is_completed: bool,
}

impl Task {
  pub fn new(text: &str) -> Self {
    Self {
      id: uuid::Uuid::new_v4(),
      text: text.to_owned(),
      is_completed: false,
    }
  }

  pub fn id(&self) -> uuid::Uuid {
    self.id
  }

  pub fn text(&self) -> &str {
    self.text.as_str()
  }

  pub fn is_completed(&self) -> bool {
    self.is_completed
  }

  pub fn toggle(&mut self) {
    self.is_completed = !self.is_completed;
  }
}

#[cfg(test)]
mod test {
  use super::Task;

  #[test]
  fn task_serializes_with_persisted_field_names() {
    let task = Task::new("water the plants");
    let json = serde_json::to_value(&task).unwrap();

    assert!(json.get("todo").is_some());
    assert!(json.get("isCompleted").is_some());
    assert_eq!(json["todo"], "water the plants");
    assert_eq!(json["isCompleted"], false);
  }

  #[test]
  fn task_accepts_text_alias_on_input() {
    let raw = r#"{"id":"7b4b64a4-9e2f-4f3a-a2a6-3a2b7d0c9f10","text":"call mom","isCompleted":true}"#;
    let task: Task = serde_json::from_str(raw).unwrap();

    assert_eq!(task.text(), "call mom");
    assert_eq!(task.is_completed(), true);
  }
}
