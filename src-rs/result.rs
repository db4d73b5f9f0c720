use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    OpenWebsite,
    ComplexAction,
    InformationRequest,
    Multitask,
    Unknown,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::OpenWebsite => "open_website",
            ActionKind::ComplexAction => "complex_action",
            ActionKind::InformationRequest => "information_request",
            ActionKind::Multitask => "multitask",
            ActionKind::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Navigate,
    Search,
    Click,
    Wait,
    Type,
}

/// One instruction of an automation plan. Steps are followed in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub description: String,
}

impl ActionStep {
    pub fn navigate(url: &str, description: &str) -> Self {
        Self {
            kind: StepKind::Navigate,
            target: Some(url.to_string()),
            value: None,
            description: description.to_string(),
        }
    }

    pub fn wait(millis: u64, description: &str) -> Self {
        Self {
            kind: StepKind::Wait,
            target: None,
            value: Some(millis.to_string()),
            description: description.to_string(),
        }
    }

    pub fn search(selector: &str, query: &str) -> Self {
        Self {
            kind: StepKind::Search,
            target: Some(selector.to_string()),
            value: Some(query.to_string()),
            description: format!("Searching for \"{}\"", query),
        }
    }

    pub fn click(selector: &str, description: &str) -> Self {
        Self {
            kind: StepKind::Click,
            target: Some(selector.to_string()),
            value: None,
            description: description.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutcome {
    pub task_number: u32,
    pub command: String,
    pub result: CommandResult,
    pub status: TaskStatus,
}

impl TaskOutcome {
    pub fn new(task_number: u32, command: &str, result: CommandResult) -> Self {
        let status = if result.success {
            TaskStatus::Completed
        } else {
            TaskStatus::Failed
        };
        Self {
            task_number,
            command: command.to_string(),
            result,
            status,
        }
    }
}

/// Outcome of interpreting one command.
///
/// Built only through the constructors below so that the payload fields
/// always match `action`: navigation carries `url`, a complex action carries
/// `url` and `steps`, an information request carries `information`, and a
/// multitask envelope carries `is_multi_task` and `tasks`. Failures carry no
/// payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<ActionStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_multi_task: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskOutcome>>,
}

impl CommandResult {
    fn empty(success: bool, message: String, action: Option<ActionKind>) -> Self {
        Self {
            success,
            message,
            action,
            url: None,
            steps: None,
            information: None,
            is_multi_task: None,
            tasks: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::empty(false, message.into(), None)
    }

    pub fn open_website(message: impl Into<String>, url: &str) -> Self {
        let mut result = Self::empty(true, message.into(), Some(ActionKind::OpenWebsite));
        result.url = Some(url.to_string());
        result
    }

    pub fn complex_action(message: impl Into<String>, url: &str, steps: Vec<ActionStep>) -> Self {
        let mut result = Self::empty(true, message.into(), Some(ActionKind::ComplexAction));
        result.url = Some(url.to_string());
        result.steps = Some(steps);
        result
    }

    pub fn information(message: impl Into<String>, information: String) -> Self {
        let mut result = Self::empty(true, message.into(), Some(ActionKind::InformationRequest));
        result.information = Some(information);
        result
    }

    pub fn multitask(success: bool, message: impl Into<String>, tasks: Vec<TaskOutcome>) -> Self {
        let mut result = Self::empty(success, message.into(), Some(ActionKind::Multitask));
        result.is_multi_task = Some(true);
        result.tasks = Some(tasks);
        result
    }

    /// Action label used by the command history.
    pub fn action_label(&self) -> &'static str {
        self.action.unwrap_or(ActionKind::Unknown).as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        let result = CommandResult::complex_action(
            "Searching Google for \"rust\"",
            "https://www.google.com",
            vec![ActionStep::wait(2000, "Waiting for page to load")],
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["action"], "complex_action");
        assert_eq!(value["steps"][0]["type"], "wait");
        assert_eq!(value["steps"][0]["value"], "2000");
        assert!(value["steps"][0].get("target").is_none());
        assert!(value.get("information").is_none());
        assert!(value.get("isMultiTask").is_none());
    }

    #[test]
    fn task_outcome_status_follows_result() {
        let ok = TaskOutcome::new(1, "open google", CommandResult::open_website("Opening google", "https://www.google.com"));
        let failed = TaskOutcome::new(2, "???", CommandResult::failure("nope"));
        assert_eq!(ok.status, TaskStatus::Completed);
        assert_eq!(failed.status, TaskStatus::Failed);

        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["taskNumber"], 1);
        assert_eq!(value["status"], "completed");
    }

    #[test]
    fn failure_has_unknown_label() {
        let result = CommandResult::failure("I couldn't understand that command.");
        assert_eq!(result.action_label(), "unknown");
        assert!(result.url.is_none());
    }
}
