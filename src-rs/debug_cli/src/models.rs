use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub debug: bool,
}

#[derive(Debug, Serialize)]
pub struct CommandRequest {
    pub command: String,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: String,
    pub target: Option<String>,
    pub value: Option<String>,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub task_number: u32,
    pub command: String,
    pub result: VoiceResult,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResult {
    pub success: bool,
    pub message: String,
    pub action: Option<String>,
    pub url: Option<String>,
    pub steps: Option<Vec<Step>>,
    pub information: Option<String>,
    pub tasks: Option<Vec<TaskItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: u64,
    pub command: String,
    pub action: String,
    pub target: String,
    pub success: bool,
    pub executed_at: String,
}

#[derive(Debug, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Website {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_multitask_response() {
        let raw = r#"{
            "success": true,
            "message": "Multitask execution completed: 1/1 tasks successful",
            "action": "multitask",
            "isMultiTask": true,
            "tasks": [{
                "taskNumber": 1,
                "command": "search youtube for jazz",
                "status": "completed",
                "result": {
                    "success": true,
                    "message": "Opening YouTube and playing \"jazz\"",
                    "action": "complex_action",
                    "url": "https://www.youtube.com",
                    "steps": [{"type": "wait", "value": "2000", "description": "Waiting for page to load"}]
                }
            }]
        }"#;
        let result: VoiceResult = serde_json::from_str(raw).unwrap();
        let tasks = result.tasks.unwrap();
        assert_eq!(tasks[0].task_number, 1);
        let steps = tasks[0].result.steps.as_ref().unwrap();
        assert_eq!(steps[0].kind, "wait");
        assert!(steps[0].target.is_none());
    }
}
