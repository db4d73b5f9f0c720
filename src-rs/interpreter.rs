use crate::classify::ClassifierChain;
use crate::directory::{DirectoryError, WebsiteDirectory};
use crate::multitask::{is_multi_task, parse_numbered_list};
use crate::result::{CommandResult, TaskOutcome};

pub const NO_VALID_TASKS_MESSAGE: &str = "No valid tasks found in the command";

/// Turns spoken commands into navigation, automation and information results.
pub struct CommandInterpreter {
    directory: WebsiteDirectory,
    chain: ClassifierChain,
}

impl CommandInterpreter {
    pub fn new(directory: WebsiteDirectory) -> Self {
        Self::with_chain(directory, ClassifierChain::standard())
    }

    pub fn with_chain(directory: WebsiteDirectory, chain: ClassifierChain) -> Self {
        Self { directory, chain }
    }

    pub fn directory(&self) -> &WebsiteDirectory {
        &self.directory
    }

    /// Interprets one raw command. Never fails; problems come back as
    /// `success: false` results.
    pub fn process(&self, command: &str) -> CommandResult {
        if is_multi_task(command) {
            return self.process_multi_task(command);
        }
        self.process_single(command)
    }

    fn process_single(&self, command: &str) -> CommandResult {
        let normalized = command.trim().to_lowercase();
        self.chain.run(&normalized, &self.directory)
    }

    fn process_multi_task(&self, command: &str) -> CommandResult {
        let items = parse_numbered_list(command);
        if items.is_empty() {
            tracing::debug!("numbered list without usable items");
            return CommandResult::multitask(false, NO_VALID_TASKS_MESSAGE, Vec::new());
        }

        let tasks: Vec<TaskOutcome> = items
            .iter()
            .map(|item| TaskOutcome::new(item.number, &item.command, self.process_single(&item.command)))
            .collect();
        let completed = tasks.iter().filter(|task| task.result.success).count();
        tracing::debug!(total = tasks.len(), completed, "multitask processed");

        CommandResult::multitask(
            true,
            format!(
                "Multitask execution completed: {}/{} tasks successful",
                completed,
                tasks.len()
            ),
            tasks,
        )
    }

    pub fn list_supported_websites(&self) -> Vec<String> {
        self.directory.names()
    }

    pub fn add_website(&self, name: &str, url: &str) -> Result<(), DirectoryError> {
        self.directory.add_website(name, url)
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(WebsiteDirectory::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ActionKind, TaskStatus};

    #[test]
    fn single_commands_are_normalized() {
        let interpreter = CommandInterpreter::default();
        let result = interpreter.process("  OPEN GitHub ");
        assert!(result.success);
        assert_eq!(result.url.as_deref(), Some("https://www.github.com"));
        assert_eq!(result.message, "Opening github");
    }

    #[test]
    fn multitask_keeps_order_and_numbers() {
        let interpreter = CommandInterpreter::default();
        let result = interpreter.process("1. open google 2. xyzzy 3. open youtube");
        assert!(result.success);
        assert_eq!(result.action, Some(ActionKind::Multitask));
        assert_eq!(result.is_multi_task, Some(true));
        assert_eq!(result.message, "Multitask execution completed: 2/3 tasks successful");

        let tasks = result.tasks.unwrap();
        let numbers: Vec<u32> = tasks.iter().map(|task| task.task_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(tasks[1].command, "xyzzy");
        assert_eq!(tasks[1].status, TaskStatus::Failed);
        assert_eq!(tasks[2].result.url.as_deref(), Some("https://www.youtube.com"));
    }

    #[test]
    fn subtasks_keep_original_case_but_run_lowercased() {
        let interpreter = CommandInterpreter::default();
        let tasks = interpreter
            .process("1. Open Google\n2. Open Reddit")
            .tasks
            .unwrap();
        assert_eq!(tasks[0].command, "Open Google");
        assert_eq!(tasks[1].result.url.as_deref(), Some("https://www.reddit.com"));
    }

    #[test]
    fn blank_items_fail_as_unrecognized() {
        let result = CommandInterpreter::default().process("1. open google 2. 3. open bing");
        assert!(result.success);
        assert_eq!(result.message, "Multitask execution completed: 2/3 tasks successful");
        let tasks = result.tasks.unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[1].task_number, 2);
        assert_eq!(tasks[1].command, "");
        assert_eq!(tasks[1].status, TaskStatus::Failed);
        assert_eq!(tasks[1].result.message, crate::classify::UNRECOGNIZED_MESSAGE);

        let result = CommandInterpreter::default().process("1. 2. 3.");
        assert!(result.success);
        assert_eq!(result.message, "Multitask execution completed: 0/2 tasks successful");
        assert_eq!(result.tasks.map(|tasks| tasks.len()), Some(2));
    }

    #[test]
    fn multitask_without_items() {
        let result = CommandInterpreter::default().process("1. a 2 b 3. c 4 d");
        assert!(!result.success);
        assert_eq!(result.action, Some(ActionKind::Multitask));
        assert_eq!(result.message, NO_VALID_TASKS_MESSAGE);
        assert_eq!(result.tasks, Some(Vec::new()));
    }

    #[test]
    fn added_websites_are_listed_and_resolved() {
        let interpreter = CommandInterpreter::new(WebsiteDirectory::new());
        interpreter.add_website("Foo", "https://foo.example").unwrap();
        assert_eq!(interpreter.list_supported_websites(), vec!["foo".to_string()]);
        assert_eq!(
            interpreter.process("open foo").url.as_deref(),
            Some("https://foo.example")
        );
        assert_eq!(interpreter.add_website(" ", "https://x.example"), Err(DirectoryError::EmptyName));
    }
}
