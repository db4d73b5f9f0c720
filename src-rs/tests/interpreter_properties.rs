use proptest::prelude::*;
use voice_agent_rs::{ActionKind, CommandInterpreter, StepKind, TaskStatus};

fn interpreter() -> CommandInterpreter {
    CommandInterpreter::default()
}

#[test]
fn open_every_default_site() {
    let interpreter = interpreter();
    for name in interpreter.list_supported_websites() {
        let result = interpreter.process(&format!("open {}", name));
        assert!(result.success, "open {name}");
        assert_eq!(result.action, Some(ActionKind::OpenWebsite), "open {name}");
        assert_eq!(result.url, interpreter.directory().get(&name), "open {name}");
    }
}

#[test]
fn youtube_search_builds_six_steps() {
    let result = interpreter().process("search youtube for lofi beats");
    assert_eq!(result.action, Some(ActionKind::ComplexAction));
    assert_eq!(result.url.as_deref(), Some("https://www.youtube.com"));
    let steps = result.steps.expect("steps");
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0].kind, StepKind::Navigate);
    assert_eq!(steps[2].value.as_deref(), Some("lofi beats"));
}

#[test]
fn what_is_ai_is_an_information_request() {
    let result = interpreter().process("What is artificial intelligence");
    assert!(result.success);
    assert_eq!(result.action, Some(ActionKind::InformationRequest));
    assert!(result.information.expect("information").contains("Artificial Intelligence"));
}

#[test]
fn information_outranks_platform_actions() {
    let result = interpreter().process("google search for cats");
    assert_eq!(result.action, Some(ActionKind::InformationRequest));
    assert!(result.steps.is_none());

    let result = interpreter().process("google for cats");
    assert_eq!(result.action, Some(ActionKind::ComplexAction));
}

#[test]
fn two_item_list_opens_both_sites() {
    let result = interpreter().process("1. open google 2. open youtube");
    assert_eq!(result.message, "Multitask execution completed: 2/2 tasks successful");
    let tasks = result.tasks.expect("tasks");
    assert!(tasks.iter().all(|task| task.status == TaskStatus::Completed));
    assert_eq!(tasks[0].result.url.as_deref(), Some("https://www.google.com"));
    assert_eq!(tasks[1].result.url.as_deref(), Some("https://www.youtube.com"));
}

#[test]
fn added_site_is_opened() {
    let interpreter = interpreter();
    interpreter.add_website("foo", "https://foo.example").expect("add foo");
    assert_eq!(
        interpreter.process("open foo").url.as_deref(),
        Some("https://foo.example")
    );
}

#[test]
fn unrecognized_command() {
    let result = interpreter().process("xyzzy");
    assert!(!result.success);
    assert!(result.action.is_none());
    assert!(result.message.starts_with("I couldn't understand that command."));
}

proptest! {
    #[test]
    fn numbered_lists_become_tasks(items in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,2}", 2..6)) {
        let command = items
            .iter()
            .enumerate()
            .map(|(idx, text)| format!("{}. {}", idx + 1, text))
            .collect::<Vec<_>>()
            .join(" ");
        let result = interpreter().process(&command);
        prop_assert_eq!(result.action, Some(ActionKind::Multitask));
        prop_assert_eq!(result.is_multi_task, Some(true));
        let tasks = result.tasks.unwrap();
        prop_assert_eq!(tasks.len(), items.len());
        for (idx, (task, text)) in tasks.iter().zip(&items).enumerate() {
            prop_assert_eq!(task.task_number, idx as u32 + 1);
            prop_assert_eq!(&task.command, text);
            prop_assert_ne!(task.result.action, Some(ActionKind::Multitask));
        }
    }

    #[test]
    fn unknown_names_get_guessed_urls(phrase in "[qxzj]{4,8}( [qxzj]{4,8}){0,2}") {
        let result = interpreter().process(&format!("go to {}", phrase));
        prop_assert!(result.success);
        let expected = format!("https://www.{}.com", phrase.replace(' ', ""));
        prop_assert_eq!(result.url.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn processing_is_idempotent(command in "\\PC{0,60}") {
        let interpreter = interpreter();
        prop_assert_eq!(interpreter.process(&command), interpreter.process(&command));
    }
}
