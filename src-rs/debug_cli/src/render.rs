use std::io::{self, Write};

use serde_json::Value;

use crate::models::{CLIConfig, LogEntry, Summary, VoiceResult};

pub fn banner(cfg: &CLIConfig) {
    println!("Voice Agent Debug CLI");
    println!("API: {}", cfg.base_url);
    println!("Type a command like \"open youtube\", or /help.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                 Show commands");
    println!("  /exit | /quit          Exit");
    println!("  /history [limit]       Show processed commands");
    println!("  /summary               Show success counts");
    println!("  /sites                 List supported websites");
    println!("  /add <name> <url>      Register a website");
    println!("  /debug [on|off]        Toggle raw JSON output");
    println!("  /config                Show current config");
    println!("  /base <url>            Update base URL");
}

pub fn raw(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

pub fn result(result: &VoiceResult) {
    let mark = if result.success { "ok" } else { "failed" };
    println!("[{}] {}", mark, result.message);
    print_payload(result, "  ");
    if let Some(tasks) = &result.tasks {
        for task in tasks {
            println!("  {}. [{}] {}", task.task_number, task.status, task.command);
            println!("     {}", task.result.message);
            print_payload(&task.result, "     ");
        }
    }
}

fn print_payload(result: &VoiceResult, indent: &str) {
    if let Some(url) = &result.url {
        println!("{}url: {}", indent, url);
    }
    if let Some(steps) = &result.steps {
        for (idx, step) in steps.iter().enumerate() {
            let detail = step.value.as_deref().or(step.target.as_deref()).unwrap_or("");
            println!("{}{}. {} {} {}", indent, idx + 1, step.kind, step.description, detail);
        }
    }
    if let Some(information) = &result.information {
        for line in information.lines() {
            println!("{}{}", indent, line);
        }
    }
}

pub fn history(items: &[LogEntry]) {
    if items.is_empty() {
        println!("no history");
        return;
    }
    for entry in items {
        let mark = if entry.success { "ok" } else { "failed" };
        println!(
            "#{} [{}] {} -> {} ({}, {})",
            entry.id, mark, entry.command, entry.target, entry.action, entry.executed_at
        );
    }
}

pub fn summary(summary: &Summary) {
    println!(
        "total: {}  successful: {}  failed: {}",
        summary.total, summary.successful, summary.failed
    );
}

pub fn sites(names: &[String]) {
    println!("{} websites:", names.len());
    for chunk in names.chunks(6) {
        println!("  {}", chunk.join(", "));
    }
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  debug: {}", cfg.debug);
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
