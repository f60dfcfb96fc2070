use std::fs::File;
use std::io::{self, BufReader, Write};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::replay;
use crate::model::component::session_components;
use crate::model::reflection::ReflectionAnswers;
use crate::model::trigger::COMMON_TRIGGERS;
use crate::ops::page::{Action, Outcome, Page};
use crate::ops::reflection_ops::{JsonSink, ReflectionSink, SinkError};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Triggers => cmd_triggers(json),
        Commands::Components => cmd_components(json),
        Commands::Replay(args) => cmd_replay(args, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_triggers(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&COMMON_TRIGGERS)?);
    } else {
        for trigger in COMMON_TRIGGERS {
            println!("{}", trigger);
        }
    }
    Ok(())
}

fn cmd_components(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let components = session_components();
    if json {
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        for (i, comp) in components.iter().enumerate() {
            if i > 0 {
                println!();
            }
            for line in format_component(comp) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Prints each saved reflection as a text block
struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> ReflectionSink for TextSink<W> {
    fn submit(&mut self, answers: &ReflectionAnswers) -> Result<(), SinkError> {
        writeln!(self.out, "--- reflection saved ---")?;
        for line in format_reflection(answers) {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "------------------------")?;
        Ok(())
    }
}

fn cmd_replay(args: ReplayArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let actions = if args.file == "-" {
        replay::read_actions(io::stdin().lock())?
    } else {
        let file = File::open(&args.file)
            .map_err(|e| format!("cannot open '{}': {}", args.file, e))?;
        replay::read_actions(BufReader::new(file))?
    };
    tracing::debug!(count = actions.len(), "read replay script");

    let mut page = Page::new();
    if json {
        // Snapshots and the summary each go out as one JSON line
        let mut sink = JsonSink::new(io::stdout());
        let outcomes = apply_all(&mut page, actions, &mut sink, |_| {})?;
        println!("{}", serde_json::to_string(&replay_to_json(&page, &outcomes))?);
    } else {
        let mut sink = TextSink { out: io::stdout() };
        apply_all(&mut page, actions, &mut sink, |outcome| {
            if let Some(line) = format_outcome(outcome) {
                println!("{}", line);
            }
        })?;
        println!();
        for line in format_replay_summary(&page) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn apply_all(
    page: &mut Page,
    actions: Vec<Action>,
    sink: &mut dyn ReflectionSink,
    mut on_outcome: impl FnMut(&Outcome),
) -> Result<Vec<Outcome>, SinkError> {
    let mut outcomes = Vec::with_capacity(actions.len());
    for action in actions {
        let outcome = page.apply(action, sink)?;
        on_outcome(&outcome);
        outcomes.push(outcome);
    }
    tracing::info!(actions = outcomes.len(), "replay finished");
    Ok(outcomes)
}
