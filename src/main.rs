//! Interactive demo harness for the mention editor.
//!
//! Reads commands from stdin, one per line. Plain lines are typed into the
//! editor character by character; `:`-prefixed lines drive cursor movement,
//! popup keys, and the imperative operations. Events are printed as they
//! are emitted, which makes the sync pipeline easy to observe.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use mentions::editor::Key;
use mentions::{Candidate, EditorEvent, EditorOptions, MentionsEditor};

fn main() -> Result<()> {
    mentions::tracing::init();
    let args = cli::CliArgs::parse();

    let mut options = match &args.options {
        Some(path) => EditorOptions::load(path),
        None => EditorOptions::default(),
    };

    if let Some(path) = &args.candidates {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading candidates from {}", path.display()))?;
        let candidates: Vec<Candidate> =
            serde_json::from_str(&content).context("parsing candidate list")?;
        options.candidates = candidates;
    }

    let mut editor = match &args.text {
        Some(text) => MentionsEditor::with_value(options, text),
        None => MentionsEditor::new(options),
    };
    editor.focus();

    println!("mentions demo - type text, or :help for commands");
    print_state(&editor);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !run_command(&mut editor, &line)? {
            break;
        }
        drain_events(&mut editor);
        print_state(&editor);
        io::stdout().flush()?;
    }

    Ok(())
}

/// Execute one input line. Returns false to quit.
fn run_command(editor: &mut MentionsEditor, line: &str) -> Result<bool> {
    match line.trim_end() {
        ":quit" | ":q" => return Ok(false),
        ":help" => print_help(),
        ":up" => {
            editor.handle_key(Key::ArrowUp);
        }
        ":down" => {
            editor.handle_key(Key::ArrowDown);
        }
        ":enter" => {
            editor.handle_key(Key::Enter);
        }
        ":esc" => {
            editor.handle_key(Key::Escape);
        }
        ":bs" => {
            editor.handle_key(Key::Backspace);
        }
        ":del" => {
            editor.handle_key(Key::Delete);
        }
        ":left" => {
            editor.handle_key(Key::Left);
        }
        ":right" => {
            editor.handle_key(Key::Right);
        }
        ":clear" => editor.clear_content(),
        ":html" => println!("{}", editor.all_html_content()),
        cmd if cmd.starts_with(":cursor ") => match cmd[8..].trim().parse() {
            Ok(offset) => editor.set_cursor(offset),
            Err(_) => println!("usage: :cursor N"),
        },
        cmd if cmd.starts_with(':') => println!("unknown command {cmd}, try :help"),
        text => {
            for ch in text.chars() {
                editor.handle_key(Key::Char(ch));
            }
        }
    }
    Ok(true)
}

fn print_help() {
    println!("  <text>      type text at the cursor");
    println!("  :up :down   move the popup highlight");
    println!("  :enter      insert the highlighted candidate");
    println!("  :esc        close the popup");
    println!("  :bs :del    backspace / forward delete");
    println!("  :left :right move the cursor");
    println!("  :cursor N   jump to flat offset N");
    println!("  :clear      reset the editor");
    println!("  :html       print the rendered form");
    println!("  :quit       exit");
}

fn drain_events(editor: &mut MentionsEditor) {
    for event in editor.take_events() {
        match event {
            EditorEvent::Changed(text) => println!("event: changed {text:?}"),
            EditorEvent::Mention(c) => println!("event: mention {}", c.name),
            EditorEvent::TokenClicked(id) => println!("event: token clicked {id}"),
            EditorEvent::Error(e) => println!("event: error code {} ({e})", e.code()),
            EditorEvent::PopupOpened { position } => {
                println!("event: popup opened at ({}, {})", position.x, position.y)
            }
            EditorEvent::PopupClosed => println!("event: popup closed"),
        }
    }
}

fn print_state(editor: &MentionsEditor) {
    let (text, cursor) = editor.text_and_cursor();
    let mut marked: String = text.chars().take(cursor).collect();
    marked.push('|');
    marked.extend(text.chars().skip(cursor));
    println!("[{marked}]");

    if editor.is_popup_open() {
        let highlighted = editor.highlighted_index().unwrap_or(0);
        for (i, candidate) in editor.filtered_candidates().iter().enumerate() {
            let mark = if i == highlighted { ">" } else { " " };
            println!("  {mark} {}", candidate.name);
        }
    }
}
