//! Reading player input.
//!
//! On a terminal, lines come from a rustyline editor that completes verbs and
//! world names. Piped or redirected input is read straight from stdin.

use std::io::{self, BufRead, IsTerminal, Write};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::command::COMMAND_HELP;

/// What came back from a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Input is exhausted (Ctrl-D or end of a pipe).
    Eof,
    /// Ctrl-C at the prompt.
    Interrupted,
}

lazy_static! {
    /// Verbs and aliases from the help table: "inventory/inv" yields both.
    static ref VERBS: Vec<String> = {
        let mut verbs: Vec<String> = COMMAND_HELP
            .iter()
            .filter_map(|(usage, _)| usage.split_whitespace().next())
            .flat_map(|word| word.split('/'))
            .map(str::to_string)
            .collect();
        verbs.sort_unstable();
        verbs.dedup();
        verbs
    };
}

/// Verbs whose argument is a room, item or enemy name.
const TARGETED_VERBS: &[&str] = &["go", "take", "examine", "fight"];

/// Completes the verb in the first word, then world names after a targeted verb.
#[derive(Debug, Default)]
struct QuestCompleter {
    names: Vec<String>,
}

impl QuestCompleter {
    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let typed = line.trim_start();
        let lead = line.len() - typed.len();
        match typed.split_once(char::is_whitespace) {
            None => {
                let prefix = typed.to_lowercase();
                let verbs = VERBS.iter().filter(|v| v.starts_with(&prefix)).cloned().collect();
                (lead, verbs)
            },
            Some((verb, rest)) => {
                if !TARGETED_VERBS.contains(&verb.to_lowercase().as_str()) {
                    return (line.len(), Vec::new());
                }
                let arg = rest.trim_start();
                let start = line.len() - arg.len();
                let prefix = arg.to_lowercase();
                let names = self.names.iter().filter(|n| n.starts_with(&prefix)).cloned().collect();
                (start, names)
            },
        }
    }
}

impl Completer for QuestCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for QuestCompleter {
    type Hint = String;
}
impl Highlighter for QuestCompleter {}
impl Validator for QuestCompleter {}
impl Helper for QuestCompleter {}

enum Reader {
    Editor(Box<Editor<QuestCompleter, DefaultHistory>>),
    Stdin,
}

/// Source of player input for the whole session.
pub struct InputManager {
    reader: Reader,
    buffer: String,
}

impl InputManager {
    /// Set up input, completing targeted verbs against `names` when on a terminal.
    pub fn new(names: &[String]) -> Self {
        let reader = if io::stdin().is_terminal() {
            match open_editor(names) {
                Ok(editor) => {
                    info!("reading input with rustyline ({} completable names)", names.len());
                    Reader::Editor(Box::new(editor))
                },
                Err(err) => {
                    warn!("rustyline unavailable ({err}); reading plain stdin");
                    Reader::Stdin
                },
            }
        } else {
            info!("stdin is not a terminal; reading plain stdin");
            Reader::Stdin
        };
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Show `prompt` and wait for one line.
    ///
    /// A failing editor is abandoned for plain stdin and the read is retried there.
    ///
    /// # Errors
    /// - if reading from stdin fails
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if let Reader::Editor(editor) = &mut self.reader {
            match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(err) = editor.add_history_entry(line.as_str()) {
                            warn!("could not record history: {err}");
                        }
                    }
                    return Ok(InputEvent::Line(line));
                },
                Err(err) => match readline_event(err) {
                    Ok(event) => return Ok(event),
                    Err(err) => {
                        warn!("rustyline failed ({err}); falling back to plain stdin");
                        self.reader = Reader::Stdin;
                    },
                },
            }
        }
        self.read_stdin(prompt)
    }

    fn read_stdin(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.buffer.clear();
        if io::stdin().lock().read_line(&mut self.buffer)? == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(self.buffer.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn open_editor(names: &[String]) -> rustyline::Result<Editor<QuestCompleter, DefaultHistory>> {
    let mut editor = Editor::new()?;
    editor.set_helper(Some(QuestCompleter { names: names.to_vec() }));
    Ok(editor)
}

/// Ctrl-C and Ctrl-D become events; anything else is a real I/O failure.
fn readline_event(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}
