//! Line-oriented command scripts.
//!
//! Each line is one command, forwarded to the [`ListController`] as an event.
//! The resulting view is written as one JSON document per command.

use std::io::{BufRead, Write};

use checklist_lib::{ChecklistView, Event, IdGenerator, ItemId, Key, ListController};
use log::{debug, info};

use crate::error::CliError;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Focus(String),
    Blur(String),
    Text(String, String),
    Key(String, Key),
    Toggle(String),
    DeleteSelected,
    Delete(String),
    Show,
}

impl Command {
    /// Parse one non-empty, non-comment line.
    pub fn parse(line_no: usize, line: &str) -> Result<Self, CliError> {
        let line = line.trim_start();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();

        let target = |rest: &str| -> Result<String, CliError> {
            let id = rest.split_whitespace().next().ok_or_else(|| {
                CliError::script(line_no, format!("'{}' needs an item id", name))
            })?;
            Ok(id.to_string())
        };

        let command = match name {
            "add" => Command::Add,
            "focus" => Command::Focus(target(rest)?),
            "blur" => Command::Blur(target(rest)?),
            "toggle" => Command::Toggle(target(rest)?),
            "delete" => Command::Delete(target(rest)?),
            "delete-selected" => Command::DeleteSelected,
            "show" => Command::Show,
            "text" => {
                let id = target(rest)?;
                // Everything after the id and one separating whitespace
                // character, verbatim; may be empty.
                let after = &rest[id.len()..];
                let mut chars = after.chars();
                let text = match chars.next() {
                    Some(c) if c.is_whitespace() => chars.as_str(),
                    _ => after,
                };
                Command::Text(id, text.to_string())
            }
            "key" => {
                let id = target(rest)?;
                let key_name = rest[id.len()..].trim();
                if key_name.is_empty() {
                    return Err(CliError::script(line_no, "'key' needs a key name"));
                }
                let key = key_name.parse().map_err(|source| CliError::Key {
                    line: line_no,
                    source,
                })?;
                Command::Key(id, key)
            }
            other => {
                return Err(CliError::script(
                    line_no,
                    format!("unknown command '{}'", other),
                ));
            }
        };
        Ok(command)
    }
}

/// Runs scripts against one checklist.
#[derive(Debug)]
pub struct Session {
    list: ListController,
    /// Only print on `show`.
    quiet: bool,
    pretty: bool,
}

impl Session {
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            list: ListController::with_id_generator(ids),
            quiet: false,
            pretty: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    /// Run every line of `input`, writing views to `out`.
    ///
    /// Stops at the first malformed line.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<(), CliError> {
        let mut executed = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let command = Command::parse(index + 1, &line)?;
            let show = self.execute(index + 1, command)?;
            if show || !self.quiet {
                self.write_view(&mut out)?;
            }
            executed += 1;
        }
        out.flush()?;
        info!("Ran {} commands", executed);
        Ok(())
    }

    /// Apply one command. Returns `true` if it asks for the view to be shown.
    pub fn execute(&mut self, line_no: usize, command: Command) -> Result<bool, CliError> {
        debug!("line {}: {:?}", line_no, command);
        let event = match command {
            Command::Show => return Ok(true),
            Command::Delete(id) => {
                let id = self.resolve(line_no, &id)?;
                self.list.remove_item(&id);
                return Ok(false);
            }
            Command::Add => Event::PressAdd,
            Command::DeleteSelected => Event::PressDeleteSelected,
            Command::Focus(id) => Event::FocusStart {
                id: self.resolve(line_no, &id)?,
            },
            Command::Blur(id) => Event::FocusEnd {
                id: self.resolve(line_no, &id)?,
            },
            Command::Toggle(id) => Event::PressToggleSelect {
                id: self.resolve(line_no, &id)?,
            },
            Command::Text(id, text) => Event::TextChanged {
                id: self.resolve(line_no, &id)?,
                text,
            },
            Command::Key(id, key) => Event::KeyPressed {
                id: self.resolve(line_no, &id)?,
                key,
            },
        };
        let outcome = self.list.handle(event);
        debug!("line {}: {:?}", line_no, outcome);
        Ok(false)
    }

    /// Resolve `#N` (1-based row) to the id currently at that row.
    ///
    /// Anything else is taken as a literal id; unknown literal ids are passed
    /// through so the list can ignore them.
    fn resolve(&self, line_no: usize, raw: &str) -> Result<ItemId, CliError> {
        let Some(row) = raw.strip_prefix('#') else {
            return Ok(ItemId::new(raw));
        };
        let index: usize = row
            .parse()
            .map_err(|_| CliError::script(line_no, format!("invalid row '{}'", raw)))?;
        index
            .checked_sub(1)
            .and_then(|i| self.list.view().id_at(i).cloned())
            .ok_or_else(|| CliError::script(line_no, format!("no row {}", index)))
    }

    fn write_view(&self, out: &mut impl Write) -> Result<(), CliError> {
        let view: ChecklistView = self.list.view();
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &view)?;
        } else {
            serde_json::to_writer(&mut *out, &view)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
