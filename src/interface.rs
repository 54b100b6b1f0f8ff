//! Interactive menu driving a [`Collection`].
//!
//! The menu is a static table of [`CommandSpec`]s: a key, a label, the
//! [`Command`] it triggers and the arguments to prompt for. The [`Shell`] is
//! generic over its input and output so it can be driven from tests.

use std::io::{BufRead, Write};

use tracing::{debug, error};

use crate::collection::Collection;
use crate::error::{CardkeeperError, Result};
use crate::output::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Read,
    Stats,
    Listings,
    Export,
    Quit,
}

#[derive(Debug)]
pub struct ArgSpec {
    pub name: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct CommandSpec {
    pub key: char,
    pub label: &'static str,
    pub command: Command,
    pub args: &'static [ArgSpec],
}

const CARD_NUMBER: &[ArgSpec] = &[ArgSpec { name: "number", label: "Card number" }];
const FILE_NAME: &[ArgSpec] = &[ArgSpec { name: "filename", label: "File name" }];

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec { key: 'i', label: "Insert a card", command: Command::Add, args: CARD_NUMBER },
    CommandSpec { key: 'd', label: "Delete a card", command: Command::Remove, args: CARD_NUMBER },
    CommandSpec { key: 'r', label: "Read a card", command: Command::Read, args: CARD_NUMBER },
    CommandSpec { key: 's', label: "Global statistics", command: Command::Stats, args: &[] },
    CommandSpec { key: 'l', label: "Lists", command: Command::Listings, args: &[] },
    CommandSpec { key: 'e', label: "Export CSV list", command: Command::Export, args: FILE_NAME },
    CommandSpec { key: 'q', label: "Quit", command: Command::Quit, args: &[] },
];

/// Finds the menu entry for whatever the user typed.
pub fn lookup(choice: &str) -> Option<&'static CommandSpec> {
    let choice = choice.trim().to_lowercase();
    let mut chars = choice.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => COMMANDS.iter().find(|spec| spec.key == key),
        _ => None,
    }
}

pub fn parse_number(text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| CardkeeperError::InvalidNumber(text.trim().to_string()))
}

/// Runs one command against the collection. `None` means there is nothing to
/// show (a successful removal or export).
pub fn dispatch(collection: &mut Collection<'_>, command: Command, args: &[String]) -> Result<Option<Report>> {
    let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");
    match command {
        Command::Add => Ok(Some(collection.add(parse_number(arg(0))?)?.into())),
        Command::Remove => {
            collection.remove(parse_number(arg(0))?)?;
            Ok(None)
        }
        Command::Read => Ok(Some(collection.read(parse_number(arg(0))?)?.into())),
        Command::Stats => Ok(Some(collection.stats()?.into())),
        Command::Listings => Ok(Some(collection.listings()?.into())),
        Command::Export => {
            collection.export(arg(0).trim())?;
            Ok(None)
        }
        Command::Quit => Ok(None),
    }
}

pub struct Shell<'c, 'p, R, W> {
    collection: &'c mut Collection<'p>,
    input: R,
    output: W,
}
impl<'c, 'p, R: BufRead, W: Write> Shell<'c, 'p, R, W> {
    pub fn new(collection: &'c mut Collection<'p>, input: R, output: W) -> Self {
        Self { collection, input, output }
    }

    /// Loops until the user quits or the input runs dry. Only storage and
    /// terminal failures break out with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            for spec in COMMANDS.iter().filter(|spec| spec.command != Command::Quit) {
                writeln!(self.output, "{}) {}", spec.key, spec.label)?;
            }
            writeln!(self.output, "q) Quit")?;
            let Some(choice) = self.prompt("Choose an option")? else {
                break;
            };
            let Some(spec) = lookup(&choice) else {
                writeln!(self.output, "Option not found, try again...")?;
                writeln!(self.output)?;
                continue;
            };
            if spec.command == Command::Quit {
                break;
            }
            let mut args = Vec::with_capacity(spec.args.len());
            for arg in spec.args {
                match self.prompt(arg.label)? {
                    Some(value) => args.push(value),
                    None => return Ok(()),
                }
            }
            debug!(command = ?spec.command, ?args, "dispatching");
            match dispatch(&mut *self.collection, spec.command, &args) {
                Ok(Some(report)) => {
                    writeln!(self.output)?;
                    write!(self.output, "{}", report)?;
                }
                Ok(None) => {}
                Err(e) if e.is_recoverable() => {
                    writeln!(self.output)?;
                    write!(self.output, "{}", Report::from(&e))?;
                }
                Err(e) => {
                    error!(error = %e, "giving up");
                    return Err(e);
                }
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
