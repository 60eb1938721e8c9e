//! Line-oriented interactive session: the command-line stand-in for the
//! toggle and reorder controls of a demo page.

use crate::app::render::{render_json, render_text};
use crate::core::presenter::Presenter;
use crate::domain::model::{BaseKind, DecoratorKind, Rendering};
use crate::utils::error::{DemoError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  add <addon>         wrap the chain in one more add-on
  toggle <addon>      enable an add-on, or remove every copy of it
  remove <pos>        drop the layer at a position (0 = innermost)
  move <from> <to>    reorder one layer
  base <coffee|tea>   swap the base beverage
  clear               remove every add-on
  show | json         print the current chain as text or JSON
  menu                list bases and add-ons with prices
  help                this message
  quit                leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(DecoratorKind),
    Toggle(DecoratorKind),
    Remove(usize),
    Move { from: usize, to: usize },
    Base(BaseKind),
    Clear,
    Show,
    Json,
    Menu,
    Help,
    Quit,
}

impl Command {
    /// Whether the command changes the selection and should print the result.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Toggle(_)
                | Command::Remove(_)
                | Command::Move { .. }
                | Command::Base(_)
                | Command::Clear
        )
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> DemoError {
    DemoError::InvalidCommand {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn parse_position(input: &str, raw: Option<&str>) -> Result<usize> {
    let raw = raw.ok_or_else(|| invalid(input, "missing position"))?;
    raw.parse::<usize>()
        .map_err(|_| invalid(input, format!("'{}' is not a position", raw)))
}

fn reject_extra<'a>(input: &str, words: &mut impl Iterator<Item = &'a str>) -> Result<()> {
    if words.next().is_some() {
        return Err(invalid(input, "unexpected extra arguments"));
    }
    Ok(())
}

/// For verbs that take no arguments.
fn bare<'a>(
    input: &str,
    words: &mut impl Iterator<Item = &'a str>,
    command: Command,
) -> Result<Command> {
    reject_extra(input, words)?;
    Ok(command)
}

impl FromStr for Command {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let mut words = input.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| invalid(input, "empty command"))?
            .to_ascii_lowercase();
        // Add-on names may contain spaces ("whipped cream").
        let rest = words.clone().collect::<Vec<_>>().join(" ");

        let command = match verb.as_str() {
            "add" | "toggle" => {
                if rest.is_empty() {
                    return Err(invalid(input, "missing add-on name"));
                }
                let kind: DecoratorKind = rest.parse()?;
                if verb == "add" {
                    Command::Add(kind)
                } else {
                    Command::Toggle(kind)
                }
            }
            "remove" | "rm" => {
                let index = parse_position(input, words.next())?;
                reject_extra(input, &mut words)?;
                Command::Remove(index)
            }
            "move" | "mv" => {
                let from = parse_position(input, words.next())?;
                let to = parse_position(input, words.next())?;
                reject_extra(input, &mut words)?;
                Command::Move { from, to }
            }
            "base" => {
                if rest.is_empty() {
                    return Err(invalid(input, "missing base name"));
                }
                Command::Base(rest.parse()?)
            }
            "clear" => bare(input, &mut words, Command::Clear)?,
            "show" => bare(input, &mut words, Command::Show)?,
            "json" => bare(input, &mut words, Command::Json)?,
            "menu" => bare(input, &mut words, Command::Menu)?,
            "help" | "?" => bare(input, &mut words, Command::Help)?,
            "quit" | "exit" | "q" => bare(input, &mut words, Command::Quit)?,
            other => return Err(invalid(input, format!("unknown command '{}'", other))),
        };

        Ok(command)
    }
}

pub struct Session<R: BufRead, W: Write> {
    presenter: Presenter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(presenter: Presenter, input: R, output: W) -> Self {
        Self {
            presenter,
            input,
            output,
        }
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Processes commands until `quit` or end of input.
    ///
    /// Rejected commands are reported on the output and the session keeps
    /// going; only IO failures end it early.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Interactive session started");
        let initial = self.presenter.render();
        self.print_text(&initial)?;

        let mut line = String::new();
        loop {
            line.clear();
            write!(self.output, "> ")?;
            self.output.flush()?;
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match trimmed.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if command.mutates() {
                        tracing::debug!("Applying {:?}", command);
                    }
                    if let Err(e) = self.apply(&command) {
                        if !matches!(e, DemoError::InvalidPosition { .. }) {
                            return Err(e);
                        }
                        self.report(&e)?;
                    }
                }
                Err(e) => self.report(&e)?,
            }
        }

        writeln!(self.output)?;
        tracing::info!(
            "Interactive session ended with {} layer(s)",
            self.presenter.selection().len()
        );
        Ok(())
    }

    fn apply(&mut self, command: &Command) -> Result<()> {
        let rendering = match command {
            Command::Add(kind) => self.presenter.add(*kind),
            Command::Toggle(kind) => self.presenter.toggle(*kind),
            Command::Remove(index) => self.presenter.remove_at(*index)?,
            Command::Move { from, to } => self.presenter.move_layer(*from, *to)?,
            Command::Base(kind) => self.presenter.set_base(*kind),
            Command::Clear => self.presenter.clear(),
            Command::Show => self.presenter.render(),
            Command::Json => {
                let json = render_json(&self.presenter.render())?;
                writeln!(self.output, "{}", json)?;
                return Ok(());
            }
            Command::Menu => {
                for line in self.presenter.catalog().menu_lines() {
                    writeln!(self.output, "{}", line)?;
                }
                return Ok(());
            }
            Command::Help => {
                write!(self.output, "{}", HELP)?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        self.print_text(&rendering)
    }

    fn print_text(&mut self, rendering: &Rendering) -> Result<()> {
        write!(self.output, "{}", render_text(rendering))?;
        Ok(())
    }

    fn report(&mut self, error: &DemoError) -> Result<()> {
        tracing::warn!("Rejected command: {}", error);
        writeln!(self.output, "error: {}", error.user_friendly_message())?;
        writeln!(self.output, "hint: {}", error.recovery_suggestion())?;
        Ok(())
    }
}
