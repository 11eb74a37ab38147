use std::fmt;

use track_core::filter::QuestionFilter;
use track_core::model::{
    Difficulty, LocalTimestamp, QuestionDraft, QuestionId, QuestionStatus, TopicId,
};
use track_core::reminders::ReminderMode;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingCommand,
    UnknownCommand(String),
    MissingValue { flag: &'static str },
    MissingArgument { what: &'static str },
    UnknownArg(String),
    InvalidId { raw: String },
    InvalidValue { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingCommand => write!(f, "a subcommand is required"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArgument { what } => write!(f, "missing {what}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidId { raw } => write!(f, "invalid id: {raw}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_arg(
    args: &mut impl Iterator<Item = String>,
    what: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingArgument { what })
}

fn parse_id<T: std::str::FromStr>(raw: String) -> Result<T, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidId { raw })
}

/// Field overrides for `add-question` / `edit-question`. Unset flags leave
/// the draft untouched.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QuestionFlags {
    pub topic: Option<TopicId>,
    pub number: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<QuestionStatus>,
    pub important: Option<bool>,
    /// `Some("")` clears the reminder.
    pub remind: Option<String>,
}

impl QuestionFlags {
    pub fn apply(self, draft: &mut QuestionDraft) {
        if let Some(topic) = self.topic {
            draft.topic_id = Some(topic);
        }
        if let Some(number) = self.number {
            draft.leetcode_number = number;
        }
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(link) = self.link {
            draft.link = link;
        }
        if let Some(difficulty) = self.difficulty {
            draft.difficulty = difficulty;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(important) = self.important {
            draft.is_important = important;
        }
        if let Some(remind) = self.remind {
            draft.reminder = remind;
        }
    }

    fn parse(
        args: &mut impl Iterator<Item = String>,
        globals: &mut Globals,
    ) -> Result<Self, ArgsError> {
        let mut flags = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--topic" => flags.topic = Some(parse_id(require_value(args, "--topic")?)?),
                "--number" => flags.number = Some(require_value(args, "--number")?),
                "--title" => flags.title = Some(require_value(args, "--title")?),
                "--link" => flags.link = Some(require_value(args, "--link")?),
                "--difficulty" => {
                    let raw = require_value(args, "--difficulty")?;
                    flags.difficulty = Some(parse_difficulty(raw)?);
                }
                "--status" => {
                    let raw = require_value(args, "--status")?;
                    flags.status = Some(parse_status("--status", raw)?);
                }
                "--important" => flags.important = Some(true),
                "--not-important" => flags.important = Some(false),
                "--remind" => flags.remind = Some(require_value(args, "--remind")?),
                "--no-remind" => flags.remind = Some(String::new()),
                _ if globals.take(&arg, args)? => {}
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(flags)
    }
}

fn parse_difficulty(raw: String) -> Result<Difficulty, ArgsError> {
    Difficulty::parse(&raw).ok_or(ArgsError::InvalidValue {
        flag: "--difficulty",
        raw,
    })
}

fn parse_status(flag: &'static str, raw: String) -> Result<QuestionStatus, ArgsError> {
    QuestionStatus::parse(&raw).ok_or(ArgsError::InvalidValue { flag, raw })
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Dashboard { show_all: bool },
    Topics,
    Topic { id: TopicId, filter: QuestionFilter },
    Reminders { mode: ReminderMode },
    Progress,
    AddTopic { name: String, notes: String },
    Notes { id: TopicId, text: String },
    DeleteTopic { id: TopicId, confirmed: bool },
    AddQuestion(QuestionFlags),
    EditQuestion { id: QuestionId, flags: QuestionFlags },
    SetStatus { id: QuestionId, status: QuestionStatus },
    ToggleImportant { id: QuestionId },
    DeleteQuestion { id: QuestionId, confirmed: bool },
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub api: Option<String>,
    pub now: Option<LocalTimestamp>,
    pub command: Command,
}

/// What the user asked for: run a command or just see the usage text.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(Args),
}

/// `--api` and `--now`, picked up wherever a flag may stand.
#[derive(Debug, Default)]
struct Globals {
    api: Option<String>,
    now: Option<LocalTimestamp>,
}

impl Globals {
    /// Consume `arg` and its value if it is a global flag.
    fn take(
        &mut self,
        arg: &str,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<bool, ArgsError> {
        match arg {
            "--api" => {
                let value = require_value(args, "--api")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidValue {
                        flag: "--api",
                        raw: value,
                    });
                }
                self.api = Some(value);
            }
            "--now" => {
                let raw = require_value(args, "--now")?;
                let at = LocalTimestamp::parse(&raw)
                    .map_err(|_| ArgsError::InvalidValue { flag: "--now", raw })?;
                self.now = Some(at);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_confirm(
    args: &mut impl Iterator<Item = String>,
    globals: &mut Globals,
) -> Result<bool, ArgsError> {
    let mut confirmed = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--yes" | "-y" => confirmed = true,
            _ if globals.take(&arg, args)? => {}
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(confirmed)
}

/// Only global flags may follow a command's positional arguments.
fn finish(
    args: &mut impl Iterator<Item = String>,
    globals: &mut Globals,
) -> Result<(), ArgsError> {
    while let Some(arg) = args.next() {
        if !globals.take(&arg, args)? {
            return Err(ArgsError::UnknownArg(arg));
        }
    }
    Ok(())
}

impl Command {
    fn parse(
        name: &str,
        args: &mut impl Iterator<Item = String>,
        globals: &mut Globals,
    ) -> Result<Self, ArgsError> {
        let command = match name {
            "dashboard" => {
                let mut show_all = false;
                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--all" => show_all = true,
                        _ if globals.take(&arg, args)? => {}
                        _ => return Err(ArgsError::UnknownArg(arg)),
                    }
                }
                Command::Dashboard { show_all }
            }
            "topics" => Command::Topics,
            "topic" => {
                let id = parse_id(require_arg(args, "topic id")?)?;
                let mut filter = QuestionFilter::default();
                while let Some(arg) = args.next() {
                    filter = match arg.as_str() {
                        "--status" => {
                            let raw = require_value(args, "--status")?;
                            filter.with_status(parse_status("--status", raw)?)
                        }
                        "--difficulty" => {
                            let raw = require_value(args, "--difficulty")?;
                            filter.with_difficulty(parse_difficulty(raw)?)
                        }
                        "--important" => filter.important_only(),
                        "--search" => filter.with_search(require_value(args, "--search")?),
                        _ if globals.take(&arg, args)? => filter,
                        _ => return Err(ArgsError::UnknownArg(arg)),
                    };
                }
                Command::Topic { id, filter }
            }
            "reminders" => {
                let mut mode = ReminderMode::default();
                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--mode" => {
                            let raw = require_value(args, "--mode")?;
                            mode = ReminderMode::parse(&raw)
                                .ok_or(ArgsError::InvalidValue { flag: "--mode", raw })?;
                        }
                        _ if globals.take(&arg, args)? => {}
                        _ => return Err(ArgsError::UnknownArg(arg)),
                    }
                }
                Command::Reminders { mode }
            }
            "progress" => Command::Progress,
            "add-topic" => {
                let name = require_arg(args, "topic name")?;
                let mut notes = String::new();
                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--notes" => notes = require_value(args, "--notes")?,
                        _ if globals.take(&arg, args)? => {}
                        _ => return Err(ArgsError::UnknownArg(arg)),
                    }
                }
                Command::AddTopic { name, notes }
            }
            "notes" => {
                let id = parse_id(require_arg(args, "topic id")?)?;
                let text = require_arg(args, "notes text")?;
                Command::Notes { id, text }
            }
            "delete-topic" => {
                let id = parse_id(require_arg(args, "topic id")?)?;
                Command::DeleteTopic {
                    id,
                    confirmed: parse_confirm(args, globals)?,
                }
            }
            "add-question" => Command::AddQuestion(QuestionFlags::parse(args, globals)?),
            "edit-question" => {
                let id = parse_id(require_arg(args, "question id")?)?;
                Command::EditQuestion {
                    id,
                    flags: QuestionFlags::parse(args, globals)?,
                }
            }
            "set-status" => {
                let id = parse_id(require_arg(args, "question id")?)?;
                let raw = require_arg(args, "status")?;
                Command::SetStatus {
                    id,
                    status: parse_status("status", raw)?,
                }
            }
            "toggle-important" => Command::ToggleImportant {
                id: parse_id(require_arg(args, "question id")?)?,
            },
            "delete-question" => {
                let id = parse_id(require_arg(args, "question id")?)?;
                Command::DeleteQuestion {
                    id,
                    confirmed: parse_confirm(args, globals)?,
                }
            }
            other => return Err(ArgsError::UnknownCommand(other.to_owned())),
        };
        finish(args, globals)?;
        Ok(command)
    }
}

impl Invocation {
    /// Parse everything after the program name.
    ///
    /// Help is only recognised up to the subcommand. After it, `--api` and
    /// `--now` are still read wherever a flag may stand, but never out of a
    /// positional argument or another flag's value.
    pub fn parse(argv: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut globals = Globals::default();
        let mut argv = argv.into_iter();

        let name = loop {
            let arg = argv.next().ok_or(ArgsError::MissingCommand)?;
            match arg.as_str() {
                "--help" | "-h" | "help" => return Ok(Self::Help),
                _ if globals.take(&arg, &mut argv)? => {}
                _ => break arg,
            }
        };
        let command = Command::parse(&name, &mut argv, &mut globals)?;
        Ok(Self::Run(Args {
            api: globals.api,
            now: globals.now,
            command,
        }))
    }
}

pub fn print_usage() {
    eprintln!("Usage: track [--api <origin>] [--now <yyyy-mm-ddThh:mm>] <command>");
    eprintln!();
    eprintln!("Views:");
    eprintln!("  dashboard [--all]");
    eprintln!("  topics");
    eprintln!("  topic <id> [--status S] [--difficulty D] [--important] [--search Q]");
    eprintln!("  reminders [--mode upcoming|today|all]");
    eprintln!("  progress");
    eprintln!();
    eprintln!("Changes:");
    eprintln!("  add-topic <name> [--notes <text>]");
    eprintln!("  notes <topic-id> <text>");
    eprintln!("  delete-topic <id> --yes");
    eprintln!("  add-question --topic <id> --number <n> --title <t> [--link <url>]");
    eprintln!("               [--difficulty D] [--status S] [--important] [--remind <when>]");
    eprintln!("  edit-question <id> [same flags] [--not-important] [--no-remind]");
    eprintln!("  set-status <id> <TODO|IN_PROGRESS|DONE>");
    eprintln!("  toggle-important <id>");
    eprintln!("  delete-question <id> --yes");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRACK_API_ORIGIN, TRACK_API_BASE_PATH, RUST_LOG");
}
