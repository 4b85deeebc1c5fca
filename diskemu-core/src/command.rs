//! Command-line parsing.
//!
//! A line is either a chain of primitives separated by `>>`, or a loop macro
//! `loop(N): a >> b >> ...` that runs the chain `N` times. Each primitive is
//! a command name followed by space-separated arguments.

use std::str::SplitWhitespace;

use crate::cursor::Cursor;
use crate::error::{DiskError, DiskResult};

/// Separator between chained primitives.
pub const CHAIN_SEPARATOR: &str = ">>";

/// One primitive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// list: enumerate disks
    List,
    /// nd: create disk
    Create {
        name: String,
        format: Option<String>,
        sectors: Option<usize>,
    },
    /// dd: delete disk
    Delete { name: String },
    /// fd: format disk (selected disk if no name)
    Format {
        name: Option<String>,
        format: Option<String>,
        sectors: Option<usize>,
    },
    /// sd: select disk
    Select { name: String },
    /// vd: render the grid with the cursor highlighted
    Visualize,
    /// dm: memory stats
    MemoryStats,
    /// mv: move cursor
    Move(Cursor),
    /// inc: add to the cursor cell
    Increment(i64),
    /// dec: subtract from the cursor cell
    Decrement(i64),
    /// ri: add to every cell
    RecursiveIncrease(i64),
    /// ira: cycle every cell until cancelled
    InfiniteIncrease,
    /// sum: total of all sectors
    Sum,
    /// cs: clear screen
    ClearScreen,
    /// cp: copy disk
    Copy { src: String, dst: String },
    /// rn: rename disk
    Rename { from: String, to: String },
    /// fn: find value and move the cursor to it
    Find(String),
    /// rp: replace every occurrence of a value
    Replace { old: String, new: String },
    /// nv: overwrite the cursor cell
    NewValue(String),
    /// df: sort each line
    Defragment,
    /// help: static help text
    Help(Option<String>),
    /// wc: deprecated, writes are immediate
    WriteChanges,
    /// exit / quit: leave the interpreter
    Quit,
}

impl Command {
    /// Parse one primitive, e.g. `nd backup custom 60`.
    pub fn parse(text: &str) -> DiskResult<Self> {
        let mut words = text.split_whitespace();
        let Some(name) = words.next() else {
            return Err(DiskError::EmptyCommand);
        };
        let mut args = Args { cmd: name, words };

        let cmd = match name {
            "list" => Self::List,
            "nd" => Self::Create {
                name: args.required("name")?,
                format: args.optional(),
                sectors: args.optional_number("sectors")?,
            },
            "dd" => Self::Delete {
                name: args.required("name")?,
            },
            "fd" => Self::Format {
                name: args.optional(),
                format: args.optional(),
                sectors: args.optional_number("sectors")?,
            },
            "sd" => Self::Select {
                name: args.required("name")?,
            },
            "vd" => Self::Visualize,
            "dm" => Self::MemoryStats,
            "mv" => Self::Move(Cursor::parse_address(&args.required("position")?)?),
            "inc" => Self::Increment(args.optional_number("amount")?.unwrap_or(1)),
            "dec" => Self::Decrement(args.optional_number("amount")?.unwrap_or(1)),
            "ri" => Self::RecursiveIncrease(args.optional_number("value")?.unwrap_or(1)),
            "ira" => Self::InfiniteIncrease,
            "sum" => Self::Sum,
            "cs" => Self::ClearScreen,
            "cp" => Self::Copy {
                src: args.required("source")?,
                dst: args.required("destination")?,
            },
            "rn" => Self::Rename {
                from: args.required("old_name")?,
                to: args.required("new_name")?,
            },
            "fn" => Self::Find(args.required("value")?),
            "rp" => Self::Replace {
                old: args.required("old_value")?,
                new: args.required("new_value")?,
            },
            "nv" => Self::NewValue(args.required("value")?),
            "df" => Self::Defragment,
            "help" => Self::Help(args.optional()),
            "wc" => Self::WriteChanges,
            "exit" | "quit" => Self::Quit,
            _ => return Err(DiskError::UnknownCommand(name.to_string())),
        };
        args.finish()?;
        Ok(cmd)
    }

    /// Short command name, as typed.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create { .. } => "nd",
            Self::Delete { .. } => "dd",
            Self::Format { .. } => "fd",
            Self::Select { .. } => "sd",
            Self::Visualize => "vd",
            Self::MemoryStats => "dm",
            Self::Move(_) => "mv",
            Self::Increment(_) => "inc",
            Self::Decrement(_) => "dec",
            Self::RecursiveIncrease(_) => "ri",
            Self::InfiniteIncrease => "ira",
            Self::Sum => "sum",
            Self::ClearScreen => "cs",
            Self::Copy { .. } => "cp",
            Self::Rename { .. } => "rn",
            Self::Find(_) => "fn",
            Self::Replace { .. } => "rp",
            Self::NewValue(_) => "nv",
            Self::Defragment => "df",
            Self::Help(_) => "help",
            Self::WriteChanges => "wc",
            Self::Quit => "quit",
        }
    }
}

/// Argument cursor for one primitive.
struct Args<'a> {
    cmd: &'a str,
    words: SplitWhitespace<'a>,
}

impl Args<'_> {
    fn required(&mut self, what: &str) -> DiskResult<String> {
        self.words
            .next()
            .map(str::to_string)
            .ok_or_else(|| DiskError::InvalidArgument(format!("{} requires <{}>", self.cmd, what)))
    }

    fn optional(&mut self) -> Option<String> {
        self.words.next().map(str::to_string)
    }

    fn optional_number<T: std::str::FromStr>(&mut self, what: &str) -> DiskResult<Option<T>> {
        match self.words.next() {
            None => Ok(None),
            Some(word) => word.parse().map(Some).map_err(|_| {
                DiskError::InvalidArgument(format!("{}: bad {} {:?}", self.cmd, what, word))
            }),
        }
    }

    fn finish(mut self) -> DiskResult<()> {
        match self.words.next() {
            None => Ok(()),
            Some(extra) => Err(DiskError::InvalidArgument(format!(
                "{}: unexpected argument {:?}",
                self.cmd, extra
            ))),
        }
    }
}

/// A parsed input line: the chained primitives and how often to run them.
///
/// Primitives are kept as text and parsed when they run, so a bad primitive
/// is reported in place without stopping the rest of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub iterations: u32,
    pub steps: Vec<String>,
}

/// Parse a full input line.
pub fn parse_line(line: &str) -> DiskResult<Script> {
    let line = line.trim();
    if line.is_empty() {
        return Err(DiskError::EmptyCommand);
    }

    match line.strip_prefix("loop(") {
        Some(rest) => {
            let malformed = || DiskError::UnknownCommand(line.to_string());
            let (count, body) = rest.split_once("):").ok_or_else(malformed)?;
            let iterations = count.trim().parse::<u32>().map_err(|_| malformed())?;
            if body.trim().is_empty() {
                return Err(malformed());
            }
            Ok(Script {
                iterations,
                steps: split_chain(body),
            })
        }
        None => Ok(Script {
            iterations: 1,
            steps: split_chain(line),
        }),
    }
}

fn split_chain(text: &str) -> Vec<String> {
    text.split(CHAIN_SEPARATOR)
        .map(|s| s.trim().to_string())
        .collect()
}
