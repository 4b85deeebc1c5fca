//! Command engine - parses input lines and dispatches primitives.

use tracing::{debug, warn};

use crate::cancel::CancelFlag;
use crate::command::{parse_line, Command};
use crate::config::EngineConfig;
use crate::console::Console;
use crate::error::{DiskError, DiskResult};
use crate::fs::DiskFS;
use crate::grid::{SectorGrid, SECTORS_PER_LINE};
use crate::help::help_text;
use crate::mutator;
use crate::session::Session;
use crate::store::DiskStore;

/// What the interpreter loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Disk command interpreter.
pub struct CommandEngine<F: DiskFS, C: Console> {
    store: DiskStore<F>,
    session: Session,
    console: C,
    config: EngineConfig,
    cancel: CancelFlag,
}

impl<F: DiskFS, C: Console> CommandEngine<F, C> {
    /// Create an engine over `fs`, writing feedback to `console`.
    pub fn new(fs: F, console: C, config: EngineConfig) -> Self {
        Self {
            store: DiskStore::new(fs).with_max_sectors(config.max_sectors),
            session: Session::new(&config.default_format),
            console,
            config,
            cancel: CancelFlag::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &DiskStore<F> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DiskStore<F> {
        &mut self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Flag that interrupts `ira` and loop macros. Clone it into a signal
    /// handler.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Run one input line. Errors are reported on the console; they never
    /// end the session.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        self.cancel.reset();
        let script = match parse_line(line) {
            Ok(script) => script,
            Err(e) => {
                self.report_error(&e);
                return Flow::Continue;
            }
        };

        for i in 0..script.iterations {
            if i > 0 && self.cancel.is_cancelled() {
                self.console
                    .write_line(&format!("Loop interrupted after {} iterations.", i));
                break;
            }
            for step in &script.steps {
                match self.execute(step) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => return Flow::Quit,
                    Err(e) => self.report_error(&e),
                }
            }
        }
        Flow::Continue
    }

    /// Parse and run a single primitive.
    pub fn execute(&mut self, primitive: &str) -> DiskResult<Flow> {
        let cmd = Command::parse(primitive)?;
        debug!("Dispatching {} ({:?})", cmd.name(), cmd);
        self.dispatch(cmd)
    }

    fn dispatch(&mut self, cmd: Command) -> DiskResult<Flow> {
        match cmd {
            Command::List => {
                let names = self.store.list()?;
                if names.is_empty() {
                    self.say("No disks found.");
                }
                for name in names {
                    self.console.write_line(&name);
                }
            }

            Command::Create { name, format, sectors } => {
                let format = format.unwrap_or_else(|| self.config.default_format.clone());
                let sectors = sectors.unwrap_or(self.config.default_sectors);
                let grid = self.store.create(&name, sectors)?;
                self.session.disk_format = format;
                self.say(&format!(
                    "Disk {} created with {} sectors.",
                    name,
                    grid.line_count() * SECTORS_PER_LINE
                ));
            }

            Command::Delete { name } => {
                self.store.delete(&name)?;
                self.session.on_delete(&name);
                self.say(&format!("Disk {} deleted.", name));
            }

            Command::Format { name, format, sectors } => {
                let target = self
                    .session
                    .target(name.as_deref())
                    .ok_or(DiskError::NoDiskSelected)?
                    .to_string();
                let format = format.unwrap_or_else(|| self.config.default_format.clone());
                let sectors = sectors.unwrap_or(self.config.default_sectors);
                self.store.create(&target, sectors)?;
                self.session.disk_format = format;
                self.say(&format!("Disk {} formatted.", target));
            }

            Command::Select { name } => {
                if !self.store.exists(&name) {
                    return Err(DiskError::DiskNotFound(name));
                }
                self.say(&format!("Disk {} selected.", name));
                self.session.selected = Some(name);
            }

            Command::Visualize => {
                let (_, grid) = self.load_selected()?;
                self.render(&grid);
            }

            Command::MemoryStats => {
                let (_, grid) = self.load_selected()?;
                let stats =
                    mutator::memory_stats(&grid, &self.session.disk_format, self.config.max_capacity);
                self.say(&stats.to_string());
            }

            Command::Move(cursor) => {
                let (_, grid) = self.load_selected()?;
                cursor.check(&grid)?;
                self.session.cursor = cursor;
                self.say(&format!(
                    "Cursor moved to line {}, sector {}.",
                    cursor.line, cursor.sector
                ));
            }

            Command::Increment(amount) => {
                let (name, mut grid) = self.load_selected()?;
                mutator::increase_one_cell(&mut grid, self.session.cursor, amount)?;
                self.store.save(&name, &grid)?;
                self.say(&format!("Sector value incremented by {}.", amount));
            }

            Command::Decrement(amount) => {
                let (name, mut grid) = self.load_selected()?;
                mutator::decrease_one_cell(&mut grid, self.session.cursor, amount)?;
                self.store.save(&name, &grid)?;
                self.say(&format!("Sector value decremented by {}.", amount));
            }

            Command::RecursiveIncrease(amount) => {
                let (name, mut grid) = self.load_selected()?;
                mutator::increase_all_cells(&mut grid, amount);
                self.store.save(&name, &grid)?;
                self.say("All sector values increased.");
            }

            Command::InfiniteIncrease => {
                let (name, mut grid) = self.load_selected()?;
                self.say("Cycling all sector values. Press Ctrl+C to stop.");
                let store = &mut self.store;
                let passes =
                    mutator::increase_cycle(&mut grid, &self.cancel, |pass| store.save(&name, pass))?;
                self.say(&format!("Stopped after {} passes.", passes));
            }

            Command::Sum => {
                let (_, grid) = self.load_selected()?;
                self.say(&format!("Sum of all sectors: {}", mutator::sum_all(&grid)));
            }

            Command::ClearScreen => {
                self.console.clear_screen();
                self.say("Screen cleared.");
            }

            Command::Copy { src, dst } => {
                self.store.copy(&src, &dst)?;
                self.say(&format!("Disk {} copied to {}.", src, dst));
            }

            Command::Rename { from, to } => {
                self.store.rename(&from, &to)?;
                self.session.on_rename(&from, &to);
                self.say(&format!("Disk {} renamed to {}.", from, to));
            }

            Command::Find(value) => {
                let (_, grid) = self.load_selected()?;
                let found = mutator::find_value(&grid, &value)?;
                self.session.cursor = found;
                self.say(&format!(
                    "Value {} found at line {}, sector {}.",
                    value, found.line, found.sector
                ));
            }

            Command::Replace { old, new } => {
                let (name, mut grid) = self.load_selected()?;
                let count = mutator::replace_value(&mut grid, &old, &new)?;
                self.store.save(&name, &grid)?;
                self.say(&format!(
                    "All occurrences of {} replaced with {} ({} sectors).",
                    old, new, count
                ));
            }

            Command::NewValue(value) => {
                let (name, mut grid) = self.load_selected()?;
                mutator::set_cell(&mut grid, self.session.cursor, &value)?;
                self.store.save(&name, &grid)?;
                self.say(&format!("Sector value set to {}.", value));
            }

            Command::Defragment => {
                let (name, mut grid) = self.load_selected()?;
                mutator::defragment(&mut grid);
                self.store.save(&name, &grid)?;
                self.say(&format!("Disk {} defragmented.", name));
            }

            Command::Help(topic) => {
                for line in help_text(topic.as_deref()).lines() {
                    self.console.write_line(line);
                }
            }

            Command::WriteChanges => {
                self.say("The 'wc' command is deprecated. All changes are now written immediately.");
            }

            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn load_selected(&self) -> DiskResult<(String, SectorGrid)> {
        let name = self
            .session
            .selected
            .clone()
            .ok_or(DiskError::NoDiskSelected)?;
        let grid = self.store.load(&name)?;
        Ok((name, grid))
    }

    fn render(&mut self, grid: &SectorGrid) {
        let cursor = self.session.cursor;
        for (i, line) in grid.lines().iter().enumerate() {
            let cells: Vec<String> = line
                .iter()
                .enumerate()
                .map(|(s, v)| {
                    if i == cursor.line && s == cursor.sector {
                        self.console.highlight(&v.to_string())
                    } else {
                        v.to_string()
                    }
                })
                .collect();
            self.console.write_line(&cells.join(" "));
        }
    }

    fn say(&mut self, msg: &str) {
        self.console.write_line(msg);
    }

    fn report_error(&mut self, err: &DiskError) {
        warn!("Command failed: {}", err);
        self.console.write_line(&format!(
            "diskemulator<ERR>> {}. Refer to \"help err\" for more info.",
            err.code()
        ));
        if err.is_fault() {
            self.console.write_line(&format!("Fault: {}", err));
        }
    }
}
