//! Disk emulator CLI - interactive prompt over a directory of disk files.
//!
//! Usage:
//!   diskemu [--dir DIR] [--config FILE] [-c LINE]...
//!
//! Examples:
//!   diskemu                                  # Prompt, disks in the current directory
//!   diskemu --dir ./disks                    # Prompt, disks under ./disks
//!   diskemu -c "nd a" -c "sd a >> inc >> vd" # Run lines and exit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{style, Stylize},
    terminal::{Clear, ClearType},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use diskemu_core::{CommandEngine, Console, EngineConfig, Flow, HostDiskFS};

/// Virtual sector disk emulator
#[derive(Parser, Debug)]
#[command(name = "diskemu")]
#[command(about = "Create, inspect and modify virtual sector disks")]
struct Args {
    /// Directory holding disk files (overrides the config file)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Command line to run instead of prompting (repeatable)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,
}

/// Console writing to the terminal.
struct TerminalConsole;

impl Console for TerminalConsole {
    fn write_line(&mut self, line: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", line);
        let _ = handle.flush();
    }

    fn highlight(&self, cell: &str) -> String {
        style(cell).bold().green().to_string()
    }

    fn clear_screen(&mut self) {
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };
    if let Some(dir) = &args.dir {
        config.disk_dir = dir.clone();
    }
    Ok(config)
}

/// Read lines until EOF or a quit command.
fn prompt_loop(engine: &mut CommandEngine<HostDiskFS, TerminalConsole>, prompt: &str) -> io::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if engine.execute_line(input) == Flow::Quit {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = load_config(&args)?;
    std::fs::create_dir_all(&config.disk_dir)?;

    let fs = HostDiskFS::new(&config.disk_dir, &config.extension);
    info!("Using disk directory {}", fs.dir().display());
    let prompt = config.prompt.clone();
    let mut engine = CommandEngine::new(fs, TerminalConsole, config);
    let cancel = engine.cancel_flag();
    let commands = args.commands;

    // Engine runs on a blocking thread; stdin reads never yield
    let mut runner = tokio::task::spawn_blocking(move || -> io::Result<()> {
        if commands.is_empty() {
            return prompt_loop(&mut engine, &prompt);
        }
        for line in &commands {
            if engine.execute_line(line) == Flow::Quit {
                break;
            }
        }
        Ok(())
    });

    // Ctrl+C interrupts the running command instead of killing the process
    loop {
        tokio::select! {
            result = &mut runner => {
                result??;
                break;
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                debug!("Interrupt received");
                cancel.cancel();
            }
        }
    }

    Ok(())
}
