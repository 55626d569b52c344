//! Kiln entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::{Config, load_from};
use core_input::CrosstermInput;
use core_model::{EditorModel, View};
use core_state::{EditorState, HELP_MESSAGE};
use core_terminal::{CrosstermBackend, Terminal, restore_terminal, terminal_size};
use core_text::Document;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod runtime;

use runtime::EditorRuntime;

const LOG_FILE_NAME: &str = "kiln.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "kiln", version, about = "Kiln editor")]
struct Args {
    /// Optional path to open at startup. If omitted an empty buffer is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `kiln.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    terminal: Terminal<CrosstermBackend>,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            terminal: Terminal::crossterm(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                // Leave the alternate screen first so the report is readable.
                restore_terminal();
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn run(&mut self, args: &Args) -> Result<()> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let config = load_from(args.config.clone()).context("loading configuration")?;
        let guard = self.terminal.enter_guard()?;

        let document = open_document(args.path.as_deref(), config.tab_stop())?;
        let (cols, rows) = terminal_size().context("querying terminal size")?;
        info!(
            target: "runtime",
            cols,
            rows,
            lines = document.row_count(),
            config_override = args.config.is_some(),
            "bootstrap_complete"
        );

        let model = build_model(document, &config, cols, rows);
        let mut runtime = EditorRuntime::new(
            model,
            CrosstermInput::new(),
            std::io::stdout(),
            config.poll_timeout(),
        );
        let result = runtime.run();
        let restored = guard.release();
        info!(target: "runtime", ok = result.is_ok(), "shutdown");
        result?;
        restored
    }
}

fn open_document(path: Option<&Path>, tab_stop: usize) -> Result<Document> {
    match path {
        Some(path) => Document::open(path, tab_stop)
            .with_context(|| format!("opening {}", path.display())),
        None => Ok(Document::new(tab_stop)),
    }
}

fn build_model(document: Document, config: &Config, cols: u16, rows: u16) -> EditorModel {
    let mut state = EditorState::new(document)
        .with_quit_times(config.quit_times())
        .with_message_ttl(config.message_timeout());
    state.set_message(HELP_MESSAGE);
    let mut model = EditorModel::new(state, View::for_terminal(cols, rows));
    model.refresh_view();
    model
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.run(&args)
}
