//! Terminal host — prints galleries and status to stdout and reads operator
//! input from stdin.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, mpsc, watch};

use trapcam_app::ports::{HostUi, RenderSink, StatusSink};
use trapcam_domain::display::{DisplayPayload, EMPTY_MESSAGE};
use trapcam_domain::status::StatusDisplay;

/// Render and status sink writing to stdout.
pub struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render(&self, gallery_id: &str, payload: &DisplayPayload) {
        println!("{}", format_payload(gallery_id, payload));
    }
}

impl StatusSink for ConsoleSink {
    fn show_status(&self, status: &StatusDisplay) {
        println!("{}", format_status(status));
    }
}

fn format_payload(gallery_id: &str, payload: &DisplayPayload) -> String {
    match payload {
        DisplayPayload::Image {
            image_path,
            filename_label,
        } => format!("[{gallery_id}] {image_path}\n[{gallery_id}] Filename: {filename_label}"),
        DisplayPayload::Empty => format!("[{gallery_id}] {EMPTY_MESSAGE}"),
    }
}

fn format_status(status: &StatusDisplay) -> String {
    format!(
        "{} {} | {} °C | next capture {}",
        status.date, status.time, status.temperature, status.next_capture
    )
}

/// Line source shared by the command loop and prompts.
///
/// Lines arrive over a channel so a pending read can be abandoned: every
/// read resolves to `None` once the shutdown signal is raised.
pub struct Console {
    lines: Mutex<mpsc::Receiver<String>>,
    shutdown: watch::Receiver<bool>,
}

impl Console {
    #[must_use]
    pub fn new(lines: mpsc::Receiver<String>, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            lines: Mutex::new(lines),
            shutdown,
        }
    }

    /// Console fed by a dedicated thread blocking on stdin.
    ///
    /// The thread is detached: it ends with the input, or with the process.
    #[must_use]
    pub fn stdin(shutdown: watch::Receiver<bool>) -> Self {
        let (sender, lines) = mpsc::channel(16);
        std::thread::spawn(move || {
            for line in std::io::stdin().lines() {
                match line {
                    Ok(line) => {
                        if sender.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to read stdin");
                        break;
                    }
                }
            }
        });
        Self::new(lines, shutdown)
    }

    /// Next input line without its terminator; `None` at end of input or
    /// once shutdown is signalled.
    pub async fn read_line(&self) -> Option<String> {
        let mut shutdown = self.shutdown.clone();
        if *shutdown.borrow_and_update() {
            return None;
        }
        tokio::select! {
            biased;
            _ = shutdown.changed() => None,
            line = async { self.lines.lock().await.recv().await } => line,
        }
    }
}

/// [`HostUi`] for the terminal.
///
/// `reload` only raises a flag; the command loop picks it up with
/// [`TerminalHost::take_reload_request`] and reloads the galleries.
pub struct TerminalHost {
    console: Arc<Console>,
    reload_requested: AtomicBool,
}

impl TerminalHost {
    #[must_use]
    pub fn new(console: Arc<Console>) -> Self {
        Self {
            console,
            reload_requested: AtomicBool::new(false),
        }
    }

    /// Whether a reload was requested since the last call.
    pub fn take_reload_request(&self) -> bool {
        self.reload_requested.swap(false, Ordering::SeqCst)
    }
}

impl HostUi for TerminalHost {
    async fn prompt(&self, message: &str) -> Option<String> {
        print!("{message} ");
        let _ = std::io::stdout().flush();
        self.console.read_line().await
    }

    fn alert(&self, message: &str) {
        println!("!! {message}");
    }

    fn reload(&self) {
        self.reload_requested.store(true, Ordering::SeqCst);
    }

    fn navigate(&self, location: &str) {
        println!("download the data log from {location}");
    }
}
