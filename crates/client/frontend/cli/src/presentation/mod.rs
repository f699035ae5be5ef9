//! Terminal presentation port.
//!
//! [`TerminalPresenter`] is called from the game loop for every view. It paints
//! the rendered markup and publishes it on a watch channel so the input side
//! knows which controls are on screen.

mod theme;

pub use theme::Theme;

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use client_frontend_core::{FrontendConfig, Markup, render};
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::{Print, PrintStyledContent};
use crossterm::terminal::{Clear, ClearType};
use runtime::{PresentationPort, SessionId, View};
use tokio::sync::watch;

const HINT: &str = "Type a number or control name and press Enter. q quits.";
const FIELD_HINT: &str = "Type your answer and press Enter.";

/// Paints views onto a terminal (or any writer) with crossterm.
pub struct TerminalPresenter {
    config: FrontendConfig,
    theme: Theme,
    out: Mutex<Box<dyn Write + Send>>,
    latest: watch::Sender<Markup>,
}

impl TerminalPresenter {
    pub fn stdout(config: FrontendConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }

    pub fn with_writer(config: FrontendConfig, out: impl Write + Send + 'static) -> Self {
        let (latest, _) = watch::channel(Markup::default());
        Self {
            config,
            theme: Theme,
            out: Mutex::new(Box::new(out)),
            latest,
        }
    }

    /// Markup of the screen currently displayed.
    pub fn subscribe(&self) -> watch::Receiver<Markup> {
        self.latest.subscribe()
    }

    fn paint(&self, out: &mut dyn Write, markup: &Markup) -> io::Result<()> {
        if self.config.clear_screen {
            out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        } else {
            out.queue(Print("\n"))?;
        }

        if !markup.title.is_empty() {
            out.queue(PrintStyledContent(self.theme.title().apply(markup.title.as_str())))?
                .queue(Print("\n\n"))?;
        }
        for line in &markup.body {
            out.queue(PrintStyledContent(self.theme.line(line.tone).apply(line.text.as_str())))?
                .queue(Print("\n"))?;
        }

        if !markup.controls.is_empty() {
            out.queue(Print("\n"))?;
        }
        for (index, control) in markup.controls.iter().enumerate() {
            let number = format!("[{}]", index + 1);
            out.queue(PrintStyledContent(self.theme.control_number().apply(number)))?
                .queue(Print(format!(" {} ({})\n", control.label, control.id)))?;
        }

        if self.config.show_hints && !markup.controls.is_empty() {
            let hint = if markup.field.is_some() { FIELD_HINT } else { HINT };
            out.queue(Print("\n"))?
                .queue(PrintStyledContent(self.theme.hint().apply(hint)))?
                .queue(Print("\n"))?;
        }
        if let Some(field) = &markup.field {
            out.queue(Print(format!("{}: ", field.label)))?;
        }

        out.flush()
    }
}

impl PresentationPort for TerminalPresenter {
    fn present(&self, target: &SessionId, view: &View) {
        let markup = render(view);
        {
            let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(error) = self.paint(&mut **out, &markup) {
                tracing::warn!(session = %target, %error, "Failed to paint view");
            }
        }
        self.latest.send_replace(markup);
    }
}
