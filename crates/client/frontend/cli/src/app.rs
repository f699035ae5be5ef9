//! Line-driven terminal frontend.

use std::io::{self, Write};

use anyhow::{Context, Result};
use async_trait::async_trait;
use client_frontend_core::{Frontend, FrontendConfig, Markup};
use crossterm::QueueableCommand;
use crossterm::style::{Print, PrintStyledContent};
use runtime::RuntimeHandle;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::input::{InputAction, InputHandler};
use crate::presentation::Theme;

/// Reads commands from stdin and fires the matching controls.
pub struct CliFrontend {
    config: FrontendConfig,
    screen: watch::Receiver<Markup>,
    input: InputHandler,
    theme: Theme,
    hints: Box<dyn Write + Send>,
}

impl CliFrontend {
    /// `screen` comes from [`crate::TerminalPresenter::subscribe`].
    pub fn new(config: FrontendConfig, screen: watch::Receiver<Markup>) -> Self {
        Self::with_hint_writer(config, screen, io::stdout())
    }

    pub fn with_hint_writer(
        config: FrontendConfig,
        screen: watch::Receiver<Markup>,
        hints: impl Write + Send + 'static,
    ) -> Self {
        Self {
            config,
            screen,
            input: InputHandler::new(),
            theme: Theme,
            hints: Box::new(hints),
        }
    }

    /// Process lines from `reader` until it ends or the player quits.
    pub async fn run_with<R>(&mut self, reader: R, handle: &RuntimeHandle) -> Result<()>
    where
        R: AsyncBufRead + Unpin + Send,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read terminal input")?
        {
            let markup = self.screen.borrow().clone();

            match self.input.handle_line(&line, &markup) {
                InputAction::Quit => {
                    info!("Player quit");
                    return Ok(());
                }
                InputAction::Submit(submission) => {
                    if let Some((field, value)) = submission.field {
                        handle.set_field(field, value);
                    }
                    let control = submission.control;
                    if handle.fire(control.as_str()) {
                        debug!(%control, "Control fired");
                    } else {
                        warn!(%control, "Control not armed");
                        self.hint("That choice is not available right now.")?;
                    }
                }
                InputAction::Ignored(reason) => {
                    debug!(line = %line, reason, "Input ignored");
                    self.hint(reason)?;
                }
            }
        }

        info!("Terminal input closed");
        Ok(())
    }

    fn hint(&mut self, text: &str) -> Result<()> {
        if !self.config.show_hints {
            return Ok(());
        }
        self.hints
            .queue(PrintStyledContent(self.theme.hint().apply(text)))?
            .queue(Print("\n"))?;
        self.hints.flush()?;
        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        info!(session = %handle.session_id(), "CLI frontend started");
        self.run_with(BufReader::new(tokio::io::stdin()), &handle).await
    }
}
