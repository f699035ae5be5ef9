//! Input processing for the CLI client.
//!
//! This module owns the line-to-control mapping so the rest of the
//! application stays agnostic about how the player types commands.

use client_frontend_core::Markup;
use runtime::TriggerId;

/// Control to fire, with the field value to store first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub field: Option<(&'static str, String)>,
    pub control: TriggerId,
}

/// High-level outcome of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the application.
    Quit,
    Submit(Submission),
    /// Nothing to fire; the hint tells the player why.
    Ignored(&'static str),
}

/// Translates typed lines into control activations for the screen on display.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Interpret `line` against the screen described by `markup`.
    pub fn handle_line(&self, line: &str, markup: &Markup) -> InputAction {
        // A form takes the line verbatim, so any name is possible there.
        if let Some(field) = &markup.field {
            return match markup.controls.as_slice() {
                [confirm] => InputAction::Submit(Submission {
                    field: Some((field.id, line.to_owned())),
                    control: confirm.id.clone(),
                }),
                _ => InputAction::Ignored("This form cannot be submitted."),
            };
        }

        let command = line.trim();
        if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
            return InputAction::Quit;
        }

        if markup.controls.is_empty() {
            return InputAction::Ignored("Wait for the next screen.");
        }

        if command.is_empty() {
            return match markup.controls.as_slice() {
                [only] => submit(&only.id),
                _ => InputAction::Ignored("Choose a control by number or name."),
            };
        }

        if let Some(control) = markup.find_control(command) {
            return submit(&control.id);
        }

        match command.parse::<usize>() {
            Ok(number) => markup
                .control_at(number)
                .map(|control| submit(&control.id))
                .unwrap_or(InputAction::Ignored("No control has that number.")),
            Err(_) => InputAction::Ignored("Unknown command."),
        }
    }
}

fn submit(control: &TriggerId) -> InputAction {
    InputAction::Submit(Submission {
        field: None,
        control: control.clone(),
    })
}
