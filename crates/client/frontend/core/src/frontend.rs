//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the game via RuntimeHandle:
/// - Fire the controls of the screen currently shown
/// - Fill text fields before confirming a form
/// - Subscribe to events (Session, Combat)
///
/// Frontends do NOT own the Runtime - they receive a handle for communication only.
/// Painting happens on the runtime side through a `PresentationPort`.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal line input (tokio stdin)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct AlwaysAttack;
///
/// #[async_trait]
/// impl Frontend for AlwaysAttack {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         loop {
///             handle.click("attack").await?;
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should block until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
