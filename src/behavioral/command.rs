// Pattern: Command
// A request bound to its handler, executed by an invoker that never sees
// the concrete command type. Execute-only: there is no undo history.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

// ============================================================================
// Abstractions
// ============================================================================

pub trait Command {
    /// Identifier assigned when the command was created.
    fn id(&self) -> Uuid;

    fn name(&self) -> &'static str;

    fn execute(&self);
}

pub trait CommandHandler: Send + Sync {
    fn handle(&self, command: &dyn Command);
}

// ============================================================================
// Implementation
// ============================================================================

pub struct CreateAccountCommand {
    id: Uuid,
    handler: Arc<dyn CommandHandler>,
}

impl CreateAccountCommand {
    pub fn new(handler: Arc<dyn CommandHandler>) -> Self {
        Self {
            id: Uuid::new_v4(),
            handler,
        }
    }
}

impl Command for CreateAccountCommand {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &'static str {
        "CreateAccountCommand"
    }

    fn execute(&self) {
        self.handler.handle(self);
    }
}

#[derive(Debug, Default)]
pub struct CreateAccountCommandHandler;

impl CommandHandler for CreateAccountCommandHandler {
    fn handle(&self, command: &dyn Command) {
        // Business logic goes here.
        info!(command = command.name(), id = %command.id(), "handling command");
    }
}

pub struct Invoker {
    command: Box<dyn Command>,
}

impl Invoker {
    pub fn new(command: Box<dyn Command>) -> Self {
        Self { command }
    }

    pub fn execute_command(&self) {
        self.command.execute();
    }
}

// ============================================================================
// Usage
// ============================================================================

/// Runs the create-account command through an invoker and returns its id.
pub fn demo() -> Uuid {
    let command = CreateAccountCommand::new(Arc::new(CreateAccountCommandHandler));
    let id = command.id();

    let invoker = Invoker::new(Box::new(command));
    invoker.execute_command();

    id
}
