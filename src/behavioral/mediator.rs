// Pattern: Mediator
// Callers send requests to one router; the router picks the handler
// registered for the request's variant and invokes it.
//
// A variant without a registered handler is dropped silently. `send`
// reports it as `Dispatch::Unhandled` but never fails.

use std::collections::HashMap;

use tracing::{debug, info};
use uuid::Uuid;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountCommand {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerCommand {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseAccountCommand {
    pub id: Uuid,
}

impl CreateAccountCommand {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl CreateCustomerCommand {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl CloseAccountCommand {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for CreateAccountCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for CreateCustomerCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for CloseAccountCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CreateAccount(CreateAccountCommand),
    CreateCustomer(CreateCustomerCommand),
    CloseAccount(CloseAccountCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    CreateAccount,
    CreateCustomer,
    CloseAccount,
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::CreateAccount(_) => RequestKind::CreateAccount,
            Request::CreateCustomer(_) => RequestKind::CreateCustomer,
            Request::CloseAccount(_) => RequestKind::CloseAccount,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Request::CreateAccount(cmd) => cmd.id,
            Request::CreateCustomer(cmd) => cmd.id,
            Request::CloseAccount(cmd) => cmd.id,
        }
    }
}

impl From<CreateAccountCommand> for Request {
    fn from(cmd: CreateAccountCommand) -> Self {
        Request::CreateAccount(cmd)
    }
}

impl From<CreateCustomerCommand> for Request {
    fn from(cmd: CreateCustomerCommand) -> Self {
        Request::CreateCustomer(cmd)
    }
}

impl From<CloseAccountCommand> for Request {
    fn from(cmd: CloseAccountCommand) -> Self {
        Request::CloseAccount(cmd)
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub trait RequestHandler {
    fn name(&self) -> &'static str;

    fn handle(&self, request: &Request);
}

#[derive(Debug, Default)]
pub struct CreateAccountCommandHandler;

impl RequestHandler for CreateAccountCommandHandler {
    fn name(&self) -> &'static str {
        "CreateAccountCommandHandler"
    }

    fn handle(&self, request: &Request) {
        info!(handler = self.name(), id = %request.id(), "handled");
    }
}

#[derive(Debug, Default)]
pub struct CreateCustomerCommandHandler;

impl RequestHandler for CreateCustomerCommandHandler {
    fn name(&self) -> &'static str {
        "CreateCustomerCommandHandler"
    }

    fn handle(&self, request: &Request) {
        info!(handler = self.name(), id = %request.id(), "handled");
    }
}

// ============================================================================
// Mediator
// ============================================================================

/// Outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled { handler: &'static str },
    Unhandled(RequestKind),
}

pub struct Mediator {
    handlers: HashMap<RequestKind, Box<dyn RequestHandler>>,
}

impl Mediator {
    /// Router with the stock handlers for account and customer creation.
    pub fn new() -> Self {
        let mut mediator = Self::empty();
        mediator.register(RequestKind::CreateAccount, Box::new(CreateAccountCommandHandler));
        mediator.register(RequestKind::CreateCustomer, Box::new(CreateCustomerCommandHandler));
        mediator
    }

    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `kind`, replacing any earlier registration.
    pub fn register(&mut self, kind: RequestKind, handler: Box<dyn RequestHandler>) {
        self.handlers.insert(kind, handler);
    }

    pub fn is_registered(&self, kind: RequestKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn send(&self, request: &Request) -> Dispatch {
        let kind = request.kind();
        match self.handlers.get(&kind) {
            Some(handler) => {
                handler.handle(request);
                Dispatch::Handled {
                    handler: handler.name(),
                }
            }
            None => {
                debug!(?kind, id = %request.id(), "no handler registered, request dropped");
                Dispatch::Unhandled(kind)
            }
        }
    }
}

impl Default for Mediator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Usage
// ============================================================================

pub fn demo() -> Vec<Dispatch> {
    let mediator = Mediator::new();
    let requests: [Request; 3] = [
        CreateAccountCommand::new().into(),
        CreateCustomerCommand::new().into(),
        CloseAccountCommand::new().into(),
    ];

    requests.iter().map(|request| mediator.send(request)).collect()
}
