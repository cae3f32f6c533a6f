use crate::builtin::{Cat, Cd, Echo, Exit, Help, Host, Ls, Mkdir, Pwd, Touch, Whoami};
use crate::command::Builtin;
use std::sync::LazyLock;

/// Fixed table of builtin commands, scanned linearly by name.
#[derive(Default)]
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn Builtin>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// The builtins every interpreter ships with, in `help` order.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Cd);
        registry.register(Pwd);
        registry.register(Ls);
        registry.register(Touch);
        registry.register(Mkdir);
        registry.register(Echo);
        registry.register(Cat);
        registry.register(Whoami);
        registry.register(Host);
        registry.register(Help);
        registry.register(Exit);
        registry
    }

    pub fn register<C: Builtin + 'static>(&mut self, cmd: C) {
        self.commands.push(Box::new(cmd));
    }

    /// Exact-match lookup; the first registered command with `name` wins.
    pub fn lookup(&self, name: &str) -> Option<&dyn Builtin> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Builtin> {
        self.commands.iter().map(|c| c.as_ref())
    }
}

/// Process-wide registry, built on first use and never mutated afterwards.
pub static BUILTINS: LazyLock<BuiltinRegistry> = LazyLock::new(BuiltinRegistry::standard);
