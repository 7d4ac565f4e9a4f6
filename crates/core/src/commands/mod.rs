//! Command registry and dispatch system
//!
//! This module provides a static registry of commands that a frontend can
//! call over the JSON seam. Commands are registered as "category.action"
//! (e.g., "prompts.list", "prompts.create") and dispatched to handler
//! functions.
//!
//! ## Adding a new command
//!
//! 1. Create handler function: `pub fn my_command(args: Value) -> Result<Value>`
//! 2. Register in `REGISTRY`: `("category.action", my_command as CommandHandler)`
//! 3. Add tests for the command

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

use crate::errors::{Result, ShelfError};

pub mod prompts;

/// Type alias for command handler functions
///
/// All command handlers take a JSON Value (arguments) and return a Result<Value>
pub type CommandHandler = fn(Value) -> Result<Value>;

/// Static command registry
///
/// Maps command names to handler functions. Initialized lazily on first access.
static REGISTRY: Lazy<HashMap<&'static str, CommandHandler>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Test command
    map.insert("ping", ping as CommandHandler);

    // Prompt library
    map.insert("prompts.list", prompts::list as CommandHandler);
    map.insert("prompts.create", prompts::create as CommandHandler);
    map.insert("prompts.delete", prompts::delete as CommandHandler);
    map.insert("prompts.rate", prompts::rate as CommandHandler);
    map.insert("prompts.key", prompts::key as CommandHandler);

    map
});

/// Dispatch a command by name
///
/// Looks up the command in the registry and executes it with the provided
/// arguments.
///
/// # Arguments
/// * `command` - Command name (e.g., "ping", "prompts.list")
/// * `args` - Command arguments as JSON Value
///
/// # Returns
/// Command result as JSON Value, or error if command not found
pub fn dispatch(command: &str, args: Value) -> Result<Value> {
    match REGISTRY.get(command) {
        Some(handler) => handler(args),
        None => Err(ShelfError::CommandNotFound(command.to_string())),
    }
}

/// List all available commands
///
/// Returns a sorted list of all registered command names.
pub fn list_commands() -> Vec<String> {
    let mut commands: Vec<String> = REGISTRY.keys().map(|&k| k.to_string()).collect();
    commands.sort();
    commands
}

/// Ping command - simple test to verify command dispatch works
///
/// Returns the input arguments with an added "pong" field.
fn ping(args: Value) -> Result<Value> {
    let mut result = match args {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    result.insert("pong".to_string(), Value::Bool(true));
    Ok(Value::Object(result))
}
