//! Protocol command handling
//!
//! This module covers:
//! - Parsing framed lines into recognized commands
//! - Dispatching commands to registry and telemetry actions
//! - Running the bulk collection sweep

mod collect;
mod dispatcher;

pub use dispatcher::Dispatcher;

/// A recognized host command
///
/// Matching is exact and case-sensitive; anything unrecognized is dropped
/// without a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `helloMaster`
    Hello,
    /// `getListDevice`
    ListDevices,
    /// `getDataNow`
    CollectNow,
    /// `deleteAllNode`
    DeleteAll,
    /// `deleteNode <id>`
    DeleteNode(String),
    /// `registerNewNode` (acknowledged only, registry unchanged)
    RegisterNew,
    /// `cancelRegister`
    CancelRegister,
}

impl Command {
    /// Parse a trimmed command line; `None` means drop it silently
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "helloMaster" => Some(Command::Hello),
            "getListDevice" => Some(Command::ListDevices),
            "getDataNow" => Some(Command::CollectNow),
            "deleteAllNode" => Some(Command::DeleteAll),
            "registerNewNode" => Some(Command::RegisterNew),
            "cancelRegister" => Some(Command::CancelRegister),
            _ => {
                // A delete with no id after the verb is malformed; treat it
                // like any other unknown command rather than crash the loop.
                let rest = line.strip_prefix("deleteNode ")?;
                let id = rest.split_whitespace().next()?;
                Some(Command::DeleteNode(id.to_string()))
            }
        }
    }
}
