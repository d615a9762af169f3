//! Terminal front end for the room-type catalogue.
//!
//! Each subcommand maps onto one controller operation; `update` first loads
//! the record into edit-mode so unspecified fields keep their current values.

pub mod terminal;
pub mod transport;

use anyhow::{anyhow, bail};
use clap::{Args, Parser, Subcommand};
use room_type_core::{ListState, RoomTypeController, RoomTypeView, Transport};

pub use terminal::TerminalView;
pub use transport::UreqTransport;

#[derive(Debug, Parser)]
#[command(name = "room-type", about = "Manage room types through the catalogue API")]
pub struct Cli {
    /// Base URL of the catalogue API.
    #[arg(long, env = "ROOM_TYPE_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List active room types.
    List,
    /// Show one room type, including inactive ones.
    Show { id: i64 },
    /// Create a room type.
    Create(NewRoomType),
    /// Replace the given fields of a room type.
    Update {
        id: i64,
        #[command(flatten)]
        changes: RoomTypeChanges,
    },
    /// Inactivate (soft delete) a room type.
    Inactivate {
        id: i64,
        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

/// Raw field text; numbers are parsed leniently by the form.
#[derive(Debug, Args)]
pub struct NewRoomType {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub capacity: String,
    #[arg(long)]
    pub rate: String,
}

#[derive(Debug, Default, Args)]
pub struct RoomTypeChanges {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub capacity: Option<String>,
    #[arg(long)]
    pub rate: Option<String>,
}

/// Run one subcommand. The view has already shown the user what went wrong
/// when this returns `Err`.
pub fn run<T: Transport, V: RoomTypeView>(
    command: Command,
    controller: &mut RoomTypeController<T, V>,
) -> anyhow::Result<()> {
    match command {
        Command::List => {
            if let ListState::LoadFailed = controller.list() {
                bail!("could not list room types");
            }
        }
        Command::Show { id } => {
            controller.load(id)?;
        }
        Command::Create(fields) => {
            let form = controller.form_mut();
            form.clear();
            form.name = fields.name;
            form.description = fields.description;
            form.capacity = fields.capacity;
            form.rate = fields.rate;
            controller.save()?;
        }
        Command::Update { id, changes } => {
            controller.load(id)?;
            let form = controller.form_mut();
            if let Some(name) = changes.name {
                form.name = name;
            }
            if let Some(description) = changes.description {
                form.description = description;
            }
            if let Some(capacity) = changes.capacity {
                form.capacity = capacity;
            }
            if let Some(rate) = changes.rate {
                form.rate = rate;
            }
            controller.save()?;
        }
        Command::Inactivate { id, .. } => {
            if !controller.inactivate(id)? {
                return Err(anyhow!("inactivation of room type {id} cancelled"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_raw_numbers() {
        let cli = Cli::try_parse_from([
            "room-type",
            "create",
            "--name",
            "Suite",
            "--description",
            "Ocean view",
            "--capacity",
            "2",
            "--rate",
            "350.00",
        ])
        .unwrap();
        match cli.command {
            Command::Create(fields) => {
                assert_eq!(fields.name, "Suite");
                assert_eq!(fields.rate, "350.00");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_partial_update() {
        let cli =
            Cli::try_parse_from(["room-type", "--api-url", "http://h:1", "update", "4", "--rate", "99"])
                .unwrap();
        assert_eq!(cli.api_url, "http://h:1");
        match cli.command {
            Command::Update { id, changes } => {
                assert_eq!(id, 4);
                assert_eq!(changes.rate.as_deref(), Some("99"));
                assert!(changes.name.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn inactivate_accepts_short_yes() {
        let cli = Cli::try_parse_from(["room-type", "inactivate", "7", "-y"]).unwrap();
        assert!(matches!(cli.command, Command::Inactivate { id: 7, yes: true }));
    }

    #[test]
    fn create_requires_every_field() {
        assert!(Cli::try_parse_from(["room-type", "create", "--name", "Suite"]).is_err());
    }
}
