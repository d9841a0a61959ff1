//! Section CLI commands
//!
//! Implements the one-shot section commands: listing with account
//! counts, creation, and deletion with its confirmation prompt.

use clap::Subcommand;

use crate::client::ApiClient;
use crate::display::format_section_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::DEFAULT_SECTION;

/// Section subcommands
#[derive(Subcommand)]
pub enum SectionCommands {
    /// List all sections with account counts
    List,
    /// Create a new, empty section
    Create {
        /// Section name
        name: String,
    },
    /// Delete a section, moving its accounts to Default
    Delete {
        /// Section name
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a section command
pub fn handle_section_command(client: &ApiClient, cmd: SectionCommands) -> TrackerResult<()> {
    match cmd {
        SectionCommands::List => {
            let view = client.list_all()?;
            print!("{}", format_section_list(&view));
        }

        SectionCommands::Create { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(TrackerError::Validation(
                    "Section name cannot be empty.".into(),
                ));
            }

            client.create_section(name)?;
            println!("Created section: {}", name);
        }

        SectionCommands::Delete { name, yes } => {
            // The Default section is never deletable; refuse before
            // talking to the server.
            if name == DEFAULT_SECTION {
                return Err(TrackerError::Validation(
                    "Cannot delete the Default section.".into(),
                ));
            }

            if !yes && !confirm_delete(&name)? {
                println!("Aborted.");
                return Ok(());
            }

            client.delete_section(&name)?;
            println!(
                "Deleted section: {} (accounts moved to {})",
                name, DEFAULT_SECTION
            );
        }
    }

    Ok(())
}

/// Ask for confirmation before deleting a section
fn confirm_delete(name: &str) -> TrackerResult<bool> {
    print!(
        "Delete section '{}'? Its accounts will be moved to {}. (yes/no): ",
        name, DEFAULT_SECTION
    );
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(answer.trim().to_lowercase() == "yes")
}
