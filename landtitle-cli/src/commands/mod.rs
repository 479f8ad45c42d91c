//! Subcommand implementations and shared output helpers.

pub mod create;
pub mod exists;
pub mod init;
pub mod list;
pub mod read;
pub mod transfer;
pub mod update;

use landtitle_core::LandTitle;

/// Multi-line human rendering of one title.
pub(crate) fn print_title(title: &LandTitle) {
    println!("ID:           {}", title.id);
    println!("Owner:        {}", title.owner);
    println!("Description:  {}", title.property_description);
    println!("Value:        {}", title.property_value);
    println!("Document:     {}", title.document_hash);
    println!("Timestamp:    {}", title.timestamp);
    println!("Organization: {}", title.organization);
}
