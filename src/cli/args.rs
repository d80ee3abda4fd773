//! Command-line arguments.
//!
//! Form fields are set with flags named after the form's element ids
//! (`--title`, `--total-pages`, ...), so the CLI and the page agree on
//! field names.

use clap::{Args, Parser, Subcommand};

use crate::models::FormField;

#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(version, about = "Keep a reading list in sync with the shelf service")]
#[command(
    after_help = "Environment:\n  SHELF_API_URL            API base (default http://localhost:5000/api)\n  SHELF_PLACEHOLDER_COVER  Cover shown for books without one\n  SHELF_TIMEOUT_SECS       Request timeout in seconds\n  RUST_LOG                 Log filter (default shelf=info)"
)]
pub struct CliArgs {
    /// API base, overriding SHELF_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Print the books container
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        query: Option<String>,
    },
    /// Print the whole page
    Page,
    /// Create a book
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Update a book
    Edit {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a book after confirmation
    Delete {
        id: String,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the CSV export in the browser
    Export {
        /// Print the URL instead of opening it
        #[arg(long)]
        print: bool,
    },
}

/// Form field values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub total_pages: Option<String>,
    #[arg(long)]
    pub pages_read: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl FieldArgs {
    /// The given fields in form order.
    pub fn values(&self) -> Vec<(FormField, String)> {
        FormField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    FormField::Title => &self.title,
                    FormField::Author => &self.author,
                    FormField::Genre => &self.genre,
                    FormField::TotalPages => &self.total_pages,
                    FormField::PagesRead => &self.pages_read,
                    FormField::Status => &self.status,
                    FormField::Notes => &self.notes,
                };
                value.clone().map(|value| (field, value))
            })
            .collect()
    }
}
