//! Command-line surface
//!
//! Every mutating subcommand maps onto exactly one of the store's seven
//! actions; everything else is a read-only view of the current state.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lumo-admin",
    version,
    about = "Admin console for the Lumora agency site"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the dashboard overview: counters and recent leads
    Dashboard,
    /// Manage contact leads
    #[command(subcommand)]
    Leads(LeadsCommand),
    /// Manage blog posts
    #[command(subcommand)]
    Posts(PostsCommand),
    /// Manage the services offered
    #[command(subcommand)]
    Services(ServicesCommand),
    /// Show or update site settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
pub enum LeadsCommand {
    /// List every lead, most recent first
    List,
    /// Capture a new lead
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long)]
        message: String,
        /// Service the lead is interested in
        #[arg(long, default_value = "General Inquiry")]
        service: String,
    },
    /// Move a lead to a new pipeline status
    Status {
        id: String,
        /// One of: new, contacted, closed
        status: String,
    },
}

#[derive(Subcommand)]
pub enum PostsCommand {
    /// List every post, drafts included
    List,
    /// Create a new post (a draft unless --publish is given)
    New {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "General")]
        category: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long)]
        publish: bool,
    },
    /// Edit an existing post; unset flags keep their current value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Publish a draft
    Publish { id: String },
    /// Delete a post
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ServicesCommand {
    /// List the services
    List,
    /// Edit a service; unset flags keep their current value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        short_description: Option<String>,
        #[arg(long)]
        full_description: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        /// Replace the feature list (repeat the flag once per feature)
        #[arg(long)]
        feature: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the current configuration and theme variables
    Show,
    /// Update configuration fields; unset flags keep their current value
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        primary_color: Option<String>,
        #[arg(long)]
        secondary_color: Option<String>,
        /// One of: sans, serif, mono
        #[arg(long)]
        font: Option<String>,
    },
}
