//! Command handlers
//!
//! Each handler reads the current snapshot or dispatches one action against
//! the store. A dispatch that finds no target (the store's deliberate no-op
//! on a missing id) is surfaced as an error here so the operator sees it.

use anyhow::{bail, Result};
use chrono::Utc;
use lumora_domain::cms::{
    ids, Action, AppStore, Font, Lead, LeadStatus, PostStatus, SiteConfigPatch,
};
use lumora_domain::content;
use lumora_localstore::FileStateStore;

use crate::cli::{Command, LeadsCommand, PostsCommand, ServicesCommand, SettingsCommand};

pub fn run(app: &mut AppStore<FileStateStore>, command: Command) -> Result<()> {
    match command {
        Command::Dashboard => dashboard(app),
        Command::Leads(command) => leads(app, command),
        Command::Posts(command) => posts(app, command),
        Command::Services(command) => services(app, command),
        Command::Settings(command) => settings(app, command),
    }
}

fn dashboard(app: &AppStore<FileStateStore>) -> Result<()> {
    let state = app.state();
    println!("{}", state.config.name);
    println!("Leads: {}", state.lead_count());
    println!("Posts: {}", state.post_count());
    println!();
    println!("Recent leads:");
    for lead in state.recent_leads(5) {
        println!(
            "  {:<16} {:<20} {:<16} {:<10} {}",
            lead.id, lead.name, lead.service_interest, lead.status, lead.date
        );
    }
    Ok(())
}

fn leads(app: &mut AppStore<FileStateStore>, command: LeadsCommand) -> Result<()> {
    match command {
        LeadsCommand::List => {
            for lead in &app.state().leads {
                println!(
                    "{:<16} {:<20} {:<28} {:<16} {:<10} {}",
                    lead.id, lead.name, lead.email, lead.company, lead.status, lead.date
                );
            }
            Ok(())
        }
        LeadsCommand::Add {
            name,
            email,
            phone,
            company,
            message,
            service,
        } => {
            let lead = Lead {
                id: ids::timestamp_id(),
                name,
                email,
                phone,
                company,
                message,
                service_interest: service,
                date: Utc::now().date_naive(),
                status: LeadStatus::New,
            };
            let id = lead.id.clone();
            app.dispatch(Action::AddLead(lead));
            println!("Captured lead {id}");
            Ok(())
        }
        LeadsCommand::Status { id, status } => {
            let status = parse_lead_status(&status)?;
            if !app.dispatch(Action::UpdateLeadStatus {
                id: id.clone(),
                status,
            }) {
                bail!("no lead with id '{id}'");
            }
            println!("Lead {id} is now {status}");
            Ok(())
        }
    }
}

fn posts(app: &mut AppStore<FileStateStore>, command: PostsCommand) -> Result<()> {
    match command {
        PostsCommand::List => {
            for post in &app.state().posts {
                println!(
                    "{:<16} {:<40} {:<16} {:<10} {}",
                    post.id, post.title, post.category, post.status, post.date
                );
            }
            Ok(())
        }
        PostsCommand::New {
            title,
            author,
            category,
            content: body,
            publish,
        } => {
            let mut post = content::new_draft(ids::timestamp_id(), Utc::now().date_naive());
            post.title = title;
            post.author = author;
            post.category = category;
            post.content = body;
            if publish {
                post.status = PostStatus::Published;
            }

            let post = content::finalize(post)?;
            let id = post.id.clone();
            let slug = post.slug.clone();
            app.dispatch(Action::AddPost(post));
            println!("Created post {id} ({slug})");
            Ok(())
        }
        PostsCommand::Edit {
            id,
            title,
            author,
            category,
            content: body,
            image_url,
        } => {
            let Some(existing) = app.state().post(&id) else {
                bail!("no post with id '{id}'");
            };

            let mut post = existing.clone();
            if let Some(title) = title {
                post.title = title;
            }
            if let Some(author) = author {
                post.author = author;
            }
            if let Some(category) = category {
                post.category = category;
            }
            if let Some(body) = body {
                post.content = body;
            }
            if let Some(image_url) = image_url {
                post.image_url = image_url;
            }

            let post = content::finalize(post)?;
            app.dispatch(Action::UpdatePost(post));
            println!("Updated post {id}");
            Ok(())
        }
        PostsCommand::Publish { id } => {
            let Some(existing) = app.state().post(&id) else {
                bail!("no post with id '{id}'");
            };

            let mut post = existing.clone();
            post.status = PostStatus::Published;
            app.dispatch(Action::UpdatePost(post));
            println!("Published post {id}");
            Ok(())
        }
        PostsCommand::Delete { id } => {
            if !app.dispatch(Action::DeletePost(id.clone())) {
                bail!("no post with id '{id}'");
            }
            println!("Deleted post {id}");
            Ok(())
        }
    }
}

fn services(app: &mut AppStore<FileStateStore>, command: ServicesCommand) -> Result<()> {
    match command {
        ServicesCommand::List => {
            for service in &app.state().services {
                println!(
                    "{:<10} {:<32} {}",
                    service.id, service.title, service.short_description
                );
            }
            Ok(())
        }
        ServicesCommand::Edit {
            id,
            title,
            short_description,
            full_description,
            icon,
            feature,
        } => {
            let Some(existing) = app.state().service(&id) else {
                bail!("no service with id '{id}'");
            };

            let mut service = existing.clone();
            if let Some(title) = title {
                service.title = title;
            }
            if let Some(short_description) = short_description {
                service.short_description = short_description;
            }
            if let Some(full_description) = full_description {
                service.full_description = full_description;
            }
            if let Some(icon) = icon {
                service.icon_name = icon;
            }
            if !feature.is_empty() {
                service.features = feature;
            }

            app.dispatch(Action::UpdateService(service));
            println!("Updated service {id}");
            Ok(())
        }
    }
}

fn settings(app: &mut AppStore<FileStateStore>, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let config = &app.state().config;
            println!("Name:        {}", config.name);
            println!("Description: {}", config.description);
            println!("Email:       {}", config.email);
            println!("Phone:       {}", config.phone);
            println!("Address:     {}", config.address);
            println!("Font:        {}", config.font);
            for (var, value) in app.theme().css_variables() {
                println!("{var}: {value}");
            }
            Ok(())
        }
        SettingsCommand::Set {
            name,
            description,
            email,
            phone,
            address,
            primary_color,
            secondary_color,
            font,
        } => {
            let mut patch = SiteConfigPatch::new();
            if let Some(name) = name {
                patch = patch.name(name);
            }
            if let Some(description) = description {
                patch = patch.description(description);
            }
            if let Some(email) = email {
                patch = patch.email(email);
            }
            if let Some(phone) = phone {
                patch = patch.phone(phone);
            }
            if let Some(address) = address {
                patch = patch.address(address);
            }
            if let Some(primary_color) = primary_color {
                patch = patch.primary_color(primary_color);
            }
            if let Some(secondary_color) = secondary_color {
                patch = patch.secondary_color(secondary_color);
            }
            if let Some(font) = font {
                patch = patch.font(parse_font(&font)?);
            }

            app.dispatch(Action::UpdateConfig(patch));
            println!("Settings saved");
            for (var, value) in app.theme().css_variables() {
                println!("{var}: {value}");
            }
            Ok(())
        }
    }
}

fn parse_lead_status(raw: &str) -> Result<LeadStatus> {
    match raw {
        "new" => Ok(LeadStatus::New),
        "contacted" => Ok(LeadStatus::Contacted),
        "closed" => Ok(LeadStatus::Closed),
        other => bail!("unknown lead status '{other}' (expected new, contacted, or closed)"),
    }
}

fn parse_font(raw: &str) -> Result<Font> {
    match raw {
        "sans" => Ok(Font::Sans),
        "serif" => Ok(Font::Serif),
        "mono" => Ok(Font::Mono),
        other => bail!("unknown font '{other}' (expected sans, serif, or mono)"),
    }
}
