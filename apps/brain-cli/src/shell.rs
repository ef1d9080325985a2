//! Interactive session: one command per stdin line

use std::path::PathBuf;

use anyhow::Result;
use brain_client::render::views::{render_query_panel, render_tabs};
use brain_client::{Backend, Dashboard, View};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output;

pub const HELP: &str = "\
Commands:
  dashboard | properties | maintenance | documents | upload
                          switch view
  ?<text>, query <text>   ask the backend a question
  upload <path> [id]      upload a document (default property unless id given)
  property <id>           show one property and its maintenance history
  refresh                 reload every collection
  status                  show backend status
  help                    show this message
  quit, exit              leave the session";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Blank line
    Nothing,
    Switch(View),
    Query(String),
    Upload {
        path: PathBuf,
        property_id: Option<String>,
    },
    Property(String),
    Refresh,
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ShellCommand::Nothing;
        }

        if let Some(text) = line.strip_prefix('?') {
            return ShellCommand::Query(text.trim().to_string());
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "query" | "ask" => ShellCommand::Query(rest.to_string()),
            "upload" if !rest.is_empty() => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(path), property_id, None) => ShellCommand::Upload {
                        path: PathBuf::from(path),
                        property_id: property_id.map(str::to_string),
                    },
                    _ => ShellCommand::Unknown(line.to_string()),
                }
            }
            "property" if !rest.is_empty() => ShellCommand::Property(rest.to_string()),
            "refresh" if rest.is_empty() => ShellCommand::Refresh,
            "status" if rest.is_empty() => ShellCommand::Status,
            "help" | "h" if rest.is_empty() => ShellCommand::Help,
            "quit" | "exit" | "q" if rest.is_empty() => ShellCommand::Quit,
            _ if rest.is_empty() => match line.parse::<View>() {
                Ok(view) => ShellCommand::Switch(view),
                Err(_) => ShellCommand::Unknown(line.to_string()),
            },
            _ => ShellCommand::Unknown(line.to_string()),
        }
    }
}

/// Run the session until `quit` or end of input
pub async fn run<B: Backend>(dashboard: &mut Dashboard<B>) -> Result<()> {
    dashboard.refresh_all().await;
    print_screen(dashboard)?;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ShellCommand::parse(&line) {
            ShellCommand::Nothing => continue,
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Unknown(input) => {
                println!("Unknown command: {} (type 'help')", input);
            }
            ShellCommand::Switch(view) => {
                dashboard.select_view(view);
                print_screen(dashboard)?;
            }
            ShellCommand::Refresh => {
                dashboard.refresh_all().await;
                print_screen(dashboard)?;
            }
            ShellCommand::Query(text) => {
                dashboard.submit_query(&text).await;
                if let Some(panel) = render_query_panel(dashboard.store()) {
                    println!("{}", panel);
                }
            }
            ShellCommand::Upload { path, property_id } => {
                output::upload(dashboard, &path, property_id.as_deref()).await;
                output::print_notices(dashboard.store_mut());
            }
            ShellCommand::Property(id) => output::property(dashboard, &id).await,
            ShellCommand::Status => output::status(dashboard).await,
        }
    }

    Ok(())
}

fn print_screen<B: Backend>(dashboard: &mut Dashboard<B>) -> Result<()> {
    println!("{}", render_tabs(dashboard.store().active_view()));
    println!("{}", dashboard.render_active_view()?);
    output::print_notices(dashboard.store_mut());
    Ok(())
}
