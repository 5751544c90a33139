//! Theme preference commands.

use clap::Subcommand;
use studysync_core::storage::{Database, Theme};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show the saved theme
    Show,
    /// Set the theme
    Set {
        /// dark or light
        theme: String,
    },
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        ThemeAction::Show => {
            // Absent preference renders as the default light theme.
            let theme = db.theme()?.unwrap_or(Theme::Light);
            println!("{}", theme.as_str());
        }
        ThemeAction::Set { theme } => {
            let theme = Theme::parse(&theme)
                .ok_or_else(|| format!("unknown theme: {theme} (expected dark or light)"))?;
            db.set_theme(theme)?;
            println!("ok");
        }
    }
    Ok(())
}
