//! Subject tracking commands.

use clap::Subcommand;
use studysync_core::storage::Database;
use studysync_core::subjects::{Subject, SubjectStore};

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Add a subject to track
    Add {
        /// Subject name
        name: String,
        /// Weekly goal in hours
        #[arg(long, default_value = "10")]
        goal: u32,
    },
    /// List subjects with progress
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a subject
    Remove {
        /// Subject id
        id: i64,
    },
    /// Log hours against a subject (negative to undo)
    Log {
        /// Subject id
        id: i64,
        /// Hours to add, may be negative
        #[arg(allow_hyphen_values = true)]
        hours: i64,
    },
    /// Edit a subject's name and/or weekly goal
    Edit {
        /// Subject id
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New weekly goal in hours
        #[arg(long)]
        goal: Option<u32>,
    },
}

pub fn run(action: SubjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SubjectStore::load(Database::open()?)?;

    match action {
        SubjectAction::Add { name, goal } => {
            let subject = store.add(&name, goal)?;
            println!("Subject added: {} (id {})", subject.name, subject.id);
        }
        SubjectAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.list())?);
            } else if store.is_empty() {
                println!("No subjects added yet. Add your first subject to get started!");
            } else {
                for subject in store.list() {
                    println!("{}", render_subject(subject));
                }
            }
        }
        SubjectAction::Remove { id } => {
            if store.remove(id)? {
                println!("Subject removed: {id}");
            } else {
                println!("No subject with id {id}");
            }
        }
        SubjectAction::Log { id, hours } => match store.adjust_progress(id, hours)? {
            Some(subject) => println!("{}", render_subject(subject)),
            None => println!("No subject with id {id}"),
        },
        SubjectAction::Edit { id, name, goal } => {
            if name.is_none() && goal.is_none() {
                return Err("nothing to edit: pass --name and/or --goal".into());
            }
            if let Some(name) = name {
                if !store.rename(id, &name)? {
                    println!("name unchanged");
                }
            }
            if let Some(goal) = goal {
                if !store.regoal(id, goal)? {
                    println!("goal unchanged");
                }
            }
            match store.get(id) {
                Some(subject) => println!("{}", render_subject(subject)),
                None => println!("No subject with id {id}"),
            }
        }
    }
    Ok(())
}

const BAR_WIDTH: usize = 20;

fn render_subject(subject: &Subject) -> String {
    let filled = BAR_WIDTH * subject.progress as usize / subject.goal as usize;
    let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);
    format!(
        "{}  {}\n    Progress: {} / {} hours  [{}] {}%",
        subject.id,
        subject.name,
        subject.progress,
        subject.goal,
        bar,
        subject.percent()
    )
}
