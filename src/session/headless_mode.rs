//! Headless mode execution
//!
//! One flow per invocation: mount, run the command, print the result.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::dashboard::Dashboard;
use crate::food::{FoodDraft, FoodId};
use crate::logging::init_console_logger;
use crate::print_cmd_success;
use crate::store::FoodStore;
use std::error::Error;

/// Field overrides for `edit`. Unset fields keep the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodEdits {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

impl FoodEdits {
    fn apply_to(self, draft: FoodDraft) -> FoodDraft {
        FoodDraft {
            image: self.image.unwrap_or(draft.image),
            name: self.name.unwrap_or(draft.name),
            price: self.price.unwrap_or(draft.price),
            description: self.description.unwrap_or(draft.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    List,
    Add(FoodDraft),
    Edit { id: FoodId, edits: FoodEdits },
    Delete(FoodId),
}

impl HeadlessCommand {
    /// Banner printed above the output of a successful run.
    fn title(&self) -> &'static str {
        match self {
            HeadlessCommand::List => "Menu",
            HeadlessCommand::Add(_) => "Food added",
            HeadlessCommand::Edit { .. } => "Food updated",
            HeadlessCommand::Delete(_) => "Food deleted",
        }
    }
}

/// Runs a single command without the terminal UI
///
/// This function handles:
/// 1. Console logging through `env_logger`
/// 2. Ctrl+C cancellation of the in-flight request
/// 3. Printing the outcome
///
/// # Returns
/// * `Ok(())` - The flow succeeded
/// * `Err` - The flow failed; the caller exits non-zero
pub async fn run_headless_mode(
    session: SessionData,
    command: HeadlessCommand,
) -> Result<(), Box<dyn Error>> {
    init_console_logger();
    print_session_starting("headless", &session.environment().api_url());

    // Cancel the request on Ctrl+C
    let token = session.token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let title = command.title();
    let mut dashboard = Dashboard::with_token(session.store, session.token);
    let output = execute_command(&mut dashboard, command).await?;
    print_cmd_success!(title, "");
    println!("{}", output);
    print_session_exit_success();
    Ok(())
}

/// Runs `command` through the dashboard and renders what it produced.
pub async fn execute_command<S: FoodStore + ?Sized>(
    dashboard: &mut Dashboard<S>,
    command: HeadlessCommand,
) -> Result<String, Box<dyn Error>> {
    match command {
        HeadlessCommand::List => {
            dashboard.mount().await?;
            let foods = dashboard.state().foods();
            if foods.is_empty() {
                return Ok("No foods on the menu".to_string());
            }
            Ok(foods
                .iter()
                .map(|food| food.to_string())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        HeadlessCommand::Add(draft) => {
            let food = dashboard.add_food(draft).await?;
            Ok(food.to_string())
        }
        HeadlessCommand::Edit { id, edits } => {
            dashboard.mount().await?;
            let food = dashboard
                .state()
                .food(id)
                .cloned()
                .ok_or_else(|| format!("Food #{} not found", id))?;
            let draft = edits.apply_to(FoodDraft::from(&food));
            dashboard.begin_edit(food);
            let updated = dashboard.update_food(draft).await?;
            Ok(updated.to_string())
        }
        HeadlessCommand::Delete(id) => {
            dashboard.delete_food(id).await?;
            Ok(format!("Deleted #{}", id))
        }
    }
}
