//! Small CLI demo for the todo list.
//!
//! Walks one list through an accepted item, each kind of rejection, and a
//! persistence failure. Set `RUST_LOG=debug` to see gate decisions.

use chrono::NaiveDate;
use std::sync::Arc;
use todo_list::{ListEnvironment, ToDoItem, ToDoList, User};
use todo_list_core::{
    Clock, ConsoleNotifier, ItemStore, StoreError, SystemClock, UnimplementedStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Store that only logs; nothing outlives the process.
struct LogOnlyStore;

impl ItemStore<ToDoItem> for LogOnlyStore {
    fn store(&self, item: &ToDoItem) -> Result<(), StoreError> {
        let json = serde_json::to_string(item).map_err(|e| StoreError::Rejected {
            reason: e.to_string(),
        })?;
        tracing::info!(item = %json, "Stored item");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    println!("=== ToDoList Example ===\n");

    let birthdate = NaiveDate::from_ymd_opt(1990, 6, 15)
        .ok_or_else(|| anyhow::anyhow!("invalid birthdate"))?;
    let owner = User::new("ada@example.com", "Ada", "Lovelace", "Password123", birthdate);
    println!("Owner valid: {}", owner.is_valid());

    let clock = Arc::new(SystemClock);
    let env = ListEnvironment::new(
        clock.clone(),
        Arc::new(ConsoleNotifier),
        Arc::new(LogOnlyStore),
    );
    let mut list = ToDoList::new(owner.clone(), env)?;

    let added = list.add_item(ToDoItem::created_now("milk", "Buy milk", clock.as_ref()))?;
    println!("Added 'milk': {added}");

    let added = list.add_item(ToDoItem::created_now("bread", "Buy bread", clock.as_ref()))?;
    println!("Added 'bread' right away: {added}");
    if let Some(reason) = list.last_rejection() {
        println!("  rejected: {reason}");
    }

    println!("\nItems ({}):", list.len());
    for item in list.items() {
        println!("  {} - {} ({})", item.name, item.content, item.created_at);
    }

    println!("\nWith the baseline store:");
    let env = ListEnvironment::new(
        clock.clone(),
        Arc::new(ConsoleNotifier),
        Arc::new(UnimplementedStore),
    );
    let mut unsaved = ToDoList::new(owner, env)?;
    match unsaved.add_item(ToDoItem::new("milk", "Buy milk", clock.now())) {
        Ok(added) => println!("  added: {added}"),
        Err(error) => println!("  error: {error}"),
    }

    let minor = User::new(
        "kid@example.com",
        "Kid",
        "Example",
        "Password123",
        clock.now().date_naive(),
    );
    let env = ListEnvironment::new(clock, Arc::new(ConsoleNotifier), Arc::new(LogOnlyStore));
    if let Err(error) = ToDoList::new(minor, env) {
        println!("\nList for a newborn: {error}");
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
