//! CRUD Demo - Main Entry Point
//!
//! Drives one screen through a scripted session: create, edit, a rejected
//! double submit and a delete, then prints the table and notifications.

use anyhow::Result;
use crud_demo::domain::{CrudConfig, FieldName};
use crud_demo::features::crud::columns::row_key;
use crud_demo::helpers::is_development;
use crud_demo::utils::format::format_datetime;
use crud_demo::{CrudController, Error};

fn main() -> Result<()> {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting CRUD demo...");

    let config = CrudConfig::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        CrudConfig::default()
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config))
}

async fn run(config: CrudConfig) -> Result<()> {
    let (ctrl, notifications) = CrudController::new(config)?;
    let locale = ctrl.locale();
    tracing::info!(locale = locale.display_name(), layout = ?ctrl.layout(), "Screen mounted");

    for (name, category, description) in [
        ("Alpha", "technology", "First record"),
        ("beta", "education", ""),
        ("Gamma", "finance", "A longer description that will be shown with an ellipsis in the table"),
    ] {
        ctrl.update_field(FieldName::Name, name)?;
        ctrl.update_category(category)?;
        ctrl.update_field(FieldName::Description, description)?;
        ctrl.submit().await?;
    }

    // Empty draft: blocked by validation, reported as a notification.
    if let Err(e) = ctrl.submit().await {
        tracing::info!(error = %e, "Empty draft rejected");
    }

    let Some(alpha) = ctrl.records().first().map(|r| r.id().clone()) else {
        anyhow::bail!("no records after seeding");
    };
    ctrl.begin_edit(&alpha)?;
    ctrl.update_field(FieldName::Name, "Alpha (edited)")?;

    // Second submit while the first is in flight is rejected.
    let (first, second) = tokio::join!(ctrl.submit(), ctrl.submit());
    first?;
    match second {
        Err(Error::SubmissionInProgress) => tracing::info!("Duplicate submit rejected"),
        other => tracing::warn!(?other, "Unexpected duplicate submit result"),
    }

    if let Some(beta) = ctrl.records().get(1).map(|r| r.id().clone()) {
        ctrl.delete_record(&beta);
    }

    let mut view = ctrl.table_view();
    view.toggle_sort("name");
    let page = ctrl.table_page(&view);
    let columns = ctrl.columns();

    println!("{}", ctrl.form_title());
    println!("{}", ctrl.table_title());
    println!(
        "{}",
        columns
            .iter()
            .map(|c| c.title.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    );
    if page.rows.is_empty() {
        println!("{}", ctrl.empty_message());
    }
    for record in &page.rows {
        let cells: Vec<String> = columns.iter().map(|c| c.render_cell(record)).collect();
        println!("{}  [{}]", cells.join(" | "), row_key(record));
    }
    if page.paginated {
        println!("{}", page.total_label(locale));
    }

    println!();
    for note in notifications.try_iter() {
        println!("[{:?}] {}", note.severity(), note.message(locale));
    }
    if let Some(latest) = ctrl.records().iter().map(|r| r.created_at()).max() {
        println!("Last record created at {}", format_datetime(&latest));
    }

    Ok(())
}
