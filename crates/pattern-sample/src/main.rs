//! # Pattern Recipe
//!
//! Runs the three pattern scenarios, each inside its own tracing span.
//!
//! ## 🚀 Scenarios
//!
//! 1.  **composite_demo**: load the [`ImageEditor`] scene, group a new dot and circle, move them.
//! 2.  **observer_demo**: open and save a file with a logger and an e-mail alerter subscribed.
//! 3.  **singleton_demo**: reach the [`Database`] from several tasks and run two queries.
//!
//! Set `RUST_LOG=debug` for more detail.

use pattern_framework::logging::setup_tracing;
use pattern_sample::canvas::ConsoleCanvas;
use pattern_sample::database::Database;
use pattern_sample::file_editor::EditorError;
use pattern_sample::image_editor::ImageEditor;
use pattern_sample::lifecycle::{AppConfig, AppContext};
use pattern_sample::model::{Circle, Dot, Shape};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    let context = AppContext::bootstrap(config).map_err(|e| e.to_string())?;
    info!(connection = context.database.connection(), "Starting pattern demos");

    let span = tracing::info_span!("composite_demo");
    async {
        let mut editor = ImageEditor::new();
        editor.load();

        let dot = Dot::new(3, 4);
        let circle = Circle::new(8, 6, 15);
        let (dot_id, circle_id) = (dot.id(), circle.id());

        let mut canvas = ConsoleCanvas::new();
        let selection = vec![Shape::from(dot), Shape::from(circle)];
        let group_id = editor.group_selected(selection, &mut canvas);
        info!(group = %group_id, drawn = canvas.drawn(), "Selection grouped");

        editor.move_shape(dot_id, 2, 2);
        editor.move_shape(circle_id, 3, 3);
        for id in [dot_id, circle_id] {
            if let Some(position) = editor.position_of(id) {
                info!(%id, %position, "Moved");
            }
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("observer_demo");
    async {
        let mut editor = context.file_editor();
        let opened = editor.open_file("/path/to/myfile.txt")?;
        let saved = editor.save_file()?;
        for fault in opened.faults.iter().chain(&saved.faults) {
            warn!(subscriber = %fault.subscriber, reason = %fault.reason, "Listener failed");
        }
        info!(notified = opened.notified() + saved.notified(), "Editor events delivered");
        Ok::<(), EditorError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("singleton_demo");
    async {
        let handles: Vec<_> = (0..4)
            .map(|_| tokio::spawn(async { Database::instance() as *const Database as usize }))
            .collect();
        let mut addresses = Vec::with_capacity(handles.len());
        for handle in handles {
            addresses.push(handle.await.map_err(|e| e.to_string())?);
        }
        let shared = addresses.iter().all(|&a| a == context.database as *const Database as usize);
        info!(
            shared,
            constructions = Database::constructions(),
            "Singleton works, both variables contain the same instance"
        );

        let foo = Database::instance();
        let bar = Database::instance();
        foo.query("SELECT * FROM table1").map_err(|e| e.to_string())?;
        bar.query("UPDATE table2 SET column = 'value' WHERE id = 1")
            .map_err(|e| e.to_string())?;
        info!(queries = foo.query_count(), "Queries executed");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    info!("Application completed successfully");
    Ok(())
}
