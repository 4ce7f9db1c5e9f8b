//! Dispatch telemetry: trace events must be emission-only and never
//! disturb the operation semantics.

mod common;

use anyhow::Result;
use common::{hello, run, window};
use tracing_subscriber::EnvFilter;

#[test]
fn dispatching_under_a_trace_subscriber_is_transparent() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("actions.dispatch=trace,window.edit=trace"))
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut w = window(&hello(100));
        run(&mut w, "cursor_next", 200);
        run(&mut w, "start_insert", 0);
        run(&mut w, "insert4", 0);
        run(&mut w, "insertA", 0);
        run(&mut w, "exit_insert", 0);
        run(&mut w, "delete_byte", 3);
        run(&mut w, "increment", 1000);
        let s = w.state();
        assert_eq!(s.length, 1298);
        assert_eq!(s.cursor, 201, "leaving insert keeps the post-commit cursor");
    });
    Ok(())
}
