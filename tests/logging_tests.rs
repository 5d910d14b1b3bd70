//! Tests that rebalancing reports its steps through the `log` facade.
//!
//! A recording logger keeps every `redblack` record for assertions and
//! forwards it to `simplelog::TestLogger`, so the trace lines also show up
//! with `--nocapture`. Tests share the one global logger and run in
//! parallel, so each assertion looks for a line only its own scenario emits.

use std::sync::{Mutex, Once, OnceLock};

use log::{Log, Metadata, Record};
use redblack::{RedBlackSet, RedBlackTree, TraversalOrder};
use rstest::rstest;
use simplelog::{Config, LevelFilter, TestLogger};

struct RecordingLogger {
    lines: Mutex<Vec<String>>,
    echo: OnceLock<Box<TestLogger>>,
}

impl RecordingLogger {
    fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .map(|lines| lines.iter().any(|line| line.contains(needle)))
            .unwrap_or(false)
    }
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("redblack")
            && let Ok(mut lines) = self.lines.lock()
        {
            lines.push(record.args().to_string());
        }
        if let Some(echo) = self.echo.get() {
            echo.log(record);
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    lines: Mutex::new(Vec::new()),
    echo: OnceLock::new(),
};

fn initialize_logging() -> &'static RecordingLogger {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = LOGGER
            .echo
            .set(TestLogger::new(LevelFilter::Trace, Config::default()));
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    &LOGGER
}

#[rstest]
fn test_manual_rotation_is_traced() {
    let logger = initialize_logging();
    let mut set = RedBlackSet::new();
    for key in [20, 10, 30] {
        set.insert_unbalanced(key);
    }
    let root = set.root().map(|node| node.id()).unwrap();
    let pivot = set.find(&30).map(|node| node.id()).unwrap();
    set.rotate_left(root).unwrap();
    assert_eq!(set.keys_in(TraversalOrder::PreOrder), vec![30, 20, 10]);
    assert!(logger.contains(&format!("rotate left at {root}, promoting {pivot}")));
}

#[rstest]
fn test_insert_fixup_cases_are_traced() {
    let logger = initialize_logging();
    // Ascending inserts hit the red-uncle recolor and the outer rotation.
    let set: RedBlackSet<i32> = (1..=7).collect();
    assert!(set.validate().is_ok());
    assert!(logger.contains("red uncle"));
    assert!(logger.contains("outer grandchild, rotating grandparent"));
}

#[rstest]
fn test_delete_fixup_is_traced() {
    let logger = initialize_logging();
    let mut tree: RedBlackTree<i32, ()> = [7, 5, 9, 6].into_iter().map(|key| (key, ())).collect();
    // Removing the black leaf 9 leaves a double black that the fixup absorbs.
    assert_eq!(tree.delete(&9), Ok((9, ())));
    assert_eq!(tree.display_colored().to_string(), "6B 5B 7B");
    assert!(logger.contains("delete fixup at"));
}
