use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

use crate::{ast::ast::Program, errors::errors::ErrorList, parse};

fn init_subscriber(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_test_writer()
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

/// Installs a test subscriber once per test binary.
///
/// Tests run concurrently, so only the first call wins; later calls are no-ops.
pub fn init_tracing() {
    let _ = init_subscriber(Level::DEBUG);
}

/// Parses `source` and asserts it produced no errors.
pub fn parse_ok(source: &str) -> Program {
    init_tracing();
    let (program, errors) = parse(source.to_string(), Some("test.mk".to_string()));
    assert!(
        errors.is_empty(),
        "unexpected parse errors for {:?}: {:?}",
        source,
        errors.messages()
    );
    program
}

/// Parses `source`, returning the program and all recorded errors.
pub fn parse_with_errors(source: &str) -> (Program, ErrorList) {
    init_tracing();
    parse(source.to_string(), Some("test.mk".to_string()))
}
