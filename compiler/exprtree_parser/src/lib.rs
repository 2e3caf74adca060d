pub mod parser;

pub use parser::diagnostics::render_snippet;
pub use parser::error::{ErrorKind, PositionedError, PostfixDefect, ReduceError};
pub use parser::reducer::{reduce, reduce_with, ReduceConfig, DEFAULT_MAX_TREE_DEPTH};
pub use parser::scanner::{scan, Scanner, ScannerConfig};
pub use parser::shunting_yard::{to_postfix, to_postfix_lexemes, to_postfix_with, TokenizerMode};
pub use parser::validator::{parse_terms, validate};

#[cfg(test)]
mod tests {
    use std::sync::Once;
    use log::LevelFilter;
    use env_logger::Builder;
    use std::io::Write;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            Builder::new()
                .is_test(true)
                .filter_level(LevelFilter::Debug)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .init();
            log::info!("Test logger initialized");
        });
    }
}

// Integration tests are in the tests/ directory
