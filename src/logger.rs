use std::error::Error;

use env_logger::Env;

/// Initialise the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .try_init();
}

/// Messages of the errors underneath `e`, outermost first. `e` itself is not included.
pub fn cause_chain(e: &dyn Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = e.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes
}

/// Log what lies beneath `e`; the caller reports `e` itself.
pub fn log_causes(prefix: &str, e: &dyn Error) {
    for cause in cause_chain(e) {
        log::error!("{}: caused by: {}", prefix, cause);
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::*;
    use crate::error::IconError;

    #[test]
    fn cause_chain_skips_the_top_level_message() {
        let e = IconError::io(Path::new("icons"), io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(cause_chain(&e), vec!["disk full".to_string()]);
        assert!(cause_chain(&IconError::InvalidSize(0)).is_empty());
    }
}
