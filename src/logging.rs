use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Menus print to stdout, so only
/// warnings reach stderr unless asked for.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        tracing::warn!("logging initialised twice");
    }
}
