//! Project-wide constants.

/// Prefix of the console line emitted after every computation.
pub const NOTICE_PREFIX: &str = "Opération effectuée : ";

/// Number of trials `flipsum tally` runs when `--trials` is not given.
pub const DEFAULT_TRIALS: usize = 1000;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "flipsum=debug";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_prefix_ends_with_separator() {
        assert!(NOTICE_PREFIX.ends_with(" : "));
    }

    #[test]
    fn verbose_filter_targets_this_crate() {
        assert!(VERBOSE_LOG_FILTER.starts_with(env!("CARGO_PKG_NAME")));
    }
}
