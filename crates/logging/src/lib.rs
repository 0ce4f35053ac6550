//! Process-wide logging setup for benches, tests and anything else that wants to see what the crates log.

/// Log to stderr, filtered by `RUST_LOG` and defaulting to `info`.
///
/// If called multiple times in the same process, only applies once.  If some other logger got there first, it is
/// left alone.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let res = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format(|buf, record| {
                use std::io::Write;

                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {:<5} {}: {}",
                    now,
                    record.level(),
                    record.target(),
                    record.args(),
                )
            })
            .try_init();

        if let Err(e) = res {
            log::debug!("Keeping the existing logger: {}", e);
        }
    });
}
