/// Release builds log to syslog under the daemon's own process name,
/// debug builds log to stderr through env_logger.
#[cfg(not(debug_assertions))]
pub fn init_logging(process_name: &str) {
    use syslog::{BasicLogger, Facility, Formatter3164};

    // 3164 is the only syslog formatter with log crate integration
    let formatter = Formatter3164 {
        facility: Facility::LOG_DAEMON,
        hostname: None,
        process: process_name.to_owned(),
        pid: std::process::id(),
    };
    let logger = syslog::unix(formatter)
        .expect("syslog initialization failed");
    log::set_boxed_logger(Box::new(BasicLogger::new(logger)))
        .map(|()| log::set_max_level(log::STATIC_MAX_LEVEL))
        .expect("syslog logger installation failed");
}

#[cfg(debug_assertions)]
pub fn init_logging(_process_name: &str) {
    env_logger::init()
}
