use ticklist::config::LoggingConfig;
use ticklist::logger::{self, Logger, MAX_LOG_ENTRIES};

#[test]
fn test_logger_newest_first() {
    let logger = Logger::new();
    assert!(logger.is_empty());

    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_logger_drops_oldest_when_full() {
    let logger = Logger::new();
    for i in 0..MAX_LOG_ENTRIES + 10 {
        logger.log(format!("entry {}", i));
    }

    assert_eq!(logger.len(), MAX_LOG_ENTRIES);
    let logs = logger.get_logs();
    assert!(logs[0].ends_with(&format!("entry {}", MAX_LOG_ENTRIES + 9)));
    assert!(logs.last().unwrap().ends_with("entry 10"));
}

#[test]
fn test_clones_share_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.len(), 1);
}

#[test]
fn test_init_routes_records_to_memory() {
    let memory = Logger::new();
    let config = LoggingConfig {
        enabled: false,
        level: "debug".to_string(),
    };

    let log_file = logger::init(&config, memory.clone()).unwrap();
    assert!(log_file.is_none());

    log::warn!("disk almost full");
    assert!(memory.get_logs().iter().any(|entry| entry.contains("disk almost full")));

    // Later calls keep the first installation
    let again = logger::init(&config, Logger::new()).unwrap();
    assert!(again.is_none());
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("ticklist/ticklist.log"));
    }
}
