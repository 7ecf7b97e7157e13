//! 并发追加属性测试
//!
//! 覆盖核心保障：多线程并发写同一文件时，行不撕裂、不合并、不丢失

use logx::{FileLoggerProvider, FileLoggerProviderConfig, Logger, LoggerFactory};
use std::collections::HashSet;
use std::sync::Arc;

fn factory_for(path: &std::path::Path) -> LoggerFactory {
    let factory = LoggerFactory::new();
    let provider = FileLoggerProvider::new(
        factory.registry(),
        FileLoggerProviderConfig {
            file_path: path.to_string_lossy().to_string(),
            formatter: Default::default(),
        },
    )
    .unwrap();
    factory.add_provider(Arc::new(provider));
    factory
}

#[test]
fn test_hundred_threads_unique_messages() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let factory = Arc::new(factory_for(temp_file.path()));

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let factory = Arc::clone(&factory);
            std::thread::spawn(move || {
                let logger = factory.create_logger("App");
                logger.info(&format!("unique message {}", i));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let contents = std::fs::read_to_string(temp_file.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 100);

    // 每行都完整匹配格式，消息集合与提交集合一致（顺序不作约束）
    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with('['));
        let (_, rest) = line.split_once("] ").unwrap();
        let (level, message) = rest.split_once(": ").unwrap();
        assert_eq!(level, "Information");
        assert!(message.starts_with("unique message "));
        assert!(seen.insert(message.to_string()), "duplicated line: {}", line);
    }

    let expected: HashSet<String> = (0..100).map(|i| format!("unique message {}", i)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_concurrent_categories_share_one_file() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let factory = Arc::new(factory_for(temp_file.path()));

    let categories = ["App", "Db", "Http", "Worker"];
    let handles: Vec<_> = categories
        .iter()
        .map(|category| {
            let factory = Arc::clone(&factory);
            let category = category.to_string();
            std::thread::spawn(move || {
                let logger = factory.create_logger(&category);
                for i in 0..25 {
                    logger.info(&format!("{} message {}", category, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 所有类别写进同一个文件，且每个类别的 25 条都在
    assert_eq!(factory.registry().len(), 1);

    let contents = std::fs::read_to_string(temp_file.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), categories.len() * 25);
    for category in &categories {
        let count = lines
            .iter()
            .filter(|line| line.contains(&format!("{} message ", category)))
            .count();
        assert_eq!(count, 25);
    }
}

#[test]
fn test_append_round_trip_exactly_one_terminator() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let factory = factory_for(temp_file.path());

    let logger = factory.create_logger("App");
    logger.info("X");

    let contents = std::fs::read_to_string(temp_file.path()).unwrap();
    assert!(contents.ends_with("X\n"));
    assert!(!contents.ends_with("X\n\n"));
    assert_eq!(contents.matches('\n').count(), 1);
}

#[test]
fn test_scenario_warning_line_format() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let factory = factory_for(temp_file.path());

    let logger = factory.create_logger("App");
    logger.warn("disk at 90%");

    let contents = std::fs::read_to_string(temp_file.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    // ^\[.*\] Warning: disk at 90%$
    assert!(lines[0].starts_with('['));
    assert!(lines[0].contains("] "));
    assert!(lines[0].ends_with("] Warning: disk at 90%"));

    factory.dispose();
}
