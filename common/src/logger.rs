use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("[{}]{}", timestamp, self.format_body(file, line, message));
    }

    fn format_body(&self, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}:{}] {}", prefix, file_name, line, message),
            None => format!("[{}:{}] {}", file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_strips_directories() {
        let logger = Logger::new(None);
        assert_eq!(
            logger.format_body("server/src/web_server.rs", 12, "listening"),
            "[web_server.rs:12] listening"
        );
        assert_eq!(
            logger.format_body("C:\\work\\main.rs", 3, "hi"),
            "[main.rs:3] hi"
        );
    }

    #[test]
    fn test_body_with_prefix() {
        let logger = Logger::new(Some("Server".to_string()));
        assert_eq!(
            logger.format_body("main.rs", 1, "up"),
            "[Server][main.rs:1] up"
        );
    }
}
