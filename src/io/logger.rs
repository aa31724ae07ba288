use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    fn symbol(self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Success => "+".green(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }
}

/// Prints a status-prefixed line. Errors go to stderr, everything else
/// to stdout.
pub fn status(status: Status, message: &str) {
    let line = format!("[{}] {message}", status.symbol());

    if status == Status::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::io::logger::status($crate::io::logger::Status::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        $crate::io::logger::status($crate::io::logger::Status::Success, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::io::logger::status($crate::io::logger::Status::Warning, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::io::logger::status($crate::io::logger::Status::Error, &format!($($arg)*))
    };
}
