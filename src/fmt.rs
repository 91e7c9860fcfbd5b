//! Multi-line rendering of LIDs and readings for logs and terminals.

/// Where [`Logger`] output goes.
#[derive(Debug, Clone)]
pub enum LogOutput {
    Log(log::Level),
    LogTarget(log::Level, String),
    StdOut,
    StdErr,
    #[cfg(feature = "log-to-file")]
    File(std::sync::Arc<parking_lot::Mutex<std::fs::File>>),
}

impl From<log::Level> for LogOutput {
    fn from(value: log::Level) -> Self {
        Self::Log(value)
    }
}

impl LogOutput {
    #[cfg(feature = "log-to-file")]
    pub fn file(file: std::fs::File) -> Self {
        Self::File(std::sync::Arc::new(parking_lot::Mutex::new(file)))
    }

    fn print(&self, msg: &str) {
        match self {
            LogOutput::Log(level) => log::log!(*level, "{}", msg),
            LogOutput::LogTarget(level, target) => {
                log::log!(target: target, *level, "{}", msg)
            }
            LogOutput::StdOut => println!("{}", msg),
            LogOutput::StdErr => eprintln!("{}", msg),
            #[cfg(feature = "log-to-file")]
            LogOutput::File(file) => {
                use std::io::Write;

                let mut file = file.lock();
                file.write_all(msg.as_bytes()).ok();
                file.write_all(b"\n").ok();
            }
        }
    }
}

/// One line of a [`Loggable`] rendering: a title at an indentation level,
/// optionally followed by a value.
#[derive(Debug)]
pub struct LogItem {
    level: usize,
    title: String,
    value: Option<String>,
}

impl LogItem {
    pub fn new<T: Into<String>, V: Into<String>>(level: usize, title: T, value: Option<V>) -> Self {
        Self {
            level,
            title: title.into(),
            value: value.map(Into::into),
        }
    }
}

impl<T: ToString, V: ToString> From<(usize, T, V)> for LogItem {
    fn from((level, title, value): (usize, T, V)) -> Self {
        Self::new(level, title.to_string(), Some(value.to_string()))
    }
}

impl<T: ToString> From<(usize, T)> for LogItem {
    fn from((level, value): (usize, T)) -> Self {
        Self::new::<_, String>(level, value.to_string(), None)
    }
}

pub struct Logger;

impl Logger {
    pub fn log<T>(output: &LogOutput, loggable: &T)
    where
        T: Loggable + ?Sized,
    {
        Self::log_impl(output, &loggable.as_log())
    }

    pub fn log_all<'a, T, I>(output: &LogOutput, loggables: I)
    where
        T: Loggable + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        loggables
            .into_iter()
            .for_each(|loggable| Self::log(output, loggable));
    }

    fn log_impl(output: &LogOutput, items: &[LogItem]) {
        output.print(&Self::render(items).join("\n"))
    }

    /// Render `items` as lines. Values of items on the same level are
    /// aligned with each other.
    fn render(items: &[LogItem]) -> Vec<String> {
        let mut lines = Vec::with_capacity(items.len());

        if let Some(v) = items.first() {
            lines.push(v.title.clone());
        }

        let right_align = |level: usize| {
            items
                .iter()
                .skip(1)
                .filter(|i| i.level == level && i.value.is_some())
                .map(|i| i.title.len())
                .max()
                .unwrap_or(0)
        };

        for item in items.iter().skip(1) {
            let LogItem {
                level,
                title,
                value,
            } = item;

            let front_padding = " ".repeat(level * 2);

            let message = match value {
                Some(value) => {
                    let value_padding = " ".repeat(right_align(*level) - title.len());
                    format!("{front_padding}{title}: {value_padding}{value}")
                }
                None => format!("{front_padding}{title}"),
            };

            lines.push(message);
        }

        lines
    }
}

pub trait Loggable {
    fn as_log(&self) -> Vec<LogItem>;
}

#[macro_export]
macro_rules! log_vec {
    [$($msg:tt)*] => {
        $crate::to_log!(vec: $($msg)*)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! to_log {
    ([$($array:tt)*],) => {
        vec![$($array)*]
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr)) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr)) => {
        $crate::to_log!([$($array)* ($level, $title).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),], $($msg)*)
    };

    ([$($array:tt)*], ($level:literal, $title:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title).into(),], $($msg)*)
    };

    (vec: $($msg:tt)*) => {
        $crate::to_log!([], $($msg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_per_level() {
        let items: Vec<LogItem> = log_vec![
            (0, "Title"),
            (1, "A", 1),
            (1, "Longer", 2),
            (2, "Nested"),
            (2, "X", 3),
        ];

        assert_eq!(
            Logger::render(&items),
            vec![
                "Title",
                "  A:      1",
                "  Longer: 2",
                "    Nested",
                "    X: 3",
            ]
        );
    }
}
