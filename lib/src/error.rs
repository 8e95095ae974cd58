use std::{fmt, io};
use std::panic::Location;
use std::error::Error as StdError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error raised while building a site.
///
/// An error is a stack of details, each a displayable message with optional
/// `key: value` context, and an optional previous error that caused it.
#[derive(Debug)]
pub struct Error {
    detail: Vec<Box<dyn ErrorDetail>>,
    prev: Option<Box<Error>>,
    location: &'static Location<'static>,
}

pub trait ErrorDetail: fmt::Display + fmt::Debug + Send + Sync {
    fn context(&self) -> Vec<(Option<String>, String)> { vec![] }
}

/// Failures in the configuration file. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration, missing {0}")]
    MissingField(&'static str),
}

/// Failures parsing marker lines out of a blog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("No author found")]
    MissingAuthor,
    #[error("No title found")]
    MissingTitle,
}

impl Error {
    #[track_caller]
    pub fn from_std<E>(error: E) -> Self
        where E: StdError + Send + Sync + 'static
    {
        Error::from(Box::new(error) as Box<dyn StdError + Send + Sync>)
    }

    /// Places `self` as the cause of `other`, returning `other`.
    pub fn chain(self, mut other: Error) -> Self {
        fn push_back(error: Error, behind: &mut Error) {
            if let Some(prev) = behind.prev.as_mut() {
                push_back(error, prev);
            } else {
                behind.prev = Some(Box::new(error));
            }
        }

        push_back(self, &mut other);
        other
    }

    /// The messages of every detail in this error and its causes, outermost
    /// first.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![];
        let mut error = Some(self);
        while let Some(e) = error {
            messages.extend(e.detail.iter().map(|d| d.to_string()));
            error = e.prev.as_deref();
        }

        messages
    }
}

fn std_context(error: &(dyn StdError + Send + Sync)) -> Vec<(Option<String>, String)> {
    let mut context = vec![];
    let mut source = error.source();
    while let Some(e) = source {
        context.push((None, e.to_string()));
        source = e.source();
    }

    context
}

impl ErrorDetail for Box<dyn StdError + Send + Sync> {
    fn context(&self) -> Vec<(Option<String>, String)> {
        std_context(&**self)
    }
}

macro_rules! impl_error_detail_with_std_error {
    ($($T:ty),* $(,)?) => {$(
        impl $crate::error::ErrorDetail for $T {
            fn context(&self) -> Vec<(Option<String>, String)> {
                std_context(self)
            }
        }
    )*}
}

impl_error_detail_with_std_error!(
    io::Error,
    toml::de::Error,
    url::ParseError,
    ConfigError,
    MetadataError,
);

impl ErrorDetail for String { }
impl ErrorDetail for &'static str { }

impl<T: ErrorDetail + 'static> From<T> for Error {
    #[track_caller]
    fn from(detail: T) -> Self {
        Error {
            detail: vec![Box::new(detail)],
            prev: None,
            location: Location::caller(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn nested(f: &mut fmt::Formatter<'_>, error: &Error, depth: usize) -> fmt::Result {
            let indent = " ".repeat(depth * 4);
            let newline = format!("\n{indent}");
            for detail in &error.detail {
                writeln!(f, "{indent}{}", detail.to_string().replace('\n', &newline))?;
                if let Some(prev) = &error.prev {
                    nested(f, prev, depth + 1)?;
                }

                for (key, value) in detail.context() {
                    let value = value.replace('\n', &newline);
                    match key {
                        Some(key) => writeln!(f, "{indent}{key}: {value}")?,
                        None => writeln!(f, "{indent}{value}")?,
                    }
                }

                if std::env::var_os("RUST_BACKTRACE").is_some() {
                    writeln!(f, "{indent}[{}]", error.location)?;
                }
            }

            Ok(())
        }

        nested(f, self, 0)
    }
}

/// An error detail assembled by the `error!` macro.
#[derive(Debug)]
pub struct MakeshiftError {
    pub message: String,
    pub parameters: Vec<(Option<String>, String)>,
}

impl fmt::Display for MakeshiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl ErrorDetail for MakeshiftError {
    fn context(&self) -> Vec<(Option<String>, String)> {
        self.parameters.clone()
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! err {
    ($($token:tt)*) => (Err($crate::error!($($token)*)));
}

/// Builds an [`Error`] from a message and `key => value` or bare `value`
/// parameters.
#[doc(hidden)]
#[macro_export]
macro_rules! error {
    (@param $v:ident) => { };

    (@param $v:ident $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $v.push((Some($key.to_string()), $value.to_string()));
        $($crate::error!(@param $v $($rest)*);)?
    };

    (@param $v:ident $value:expr $(, $($rest:tt)*)?) => {
        $v.push((None, $value.to_string()));
        $($crate::error!(@param $v $($rest)*);)?
    };

    ($msg:expr $(, $($rest:tt)*)?) => (
        $crate::error::Error::from($crate::error::MakeshiftError {
            message: $msg.to_string(),
            parameters: {
                #[allow(unused_mut)]
                let mut v: Vec<(Option<String>, String)> = Vec::new();
                $($crate::error!(@param v $($rest)*);)?
                v
            },
        })
    );
}

pub trait Chainable<T> {
    fn chain(self, other: impl Into<Error>) -> Result<T>;

    fn chain_with<F, E>(self, f: F) -> Result<T>
        where F: FnOnce() -> E, E: Into<Error>;
}

impl<T, E: Into<Error>> Chainable<T> for Result<T, E> {
    #[track_caller]
    fn chain(self, other: impl Into<Error>) -> Result<T> {
        self.map_err(|e| e.into().chain(other.into()))
    }

    #[track_caller]
    fn chain_with<F, Err>(self, f: F) -> Result<T>
        where F: FnOnce() -> Err, Err: Into<Error>,
    {
        self.map_err(|e| e.into().chain(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_orders_outermost_first() {
        let inner: Result<()> = Err(io::Error::new(io::ErrorKind::Other, "disk on fire").into());
        let error = inner
            .chain(error!("failed to write file", "file path" => "/tmp/out.html"))
            .unwrap_err();

        assert_eq!(error.messages(), vec!["failed to write file", "disk on fire"]);

        let display = error.to_string();
        assert!(display.starts_with("failed to write file\n    disk on fire\n"));
        assert!(display.contains("file path: /tmp/out.html"));
    }

    #[test]
    fn named_errors_keep_their_message() {
        let error = Error::from(MetadataError::MissingTitle);
        assert_eq!(error.messages(), vec!["No title found"]);

        let error = Error::from(ConfigError::MissingField("source"));
        assert_eq!(error.messages(), vec!["Invalid configuration, missing source"]);
    }

    #[test]
    fn bare_parameters() {
        let error: Result<()> = err!("template is missing its placeholder", "blog.html");
        let display = error.unwrap_err().to_string();
        assert!(display.contains("\nblog.html\n"));
    }
}
