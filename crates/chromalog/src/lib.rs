pub mod bridge;
pub mod color;
pub mod config;
pub mod error;
pub mod location;
pub mod logger;
pub mod severity;
pub mod sink;

pub use bridge::LogBridge;
pub use color::{
    resolve,
    Palette,
    Style,
};
pub use config::{
    ConfigLoader,
    LogColorConfig,
    LogConfig,
    LogSettings,
};
pub use error::{
    LoggerError,
    Result,
};
pub use location::SourceLocation;
pub use logger::{
    Logger,
    LoggerBuilder,
    WriteErrorObserver,
};
pub use severity::Severity;

#[cfg(test)]
mod tests;
