//! `conslog` - colorized console handler for structured logging.
//!
//! Renders records as single human-readable lines:
//!
//! ```text
//! 2024-05-01 12:00:00 INF src/main.rs:14 > listening port=8080 tls.enabled=true
//! ```
//!
//! - Typed attribute values with per-kind formatting (compact durations,
//!   shortest floats, error values in their own style)
//! - Nested attribute groups flattened into dotted keys
//! - Cheap, thread-safe derived handlers via `with_attrs` / `with_group`
//! - Pooled line buffers, one sink write per record
//! - Themes built from ANSI SGR attributes, configurable from TOML
//!
//! # Example
//!
//! ```
//! use conslog::{Attr, Level, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .sink(sink.clone())
//!     .level(Level::DEBUG)
//!     .no_color(true)
//!     .build();
//!
//! let db = logger.with_group("db").with(&[Attr::string("host", "localhost")]);
//! db.info("connected", &[Attr::int("pool", 8)]);
//!
//! assert!(sink.contents().ends_with("INF connected db.host=localhost db.pool=8\n"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `conslog-demo` binary
//! - `log`: [`bridge::LogBridge`], forwarding the `log` facade into a [`Logger`]

pub mod buffer;
pub mod config;
pub mod encoder;
mod error;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;
pub mod theme;
pub mod value;

#[cfg(feature = "log")]
pub mod bridge;

#[cfg(feature = "cli")]
pub mod cli;

pub use buffer::{Buffer, BufferPool, TimeFormat};
pub use config::Config;
pub use error::Error;
pub use handler::{ConsoleHandler, DiscardHandler, Handler, HandlerOptions};
pub use level::{Level, LevelVar, Leveler, ParseLevelError};
pub use logger::{Logger, LoggerBuilder};
pub use record::{Record, Source};
pub use sink::{MemorySink, Sink, SinkFn};
pub use theme::{Color, Sgr, Style, Theme, ThemeDef};
pub use value::{AnyValue, Attr, LogValuer, Value};
