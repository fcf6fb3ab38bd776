use std::{
    io::Write,
    sync::OnceLock,
};

use core::str::FromStr;

use parking_lot::Mutex;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use dynarr_mem::DynamicArray;

use crate::{
    Result, LogError,
    fmt::{LogFmt, LogFmtBuilder, SegmentSpec},
};

/// Handle of a format registered with [`custom_fmt`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CustomFmt(usize);

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

pub enum LevelFmt {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Other(CustomFmt, Level),
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Per-target maximum levels, in `RUST_LOG` syntax.
///
/// `warn,dynarr_demo=trace` logs warnings everywhere and everything under `dynarr_demo`.
/// Entries that do not parse are skipped.
#[derive(Clone, Debug)]
pub struct Filters {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filters {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filters {

    pub fn parse(spec: &str) -> Self {
        let mut filters = Self::default();
        for arg in spec.split(',') {
            let arg = arg.trim();
            if arg.is_empty() {
                continue
            }
            let (module, level) = match arg.split_once('=') {
                Some((module, level)) => (Some(module.trim()), level.trim()),
                None => (None, arg),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            if let Some(module) = module {
                let entry = filters.target_levels
                    .entry(CompactString::new(module))
                    .or_insert(level);
                *entry = (*entry).min(level);
            } else {
                filters.base_level = level;
            }
        }
        filters
    }

    /// Reads `RUST_LOG`; an unset variable gives the default filters.
    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(spec) => Self::parse(&spec),
            Err(_) => Self::default(),
        }
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// Level of the closest configured `::` ancestor of `target`, or the base level.
    pub fn level_for(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }
}

pub struct Logger<W: WriteColor> {
    out: W,
    info_fmt: LogFmt,
    warn_fmt: LogFmt,
    error_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    custom_fmt: DynamicArray<LogFmt>,
    filters: Filters,
}

impl<W: WriteColor> Logger<W> {

    pub fn new(out: W, filters: Filters) -> Self {
        Self {
            out,
            info_fmt: LogFmt::labeled("info", Color::Green),
            warn_fmt: LogFmt::labeled("warn", Color::Yellow),
            error_fmt: LogFmt::labeled("error", Color::Red),
            debug_fmt: LogFmt::labeled("debug", Color::Blue),
            trace_fmt: LogFmt::labeled("trace", Color::Cyan),
            custom_fmt: DynamicArray::new(),
            filters,
        }
    }

    #[inline(always)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Format used for `level`. [`Level::Always`] has no built-in format and maps to the
    /// error format.
    pub fn level_fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Always | Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    pub fn add_custom_fmt(&mut self, fmt: LogFmt) -> CustomFmt {
        CustomFmt(self.custom_fmt.insert(fmt))
    }

    /// Writes one line if `target` is enabled for the level; returns whether it did.
    pub fn log(&mut self, target: &str, level: LevelFmt, msg: core::fmt::Arguments) -> Result<bool> {
        let target_level = self.filters.level_for(target);
        let (fmt, level) = match level {
            LevelFmt::Error => (&self.error_fmt, Level::Error),
            LevelFmt::Warn => (&self.warn_fmt, Level::Warn),
            LevelFmt::Info => (&self.info_fmt, Level::Info),
            LevelFmt::Debug => (&self.debug_fmt, Level::Debug),
            LevelFmt::Trace => (&self.trace_fmt, Level::Trace),
            LevelFmt::Other(handle, level) => {
                let fmt = self.custom_fmt
                    .get(handle.0)
                    .ok_or(LogError::UnknownFormat(handle))?;
                (fmt, level)
            },
        };
        if target_level < level {
            return Ok(false)
        }
        for segment in fmt {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        write!(self.out, "{}", msg)?;
                        self.out.reset()?;
                    } else {
                        write!(self.out, "{}", msg)?;
                    }
                },
                SegmentSpec::Text(text, log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        self.out.write_all(text.as_bytes())?;
                        self.out.reset()?;
                    } else {
                        self.out.write_all(text.as_bytes())?;
                    }
                },
            }
        }
        self.out.write_all(b"\n")?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger<StandardStream>>> = OnceLock::new();

/// Creates the stderr logger from `RUST_LOG`. Later calls do nothing.
pub fn init() {
    LOGGER.get_or_init(|| {
        Mutex::new(Logger::new(StandardStream::stderr(ColorChoice::Auto), Filters::from_env()))
    });
}

#[inline(always)]
fn with_logger<R>(f: impl FnOnce(&mut Logger<StandardStream>) -> R) -> Result<R> {
    let logger = LOGGER.get().ok_or(LogError::NotInitialized)?;
    Ok(f(&mut logger.lock()))
}

#[inline(always)]
pub fn level_fmt(level: Level, f: impl FnOnce(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| {
        let mut builder = LogFmtBuilder::new(logger.level_fmt_mut(level));
        f(&mut builder);
    })
}

#[inline(always)]
pub fn error_fmt(f: impl FnOnce(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Error, f)
}

#[inline(always)]
pub fn warn_fmt(f: impl FnOnce(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Warn, f)
}

#[inline(always)]
pub fn info_fmt(f: impl FnOnce(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Info, f)
}

#[inline(always)]
pub fn debug_fmt(f: impl FnOnce(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Debug, f)
}

#[inline(always)]
pub fn trace_fmt(f: impl FnOnce(&mut LogFmtBuilder)) -> Result<()> {
    level_fmt(Level::Trace, f)
}

#[inline(always)]
pub fn custom_fmt(fmt: LogFmt) -> Result<CustomFmt> {
    with_logger(|logger| logger.add_custom_fmt(fmt))
}

#[inline(always)]
pub fn log(target: &str, level: LevelFmt, args: core::fmt::Arguments) -> Result<bool> {
    with_logger(|logger| logger.log(target, level, args))?
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
