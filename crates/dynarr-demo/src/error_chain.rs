use std::sync::OnceLock;

use dynarr_log::{self as log, CustomFmt, LogFmt, LogFmtBuilder, Color, error};

static ERROR_CAUSE_FMT: OnceLock<CustomFmt> = OnceLock::new();

/// Installs the demo's level formats and the `caused by:` format used by [`expand_error!`].
pub fn install_log_formats() -> log::Result<()> {
    log::info_fmt(|fmt| {
        fmt
            .text("[dynarr] ", |spec| spec.with_color_spec(|c| { c.set_fg(Some(Color::Green)); }))
            .message(|spec| spec);
    })?;
    log::debug_fmt(|fmt| {
        fmt
            .text("[dynarr debug] ", |spec| spec.with_color_spec(|c| { c.set_fg(Some(Color::Blue)); }))
            .message(|spec| spec);
    })?;
    if ERROR_CAUSE_FMT.get().is_none() {
        let mut fmt = LogFmt::default();
        LogFmtBuilder::new(&mut fmt)
            .text("    caused by: ", |spec| spec.with_color_spec(|c| { c.set_fg(Some(Color::Red)).set_dimmed(true); }))
            .message(|spec| spec);
        let handle = log::custom_fmt(fmt)?;
        let _ = ERROR_CAUSE_FMT.set(handle);
    }
    Ok(())
}

/// Logs `err` at error level, then each of its sources with the cause format.
pub fn fn_expand_error(target: &str, err: &(dyn core::error::Error + 'static)) -> log::Result<bool> {
    let Some(&error_cause_fmt) = ERROR_CAUSE_FMT.get() else {
        return Ok(false)
    };
    if !error!("{}", err) {
        return Ok(false)
    }
    let mut source = err.source();
    while let Some(err) = source {
        log::log(
            target,
            log::LevelFmt::Other(error_cause_fmt, log::Level::Error),
            format_args!("{}", err),
        )?;
        source = err.source();
    }
    Ok(true)
}

#[macro_export]
macro_rules! expand_error {
    ($err:expr) => {
        $crate::fn_expand_error(module_path!(), $err)
            .unwrap_or(false)
    };
}
