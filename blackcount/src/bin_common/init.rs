use std::{path::Path, time::SystemTime};

use color_eyre::{
    config::{HookBuilder, Theme},
    eyre::{self, Context},
};
use log::LevelFilter;

/// Installs the eyre hook and a panic hook that writes the panic report to the log
/// instead of directly to stderr.
pub fn init_eyre() -> eyre::Result<()> {
    let eyre_color = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        Theme::dark()
    } else {
        Theme::new()
    };

    let (_, eyre_hook) = HookBuilder::default().theme(eyre_color).into_hooks();
    eyre_hook
        .install()
        .wrap_err("failed to install eyre hook")?;

    let (log_panic_hook, _) = HookBuilder::default().theme(Theme::new()).into_hooks();

    std::panic::set_hook(Box::new(move |info| {
        log::error!(target: "panic", "{}", log_panic_hook.panic_report(info));
    }));

    Ok(())
}

/// Logs to stderr, stdout is reserved for the report. A log file that can't be opened is
/// logged and skipped, the stderr logger is installed regardless.
pub fn init_logger(level: LevelFilter, logfile: Option<&Path>) -> eyre::Result<()> {
    let mut dispatch = fern::Dispatch::new().level(level).chain(
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {}] {}",
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(std::io::stderr()),
    );

    let mut logfile_failed = None;
    if let Some(logfile) = logfile {
        match fern::log_file(logfile) {
            Ok(f) => {
                dispatch = dispatch.chain(
                    fern::Dispatch::new()
                        .format(|out, message, record| {
                            out.finish(format_args!(
                                "{} [{} {}] {}",
                                humantime::format_rfc3339_seconds(SystemTime::now()),
                                record.level(),
                                record.target(),
                                message
                            ))
                        })
                        .chain(f),
                )
            }
            Err(e) => logfile_failed = Some(e),
        }
    }

    dispatch.apply().wrap_err("failed to set the logger")?;

    if let Some(logfile) = logfile {
        if let Some(e) = logfile_failed {
            log::error!(
                "failed to open the log file at '{}' because: {e}",
                logfile.display()
            );
        } else {
            log::debug!("logging to: {}", logfile.display());
        }
    }

    Ok(())
}
