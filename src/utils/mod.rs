use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

/// Logs panics as errors and exits with status 1.
pub fn set_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let message = if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            format!("{panic_info:?}")
        };

        log::error!("{message}");

        #[cfg(debug_assertions)]
        log::debug!("{panic_info}");

        std::process::exit(1);
    }));
}

/// Info and debug go to stdout, warnings and errors to stderr.
pub fn logs(verbose: bool) {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .debug(Color::BrightWhite);

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(move |out, message, record| match record.level() {
            Level::Debug | Level::Trace => out.finish(format_args!(
                "{} [{}]: {}",
                colors.color(record.level()).to_string().to_lowercase(),
                record.target(),
                message
            )),

            level => out.finish(format_args!(
                "{}: {}",
                colors.color(level).to_string().to_lowercase(),
                message
            )),
        })
        .level(level)
        // the http stack is too chatty even in verbose mode
        .level_for("hyper", LevelFilter::Info)
        .level_for("reqwest", LevelFilter::Info)
        .level_for("rustls", LevelFilter::Info)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| !matches!(metadata.level(), Level::Error | Level::Warn))
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .apply()
        .ok();
}
