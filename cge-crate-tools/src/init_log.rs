use std::io::Write;

/// 根据日志级别选择颜色
fn level_style(buf: &env_logger::fmt::Formatter, level: log::Level) -> anstyle::Style {
    let color = match level {
        log::Level::Error => anstyle::AnsiColor::Red,
        log::Level::Warn => anstyle::AnsiColor::Yellow,
        log::Level::Info => anstyle::AnsiColor::Green,
        log::Level::Debug | log::Level::Trace => anstyle::AnsiColor::Cyan,
    };
    buf.default_level_style(level).fg_color(Some(anstyle::Color::Ansi(color)))
}

/// 初始化全局日志
///
/// 默认级别 Info，可以通过 `RUST_LOG` 环境变量覆盖。
pub fn init_log() {
    env_logger::Builder::new()
        .format(|buf, record| {
            let style = level_style(buf, record.level());
            let dim_style = anstyle::Style::new().fg_color(Some(anstyle::Color::Rgb(anstyle::RgbColor(110, 110, 110))));

            let time = chrono::Local::now().format("%H:%M:%S");
            let file = record.file().unwrap_or("").rsplit(['/', '\\']).next().unwrap_or("");
            let line = record.line().unwrap_or(0);

            writeln!(
                buf,
                "{style}[{time}] {}{style:#} {dim_style}[{file}:{line}]{dim_style:#} {}",
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
