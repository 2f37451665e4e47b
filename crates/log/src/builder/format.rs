//! Format layer creation macros

/// Builds a boxed fmt layer for one of the text formats.
///
/// `$style` is the fmt builder method (`pretty` or `compact`).
macro_rules! create_fmt_layer {
    ($style:ident, $display:expr) => {{
        let display = $display;
        let layer = tracing_subscriber::fmt::layer()
            .$style()
            .with_writer(std::io::stderr)
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source);
        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Builds a boxed JSON fmt layer.
macro_rules! create_json_layer {
    ($display:expr) => {{
        let display = $display;
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_current_span(true);
        if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}
