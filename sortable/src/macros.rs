// Every log line goes through `slog!` under the `sortable` target; without the `tracing`
// feature the arguments are discarded unevaluated.

#[cfg(feature = "tracing")]
macro_rules! slog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "sortable", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! slog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! strace {
    ($($tt:tt)*) => { slog!(trace, $($tt)*) };
}

macro_rules! sdebug {
    ($($tt:tt)*) => { slog!(debug, $($tt)*) };
}

macro_rules! swarn {
    ($($tt:tt)*) => { slog!(warn, $($tt)*) };
}
