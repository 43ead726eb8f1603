/// Emit a `tracing` event when the `tracing` feature is enabled, and nothing
/// otherwise.
///
/// Takes the name of a `tracing` level macro followed by its usual arguments:
/// `trace_event!(debug, index, "future failed")`.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    };
}
pub(crate) use trace_event;
