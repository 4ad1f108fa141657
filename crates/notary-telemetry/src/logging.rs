//! Structured logging helpers.
//!
//! Every event carries a `subsystem` field so that log lines from the
//! ledger and the extractor can be filtered apart.

/// Emit an event tagged with its subsystem.
#[macro_export]
macro_rules! log_event {
    // Info level with subsystem
    (info, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Warn level with subsystem
    (warn, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Error level with subsystem
    (error, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    // Debug level with subsystem
    (debug, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a receipt-related event with standard fields.
#[macro_export]
macro_rules! log_receipt_event {
    ($level:ident, $subsystem:expr, $msg:expr, $box_addr:expr, $number:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            box_addr = %$box_addr,
            number = %$number,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an instrument-related event with standard fields.
#[macro_export]
macro_rules! log_instrument_event {
    ($level:ident, $subsystem:expr, $msg:expr, $number:expr, $instrument:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            number = %$number,
            instrument = $instrument,
            $($($field)*,)?
            $msg
        )
    };
}
