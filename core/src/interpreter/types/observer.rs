//! Output observers
//!
//! The VM records PRINT values in its output log. Anything that wants to see
//! those values as they happen (a console echo, a collector in a test)
//! implements [`OutputObserver`] and is handed to `VM::execute_observed`.

/// Receives every value appended to the output log, in order
pub trait OutputObserver {
    fn on_output(&mut self, value: i64);
}

impl<F> OutputObserver for F
where
    F: FnMut(i64),
{
    fn on_output(&mut self, value: i64) {
        self(value)
    }
}
