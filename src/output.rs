//! Output sink abstraction for the interpreter's textual output.

/// Destination for every line the interpreter emits.
///
/// The interpreter never writes to stdout directly; hosts inject a sink so
/// output can go to a console, a widget, or a test buffer.
pub trait OutputSink {
    /// Emits one line of output, without a trailing newline in `text`.
    ///
    /// `text` may contain interior newlines; the floor rendering arrives as
    /// a single multi-line block.
    fn line(&mut self, text: &str);
}

/// Sink that prints each line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Buffering sink: appends each line, newline-terminated.
///
/// Tests drive the interpreter with a `String` sink and assert on the
/// accumulated text.
impl OutputSink for String {
    fn line(&mut self, text: &str) {
        self.push_str(text);
        self.push('\n');
    }
}
