/// Width of every non-blank divider banner.
pub const DIVIDER_WIDTH: usize = 40;
/// Default number of spaces per indentation step.
pub const DEFAULT_INDENT_WIDTH: usize = 2;
/// Maximum allowed indentation width.
pub const MAX_INDENT_WIDTH: usize = 16;
/// `tracing` target used by [`TracingSink`](crate::sinks::TracingSink).
pub const TRACING_TARGET: &str = "section_debugger";
/// Banner line emitted after the opening divider in verbose mode.
pub const SECTION_BEGIN_BANNER: &str = "Debugger Section beginning";
/// Banner line emitted before the closing divider in verbose mode.
pub const SECTION_COMPLETE_BANNER: &str = "Debugger Section complete";
