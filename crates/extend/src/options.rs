use crate::{Logger, StdLogger};

/// Configuration for extend resolution
///
/// The simplest usage is `less_extend::Options::default()`; however, a builder
/// pattern is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) logger: &'a dyn Logger,
    pub(crate) quiet: bool,
    pub(crate) chain_limit: usize,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            logger: &StdLogger,
            quiet: false,
            chain_limit: 100,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to define how log events should be handled
    ///
    /// Be default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// This flag silences the warning emitted for an `:extend()` that never
    /// matched a selector.
    ///
    /// Setting this option to `true` will stop all logs from reaching the [`crate::Logger`].
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// How many rounds of transitive extension (`.a` extends `.b`, which
    /// extends `.c`, ...) may produce new extends before resolution gives up
    /// and reports a circular reference.
    ///
    /// By default, this value is `100`.
    #[must_use]
    #[inline]
    pub const fn chain_limit(mut self, chain_limit: usize) -> Self {
        self.chain_limit = chain_limit;
        self
    }
}
