use console::style;

/// Kind of the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Receives user-facing progress and summary lines.
pub trait Reporter {
    /// Reports a single line of the given `kind`.
    fn report(&self, kind: ReportKind, message: &str);

    fn success(&self, message: &str) {
        self.report(ReportKind::Success, message);
    }

    fn info(&self, message: &str) {
        self.report(ReportKind::Info, message);
    }

    fn warning(&self, message: &str) {
        self.report(ReportKind::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(ReportKind::Error, message);
    }
}

/// [`Reporter`] that prints styled lines to the terminal.\
/// **Note** that warnings and errors go to `stderr`.
#[derive(Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, kind: ReportKind, message: &str) {
        match kind {
            ReportKind::Success => println!("{} {}", style("[OK]").green().bold(), message),
            ReportKind::Info => println!("{} {}", style("[INFO]").cyan(), message),
            ReportKind::Warning => eprintln!("{} {}", style("[WARNING]").yellow().bold(), message),
            ReportKind::Error => eprintln!("{} {}", style("[ERROR]").red().bold(), message),
        }
    }
}
