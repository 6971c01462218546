use console::style;
use homefix_core::error::LeadValidationError;
use homefix_core::models::Discipline;
use std::fmt;
use std::path::Path;

/// Error with context and fix-it suggestions for the terminal
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn unknown_discipline(label: &str) -> CliError {
    let known: Vec<&str> = Discipline::ALL.iter().map(|d| d.as_str()).collect();

    CliError::new(format!("Unknown discipline '{}'", label))
        .with_context(format!("Known disciplines: {}", known.join(", ")))
        .with_suggestion("Use one of the names above or a trade name such as \"plomeria\"")
        .with_suggestion("Or leave out --discipline to let the classifier decide")
}

pub fn invalid_origin(lat: f64, lng: f64) -> CliError {
    CliError::new("Invalid search origin")
        .with_context(format!(
            "Latitude must be within [-90, 90] and longitude within [-180, 180].\n\nGot: ({}, {})",
            lat, lng
        ))
        .with_suggestion("Check that --lat and --lng are not swapped")
        .with_help("Run: homefix match --help")
}

pub fn candidates_unreadable(path: &Path, reason: impl fmt::Display) -> CliError {
    CliError::new("Cannot load candidate directory")
        .with_context(format!("Path: {}\nError: {}", path.display(), reason))
        .with_suggestion("Provide a JSON array of professionals with id, display_name and discipline")
        .with_suggestion("Coordinates go under \"location\": {\"lat\": .., \"lng\": ..}")
}

pub fn gazetteer_unreadable(path: &Path, reason: impl fmt::Display) -> CliError {
    CliError::new("Cannot load gazetteer")
        .with_context(format!("Path: {}\nError: {}", path.display(), reason))
        .with_suggestion("Provide a JSON array of {\"address\": .., \"point\": {\"lat\": .., \"lng\": ..}}")
}

/// Lead rejected by validation; suggestions depend on the failing field
pub fn lead_rejected(error: &LeadValidationError) -> CliError {
    let err = CliError::new(format!("Lead rejected: {}", error))
        .with_context(format!("Field: {}", error.field()));

    let err = match error {
        LeadValidationError::MissingContact => err.with_suggestion("Pass a phone number with --phone"),
        LeadValidationError::InvalidCoordinates { .. } => {
            err.with_suggestion("Latitude must be within [-90, 90] and longitude within [-180, 180]")
        }
        LeadValidationError::UnresolvableLocation => err
            .with_suggestion("Pass --lat and --lng")
            .with_suggestion("Or pass --address"),
        LeadValidationError::MissingDiscipline => {
            err.with_suggestion("Describe the problem with --text or choose --discipline")
        }
    };

    err.with_help("Run: homefix lead --help")
}
