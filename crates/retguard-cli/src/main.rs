use clap::{Parser, Subcommand};
use retguard_diagnostics::Severity;
use std::path::PathBuf;
use std::process::ExitCode;

/// Build a long version string: "0.1.0 (abc12345)"
fn long_version() -> &'static str {
    // Use Box::leak to get a 'static str — fine for a one-time allocation
    let s = format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    Box::leak(s.into_boxed_str())
}

#[derive(Parser)]
#[command(name = "retguard")]
#[command(about = "Return-value nil safety check for Go")]
#[command(version, long_version = long_version())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check front-end output for nil-return issues
    Check {
        /// Path to the front-end JSON file
        input: PathBuf,
        /// Output format: human, json
        #[arg(long, default_value = "human")]
        format: String,
        /// Severity threshold: info, warning, error, critical
        #[arg(long)]
        severity: Option<String>,
        /// Max diagnostics to report
        #[arg(long)]
        max_diagnostics: Option<usize>,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Explain a rule in detail
    Explain {
        /// Rule code (e.g., RET001)
        rule: String,
    },
    /// Write a default retguard.toml in the current directory
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Log to stderr so stdout stays clean for machine output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            input,
            format,
            severity,
            max_diagnostics,
            no_color,
        } => run_check(&input, &format, severity, max_diagnostics, no_color),
        Commands::Explain { rule } => run_explain(&rule),
        Commands::Init => run_init(),
    }
}

fn run_check(
    input: &PathBuf,
    format: &str,
    severity_override: Option<String>,
    max_diagnostics: Option<usize>,
    no_color: bool,
) -> ExitCode {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = retguard_core::load_config(&cwd);

    if let Some(sev) = severity_override {
        config.retguard.severity_threshold = sev;
    }
    if let Some(max) = max_diagnostics {
        config.retguard.max_diagnostics = max;
    }

    match retguard_core::analyze_file(input, &config) {
        Ok(output) => {
            match format {
                "json" => {
                    let json = serde_json::to_string_pretty(&output)
                        .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
                    println!("{json}");
                }
                _ => {
                    let text =
                        retguard_diagnostics::format_human(&output.diagnostics, !no_color);
                    print!("{text}");
                }
            }

            // Exit code: 0 clean or warnings only, 1 errors found
            if output.summary.has_issues_above(Severity::Error) {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run_explain(rule: &str) -> ExitCode {
    let explanation = match rule.to_uppercase().as_str() {
        "RET001" => concat!(
            "RET001: Nilable result without error result\n\n",
            "A function returns a pointer or a non-error interface but declares\n",
            "no error result. Its callers have no in-band way to learn that the\n",
            "value is missing, so a nil slips through until it is dereferenced.\n\n",
            "Example:\n",
            "  func findUser(id int) *User {\n",
            "      return nil // caller cannot tell failure from success\n",
            "  }\n\n",
            "Fix: Add an error result:\n",
            "  func findUser(id int) (*User, error)",
        ),
        "RET002" => concat!(
            "RET002: Nil value returned alongside nil error\n\n",
            "A return statement pairs a literal nil error with a literal nil in\n",
            "a pointer or interface result slot. The nil error tells the caller\n",
            "the call succeeded, so the caller will use the value and panic.\n\n",
            "Example:\n",
            "  func findUser(id int) (*User, error) {\n",
            "      return nil, nil // \"success\" with no value\n",
            "  }\n\n",
            "Fix: Return a real error with the nil value:\n",
            "  return nil, ErrNotFound",
        ),
        _ => {
            eprintln!("Unknown rule: {rule}. Available rules: RET001, RET002");
            return ExitCode::from(2);
        }
    };
    println!("{explanation}");
    ExitCode::SUCCESS
}

fn run_init() -> ExitCode {
    let config_path = "retguard.toml";
    if std::path::Path::new(config_path).exists() {
        eprintln!("retguard.toml already exists");
        return ExitCode::from(2);
    }

    match std::fs::write(config_path, retguard_core::DEFAULT_CONFIG_TOML) {
        Ok(()) => {
            println!("Created retguard.toml");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
