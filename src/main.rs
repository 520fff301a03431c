use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use gpa_calc::config::{ColorMode, StudentInfo};
use gpa_calc::grading::GradingScale;
use gpa_calc::output::FormatOptions;
use gpa_calc::scoring::CourseScorer;
use gpa_calc::transcript::TranscriptSummary;
use gpa_calc::worksheet::Worksheet;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the transcript for a course sheet (YAML)
    Transcript {
        /// Path to the course sheet
        sheet: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Enter courses interactively, then print the transcript
    Enter {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show the grade points and letter for a percentage
    Lookup {
        #[arg(allow_negative_numbers = true)]
        percentage: f64,
    },
    /// Print the percentage bands of the grading table
    Scale,
    /// Create a config file
    Init {
        /// Write the defaults without asking
        #[arg(long)]
        defaults: bool,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "gpa")]
#[command(about = "GPA calculator for letter grades and exam marks", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gpa-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Grading scale, overriding the config file
    #[arg(long, global = true, value_enum)]
    scale: Option<GradingScale>,

    /// Colored output, overriding the config file
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();
    let config_path = cli.config.as_ref().map(PathBuf::from);

    if let Commands::Init { defaults, force } = cli.command {
        let path = match config_path {
            Some(p) => p,
            None => match gpa_calc::config::get_config_path() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Config error: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            },
        };
        let mut prompter = gpa_calc::prompt::Prompter::stdio();
        if let Err(e) = gpa_calc::config::init::run_init_wizard(&mut prompter, &path, defaults, force) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match gpa_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = gpa_calc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let scale = cli.scale.unwrap_or_else(|| config.effective_scale());
    let scorer = CourseScorer::new(scale, config.effective_above_range());
    let opts = FormatOptions {
        decimals: config.effective_decimals(),
        use_colors: gpa_calc::output::should_use_colors(
            cli.color.unwrap_or_else(|| config.effective_color()),
        ),
    };

    if cli.verbose {
        eprintln!(
            "Using {} scale, above-range percentages: {:?}, {} decimals",
            scale.name(),
            config.effective_above_range(),
            opts.decimals
        );
    }

    match cli.command {
        Commands::Transcript { sheet, format } => {
            let sheet_file = match gpa_calc::config::load_sheet(&sheet) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Sheet error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let worksheet = match sheet_file.to_worksheet() {
                Ok(w) => w,
                Err(errors) => exit_with_errors("Sheet errors:", errors),
            };
            if cli.verbose {
                eprintln!("Loaded {} courses from {}", worksheet.len(), sheet.display());
            }
            report(&worksheet, &scorer, sheet_file.student.as_ref(), format, &opts, cli.verbose);
        }
        Commands::Enter { format } => {
            let mut prompter = gpa_calc::prompt::Prompter::stdio();
            let session = match gpa_calc::entry::run_entry_session(&mut prompter, scale) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Entry aborted: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            println!();
            report(
                &session.worksheet,
                &scorer,
                session.student.as_ref(),
                format,
                &opts,
                cli.verbose,
            );
        }
        Commands::Lookup { percentage } => {
            let table = scorer.table();
            match table.try_lookup(percentage) {
                Some(points) => println!(
                    "{}  {}",
                    gpa_calc::output::format_number(points, opts.decimals),
                    table.letter_for(points)
                ),
                None => {
                    let (points, letter) = table.lookup(percentage);
                    println!(
                        "{}  {}  (above 100%, rejected)",
                        gpa_calc::output::format_number(points, opts.decimals),
                        letter
                    );
                }
            }
        }
        Commands::Scale => {
            println!("{}", gpa_calc::output::format_scale(scorer.table(), opts.use_colors));
        }
        Commands::Init { .. } => unreachable!("handled before config is loaded"),
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_with_errors(heading: &str, errors: Vec<String>) -> ! {
    eprintln!("{}", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
    std::process::exit(EXIT_INPUT);
}

fn report(
    worksheet: &Worksheet,
    scorer: &CourseScorer,
    student: Option<&StudentInfo>,
    format: OutputFormat,
    opts: &FormatOptions,
    verbose: bool,
) {
    if let Err(errors) = gpa_calc::worksheet::validate_entries(worksheet, scorer.scale()) {
        exit_with_errors("Course errors:", errors);
    }

    let summary: TranscriptSummary = worksheet.transcript(scorer);
    if verbose {
        eprintln!(
            "Scored {} courses ({} left out)",
            summary.courses.len(),
            summary.excluded
        );
    }

    let rendered = match format {
        OutputFormat::Table => gpa_calc::output::format_transcript(&summary, student, opts),
        OutputFormat::Tsv => gpa_calc::output::format_tsv(&summary, opts.decimals),
        OutputFormat::Json => match gpa_calc::output::format_json(&summary, student) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        },
    };
    println!("{}", rendered);

    // Notes go to stderr after the transcript so piped output stays clean
    for note in gpa_calc::worksheet::entry_notes(worksheet, scorer) {
        eprintln!("note: {}", note);
    }
}
