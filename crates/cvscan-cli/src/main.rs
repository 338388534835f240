mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "cvscan",
    version,
    about = "Resume screening tool: extracts contact details, skills and experience from PDF or DOCX resumes"
)]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a resume and print them
    Scan {
        /// Path to a PDF or DOCX resume
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// PDF text extraction backend
        #[arg(long, value_enum, default_value_t = PdfBackend::PdfExtract)]
        pdf_backend: PdfBackend,

        /// Custom skill vocabulary (JSON) replacing the default
        #[arg(long, value_name = "FILE")]
        vocabulary: Option<PathBuf>,

        /// Number of characters of extracted text to preview
        #[arg(long, default_value_t = 500)]
        preview: usize,
    },
    /// Print the plain text extracted from a resume (without analysis)
    Text {
        /// Path to a PDF or DOCX resume
        input_file: PathBuf,

        /// PDF text extraction backend
        #[arg(long, value_enum, default_value_t = PdfBackend::PdfExtract)]
        pdf_backend: PdfBackend,

        /// Write the text to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect and validate skill vocabularies
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// List the default skill vocabulary
    List,
    /// Validate a custom vocabulary file
    Validate {
        /// Path to JSON vocabulary file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PdfBackend {
    /// In-process extraction (no external tools)
    PdfExtract,
    /// poppler's pdftotext binary
    Pdftotext,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "cvscan=debug,cvscan_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan {
            input_file,
            output,
            pdf_backend,
            vocabulary,
            preview,
        } => commands::scan::run(input_file, &output, pdf_backend, vocabulary, preview),
        Commands::Text {
            input_file,
            pdf_backend,
            out,
        } => commands::text::run(input_file, pdf_backend, out),
        Commands::Vocab { action } => match action {
            VocabAction::List => commands::vocab::list(),
            VocabAction::Validate { file } => commands::vocab::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
