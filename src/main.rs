use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pageforge::app::generate::seeded_skeleton;
use pageforge::domain::prompt::build_fill_prompt;
use pageforge::{AppError, Archetype, GenerateOptions, GenerationOutcome};

#[derive(Parser)]
#[command(name = "pageforge")]
#[command(version)]
#[command(
    about = "Generate and score structured landing-page documents",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a landing page from a product description
    #[clap(visible_alias = "g")]
    Generate {
        /// Free-text product description
        prompt: String,
        /// Archetype: saas, mobile-app, or creator
        #[arg(short, long, default_value = "saas")]
        archetype: String,
        /// Industry hint for palette selection (defaults to the prompt)
        #[arg(short, long)]
        industry: Option<String>,
        /// Write the finished page JSON to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Persist the page under this project id
        #[arg(short, long)]
        project: Option<String>,
        /// Repair sections with structural violations before returning
        #[arg(long)]
        repair: bool,
        /// Print the assembled oracle prompt without calling the oracle
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the empty skeleton for an archetype
    Skeleton {
        /// Archetype: saas, mobile-app, or creator
        archetype: String,
        /// Industry hint for palette selection
        #[arg(short, long)]
        industry: Option<String>,
    },
    /// Score an existing page document
    Score {
        /// Path to a page JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { prompt, archetype, industry, out, project, repair, dry_run } => {
            run_generate(prompt, archetype, industry, out, project, repair, dry_run)
        }
        Commands::Skeleton { archetype, industry } => run_skeleton(archetype, industry),
        Commands::Score { file } => run_score(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    prompt: String,
    archetype: String,
    industry: Option<String>,
    out: Option<PathBuf>,
    project: Option<String>,
    repair: bool,
    dry_run: bool,
) -> Result<(), AppError> {
    let options = GenerateOptions {
        prompt,
        archetype: archetype.parse::<Archetype>()?,
        industry_hint: industry,
        project_id: project,
        user: "local".to_string(),
        repair_sections: repair,
    };

    if dry_run {
        let signals = pageforge::extract_signals(&options.prompt);
        let skeleton = seeded_skeleton(&options, &signals);
        println!("{}", build_fill_prompt(&skeleton, &signals)?);
        return Ok(());
    }

    let outcome = pageforge::generate(&options)?;
    report_outcome(&outcome);

    let json = serde_json::to_string_pretty(&outcome.page).map_err(|err| AppError::Parse {
        what: "page".to_string(),
        details: err.to_string(),
    })?;
    match out {
        Some(path) => {
            std::fs::write(&path, json + "\n")?;
            println!("✅ Wrote page to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn run_skeleton(archetype: String, industry: Option<String>) -> Result<(), AppError> {
    let page = pageforge::build_skeleton(archetype.parse::<Archetype>()?, industry.as_deref());
    let json = serde_json::to_string_pretty(&page).map_err(|err| AppError::Parse {
        what: "page".to_string(),
        details: err.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

fn run_score(file: PathBuf) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&file)?;
    let page: pageforge::Page = serde_json::from_str(&raw).map_err(|err| AppError::Parse {
        what: file.display().to_string(),
        details: err.to_string(),
    })?;

    let violations = pageforge::validate_structure(&page);
    let quality = pageforge::score_quality(&page);

    println!("Score: {}/100 ({:?})", quality.score, quality.grade);
    if violations.is_empty() {
        println!("Structure: conformant");
    } else {
        println!("Structure: {} violation(s)", violations.len());
        for violation in &violations {
            println!("  - {}", violation);
        }
    }
    for issue in &quality.issues {
        println!("  [{:?}] {}: {}", issue.severity, issue.section, issue.message);
    }
    for suggestion in &quality.suggestions {
        println!("  tip: {}", suggestion);
    }
    Ok(())
}

fn report_outcome(outcome: &GenerationOutcome) {
    println!(
        "✅ Generated page for \"{}\" (score {}, {:?})",
        outcome.signals.business, outcome.quality.score, outcome.quality.grade
    );
    if !outcome.violations.is_empty() {
        println!("⚠️  {} structural violation(s):", outcome.violations.len());
        for violation in &outcome.violations {
            println!("  - {}", violation);
        }
    }
    if !outcome.repaired_sections.is_empty() {
        println!("Repaired sections: {}", outcome.repaired_sections.join(", "));
    }
    for error in &outcome.repair_errors {
        eprintln!("Repair failed for {}", error);
    }
}
