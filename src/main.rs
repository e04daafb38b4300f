use clap::{Parser, Subcommand};
use devfolio::catalog;
use devfolio::query::{self, CatalogStats, CategoryFilter, ProjectFilter, SortMode};
use devfolio::submit::{self, FormGate, FormKind};
use devfolio::validate::{self, ContactForm, ValidationErrors};
use devfolio::{config, generate, logging, output, scan};
use std::path::{Path, PathBuf};
use std::time::Duration;

static CONTACT_GATE: FormGate = FormGate::new(FormKind::Contact);
static NEWSLETTER_GATE: FormGate = FormGate::new(FormKind::Newsletter);

fn version_string() -> &'static str {
    let describe = env!("DEVFOLIO_DESCRIBE");
    if describe.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        describe
    }
}

#[derive(Parser)]
#[command(name = "devfolio")]
#[command(about = "Static site generator for developer portfolios")]
#[command(long_about = "\
Static site generator for developer portfolios

Your content directory is the data source. A TOML project catalog becomes
filterable project listings, markdown files with front matter become blog
posts, and root-level markdown files become pages.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── projects.toml                # Project catalog ([[project]] tables)
  ├── assets/                      # Copied verbatim to the output root
  ├── 010-about.md                 # Page (numbered = shown in nav)
  ├── 050-github.md                # Link page (URL-only .md → external nav link)
  ├── uses.md                      # No number prefix = hidden from nav
  └── blog/
      └── 010-hello-world.md       # Post with +++ TOML front matter

Run 'devfolio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".devfolio-temp", global = true)]
    temp_dir: PathBuf,

    /// More diagnostics on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the final HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Filter, search, and sort the project catalog
    Projects(ProjectsArgs),
    /// Show catalog statistics and per-category counts
    Stats,
    /// Validate and submit a contact message (simulated)
    Contact(ContactArgs),
    /// Validate and submit a newsletter signup (simulated)
    Subscribe(SubscribeArgs),
}

#[derive(clap::Args)]
struct ProjectsArgs {
    /// all, fullstack, frontend, backend, or ml
    #[arg(long, default_value = "all")]
    category: CategoryFilter,
    /// Case-insensitive match on title, description, or tags
    #[arg(long, default_value = "")]
    search: String,
    /// recent, featured, or alphabetical (default from config)
    #[arg(long)]
    sort: Option<SortMode>,
    /// Only projects from this year
    #[arg(long)]
    year: Option<i32>,
    /// Print matching records as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct ContactArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
    /// Artificial latency in milliseconds
    #[arg(long, default_value_t = submit::CONTACT_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

#[derive(clap::Args)]
struct SubscribeArgs {
    #[arg(long)]
    email: String,
    /// Artificial latency in milliseconds
    #[arg(long, default_value_t = submit::NEWSLETTER_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest = generate::load_manifest(&cli.temp_dir.join("manifest.json"))?;
            let report = generate::generate_site(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest, &report);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest, &report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Projects(args) => {
            let site_config = config::load_config(&cli.source)?;
            let records = catalog::load_catalog(&cli.source)?;
            let filter = ProjectFilter {
                category: args.category,
                year: args.year,
                search: args.search,
            };
            if let Err(errors) = validate::project_filter(&filter, query::current_year()) {
                exit_invalid("Filter", &errors);
            }
            let sort = args.sort.unwrap_or(site_config.projects.default_sort);
            let results = filter.apply(&records, sort);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                output::print_query_output(&results);
            }
        }
        Command::Stats => {
            let records = catalog::load_catalog(&cli.source)?;
            output::print_stats_output(
                &CatalogStats::now(&records),
                &query::category_counts(&records),
            );
        }
        Command::Contact(args) => {
            let form = ContactForm {
                name: args.name,
                email: args.email,
                subject: args.subject,
                message: args.message,
            };
            if let Err(errors) = validate::contact(&form) {
                exit_invalid("Contact form", &errors);
            }
            let receipt = submit::simulate(&CONTACT_GATE, Duration::from_millis(args.delay_ms))?;
            println!("{}", output::format_receipt(&receipt));
        }
        Command::Subscribe(args) => {
            if let Err(errors) = validate::newsletter(&args.email) {
                exit_invalid("Signup", &errors);
            }
            let receipt =
                submit::simulate(&NEWSLETTER_GATE, Duration::from_millis(args.delay_ms))?;
            println!("{}", output::format_receipt(&receipt));
        }
    }

    Ok(())
}

/// Write the scan manifest into the temp dir and return its path.
fn write_manifest(manifest: &scan::Manifest, temp_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

fn exit_invalid(what: &str, errors: &ValidationErrors) -> ! {
    eprintln!("{what} is invalid:");
    for line in output::format_validation_errors(errors) {
        eprintln!("{line}");
    }
    std::process::exit(2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfolio::catalog::Category;

    fn projects_args(argv: &[&str]) -> ProjectsArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Command::Projects(args) => args,
            _ => panic!("expected projects command"),
        }
    }

    #[test]
    fn projects_category_accepts_all() {
        let args = projects_args(&["devfolio", "projects", "--category", "all"]);
        assert_eq!(args.category, CategoryFilter::All);
    }

    #[test]
    fn projects_category_defaults_to_all() {
        let args = projects_args(&["devfolio", "projects"]);
        assert_eq!(args.category, CategoryFilter::All);
    }

    #[test]
    fn projects_category_accepts_single_category() {
        let args = projects_args(&["devfolio", "projects", "--category", "ML"]);
        assert_eq!(args.category, CategoryFilter::Only(Category::Ml));
    }

    #[test]
    fn projects_category_rejects_unknown() {
        assert!(Cli::try_parse_from(["devfolio", "projects", "--category", "games"]).is_err());
    }
}
