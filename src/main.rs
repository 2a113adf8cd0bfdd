use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tidemark::{config, generate, output, scan};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "tidemark")]
#[command(about = "Static site generator for brochure websites")]
#[command(long_about = "\
Static site generator for brochure websites

Content is data: a tree of TOML files describes the site, its theme and its
pages, and pages are ordered compositions of typed sections. Adding a section
to a page is a config edit, not a template change.

Content structure:

  content/
  ├── site.toml                    # Identity, contact, SEO (optional)
  ├── theme.toml                   # Brand, colors, typography, motion (optional)
  ├── navigation.toml              # Main and footer menus (optional)
  ├── pages/
  │   ├── home.toml                # Page composition ('home' = site root)
  │   └── contact.toml
  ├── sections/
  │   ├── hero.toml                # Named section payloads, referenced by pages
  │   └── services.toml
  ├── services/
  │   └── expeditions.toml         # One detail record per service page
  └── assets/                      # Copied to the output root verbatim

Run 'tidemark gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (the manifest)
    #[arg(long, default_value = ".tidemark-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Produce the final HTML site from an existing manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content without writing any output
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            scan::write_manifest(&manifest, &manifest_path)?;
            output::print_scan_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let summary = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&summary);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            scan::write_manifest(&manifest, &manifest_path)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let summary = generate::generate_from_manifest(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            // Resolving the theme catches bad hex colors without writing output.
            tidemark::theme::Theme::resolve(&manifest.theme)?;
            output::print_scan_output(&manifest);
            if manifest.warnings.is_empty() {
                println!("==> Content is valid");
            } else {
                println!(
                    "==> Content is valid with {} warning(s)",
                    manifest.warnings.len()
                );
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_site_toml());
        }
    }

    Ok(())
}
