//! dataproduct CLI entrypoint
//! Parses command-line arguments and dispatches to the core library.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use dataproduct_core::{
    bootstrap_html, convert_definitions, validate_catalog, Catalog, Config, HtmlRenderer,
};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Output root used when neither a flag nor a config file names one
const DEFAULT_OUTPUT_DIR: &str = "DataProducts";

#[derive(Parser)]
#[command(name = "dataproduct")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Convert the data product definitions to OpenAPI documents
    Convert {
        /// Configuration file (YAML or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Root directory for the generated documents
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Directory of additional YAML definitions
        #[arg(long)]
        definitions_dir: Option<PathBuf>,
        /// Server URL advertised in the documents (Optional)
        #[arg(long)]
        server_url: Option<Url>,
        /// Convert without checking examples against constraints
        #[arg(long)]
        skip_validation: bool,
        /// Only convert definitions under this path prefix
        ///
        /// Example: --only DigitalProductPassport/Battery
        #[arg(long)]
        only: Option<String>,
    },
    /// Write an HTML page next to every generated document
    BootstrapHtml {
        /// Root directory holding the generated documents
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        root: PathBuf,
        /// Custom page template (tera syntax, `name` is the document stem)
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Check every example and default against its field's constraints
    Validate {
        /// Directory of additional YAML definitions
        #[arg(long)]
        definitions_dir: Option<PathBuf>,
    },
    /// List the definitions in the catalog
    List {
        /// Directory of additional YAML definitions
        #[arg(long)]
        definitions_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert {
            config,
            output_dir,
            definitions_dir,
            server_url,
            skip_validation,
            only,
        } => {
            let mut config = match &config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => Config::new(DEFAULT_OUTPUT_DIR),
            };
            // Flags override the config file
            if let Some(dir) = output_dir {
                config.output_dir = dir.to_string_lossy().into_owned();
            }
            if let Some(dir) = definitions_dir {
                config.definitions_dir = Some(dir.to_string_lossy().into_owned());
            }
            if server_url.is_some() {
                config.server_url = server_url;
            }
            if skip_validation {
                config.validate = false;
            }

            let mut catalog = load_catalog(config.definitions_dir.as_deref().map(Path::new)).await?;
            if let Some(prefix) = &only {
                catalog = catalog.filter_prefix(prefix);
                if catalog.is_empty() {
                    anyhow::bail!("No definitions match '{}'", prefix);
                }
            }

            tracing::info!(
                "Converting {} definitions into {}",
                catalog.len(),
                config.output_dir
            );
            let written = convert_definitions(&catalog, &config)
                .await
                .context("Failed to convert definitions")?;
            tracing::info!("Wrote {} OpenAPI documents", written.len());

            if let Some(template) = &config.template_path {
                let renderer = HtmlRenderer::new(Some(Path::new(template)))
                    .context("Failed to load page template")?;
                let pages = bootstrap_html(&config.output_dir, &renderer).await?;
                tracing::info!("Wrote {} HTML pages", pages.len());
            }
        }
        Commands::BootstrapHtml { root, template } => {
            if !root.is_dir() {
                anyhow::bail!("Output root {} does not exist", root.display());
            }
            let renderer =
                HtmlRenderer::new(template.as_deref()).context("Failed to load page template")?;
            let pages = bootstrap_html(&root, &renderer)
                .await
                .with_context(|| format!("Failed to write pages under {}", root.display()))?;
            tracing::info!("Wrote {} HTML pages", pages.len());
        }
        Commands::Validate { definitions_dir } => {
            let catalog = load_catalog(definitions_dir.as_deref()).await?;
            let report = validate_catalog(&catalog);
            let mut total = 0;
            for (path, violations) in &report {
                for violation in violations {
                    println!("{}: {}", path, violation);
                }
                total += violations.len();
            }
            if total > 0 {
                anyhow::bail!(
                    "{} violation(s) in {} definition(s)",
                    total,
                    report.len()
                );
            }
            tracing::info!("All {} definitions are valid", catalog.len());
        }
        Commands::List { definitions_dir } => {
            let catalog = load_catalog(definitions_dir.as_deref()).await?;
            for entry in &catalog {
                let def = &entry.definition;
                let mut flags = Vec::new();
                if def.requires_authorization {
                    flags.push("auth");
                }
                if def.requires_consent {
                    flags.push("consent");
                }
                if def.deprecated {
                    flags.push("deprecated");
                }
                let flags = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", flags.join(", "))
                };
                println!("{} ({}){}", entry.path, def.version, flags);
            }
        }
    }

    Ok(())
}

async fn load_catalog(definitions_dir: Option<&Path>) -> anyhow::Result<Catalog> {
    if let Some(dir) = definitions_dir {
        tracing::debug!("Loading extra definitions from {}", dir.display());
    }
    Catalog::with_dir(definitions_dir)
        .await
        .context("Failed to load definitions")
}
