use clap::{Parser, Subcommand, ValueEnum};
use site_style::{StyleScope, config, output, resolve, shell};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// How `resolve` prints the resolved scope.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// A `:root` rule
    Css,
    /// A `style` attribute value
    Inline,
    /// Variables and flags as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "site-style")]
#[command(about = "Resolve site settings into themed CSS variables")]
#[command(long_about = "\
Resolve site settings into themed CSS variables

Reads the `site_settings` record of a data document and computes the style
variables of the page shell: theme colors, header and hero dimensions,
shadow presets, header transparency and the hero overlay gradient.

Data document:

  site.json                          site.toml
  {                                  [site_settings]
    \"products\": [ ... ],             theme = \"dark\"
    \"site_settings\": [{              dark_primary_color = \"#818cf8\"
      \"theme\": \"dark\",               header_height = 80
      \"dark_primary_color\": \"#818cf8\"
    }]
  }

Keys are applied in document order. light_* and dark_* keys both apply;
when both set the same variable, the later key wins.

Run 'site-style gen-settings' to print a documented settings file.
Set RUST_LOG=debug to trace each applied key.")]
#[command(version)]
struct Cli {
    /// Data document (.json or .toml)
    #[arg(long, default_value = "site.json", global = true)]
    data: PathBuf,

    /// Override a setting, e.g. --set theme=dark (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    overrides: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved style variables
    Resolve {
        #[arg(long, value_enum, default_value_t = Format::Css)]
        format: Format,
    },
    /// Write the HTML document shell with the resolved variables applied
    Render {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Document title
        #[arg(long, default_value = "Site")]
        title: String,
    },
    /// Show how each setting resolves, without printing the result
    Check,
    /// Print a sample settings file with every key documented
    GenSettings,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Command::Resolve { format } => {
            let loaded = config::load_settings(&cli.data, &cli.overrides)?;
            let mut scope = StyleScope::new();
            let report = resolve::apply(&mut scope, &loaded.record);
            output::print_report(&report);
            println!();
            match format {
                Format::Css => println!("{}", scope.to_css()),
                Format::Inline => println!("{}", scope.to_inline_style()),
                Format::Json => println!("{}", serde_json::to_string_pretty(&scope)?),
            }
        }
        Command::Render { out, title } => {
            let loaded = config::load_settings(&cli.data, &cli.overrides)?;
            let mut scope = StyleScope::new();
            resolve::apply(&mut scope, &loaded.record);
            let html = shell::render_document(&scope, &title, loaded.primary_table.as_deref());
            match out {
                Some(path) => {
                    std::fs::write(&path, html.into_string())?;
                    println!("Generated {}", path.display());
                }
                None => println!("{}", html.into_string()),
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.data.display());
            let loaded = config::load_settings(&cli.data, &cli.overrides)?;
            let mut scope = StyleScope::new();
            let report = resolve::apply(&mut scope, &loaded.record);
            output::print_report(&report);
        }
        Command::GenSettings => {
            print!("{}", config::stock_settings_toml());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for CSS and HTML output.
///
/// Filter comes from `RUST_LOG`, defaulting to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
