use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mccode_flavor::{render, resolve, Flavor, FlavorProfile, Severity};

#[derive(Parser, Debug)]
#[command(name = "mccode-config")]
#[command(about = "McStas / McXtrace identity constants with build-time overrides")]
struct Cli {
    /// Log overrides and lookups (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// neutron (McStas) or xray (McXtrace)
    #[arg(long, short)]
    flavor: Flavor,

    /// Override a symbol, e.g. -D MCCODE_VERSION=4.1
    #[arg(short = 'D', long = "define", value_name = "SYMBOL[=VALUE]")]
    defines: Vec<String>,

    /// JSON file of overrides, applied before any -D
    #[arg(long, value_name = "FILE")]
    overrides: Option<PathBuf>,
}

impl ProfileArgs {
    fn resolve(&self) -> Result<FlavorProfile> {
        let overrides =
            mccode_cli::overrides::collect(self.overrides.as_deref(), &self.defines)?;
        Ok(resolve(self.flavor, &overrides))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved identity
    Show {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// Emit the flavor's C header
    Header {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print compiler -D flags for the resolved identity
    Cflags {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the support-library root from the flavor's environment variable
    Libdir {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Report inconsistent or malformed identity values
    Check {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Write a SHA-256 registry file next to each directory
    Registry {
        /// Directories to register
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Show { profile, format } => cmd_show(&profile, format),
        Commands::Header { profile, output } => cmd_header(&profile, output),
        Commands::Cflags { profile } => cmd_cflags(&profile),
        Commands::Libdir { profile } => cmd_libdir(&profile),
        Commands::Check { profile } => cmd_check(&profile),
        Commands::Registry { dirs } => cmd_registry(&dirs),
    }
}

fn cmd_show(args: &ProfileArgs, format: Format) -> Result<()> {
    let profile = args.resolve()?;
    match format {
        Format::Pretty => print!("{}", profile),
        Format::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
    }
    Ok(())
}

fn cmd_header(args: &ProfileArgs, output: Option<PathBuf>) -> Result<()> {
    let header = render::c_header(&args.resolve()?);
    match output {
        Some(path) => {
            std::fs::write(&path, header)
                .with_context(|| format!("Failed to write header '{}'", path.display()))?;
            eprintln!("Header written to {}", path.display());
        }
        None => print!("{}", header),
    }
    Ok(())
}

fn cmd_cflags(args: &ProfileArgs) -> Result<()> {
    let flags: Vec<String> = render::cflags(&args.resolve()?)
        .iter()
        .map(|f| shell_quote(f))
        .collect();
    println!("{}", flags.join(" "));
    Ok(())
}

fn cmd_libdir(args: &ProfileArgs) -> Result<()> {
    let profile = args.resolve()?;
    match profile.library_root(|name| std::env::var(name).ok()) {
        Some(root) => {
            println!("{}", root.display());
            Ok(())
        }
        None => {
            eprintln!(
                "Error: {} is not set; cannot locate the {} libraries ({})",
                profile.library_env_var(),
                profile.product_name(),
                profile.library_tag()
            );
            std::process::exit(1);
        }
    }
}

fn cmd_check(args: &ProfileArgs) -> Result<()> {
    let issues = args.resolve()?.validate();
    for issue in &issues {
        eprintln!("{}", issue);
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    if errors > 0 {
        eprintln!("{} error(s), {} warning(s)", errors, issues.len() - errors);
        std::process::exit(1);
    }
    println!("Identity OK ({} warning(s))", issues.len());
    Ok(())
}

fn cmd_registry(dirs: &[PathBuf]) -> Result<()> {
    for dir in dirs {
        let out = mccode_cli::registry::write(dir)?;
        println!("{}", out.display());
    }
    Ok(())
}

/// Single-quote an argument for POSIX shells unless it is plainly safe.
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_=./:,+@%".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
