//! idlgen command line.
//!
//! Loads an interface model, runs the producers, and prints the render models
//! as JSON for the template stage.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use idlgen_codegen::{EnumsProducer, GeneratorConfig, ReturnTypePolicy, parse_enums_str};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "idlgen", version, about = "Interface code generator")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform enums into render models
    Enums(EnumsArgs),
}

#[derive(Args)]
struct EnumsArgs {
    /// Input model file (JSON), use - for stdin
    input: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Package name for generated enums (overrides config)
    #[arg(short, long)]
    package: Option<String>,

    /// Return type inference (overrides config)
    #[arg(long, value_enum)]
    return_type: Option<ReturnTypeArg>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReturnTypeArg {
    /// Last element decides (compatible with existing output)
    LastElement,
    /// Any valued element makes the enum `int`
    AnyElement,
}

impl From<ReturnTypeArg> for ReturnTypePolicy {
    fn from(arg: ReturnTypeArg) -> Self {
        match arg {
            ReturnTypeArg::LastElement => ReturnTypePolicy::LastElement,
            ReturnTypeArg::AnyElement => ReturnTypePolicy::AnyElement,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file if given, then apply command-line overrides.
fn resolve_config(args: &EnumsArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(package) = &args.package {
        config.package_name = package.clone();
    }
    if let Some(return_type) = args.return_type {
        config.return_type = return_type.into();
    }
    Ok(config)
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}

/// Transform every enum in `content` and serialize the render models.
fn render_enums(content: &str, config: &GeneratorConfig, compact: bool) -> Result<String> {
    let enums = parse_enums_str(content).context("Failed to load enum model")?;
    tracing::info!(
        count = enums.len(),
        package = %config.package_name,
        policy = ?config.return_type,
        "Loaded enums"
    );

    let renders = EnumsProducer::from_config(config).transform_all(&enums);
    let json = if compact {
        serde_json::to_string(&renders)?
    } else {
        serde_json::to_string_pretty(&renders)?
    };
    Ok(json)
}

fn run_enums(args: EnumsArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let content = read_input(&args.input)?;
    let json = render_enums(&content, &config, args.compact)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    match &args.output {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write output")?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Enums(args) => run_enums(args),
    };
    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"[
        { "name": "media", "elements": [{ "name": "CD-ROM" }, { "name": "DVD", "value": 2 }] },
        { "name": "light", "elements": [{ "name": "ON" }, { "name": "OFF" }] }
    ]"#;

    fn args(extra: &[&str]) -> EnumsArgs {
        let argv = ["idlgen", "enums", "model.json"].iter().chain(extra);
        match Cli::parse_from(argv).command {
            Command::Enums(args) => args,
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let argv = ["--package", "com.example", "--return-type", "any-element"];
        let config = resolve_config(&args(&argv)).unwrap();
        assert_eq!(config.package_name, "com.example");
        assert_eq!(config.return_type, ReturnTypePolicy::AnyElement);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("idlgen.toml");
        std::fs::write(
            &path,
            "package_name = \"from.file\"\nreturn_type = \"any-element\"\n",
        )
        .unwrap();
        let path_arg = path.to_str().unwrap();

        let config = resolve_config(&args(&["--config", path_arg])).unwrap();
        assert_eq!(config.package_name, "from.file");
        assert_eq!(config.return_type, ReturnTypePolicy::AnyElement);

        let config = resolve_config(&args(&["--config", path_arg, "-p", "from.flag"])).unwrap();
        assert_eq!(config.package_name, "from.flag");
    }

    #[test]
    fn render_enums_outputs_models_in_order() {
        let json = render_enums(MODEL, &GeneratorConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let models = value.as_array().unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0]["class_name"], "Media");
        assert_eq!(models[0]["kind"], "custom");
        assert_eq!(models[0]["return_type"], "int");
        assert_eq!(models[0]["params"][0]["internal"], "\"CD-ROM\"");
        assert_eq!(models[0]["params"][1]["internal"], 2);
        assert_eq!(models[1]["class_name"], "Light");
        assert_eq!(models[1]["kind"], "simple");
        assert!(models[1].get("imports").is_none());
    }

    #[test]
    fn render_enums_reports_missing_fields() {
        let err = render_enums(r#"[{ "elements": [] }]"#, &GeneratorConfig::default(), false)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("missing field `name`"));
    }
}
