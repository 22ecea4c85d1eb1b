use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use event_codegen::{compile_document, load_schema, CodegenError, Language, SUPPORTED_LANGUAGES};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "event-gen")]
#[command(about = "Create Kotlin or Swift analytics event declarations from a JSON Schema", long_about = None)]
struct Cli {
    /// JSON Schema file; the generated class is named after it
    #[arg(short, long = "source", value_name = "FILE")]
    source: PathBuf,

    /// The language to generate
    #[arg(short, long, value_parser = SUPPORTED_LANGUAGES)]
    language: String,

    /// Output file, or a directory to write `<Class>.<ext>` into (prints to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), CodegenError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let language: Language = cli.language.parse()?;
    let (class_name, document) = load_schema(&cli.source)?;
    // Fully rendered before anything is written.
    let code = compile_document(&class_name, &document, language)?;

    match &cli.output {
        Some(output) => {
            let out_path = output_path(output, &class_name, language);
            fs::write(&out_path, format!("{}\n", code))?;
            info!(path = %out_path.display(), "wrote declaration");
        }
        None => println!("{}", code),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A directory receives `<Class>.<ext>`; anything else is used as given.
fn output_path(output: &Path, class_name: &str, language: Language) -> PathBuf {
    if output.is_dir() {
        output.join(format!("{}.{}", class_name, language.file_extension()))
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["event-gen", "-s", "schemas/ViewRoom.json", "-l", "swift"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("schemas/ViewRoom.json"));
        assert_eq!(cli.language, "swift");
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_unknown_language_at_the_boundary() {
        let result = Cli::try_parse_from(["event-gen", "--source", "Click.json", "--language", "java"]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_source_and_language() {
        assert!(Cli::try_parse_from(["event-gen", "-l", "kotlin"]).is_err());
        assert!(Cli::try_parse_from(["event-gen", "-s", "Click.json"]).is_err());
    }

    #[test]
    fn renders_a_schema_file_into_a_directory() {
        let dir = std::env::temp_dir().join(format!("event-gen-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let source = dir.join("Logout.json");
        fs::write(&source, r#"{"properties": {"eventName": {"enum": ["Logout"]}}}"#).unwrap();

        let cli = Cli::try_parse_from([
            "event-gen",
            "-s",
            source.to_str().unwrap(),
            "-l",
            "kotlin",
            "-o",
            dir.to_str().unwrap(),
        ])
        .unwrap();
        let language: Language = cli.language.parse().unwrap();
        let (class_name, document) = load_schema(&cli.source).unwrap();
        let code = compile_document(&class_name, &document, language).unwrap();
        let out_path = output_path(cli.output.as_deref().unwrap(), &class_name, language);

        assert_eq!(out_path, dir.join("Logout.kt"));
        assert!(code.contains("data class Logout("));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn directory_output_is_named_after_the_class() {
        let dir = std::env::temp_dir();
        assert_eq!(output_path(&dir, "ViewRoom", Language::Kotlin), dir.join("ViewRoom.kt"));
        let file = PathBuf::from("does/not/exist/Out.swift");
        assert_eq!(output_path(&file, "ViewRoom", Language::Swift), file);
    }
}
