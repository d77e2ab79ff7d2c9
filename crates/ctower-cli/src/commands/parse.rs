//! Parse command - extract data from a single operation-info text block.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

use ctower_core::text::is_valid_operation_text;
use ctower_core::{OperationInfo, OperationInfoParser};

use super::config::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Check the input shape and report validation issues
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(&args.input).await?;

    info!("Parsing {} ({} bytes)", args.input.display(), text.len());

    if args.validate && !is_valid_operation_text(&text) {
        warn!("Input lacks the CLIENTE and VALOR labels of an operation block");
        eprintln!(
            "{} Input does not look like an operation block",
            style("⚠").yellow()
        );
    }

    let parser = OperationInfoParser::from_config(&config.extraction);
    let result = parser.parse_with_report(&text);

    for warning in &result.warnings {
        info!("{}", warning);
    }

    if args.validate {
        let issues = result.operation.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result.operation)?,
        OutputFormat::Text => format_operation_text(&result.operation),
    };

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

async fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(tokio::fs::read_to_string(input).await?)
}

fn format_operation_text(op: &OperationInfo) -> String {
    let mut output = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(output, "Cliente: {}", op.cliente);
    let _ = writeln!(output, "Ruta: {} -> {}", op.pais_exportador, op.pais_importador);
    let _ = writeln!(output, "Valor total: {} {}", op.valor_total_compra, op.moneda_pago);
    if !op.terminos_pago.is_empty() {
        let _ = writeln!(output, "Términos de pago: {}", op.terminos_pago);
    }
    let _ = writeln!(output, "Incoterms: {}", op.incoterms_label());
    output.push('\n');

    if !op.banco.is_empty() {
        output.push_str("Datos bancarios:\n");
        let _ = writeln!(output, "  {}", op.beneficiario);
        let _ = writeln!(output, "  {}", op.banco);
        if !op.direccion_banco.is_empty() {
            let _ = writeln!(output, "  {}", op.direccion_banco);
        }
        let _ = writeln!(output, "  Cuenta: {}", op.numero_cuenta);
        let _ = writeln!(output, "  SWIFT: {}", op.swift);
        output.push('\n');
    }

    if !op.giros.is_empty() {
        output.push_str("Giros:\n");
        for giro in &op.giros {
            let _ = writeln!(
                output,
                "  {} {} ({}) [{}]",
                giro.valor_solicitado, giro.numero_giro, giro.porcentaje_giro, giro.estado
            );
        }
        match op.giros_total() {
            Some(total) => {
                let _ = writeln!(output, "  Total: {}", total);
            }
            None => output.push_str("  Total: out of range\n"),
        }
        output.push('\n');
    }

    if !op.liberaciones.is_empty() {
        output.push_str("Liberaciones:\n");
        for lib in &op.liberaciones {
            let _ = writeln!(
                output,
                "  #{} {} {} [{}]",
                lib.numero, lib.capital, lib.fecha, lib.estado
            );
        }
        output.push('\n');
    }

    if let Some(score) = op.feedback.calificacion {
        let _ = writeln!(output, "Calificación: {}/5", score);
    }
    if let Some(description) = &op.feedback.descripcion_inconvenientes {
        let _ = writeln!(output, "Inconvenientes: {}", description);
    }

    output
}
