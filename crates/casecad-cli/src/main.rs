//! casecad CLI - generate PC cases from TOML configurations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use casecad::{generate_case, CaseConfig};

#[derive(Parser)]
#[command(name = "casecad")]
#[command(about = "Parametric PC case generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a case and export it as STL
    Generate {
        /// TOML configuration file (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output STL file
        #[arg(short, long, default_value = "case.stl")]
        output: PathBuf,
    },
    /// Generate a case and print its anchor set as JSON
    Anchors {
        /// TOML configuration file (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the standards registry
    Standards,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config, output } => generate(config.as_deref(), &output),
        Commands::Anchors { config } => anchors(config.as_deref()),
        Commands::Standards => {
            standards();
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<CaseConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(CaseConfig::default()),
    }
}

fn generate(config: Option<&std::path::Path>, output: &PathBuf) -> Result<()> {
    let config = load_config(config)?;
    let case = generate_case(&config)?;
    case.write_stl(output)?;
    println!("Exported STL to {}", output.display());
    println!("  Anchors: {}", case.anchors().len());
    Ok(())
}

fn anchors(config: Option<&std::path::Path>) -> Result<()> {
    let config = load_config(config)?;
    let case = generate_case(&config)?;

    let mut map = serde_json::Map::new();
    for (path, point) in case.anchors().iter() {
        map.insert(
            path.to_string(),
            serde_json::json!([point.x, point.y, point.z]),
        );
    }
    println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(map))?);
    Ok(())
}

fn standards() {
    use casecad_standards::{DriveBay, FanSize, FormFactor, Material, PsuFormFactor};

    println!("Motherboard form factors:");
    for ff in FormFactor::ALL {
        let spec = ff.spec();
        println!(
            "  {}: {} x {} mm, {} mounting holes",
            spec.name,
            spec.width,
            spec.height,
            spec.mounting_holes.len()
        );
    }

    println!("\nMaterials:");
    for m in Material::ALL {
        let spec = m.spec();
        println!("  {}: {} mm, {} g/cm3", spec.name, spec.thickness, spec.density);
    }

    println!("\nFans:");
    for f in FanSize::ALL {
        let spec = f.spec();
        println!(
            "  {}: {} mm frame, holes {} mm apart",
            spec.name, spec.size, spec.mounting_hole_distance
        );
    }

    println!("\nPower supplies:");
    for p in PsuFormFactor::ALL {
        let spec = p.spec();
        println!(
            "  {}: {} x {} x {} mm",
            spec.name, spec.width, spec.height, spec.length
        );
    }

    println!("\nDrive bays:");
    for d in DriveBay::ALL {
        let spec = d.spec();
        println!(
            "  {}: {} x {} x {} mm",
            spec.name, spec.width, spec.height, spec.length
        );
    }
}
