//! Folio CLI
//!
//! Lays out a JSON page description and prints the drawing commands a
//! renderer would receive.

mod document;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use folio_common::warning::clear_warnings;
use folio_layout::{
    Area, DEFAULT_PIXELS_PER_INCH, DisplayCommand, DisplayList, LayoutContext, StyleSheet, Units,
};
use owo_colors::OwoColorize;

use document::PageSpec;

/// Folio: print page layout
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the drawing commands for a page
    folio page.json

    # Apply a style sheet
    folio page.json --styles styles.json

    # Print commands as JSON at print resolution
    folio page.json --ppi 300 --json
"#)]
struct Cli {
    /// Path to a JSON page description
    #[arg(value_name = "FILE")]
    page: PathBuf,

    /// JSON style sheet to apply
    #[arg(short = 's', long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// Output resolution in pixels per inch
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_INCH, value_parser = parse_ppi)]
    ppi: f32,

    /// Print drawing commands as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let page = PageSpec::from_json(&read(&cli.page)?)?;
    let styles = match &cli.styles {
        Some(path) => StyleSheet::from_json(&read(path)?)
            .with_context(|| format!("invalid style sheet {}", path.display()))?,
        None => StyleSheet::default(),
    };
    let ctx = LayoutContext::new(&styles, Units::new(cli.ppi));

    clear_warnings();
    let mut root = page.into_root()?;
    root.explicit_layout(&ctx, Some(&Area::new()));

    let mut list = DisplayList::new();
    root.render(&ctx, &mut list, || {})?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(list.commands())?);
    } else {
        print_commands(&list);
    }
    Ok(())
}

/// Accept only a finite, positive resolution.
fn parse_ppi(value: &str) -> Result<f32, String> {
    let ppi: f32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if ppi.is_finite() && ppi > 0.0 {
        Ok(ppi)
    } else {
        Err(format!("resolution must be a positive number, got {value}"))
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_commands(list: &DisplayList) {
    println!("{} ({} commands)", "=== Display List ===".bold(), list.len());
    for command in list.commands() {
        let name = format!("{:<12}", command.name());
        match command {
            DisplayCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
                opacity,
            } => println!(
                "{} ({x:.1}, {y:.1}) {width:.1}x{height:.1} rgb{:?} opacity {opacity}",
                name.green(),
                color.rgb
            ),
            DisplayCommand::StrokeRect {
                x,
                y,
                width,
                height,
                line_width,
                color,
            } => println!(
                "{} ({x:.1}, {y:.1}) {width:.1}x{height:.1} line {line_width:.1} rgb{:?}",
                name.yellow(),
                color.rgb
            ),
            DisplayCommand::DrawImage {
                x,
                y,
                width,
                height,
                src,
                opacity,
            } => println!(
                "{} ({x:.1}, {y:.1}) {width:.1}x{height:.1} {} opacity {opacity}",
                name.magenta(),
                src.dimmed()
            ),
            DisplayCommand::DrawText {
                x,
                y,
                text,
                font,
                font_size,
                ..
            } => println!(
                "{} ({x:.1}, {y:.1}) {:?} {} {}",
                name.cyan(),
                text,
                font.as_deref().unwrap_or("default").dimmed(),
                font_size.map_or_else(String::new, |size| format!("{size}pt"))
            ),
        }
    }
}
