//! Heightmap-to-normal-map encoder.
//!
//! Converts a grayscale heightmap (PNG, or headerless RAW plus an explicit
//! resolution) into an object-space normal map PNG of the same pixel
//! dimensions. This is a single-shot batch operation: any failure aborts
//! the whole image and nothing is written.
//!
//! Run: `normalmap-gen <input> <output.png> <worldX> <worldY> <worldZ> [-r W H]`

use std::env;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use glam::Vec3;
use normalmap::HeightField;
use tracing::info;

const USAGE: &str = "\
Usage: normalmap-gen <input> <output.png> <worldX> <worldY> <worldZ> [-r WIDTH HEIGHT]

  <input>        grayscale heightmap, .png or .raw
  <output.png>   normal map written here, same dimensions as the input
  <worldX/Y/Z>   world-space extents; Y scales normalized heights
  -r W H         resolution, required for .raw inputs (the file has no header)";

struct Args {
    input: String,
    output: String,
    world_size: Vec3,
    resolution: Option<(u32, u32)>,
}

fn parse_args(raw: &[String]) -> Option<Args> {
    let mut positional = Vec::new();
    let mut resolution = None;
    let mut it = raw.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-r" | "--resolution" => {
                let width = it.next()?.parse().ok()?;
                let height = it.next()?.parse().ok()?;
                resolution = Some((width, height));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let [input, output, wx, wy, wz] = <[String; 5]>::try_from(positional).ok()?;
    let world_size = Vec3::new(wx.parse().ok()?, wy.parse().ok()?, wz.parse().ok()?);
    Some(Args {
        input,
        output,
        world_size,
        resolution,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&raw) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let field = load_heightfield(args)?;
    info!(
        width = field.width(),
        height = field.height(),
        "generating normal map"
    );

    let map = normalmap::generate(&field)?;
    map.into_rgb_image()
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output))?;

    info!(output = %args.output, "normal map written");
    Ok(())
}

fn load_heightfield(args: &Args) -> Result<HeightField> {
    let ext = Path::new(&args.input)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => {
            let image = image::open(&args.input)
                .with_context(|| format!("failed to read {}", args.input))?;
            Ok(HeightField::from_image(&image, args.world_size)?)
        }
        Some("raw") => {
            let Some((width, height)) = args.resolution else {
                bail!("RAW input requires an explicit resolution (-r WIDTH HEIGHT); the file carries none");
            };
            let bytes = std::fs::read(&args.input)
                .with_context(|| format!("failed to read {}", args.input))?;
            Ok(HeightField::from_raw_bytes(
                &bytes,
                width,
                height,
                args.world_size,
            )?)
        }
        _ => bail!(
            "unsupported input extension on {}; expected .png or .raw",
            args.input
        ),
    }
}
