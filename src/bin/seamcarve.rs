use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use failure::{format_err, Error};
use seamcarve::dump::{energy_to_image, paint_seam};
use seamcarve::{calculate_energy, energy_to_vertical_seam, load_grid, save_grid, seamcarve};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Shrink an image by removing its least interesting seams")
        .arg(
            Arg::new("in")
                .help("The image to carve")
                .short('i')
                .long("in")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("out")
                .help("Where to write the carved image; the extension picks the format")
                .short('o')
                .long("out")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("width")
                .help("How many columns to remove")
                .long("width")
                .value_name("N")
                .value_parser(value_parser!(u32))
                .default_value("0"),
        )
        .arg(
            Arg::new("height")
                .help("How many rows to remove")
                .long("height")
                .value_name("N")
                .value_parser(value_parser!(u32))
                .default_value("0"),
        )
        .arg(
            Arg::new("energy")
                .help("Also write the input's energy map as a greyscale image")
                .long("energy")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seam")
                .help("Also write the input with its first vertical seam painted red")
                .long("seam")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .help("Log every removed seam")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
}

fn path(matches: &ArgMatches, name: &str) -> Result<PathBuf, Error> {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .ok_or_else(|| format_err!("missing --{}", name))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Error> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let input = path(&matches, "in")?;
    let output = path(&matches, "out")?;
    let width = matches.get_one::<u32>("width").copied().unwrap_or(0);
    let height = matches.get_one::<u32>("height").copied().unwrap_or(0);

    let grid = load_grid(&input)?;
    info!(input = %input.display(), width = grid.width(), height = grid.height(), "loaded");

    if matches.contains_id("energy") || matches.contains_id("seam") {
        let energy = calculate_energy(&grid)?;
        if let Some(target) = matches.get_one::<PathBuf>("energy") {
            energy_to_image(&energy).save(target)?;
        }
        if let Some(target) = matches.get_one::<PathBuf>("seam") {
            let seam = energy_to_vertical_seam(&energy);
            save_grid(&paint_seam(&grid, &seam, [255, 0, 0])?, target)?;
        }
    }

    let carved = seamcarve(&grid, width, height)?;
    save_grid(&carved, &output)?;
    info!(output = %output.display(), width = carved.width(), height = carved.height(), "saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn reductions_default_to_zero() {
        let matches = cli().get_matches_from(["seamcarve", "-i", "a.png", "-o", "b.png"]);
        assert_eq!(matches.get_one::<u32>("width"), Some(&0));
        assert_eq!(matches.get_one::<u32>("height"), Some(&0));
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn negative_reductions_do_not_parse() {
        let result =
            cli().try_get_matches_from(["seamcarve", "-i", "a.png", "-o", "b.png", "--width", "-3"]);
        assert!(result.is_err());
    }
}
