extern crate clap;
extern crate cubedom;
extern crate rand;
extern crate wirevis;

use clap::{App, Arg};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use cubedom::color::Rgb;
use cubedom::domain::CubeDomain;
use cubedom::position::{BlockPosition, CellPosition, BLOCKS_PER_AXIS, BLOCK_VOLUME, CELLS_PER_AXIS};
use wirevis::render::{render, RenderOptions};

/// Block colors for rank assignments, cycled when there are more ranks than
/// palette entries.
const RANK_PALETTE: [Rgb; 4] = [
	Rgb { red: 0x1F, green: 0x77, blue: 0xB4 },
	Rgb { red: 0xFF, green: 0x7F, blue: 0x0E },
	Rgb { red: 0x2C, green: 0xA0, blue: 0x2C },
	Rgb { red: 0xD6, green: 0x27, blue: 0x28 },
];

fn parse_seed(seed: &str) -> u64 {
	let seed = if seed.starts_with('-') {
		i64::from_str(seed).map(|seed| seed as u64)
	} else {
		u64::from_str(seed)
	};

	match seed {
		Ok(number) => number,
		Err(_) => {
			unimplemented!("cannot parse string seeds yet")
		}
	}
}

fn validate_number(number: String) -> Result<(), String> {
	match number.parse::<u32>() {
		Ok(x) => if x == 0 {
			Err("zero values are not a valid argument".to_owned())
		} else {
			Ok(())
		},
		Err(parse) => Err(parse.to_string())
	}
}

fn validate_alpha(alpha: String) -> Result<(), String> {
	match alpha.parse::<f32>() {
		Ok(x) => if x >= 0.0 && x <= 1.0 {
			Ok(())
		} else {
			Err("alpha must lie in [0, 1]".to_owned())
		},
		Err(parse) => Err(parse.to_string())
	}
}

fn validate_color(color: String) -> Result<(), String> {
	Rgb::parse(&color).map(|_| ()).map_err(|error| error.to_string())
}

fn validate_cell_spec(spec: String) -> Result<(), String> {
	parse_cell_spec(&spec).map(|_| ())
}

/// Parses a `bi,bj,bk,ci,cj,ck,color` cell paint specifier.
fn parse_cell_spec(spec: &str) -> Result<(BlockPosition, CellPosition, Rgb), String> {
	let parts: Vec<&str> = spec.split(',').collect();

	if parts.len() != 7 {
		return Err(format!("expected bi,bj,bk,ci,cj,ck,color but got {} fields", parts.len()));
	}

	let mut indices = [0u8; 6];
	for (slot, part) in indices.iter_mut().zip(parts.iter()) {
		*slot = part.parse::<u8>().map_err(|parse| parse.to_string())?;
	}

	let (block, cell) = (&indices[..3], &indices[3..]);

	if block.iter().any(|&index| index >= BLOCKS_PER_AXIS) {
		return Err(format!("block indices {:?} out of bounds, must be below {}", block, BLOCKS_PER_AXIS));
	}

	if cell.iter().any(|&index| index >= CELLS_PER_AXIS) {
		return Err(format!("cell indices {:?} out of bounds, must be below {}", cell, CELLS_PER_AXIS));
	}

	let color = Rgb::parse(parts[6]).map_err(|error| error.to_string())?;

	Ok((
		BlockPosition::new(block[0], block[1], block[2]),
		CellPosition::new(cell[0], cell[1], cell[2]),
		color,
	))
}

fn main() {
	let matches = App::new("wirevis")
		.version("0.1.0")
		.author("coderbot16 <coderbot16@gmail.com>")
		.about("Renders a wireframe view of an 8x8x8 domain decomposed into 4x4x4 rank blocks of 2x2x2 cells")
		.arg(Arg::with_name("output")
			.short("o")
			.long("output")
			.value_name("PATH")
			.help("Sets the output PNG path")
			.default_value("domain.png")
		)
		.arg(Arg::with_name("width")
			.short("w")
			.long("width")
			.value_name("PIXELS")
			.help("Sets the image width in pixels")
			.default_value("700")
			.validator(validate_number)
		)
		.arg(Arg::with_name("height")
			.short("h")
			.long("height")
			.value_name("PIXELS")
			.help("Sets the image height in pixels")
			.default_value("500")
			.validator(validate_number)
		)
		.arg(Arg::with_name("alpha")
			.short("a")
			.long("alpha")
			.value_name("ALPHA")
			.help("Sets the transparency of cell wireframes, from 0 (invisible) to 1 (opaque)")
			.default_value("0.6")
			.validator(validate_alpha)
		)
		.arg(Arg::with_name("seed")
			.short("s")
			.long("seed")
			.value_name("SEED")
			.help("Seeds the RNG behind the demonstration cell values, for reproducible runs")
			.takes_value(true)
		)
		.arg(Arg::with_name("ranks")
			.short("r")
			.long("ranks")
			.value_name("COUNT")
			.help("Colors the blocks by rank assignment, slab-partitioned in X-major block order")
			.takes_value(true)
			.validator(validate_number)
		)
		.arg(Arg::with_name("cell")
			.short("c")
			.long("cell")
			.value_name("SPEC")
			.help("Paints a single cell, as bi,bj,bk,ci,cj,ck,color (repeatable)")
			.takes_value(true)
			.multiple(true)
			.number_of_values(1)
			.validator(validate_cell_spec)
		)
		.arg(Arg::with_name("block_color")
			.long("block-color")
			.value_name("COLOR")
			.help("Sets the base color of every block (palette name or #RRGGBB)")
			.default_value("lightblue")
			.validator(validate_color)
		)
		.arg(Arg::with_name("no_cubes")
			.long("no-cubes")
			.help("Skips the block wireframes")
		)
		.arg(Arg::with_name("no_cells")
			.long("no-cells")
			.help("Skips the cell wireframes")
		)
		.arg(Arg::with_name("quiet")
			.short("q")
			.long("quiet")
			.help("Suppresses progress output")
		)
		.get_matches();

	let quiet = matches.is_present("quiet");

	let mut domain = match matches.value_of("seed") {
		Some(seed) => CubeDomain::with_rng(&mut StdRng::seed_from_u64(parse_seed(seed))),
		None => CubeDomain::new()
	};

	// Validators already vetted every one of these.
	let base = Rgb::parse(matches.value_of("block_color").unwrap()).unwrap();
	if base != Rgb::LIGHT_BLUE {
		for position in BlockPosition::enumerate() {
			domain.set_block_color(position, base);
		}
	}

	let ranks = match matches.value_of("ranks") {
		Some(ranks) => ranks.parse::<u32>().unwrap(),
		None => 4
	};

	if matches.is_present("ranks") {
		for position in BlockPosition::enumerate() {
			let rank = position.xyz() as u32 * ranks / BLOCK_VOLUME as u32;

			domain.set_block_color(position, RANK_PALETTE[rank as usize % RANK_PALETTE.len()]);
		}
	}

	if let Some(specs) = matches.values_of("cell") {
		for spec in specs {
			let (block, cell, color) = parse_cell_spec(spec).unwrap();

			domain.set_cell_color(block, cell, color);
		}
	}

	let options = RenderOptions {
		show_cells: !matches.is_present("no_cells"),
		show_cubes: !matches.is_present("no_cubes"),
		alpha: matches.value_of("alpha").unwrap().parse().unwrap(),
		width: matches.value_of("width").unwrap().parse().unwrap(),
		height: matches.value_of("height").unwrap().parse().unwrap(),
		..RenderOptions::default()
	};

	if !quiet {
		println!("[=======] 3D Domain: 8x8x8 domain across {} ranks", ranks);
		println!("[=======] Rendering {}x{} wireframe...", options.width, options.height);
	}

	let image = render(&domain, &options);

	let output = matches.value_of("output").unwrap();

	if let Some(parent) = Path::new(output).parent() {
		fs::create_dir_all(parent).unwrap();
	}

	image.save(output).unwrap();

	if !quiet {
		println!("[=======] Saved {}", output);
	}
}
