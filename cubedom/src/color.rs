use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A display color. Parsed from either a palette name or a `#RRGGBB`
/// specifier; what a color means is entirely up to the renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
}

impl Rgb {
	/// Default color of every block in a freshly constructed domain.
	pub const LIGHT_BLUE: Rgb = Rgb { red: 0xAD, green: 0xD8, blue: 0xE6 };

	pub const RED: Rgb = Rgb { red: 0xFF, green: 0x00, blue: 0x00 };
	pub const GREEN: Rgb = Rgb { red: 0x00, green: 0x80, blue: 0x00 };
	pub const BLUE: Rgb = Rgb { red: 0x00, green: 0x00, blue: 0xFF };
	pub const ORANGE: Rgb = Rgb { red: 0xFF, green: 0xA5, blue: 0x00 };
	pub const YELLOW: Rgb = Rgb { red: 0xFF, green: 0xFF, blue: 0x00 };
	pub const PURPLE: Rgb = Rgb { red: 0x80, green: 0x00, blue: 0x80 };
	pub const GRAY: Rgb = Rgb { red: 0x80, green: 0x80, blue: 0x80 };
	pub const BLACK: Rgb = Rgb { red: 0x00, green: 0x00, blue: 0x00 };
	pub const WHITE: Rgb = Rgb { red: 0xFF, green: 0xFF, blue: 0xFF };

	/// Looks up a color from the named palette.
	pub fn from_name(name: &str) -> Option<Rgb> {
		Some(match name {
			"lightblue" => Rgb::LIGHT_BLUE,
			"red" => Rgb::RED,
			"green" => Rgb::GREEN,
			"blue" => Rgb::BLUE,
			"orange" => Rgb::ORANGE,
			"yellow" => Rgb::YELLOW,
			"purple" => Rgb::PURPLE,
			"gray" => Rgb::GRAY,
			"black" => Rgb::BLACK,
			"white" => Rgb::WHITE,
			_ => return None,
		})
	}

	/// Parses a `#RRGGBB` specifier.
	pub fn from_hex(specifier: &str) -> Result<Rgb, ColorParseError> {
		let error = || ColorParseError::new(specifier);

		let digits = specifier.strip_prefix('#').ok_or_else(error)?;

		if digits.len() != 6 || !digits.is_ascii() {
			return Err(error());
		}

		let parse = |range| u8::from_str_radix(&digits[range], 16).map_err(|_| error());

		Ok(Rgb { red: parse(0..2)?, green: parse(2..4)?, blue: parse(4..6)? })
	}

	/// Parses a color specifier: a `#RRGGBB` string if it starts with `#`, a
	/// palette name otherwise.
	pub fn parse(specifier: &str) -> Result<Rgb, ColorParseError> {
		if specifier.starts_with('#') {
			Rgb::from_hex(specifier)
		} else {
			Rgb::from_name(specifier).ok_or_else(|| ColorParseError::new(specifier))
		}
	}
}

impl Display for Rgb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
	}
}

/// A color specifier that is neither a palette name nor a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
	specifier: String,
}

impl ColorParseError {
	fn new(specifier: &str) -> Self {
		ColorParseError { specifier: specifier.to_owned() }
	}
}

impl Display for ColorParseError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "unrecognized color specifier: {:?}", self.specifier)
	}
}

impl Error for ColorParseError {}

#[cfg(test)]
mod test {
	use crate::color::Rgb;

	#[test]
	fn test_named_colors() {
		assert_eq!(Rgb::from_name("lightblue"), Some(Rgb::LIGHT_BLUE));
		assert_eq!(Rgb::from_name("red"), Some(Rgb { red: 0xFF, green: 0, blue: 0 }));
		assert_eq!(Rgb::from_name("mauve"), None);
	}

	#[test]
	fn test_hex_colors() {
		assert_eq!(Rgb::from_hex("#ADD8E6"), Ok(Rgb::LIGHT_BLUE));
		assert_eq!(Rgb::from_hex("#add8e6"), Ok(Rgb::LIGHT_BLUE));
		assert_eq!(Rgb::from_hex("#000000"), Ok(Rgb::BLACK));

		assert!(Rgb::from_hex("ADD8E6").is_err(), "missing # must be rejected");
		assert!(Rgb::from_hex("#ADD8").is_err(), "short specifiers must be rejected");
		assert!(Rgb::from_hex("#ADD8EG").is_err(), "non-hex digits must be rejected");
	}

	#[test]
	fn test_parse_dispatch() {
		assert_eq!(Rgb::parse("green"), Ok(Rgb::GREEN));
		assert_eq!(Rgb::parse("#008000"), Ok(Rgb::GREEN));
		assert!(Rgb::parse("#nothex").is_err());
		assert!(Rgb::parse("").is_err());
	}

	#[test]
	fn test_display_roundtrip() {
		assert_eq!(Rgb::LIGHT_BLUE.to_string(), "#ADD8E6");
		assert_eq!(Rgb::parse(&Rgb::ORANGE.to_string()), Ok(Rgb::ORANGE));
	}
}
