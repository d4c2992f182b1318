//! Colors and stroke styling for the mesh.
//!
//! The original page shipped two near-identical animations, one with a
//! hard-coded color and one reading colors from page styling. Here that is a
//! single design: a [`ColorSource`] is either a fixed color or the name of a
//! CSS custom property resolved from computed page styling at mount time.

/// RGBA color rendered as CSS color strings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in [0, 1].
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from RGB channels and alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS string: hex when fully opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Parses a CSS color string. Supports hex (`#RRGGBB`) and `rgb()`/`rgba()`
/// functional notation; anything else is `None`.
pub fn parse_color(color_str: &str) -> Option<Color> {
	if let Some(hex) = color_str.strip_prefix('#') {
		if hex.len() != 6 {
			return None;
		}
		let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
		let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
		let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
		Some(Color::rgb(r, g, b))
	} else if color_str.starts_with("rgb") {
		let nums: Vec<&str> = color_str
			.trim_start_matches("rgba(")
			.trim_start_matches("rgb(")
			.trim_end_matches(')')
			.split(',')
			.collect();
		if nums.len() < 3 {
			return None;
		}
		let r = nums[0].trim().parse().ok()?;
		let g = nums[1].trim().parse().ok()?;
		let b = nums[2].trim().parse().ok()?;
		let a = match nums.get(3) {
			Some(s) => s.trim().parse().ok()?,
			None => 1.0,
		};
		Some(Color::rgba(r, g, b, a))
	} else {
		None
	}
}

/// Where a drawing color comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSource {
	/// Use this color as-is.
	Fixed(Color),
	/// Resolve a CSS custom property (e.g. `--mesh-color`) from the document
	/// element's computed style, falling back when missing or malformed.
	StyleProperty {
		/// Custom property name, including the leading dashes.
		name: String,
		/// Color used when the property cannot be resolved.
		fallback: Color,
	},
}

impl ColorSource {
	/// Resolve to a concrete color. Touches the DOM only for
	/// [`ColorSource::StyleProperty`].
	pub fn resolve(&self) -> Color {
		match self {
			ColorSource::Fixed(color) => *color,
			ColorSource::StyleProperty { name, fallback } => {
				resolve_style_property(name).unwrap_or(*fallback)
			}
		}
	}
}

fn resolve_style_property(name: &str) -> Option<Color> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let root = document.document_element()?;
	let style = window.get_computed_style(&root).ok()??;
	let value = style.get_property_value(name).ok()?;
	parse_color(value.trim())
}

/// Visual styling for the mesh, with colors still unresolved.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkTheme {
	/// Particle fill color.
	pub node_color: ColorSource,
	/// Link stroke color; link alpha multiplies this color's alpha.
	pub link_color: ColorSource,
	/// Particle draw radius.
	pub node_radius: f64,
	/// Link stroke width.
	pub link_width: f64,
}

impl Default for NetworkTheme {
	fn default() -> Self {
		Self {
			node_color: ColorSource::Fixed(Color::rgb(205, 18, 18)),
			link_color: ColorSource::Fixed(Color::rgb(205, 18, 18)),
			node_radius: 3.0,
			link_width: 1.0,
		}
	}
}

impl NetworkTheme {
	/// Resolve both color sources. Done once at mount, not per frame.
	pub fn resolve(&self) -> ResolvedTheme {
		ResolvedTheme {
			node_color: self.node_color.resolve(),
			link_color: self.link_color.resolve(),
			node_radius: self.node_radius,
			link_width: self.link_width,
		}
	}
}

/// Theme with concrete colors, ready for per-frame drawing.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedTheme {
	/// Particle fill color.
	pub node_color: Color,
	/// Link stroke color.
	pub link_color: Color,
	/// Particle draw radius.
	pub node_radius: f64,
	/// Link stroke width.
	pub link_width: f64,
}
