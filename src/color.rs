use eyre::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with straight alpha, formatted for SVG attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Parses `#rgb` or `#rrggbb`, with or without the leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let s = hex.strip_prefix('#').unwrap_or(hex);
        let expand = |n: u8| n << 4 | n;
        match s.len() {
            3 => {
                let v = u16::from_str_radix(s, 16)?;
                Ok(Self::rgb(
                    expand((v >> 8) as u8 & 0xf),
                    expand((v >> 4) as u8 & 0xf),
                    expand(v as u8 & 0xf),
                ))
            }
            6 => {
                let v = u32::from_str_radix(s, 16)?;
                Ok(Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
            }
            _ => bail!("invalid hex color {hex:?}"),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// SVG attribute form: hex when opaque, `rgba(..)` otherwise.
    pub fn to_svg(&self) -> String {
        if self.a >= 1.0 {
            self.to_hex()
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

const fn hex(v: u32) -> Color {
    Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

pub const CATEGORY10: [Color; 10] = [
    hex(0x1f77b4),
    hex(0xff7f0e),
    hex(0x2ca02c),
    hex(0xd62728),
    hex(0x9467bd),
    hex(0x8c564b),
    hex(0xe377c2),
    hex(0x7f7f7f),
    hex(0xbcbd22),
    hex(0x17becf),
];

pub const ACCENT: [Color; 8] = [
    hex(0x7fc97f),
    hex(0xbeaed4),
    hex(0xfdc086),
    hex(0xffff99),
    hex(0x386cb0),
    hex(0xf0027f),
    hex(0xbf5b17),
    hex(0x666666),
];

pub const DARK2: [Color; 8] = [
    hex(0x1b9e77),
    hex(0xd95f02),
    hex(0x7570b3),
    hex(0xe7298a),
    hex(0x66a61e),
    hex(0xe6ab02),
    hex(0xa6761d),
    hex(0x666666),
];

pub const PAIRED: [Color; 12] = [
    hex(0xa6cee3),
    hex(0x1f78b4),
    hex(0xb2df8a),
    hex(0x33a02c),
    hex(0xfb9a99),
    hex(0xe31a1c),
    hex(0xfdbf6f),
    hex(0xff7f00),
    hex(0xcab2d6),
    hex(0x6a3d9a),
    hex(0xffff99),
    hex(0xb15928),
];

pub const PASTEL1: [Color; 9] = [
    hex(0xfbb4ae),
    hex(0xb3cde3),
    hex(0xccebc5),
    hex(0xdecbe4),
    hex(0xfed9a6),
    hex(0xffffcc),
    hex(0xe5d8bd),
    hex(0xfddaec),
    hex(0xf2f2f2),
];

pub const PASTEL2: [Color; 8] = [
    hex(0xb3e2cd),
    hex(0xfdcdac),
    hex(0xcbd5e8),
    hex(0xf4cae4),
    hex(0xe6f5c9),
    hex(0xfff2ae),
    hex(0xf1e2cc),
    hex(0xcccccc),
];

pub const SET1: [Color; 9] = [
    hex(0xe41a1c),
    hex(0x377eb8),
    hex(0x4daf4a),
    hex(0x984ea3),
    hex(0xff7f00),
    hex(0xffff33),
    hex(0xa65628),
    hex(0xf781bf),
    hex(0x999999),
];

pub const SET2: [Color; 8] = [
    hex(0x66c2a5),
    hex(0xfc8d62),
    hex(0x8da0cb),
    hex(0xe78ac3),
    hex(0xa6d854),
    hex(0xffd92f),
    hex(0xe5c494),
    hex(0xb3b3b3),
];

pub const SET3: [Color; 12] = [
    hex(0x8dd3c7),
    hex(0xffffb3),
    hex(0xbebada),
    hex(0xfb8072),
    hex(0x80b1d3),
    hex(0xfdb462),
    hex(0xb3de69),
    hex(0xfccde5),
    hex(0xd9d9d9),
    hex(0xbc80bd),
    hex(0xccebc5),
    hex(0xffed6f),
];

/// Named palettes, mirroring the d3 categorical schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Category10,
    Accent,
    Dark2,
    Paired,
    Pastel1,
    Pastel2,
    Set1,
    Set2,
    Set3,
}

impl ColorScheme {
    pub fn colors(&self) -> &'static [Color] {
        match self {
            Self::Category10 => &CATEGORY10,
            Self::Accent => &ACCENT,
            Self::Dark2 => &DARK2,
            Self::Paired => &PAIRED,
            Self::Pastel1 => &PASTEL1,
            Self::Pastel2 => &PASTEL2,
            Self::Set1 => &SET1,
            Self::Set2 => &SET2,
            Self::Set3 => &SET3,
        }
    }
}
