//! Fixed color palettes indexed by position in a sweep.

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);

    const fn hex(v: u32) -> Rgb {
        Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }
}

const YL_GN_BU: [Rgb; 9] = [
    Rgb::hex(0xffffd9),
    Rgb::hex(0xedf8b1),
    Rgb::hex(0xc7e9b4),
    Rgb::hex(0x7fcdbb),
    Rgb::hex(0x41b6c4),
    Rgb::hex(0x1d91c0),
    Rgb::hex(0x225ea8),
    Rgb::hex(0x253494),
    Rgb::hex(0x081d58),
];

const ORANGES: [Rgb; 9] = [
    Rgb::hex(0xfff5eb),
    Rgb::hex(0xfee6ce),
    Rgb::hex(0xfdd0a2),
    Rgb::hex(0xfdae6b),
    Rgb::hex(0xfd8d3c),
    Rgb::hex(0xf16913),
    Rgb::hex(0xd94801),
    Rgb::hex(0xa63603),
    Rgb::hex(0x7f2704),
];

const BLUES: [Rgb; 9] = [
    Rgb::hex(0xf7fbff),
    Rgb::hex(0xdeebf7),
    Rgb::hex(0xc6dbef),
    Rgb::hex(0x9ecae1),
    Rgb::hex(0x6baed6),
    Rgb::hex(0x4292c6),
    Rgb::hex(0x2171b5),
    Rgb::hex(0x08519c),
    Rgb::hex(0x08306b),
];

// cyclic: light -> blue -> dark purple -> red -> light
const TWILIGHT: [Rgb; 11] = [
    Rgb::hex(0xe2d9e2),
    Rgb::hex(0xa6bfd0),
    Rgb::hex(0x6f93c4),
    Rgb::hex(0x5e63b5),
    Rgb::hex(0x533486),
    Rgb::hex(0x2f1436),
    Rgb::hex(0x6a1c4d),
    Rgb::hex(0x9e3c45),
    Rgb::hex(0xc4745e),
    Rgb::hex(0xd8b1a0),
    Rgb::hex(0xe2d9e2),
];

const CYCLE_538: [Rgb; 6] = [
    Rgb::hex(0x008fd5),
    Rgb::hex(0xfc4f30),
    Rgb::hex(0xe5ae38),
    Rgb::hex(0x6d904f),
    Rgb::hex(0x8b8b8b),
    Rgb::hex(0x810f7c),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    YlGnBu,
    Oranges,
    Blues,
    Twilight,
}

impl Colormap {
    fn stops(self) -> &'static [Rgb] {
        match self {
            Colormap::YlGnBu => &YL_GN_BU,
            Colormap::Oranges => &ORANGES,
            Colormap::Blues => &BLUES,
            Colormap::Twilight => &TWILIGHT,
        }
    }

    /// Color at `t` in [0, 1], linear between evenly spaced stops.
    pub fn sample(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let pos = t * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        Rgb::lerp(stops[i], stops[i + 1], pos - i as f64)
    }
}

/// How a sweep assigns colors to its curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Palette {
    /// `count` colors taken from `map` at evenly spaced points of `[lo, hi]`.
    Gradient { map: Colormap, lo: f64, hi: f64 },
    /// Fixed color cycle, wrapping around.
    Cycle,
}

impl Palette {
    pub fn gradient(map: Colormap, lo: f64, hi: f64) -> Self {
        Palette::Gradient { map, lo, hi }
    }

    /// Color of the curve at position `index` in a sweep of `count` curves.
    pub fn color(&self, index: usize, count: usize) -> Rgb {
        match *self {
            Palette::Gradient { map, lo, hi } => {
                let t = if count < 2 {
                    lo
                } else {
                    lo + (hi - lo) * index as f64 / (count - 1) as f64
                };
                map.sample(t)
            }
            Palette::Cycle => CYCLE_538[index % CYCLE_538.len()],
        }
    }
}
