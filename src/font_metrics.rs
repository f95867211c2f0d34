use crate::font_metrics_data;

/// The fonts that glyphs can be set in. Each has its own metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    MainRegular,
    MathItalic,
    Size1,
    Size2,
    Size3,
    Size4,
}
impl Font {
    pub fn as_str(self) -> &'static str {
        match self {
            Font::MainRegular => "Main-Regular",
            Font::MathItalic => "Math-Italic",
            Font::Size1 => "Size1-Regular",
            Font::Size2 => "Size2-Regular",
            Font::Size3 => "Size3-Regular",
            Font::Size4 => "Size4-Regular",
        }
    }

    /// The CSS class naming the font family for the markup backends
    pub fn css_class(self) -> &'static str {
        match self {
            Font::MainRegular => "mathrm",
            Font::MathItalic => "mathit",
            Font::Size1 => "size1",
            Font::Size2 => "size2",
            Font::Size3 => "size3",
            Font::Size4 => "size4",
        }
    }

    pub fn is_italic(self) -> bool {
        self == Font::MathItalic
    }

    /// The delimiter size fonts in ascending order
    pub const DELIMITER_SIZES: [Font; 4] = [Font::Size1, Font::Size2, Font::Size3, Font::Size4];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricName {
    Slant,
    Space,
    Stretch,
    Shrink,
    XHeight,
    Quad,
    ExtraSpace,
    Num1,
    Num2,
    Num3,
    Denom1,
    Denom2,
    Sup1,
    Sup2,
    Sup3,
    Sub1,
    Sub2,
    SupDrop,
    SubDrop,
    Delim1,
    Delim2,
    AxisHeight,

    DefaultRuleThickness,
    BigOpSpacing1,
    BigOpSpacing2,
    BigOpSpacing3,
    BigOpSpacing4,
    BigOpSpacing5,

    PtPerEm,
}

/// The TeX font parameters for one size class. These are in units of the font's own em,
/// so callers multiply by the size multiplier of their context.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub slant: f64,
    pub space: f64,
    pub stretch: f64,
    pub shrink: f64,
    pub x_height: f64,
    pub quad: f64,
    pub extra_space: f64,
    pub num1: f64,
    pub num2: f64,
    pub num3: f64,
    pub denom1: f64,
    pub denom2: f64,
    pub sup1: f64,
    pub sup2: f64,
    pub sup3: f64,
    pub sub1: f64,
    pub sub2: f64,
    pub sup_drop: f64,
    pub sub_drop: f64,
    pub delim1: f64,
    pub delim2: f64,
    pub axis_height: f64,

    pub default_rule_thickness: f64,
    pub big_op_spacing1: f64,
    pub big_op_spacing2: f64,
    pub big_op_spacing3: f64,
    pub big_op_spacing4: f64,
    pub big_op_spacing5: f64,

    pub pt_per_em: f64,

    pub css_em_per_mu: f64,
}
impl FontMetrics {
    fn update_from_name(&mut self, name: MetricName, v: f64) {
        match name {
            MetricName::Slant => self.slant = v,
            MetricName::Space => self.space = v,
            MetricName::Stretch => self.stretch = v,
            MetricName::Shrink => self.shrink = v,
            MetricName::XHeight => self.x_height = v,
            MetricName::Quad => self.quad = v,
            MetricName::ExtraSpace => self.extra_space = v,
            MetricName::Num1 => self.num1 = v,
            MetricName::Num2 => self.num2 = v,
            MetricName::Num3 => self.num3 = v,
            MetricName::Denom1 => self.denom1 = v,
            MetricName::Denom2 => self.denom2 = v,
            MetricName::Sup1 => self.sup1 = v,
            MetricName::Sup2 => self.sup2 = v,
            MetricName::Sup3 => self.sup3 = v,
            MetricName::Sub1 => self.sub1 = v,
            MetricName::Sub2 => self.sub2 = v,
            MetricName::SupDrop => self.sup_drop = v,
            MetricName::SubDrop => self.sub_drop = v,
            MetricName::Delim1 => self.delim1 = v,
            MetricName::Delim2 => self.delim2 = v,
            MetricName::AxisHeight => self.axis_height = v,

            MetricName::DefaultRuleThickness => self.default_rule_thickness = v,
            MetricName::BigOpSpacing1 => self.big_op_spacing1 = v,
            MetricName::BigOpSpacing2 => self.big_op_spacing2 = v,
            MetricName::BigOpSpacing3 => self.big_op_spacing3 = v,
            MetricName::BigOpSpacing4 => self.big_op_spacing4 = v,
            MetricName::BigOpSpacing5 => self.big_op_spacing5 = v,

            MetricName::PtPerEm => self.pt_per_em = v,
        }
    }
}

// Columns are [text and display, script, scriptscript]. The sigmas come from cmsy10,
// cmsy7 and cmsy5 (TeXbook, page 441).
const SIGMAS_AND_XIS: &[(MetricName, [f64; 3])] = &[
    (MetricName::Slant, [0.250, 0.250, 0.250]),      // sigma1
    (MetricName::Space, [0.000, 0.000, 0.000]),      // sigma2
    (MetricName::Stretch, [0.000, 0.000, 0.000]),    // sigma3
    (MetricName::Shrink, [0.000, 0.000, 0.000]),     // sigma4
    (MetricName::XHeight, [0.431, 0.431, 0.431]),    // sigma5
    (MetricName::Quad, [1.000, 1.171, 1.472]),       // sigma6
    (MetricName::ExtraSpace, [0.000, 0.000, 0.000]), // sigma7
    (MetricName::Num1, [0.677, 0.732, 0.925]),       // sigma8
    (MetricName::Num2, [0.394, 0.384, 0.387]),       // sigma9
    (MetricName::Num3, [0.444, 0.471, 0.504]),       // sigma10
    (MetricName::Denom1, [0.686, 0.752, 1.025]),     // sigma11
    (MetricName::Denom2, [0.345, 0.344, 0.532]),     // sigma12
    (MetricName::Sup1, [0.413, 0.503, 0.504]),       // sigma13
    (MetricName::Sup2, [0.363, 0.431, 0.404]),       // sigma14
    (MetricName::Sup3, [0.289, 0.286, 0.294]),       // sigma15
    (MetricName::Sub1, [0.150, 0.143, 0.200]),       // sigma16
    (MetricName::Sub2, [0.247, 0.286, 0.400]),       // sigma17
    (MetricName::SupDrop, [0.386, 0.353, 0.494]),    // sigma18
    (MetricName::SubDrop, [0.050, 0.071, 0.100]),    // sigma19
    (MetricName::Delim1, [2.390, 1.700, 1.980]),     // sigma20
    (MetricName::Delim2, [1.010, 1.157, 1.420]),     // sigma21
    (MetricName::AxisHeight, [0.250, 0.250, 0.250]), // sigma22
    // Font parameters of the extension fonts (family 3), from cmex10.
    (MetricName::DefaultRuleThickness, [0.04, 0.049, 0.049]), // xi8
    (MetricName::BigOpSpacing1, [0.111, 0.111, 0.111]),       // xi9
    (MetricName::BigOpSpacing2, [0.166, 0.166, 0.166]),       // xi10
    (MetricName::BigOpSpacing3, [0.2, 0.2, 0.2]),             // xi11
    (MetricName::BigOpSpacing4, [0.6, 0.611, 0.611]),         // xi12
    (MetricName::BigOpSpacing5, [0.1, 0.143, 0.143]),         // xi13
    // How large a pt is, for lengths that are defined in pts
    (MetricName::PtPerEm, [10.0, 10.0, 10.0]),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterMetrics {
    pub depth: f64,
    pub height: f64,
    pub italic: f64,
    pub skew: f64,
    pub width: f64,
}
impl CharacterMetrics {
    fn from_metric(metric: [f64; 5]) -> Self {
        Self {
            depth: metric[0],
            height: metric[1],
            italic: metric[2],
            skew: metric[3],
            width: metric[4],
        }
    }

    /// All lengths multiplied by `multiplier`
    pub fn scaled(self, multiplier: f64) -> Self {
        Self {
            depth: self.depth * multiplier,
            height: self.height * multiplier,
            italic: self.italic * multiplier,
            skew: self.skew * multiplier,
            width: self.width * multiplier,
        }
    }
}

/// Look up the metrics of `character` in `font`.
/// Returns `None` when the table has no entry, which means the glyph cannot be laid out.
pub fn get_character_metrics(character: char, font: Font) -> Option<CharacterMetrics> {
    let metrics = font_metrics_data::get_metric(font);

    metrics
        .binary_search_by_key(&character, |(ch, _)| *ch)
        .ok()
        .map(|idx| CharacterMetrics::from_metric(metrics[idx].1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSizeIndex {
    Zero,
    One,
    Two,
}
impl FontSizeIndex {
    pub fn as_usize(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

fn font_metrics_by_size_index(size_index: FontSizeIndex) -> FontMetrics {
    let mut font_metrics = FontMetrics::default();

    for (name, v) in SIGMAS_AND_XIS {
        font_metrics.update_from_name(*name, v[size_index.as_usize()]);
    }

    font_metrics.css_em_per_mu = font_metrics.quad / 18.0;

    font_metrics
}

/// Font parameters for a size index (1 through 11).
pub fn get_global_metrics(size: usize) -> FontMetrics {
    let size_index = if size >= 5 {
        FontSizeIndex::Zero
    } else if size >= 3 {
        FontSizeIndex::One
    } else {
        FontSizeIndex::Two
    };

    font_metrics_by_size_index(size_index)
}
