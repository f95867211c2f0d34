//! Glyph metrics for the fonts the layout engine sets glyphs in.
//!
//! Each entry is `[depth, height, italic, skew, width]` in em of the font at its design
//! size. Tables are sorted by character so lookups can binary search.

use crate::font_metrics::Font;

pub(crate) type MetricTable = &'static [(char, [f64; 5])];

pub(crate) fn get_metric(font: Font) -> MetricTable {
    match font {
        Font::MainRegular => MAIN_REGULAR,
        Font::MathItalic => MATH_ITALIC,
        Font::Size1 => SIZE1_REGULAR,
        Font::Size2 => SIZE2_REGULAR,
        Font::Size3 => SIZE3_REGULAR,
        Font::Size4 => SIZE4_REGULAR,
    }
}

static MAIN_REGULAR: MetricTable = &[
    (' ', [0.0, 0.0, 0.0, 0.0, 0.25]),
    ('!', [0.0, 0.69444, 0.0, 0.0, 0.27778]),
    ('"', [0.0, 0.69444, 0.0, 0.0, 0.5]),
    ('#', [0.19444, 0.69444, 0.0, 0.0, 0.83334]),
    ('$', [0.05556, 0.75, 0.0, 0.0, 0.5]),
    ('%', [0.05556, 0.75, 0.0, 0.0, 0.83334]),
    ('&', [0.0, 0.69444, 0.0, 0.0, 0.77778]),
    ('\'', [0.0, 0.69444, 0.0, 0.0, 0.27778]),
    ('(', [0.25, 0.75, 0.0, 0.0, 0.38889]),
    (')', [0.25, 0.75, 0.0, 0.0, 0.38889]),
    ('*', [0.0, 0.75, 0.0, 0.0, 0.5]),
    ('+', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    (',', [0.19444, 0.10556, 0.0, 0.0, 0.27778]),
    ('-', [0.0, 0.43056, 0.0, 0.0, 0.33333]),
    ('.', [0.0, 0.10556, 0.0, 0.0, 0.27778]),
    ('/', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('0', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('1', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('2', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('3', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('4', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('5', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('6', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('7', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('8', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    ('9', [0.0, 0.64444, 0.0, 0.0, 0.5]),
    (':', [0.0, 0.43056, 0.0, 0.0, 0.27778]),
    (';', [0.19444, 0.43056, 0.0, 0.0, 0.27778]),
    ('<', [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('=', [-0.13313, 0.36687, 0.0, 0.0, 0.77778]),
    ('>', [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('?', [0.0, 0.69444, 0.0, 0.0, 0.47222]),
    ('@', [0.0, 0.69444, 0.0, 0.0, 0.77778]),
    ('A', [0.0, 0.68333, 0.0, 0.0, 0.75]),
    ('B', [0.0, 0.68333, 0.0, 0.0, 0.70834]),
    ('C', [0.0, 0.68333, 0.0, 0.0, 0.72222]),
    ('D', [0.0, 0.68333, 0.0, 0.0, 0.76389]),
    ('E', [0.0, 0.68333, 0.0, 0.0, 0.68056]),
    ('F', [0.0, 0.68333, 0.0, 0.0, 0.65278]),
    ('G', [0.0, 0.68333, 0.0, 0.0, 0.78472]),
    ('H', [0.0, 0.68333, 0.0, 0.0, 0.75]),
    ('I', [0.0, 0.68333, 0.0, 0.0, 0.36111]),
    ('J', [0.0, 0.68333, 0.0, 0.0, 0.51389]),
    ('K', [0.0, 0.68333, 0.0, 0.0, 0.77778]),
    ('L', [0.0, 0.68333, 0.0, 0.0, 0.625]),
    ('M', [0.0, 0.68333, 0.0, 0.0, 0.91667]),
    ('N', [0.0, 0.68333, 0.0, 0.0, 0.75]),
    ('O', [0.0, 0.68333, 0.0, 0.0, 0.77778]),
    ('P', [0.0, 0.68333, 0.0, 0.0, 0.68056]),
    ('Q', [0.19444, 0.68333, 0.0, 0.0, 0.77778]),
    ('R', [0.0, 0.68333, 0.0, 0.0, 0.73611]),
    ('S', [0.0, 0.68333, 0.0, 0.0, 0.55556]),
    ('T', [0.0, 0.68333, 0.0, 0.0, 0.72222]),
    ('U', [0.0, 0.68333, 0.0, 0.0, 0.75]),
    ('V', [0.0, 0.68333, 0.01389, 0.0, 0.75]),
    ('W', [0.0, 0.68333, 0.01389, 0.0, 1.02778]),
    ('X', [0.0, 0.68333, 0.0, 0.0, 0.75]),
    ('Y', [0.0, 0.68333, 0.025, 0.0, 0.75]),
    ('Z', [0.0, 0.68333, 0.0, 0.0, 0.61111]),
    ('[', [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('\\', [0.25, 0.75, 0.0, 0.0, 0.5]),
    (']', [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('^', [0.0, 0.69444, 0.0, 0.0, 0.5]),
    ('_', [0.31, 0.12056, 0.02778, 0.0, 0.5]),
    ('a', [0.0, 0.43056, 0.0, 0.0, 0.5]),
    ('b', [0.0, 0.69444, 0.0, 0.0, 0.55556]),
    ('c', [0.0, 0.43056, 0.0, 0.0, 0.44445]),
    ('d', [0.0, 0.69444, 0.0, 0.0, 0.55556]),
    ('e', [0.0, 0.43056, 0.0, 0.0, 0.44445]),
    ('f', [0.0, 0.69444, 0.07778, 0.0, 0.30556]),
    ('g', [0.19444, 0.43056, 0.01389, 0.0, 0.5]),
    ('h', [0.0, 0.69444, 0.0, 0.0, 0.55556]),
    ('i', [0.0, 0.66786, 0.0, 0.0, 0.27778]),
    ('j', [0.19444, 0.66786, 0.0, 0.0, 0.30556]),
    ('k', [0.0, 0.69444, 0.0, 0.0, 0.52778]),
    ('l', [0.0, 0.69444, 0.0, 0.0, 0.27778]),
    ('m', [0.0, 0.43056, 0.0, 0.0, 0.83334]),
    ('n', [0.0, 0.43056, 0.0, 0.0, 0.55556]),
    ('o', [0.0, 0.43056, 0.0, 0.0, 0.5]),
    ('p', [0.19444, 0.43056, 0.0, 0.0, 0.55556]),
    ('q', [0.19444, 0.43056, 0.0, 0.0, 0.52778]),
    ('r', [0.0, 0.43056, 0.0, 0.0, 0.39167]),
    ('s', [0.0, 0.43056, 0.0, 0.0, 0.39445]),
    ('t', [0.0, 0.61508, 0.0, 0.0, 0.38889]),
    ('u', [0.0, 0.43056, 0.0, 0.0, 0.55556]),
    ('v', [0.0, 0.43056, 0.01389, 0.0, 0.52778]),
    ('w', [0.0, 0.43056, 0.01389, 0.0, 0.72222]),
    ('x', [0.0, 0.43056, 0.0, 0.0, 0.52778]),
    ('y', [0.19444, 0.43056, 0.01389, 0.0, 0.52778]),
    ('z', [0.0, 0.43056, 0.0, 0.0, 0.44445]),
    ('{', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('|', [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('~', [0.35, 0.31786, 0.0, 0.0, 0.5]),
    ('\u{a0}', [0.0, 0.0, 0.0, 0.0, 0.25]),
    ('\u{ac}', [0.0, 0.43056, 0.0, 0.0, 0.66667]),
    ('\u{b1}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{d7}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{f7}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{393}', [0.0, 0.68333, 0.0, 0.0, 0.625]),
    ('\u{394}', [0.0, 0.68333, 0.0, 0.0, 0.83334]),
    ('\u{398}', [0.0, 0.68333, 0.0, 0.0, 0.77778]),
    ('\u{39b}', [0.0, 0.68333, 0.0, 0.0, 0.69445]),
    ('\u{39e}', [0.0, 0.68333, 0.0, 0.0, 0.66667]),
    ('\u{3a0}', [0.0, 0.68333, 0.0, 0.0, 0.75]),
    ('\u{3a3}', [0.0, 0.68333, 0.0, 0.0, 0.72222]),
    ('\u{3a5}', [0.0, 0.68333, 0.0, 0.0, 0.77778]),
    ('\u{3a6}', [0.0, 0.68333, 0.0, 0.0, 0.72222]),
    ('\u{3a8}', [0.0, 0.68333, 0.0, 0.0, 0.77778]),
    ('\u{3a9}', [0.0, 0.68333, 0.0, 0.0, 0.72222]),
    ('\u{2026}', [0.0, 0.12, 0.0, 0.0, 1.172]),
    ('\u{2032}', [0.0, 0.55556, 0.0, 0.0, 0.275]),
    ('\u{2111}', [0.0, 0.69444, 0.0, 0.0, 0.72222]),
    ('\u{2113}', [0.0, 0.69444, 0.0, 0.11111, 0.41667]),
    ('\u{2118}', [0.19444, 0.43056, 0.0, 0.11111, 0.63646]),
    ('\u{211c}', [0.0, 0.69444, 0.0, 0.0, 0.72222]),
    ('\u{2135}', [0.0, 0.69444, 0.0, 0.0, 0.61111]),
    ('\u{2190}', [-0.13313, 0.36687, 0.0, 0.0, 1.0]),
    ('\u{2191}', [0.19444, 0.69444, 0.0, 0.0, 0.5]),
    ('\u{2192}', [-0.13313, 0.36687, 0.0, 0.0, 1.0]),
    ('\u{2193}', [0.19444, 0.69444, 0.0, 0.0, 0.5]),
    ('\u{2194}', [-0.13313, 0.36687, 0.0, 0.0, 1.0]),
    ('\u{21d0}', [-0.13313, 0.36687, 0.0, 0.0, 1.0]),
    ('\u{21d2}', [-0.13313, 0.36687, 0.0, 0.0, 1.0]),
    ('\u{21d4}', [-0.13313, 0.36687, 0.0, 0.0, 1.0]),
    ('\u{2200}', [0.0, 0.69444, 0.0, 0.0, 0.55556]),
    ('\u{2203}', [0.0, 0.69444, 0.0, 0.0, 0.55556]),
    ('\u{2205}', [0.05556, 0.75, 0.0, 0.0, 0.5]),
    ('\u{2207}', [0.0, 0.68333, 0.0, 0.0, 0.83334]),
    ('\u{2208}', [0.0391, 0.5391, 0.0, 0.0, 0.66667]),
    ('\u{220b}', [0.0391, 0.5391, 0.0, 0.0, 0.66667]),
    ('\u{2212}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{2213}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{2216}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{2217}', [-0.03472, 0.46528, 0.0, 0.0, 0.5]),
    ('\u{2218}', [-0.05555, 0.44445, 0.0, 0.0, 0.5]),
    ('\u{2219}', [-0.05555, 0.44445, 0.0, 0.0, 0.5]),
    ('\u{221a}', [0.2, 0.8, 0.0, 0.0, 0.83334]),
    ('\u{221d}', [0.0, 0.43056, 0.0, 0.0, 0.77778]),
    ('\u{221e}', [0.0, 0.43056, 0.0, 0.0, 1.0]),
    ('\u{2220}', [0.0, 0.69224, 0.0, 0.0, 0.72222]),
    ('\u{2223}', [0.25, 0.75, 0.0, 0.0, 0.27778]),
    ('\u{2225}', [0.25, 0.75, 0.0, 0.0, 0.5]),
    ('\u{2227}', [0.0, 0.55556, 0.0, 0.0, 0.66667]),
    ('\u{2228}', [0.0, 0.55556, 0.0, 0.0, 0.66667]),
    ('\u{2229}', [0.0, 0.55556, 0.0, 0.0, 0.66667]),
    ('\u{222a}', [0.0, 0.55556, 0.0, 0.0, 0.66667]),
    ('\u{222b}', [0.19444, 0.69444, 0.11111, 0.0, 0.41667]),
    ('\u{223c}', [-0.13313, 0.36687, 0.0, 0.0, 0.77778]),
    ('\u{2240}', [0.19444, 0.69444, 0.0, 0.0, 0.27778]),
    ('\u{2243}', [-0.03625, 0.46375, 0.0, 0.0, 0.77778]),
    ('\u{2245}', [-0.022, 0.589, 0.0, 0.0, 0.77778]),
    ('\u{2248}', [-0.01688, 0.48312, 0.0, 0.0, 0.77778]),
    ('\u{224d}', [-0.03625, 0.46375, 0.0, 0.0, 0.77778]),
    ('\u{2260}', [0.215, 0.716, 0.0, 0.0, 0.77778]),
    ('\u{2261}', [-0.03598, 0.46402, 0.0, 0.0, 0.77778]),
    ('\u{2264}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{2265}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{226a}', [0.0391, 0.5391, 0.0, 0.0, 1.0]),
    ('\u{226b}', [0.0391, 0.5391, 0.0, 0.0, 1.0]),
    ('\u{227a}', [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('\u{227b}', [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('\u{2282}', [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('\u{2283}', [0.0391, 0.5391, 0.0, 0.0, 0.77778]),
    ('\u{2286}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{2287}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{228e}', [0.0, 0.55556, 0.0, 0.0, 0.66667]),
    ('\u{2291}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{2292}', [0.13597, 0.63597, 0.0, 0.0, 0.77778]),
    ('\u{2293}', [0.0, 0.55556, 0.0, 0.0, 0.66667]),
    ('\u{2294}', [0.0, 0.55556, 0.0, 0.0, 0.66667]),
    ('\u{2295}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{2296}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{2297}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{2298}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{2299}', [0.08333, 0.58333, 0.0, 0.0, 0.77778]),
    ('\u{22a2}', [0.0, 0.69444, 0.0, 0.0, 0.61111]),
    ('\u{22a3}', [0.0, 0.69444, 0.0, 0.0, 0.61111]),
    ('\u{22a4}', [0.0, 0.69444, 0.0, 0.0, 0.77778]),
    ('\u{22a5}', [0.0, 0.69444, 0.0, 0.0, 0.77778]),
    ('\u{22c4}', [-0.05555, 0.44445, 0.0, 0.0, 0.5]),
    ('\u{22c5}', [-0.05555, 0.44445, 0.0, 0.0, 0.27778]),
    ('\u{22c6}', [-0.03472, 0.46528, 0.0, 0.0, 0.5]),
    ('\u{22ee}', [0.03, 0.9, 0.0, 0.0, 0.27778]),
    ('\u{22ef}', [-0.19, 0.31, 0.0, 0.0, 1.172]),
    ('\u{22f1}', [-0.1, 0.82, 0.0, 0.0, 1.282]),
    ('\u{2308}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{2309}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{230a}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{230b}', [0.25, 0.75, 0.0, 0.0, 0.44445]),
    ('\u{25b3}', [0.19444, 0.69444, 0.0, 0.0, 0.88889]),
    ('\u{25bd}', [0.19444, 0.69444, 0.0, 0.0, 0.88889]),
    ('\u{27e8}', [0.25, 0.75, 0.0, 0.0, 0.38889]),
    ('\u{27e9}', [0.25, 0.75, 0.0, 0.0, 0.38889]),
];

static MATH_ITALIC: MetricTable = &[
    ('A', [0.0, 0.68333, 0.0, 0.13889, 0.75]),
    ('B', [0.0, 0.68333, 0.05017, 0.08334, 0.75851]),
    ('C', [0.0, 0.68333, 0.07153, 0.08334, 0.71472]),
    ('D', [0.0, 0.68333, 0.02778, 0.05556, 0.82792]),
    ('E', [0.0, 0.68333, 0.05764, 0.08334, 0.7382]),
    ('F', [0.0, 0.68333, 0.13889, 0.08334, 0.64306]),
    ('G', [0.0, 0.68333, 0.0, 0.08334, 0.78625]),
    ('H', [0.0, 0.68333, 0.08125, 0.05556, 0.83125]),
    ('I', [0.0, 0.68333, 0.07847, 0.11111, 0.43958]),
    ('J', [0.0, 0.68333, 0.09618, 0.16667, 0.55451]),
    ('K', [0.0, 0.68333, 0.07153, 0.05556, 0.84931]),
    ('L', [0.0, 0.68333, 0.0, 0.02778, 0.68056]),
    ('M', [0.0, 0.68333, 0.10903, 0.08334, 0.97014]),
    ('N', [0.0, 0.68333, 0.10903, 0.08334, 0.80347]),
    ('O', [0.0, 0.68333, 0.02778, 0.08334, 0.76278]),
    ('P', [0.0, 0.68333, 0.13889, 0.08334, 0.64201]),
    ('Q', [0.19444, 0.68333, 0.0, 0.08334, 0.79056]),
    ('R', [0.0, 0.68333, 0.00773, 0.08334, 0.75929]),
    ('S', [0.0, 0.68333, 0.05764, 0.08334, 0.6132]),
    ('T', [0.0, 0.68333, 0.13889, 0.08334, 0.58438]),
    ('U', [0.0, 0.68333, 0.10903, 0.02778, 0.68278]),
    ('V', [0.0, 0.68333, 0.22222, 0.0, 0.58333]),
    ('W', [0.0, 0.68333, 0.13889, 0.0, 0.94445]),
    ('X', [0.0, 0.68333, 0.07847, 0.08334, 0.82847]),
    ('Y', [0.0, 0.68333, 0.22222, 0.0, 0.58056]),
    ('Z', [0.0, 0.68333, 0.07153, 0.08334, 0.68264]),
    ('a', [0.0, 0.43056, 0.0, 0.0, 0.52859]),
    ('b', [0.0, 0.69444, 0.0, 0.0, 0.42917]),
    ('c', [0.0, 0.43056, 0.0, 0.05556, 0.43276]),
    ('d', [0.0, 0.69444, 0.0, 0.16667, 0.52049]),
    ('e', [0.0, 0.43056, 0.0, 0.05556, 0.46563]),
    ('f', [0.19444, 0.69444, 0.10764, 0.16667, 0.48959]),
    ('g', [0.19444, 0.43056, 0.03588, 0.02778, 0.47697]),
    ('h', [0.0, 0.69444, 0.0, 0.0, 0.57616]),
    ('i', [0.0, 0.65952, 0.0, 0.0, 0.34451]),
    ('j', [0.19444, 0.65952, 0.05724, 0.0, 0.41181]),
    ('k', [0.0, 0.69444, 0.03148, 0.0, 0.5206]),
    ('l', [0.0, 0.69444, 0.01968, 0.08334, 0.29838]),
    ('m', [0.0, 0.43056, 0.0, 0.0, 0.87801]),
    ('n', [0.0, 0.43056, 0.0, 0.0, 0.60023]),
    ('o', [0.0, 0.43056, 0.0, 0.05556, 0.48472]),
    ('p', [0.19444, 0.43056, 0.0, 0.08334, 0.50313]),
    ('q', [0.19444, 0.43056, 0.03588, 0.08334, 0.44641]),
    ('r', [0.0, 0.43056, 0.02778, 0.05556, 0.45116]),
    ('s', [0.0, 0.43056, 0.0, 0.05556, 0.46875]),
    ('t', [0.0, 0.61508, 0.0, 0.08334, 0.36111]),
    ('u', [0.0, 0.43056, 0.0, 0.02778, 0.57246]),
    ('v', [0.0, 0.43056, 0.03588, 0.02778, 0.48472]),
    ('w', [0.0, 0.43056, 0.02691, 0.08334, 0.71592]),
    ('x', [0.0, 0.43056, 0.0, 0.02778, 0.57153]),
    ('y', [0.19444, 0.43056, 0.03588, 0.05556, 0.49028]),
    ('z', [0.0, 0.43056, 0.04398, 0.05556, 0.46505]),
    ('\u{3b1}', [0.0, 0.43056, 0.0037, 0.02778, 0.6397]),
    ('\u{3b2}', [0.19444, 0.69444, 0.05278, 0.08334, 0.56563]),
    ('\u{3b3}', [0.19444, 0.43056, 0.05556, 0.0, 0.51773]),
    ('\u{3b4}', [0.0, 0.69444, 0.03785, 0.05556, 0.44444]),
    ('\u{3b5}', [0.0, 0.43056, 0.0, 0.08334, 0.46632]),
    ('\u{3b6}', [0.19444, 0.69444, 0.07378, 0.08334, 0.4375]),
    ('\u{3b7}', [0.19444, 0.43056, 0.03588, 0.05556, 0.49653]),
    ('\u{3b8}', [0.0, 0.69444, 0.02778, 0.08334, 0.46944]),
    ('\u{3b9}', [0.0, 0.43056, 0.0, 0.05556, 0.35394]),
    ('\u{3ba}', [0.0, 0.43056, 0.0, 0.0, 0.57616]),
    ('\u{3bb}', [0.0, 0.69444, 0.0, 0.0, 0.58334]),
    ('\u{3bc}', [0.19444, 0.43056, 0.0, 0.02778, 0.60255]),
    ('\u{3bd}', [0.0, 0.43056, 0.06366, 0.02778, 0.49398]),
    ('\u{3be}', [0.19444, 0.69444, 0.04601, 0.11111, 0.4375]),
    ('\u{3bf}', [0.0, 0.43056, 0.0, 0.05556, 0.48472]),
    ('\u{3c0}', [0.0, 0.43056, 0.03588, 0.0, 0.57003]),
    ('\u{3c1}', [0.19444, 0.43056, 0.0, 0.08334, 0.51702]),
    ('\u{3c2}', [0.09722, 0.43056, 0.07986, 0.08334, 0.36285]),
    ('\u{3c3}', [0.0, 0.43056, 0.03588, 0.0, 0.57141]),
    ('\u{3c4}', [0.0, 0.43056, 0.1132, 0.02778, 0.43715]),
    ('\u{3c5}', [0.0, 0.43056, 0.03588, 0.02778, 0.54028]),
    ('\u{3c6}', [0.19444, 0.43056, 0.0, 0.08334, 0.65417]),
    ('\u{3c7}', [0.19444, 0.43056, 0.0, 0.05556, 0.62569]),
    ('\u{3c8}', [0.19444, 0.69444, 0.03588, 0.11111, 0.65139]),
    ('\u{3c9}', [0.0, 0.43056, 0.03588, 0.0, 0.62245]),
    ('\u{3d1}', [0.0, 0.69444, 0.0, 0.08334, 0.59144]),
    ('\u{3d5}', [0.19444, 0.69444, 0.0, 0.08334, 0.59583]),
    ('\u{3d6}', [0.0, 0.43056, 0.02778, 0.0, 0.82813]),
    ('\u{3f1}', [0.19444, 0.43056, 0.0, 0.08334, 0.5172]),
    ('\u{3f5}', [0.0, 0.43056, 0.0, 0.05556, 0.4059]),
    ('\u{2202}', [0.0, 0.69444, 0.05556, 0.08334, 0.5618]),
];

static SIZE1_REGULAR: MetricTable = &[
    ('(', [0.35001, 0.85, 0.0, 0.0, 0.45834]),
    (')', [0.35001, 0.85, 0.0, 0.0, 0.45834]),
    ('/', [0.35001, 0.85, 0.0, 0.0, 0.57778]),
    ('[', [0.35001, 0.85, 0.0, 0.0, 0.41667]),
    ('\\', [0.35001, 0.85, 0.0, 0.0, 0.57778]),
    (']', [0.35001, 0.85, 0.0, 0.0, 0.41667]),
    ('{', [0.35001, 0.85, 0.0, 0.0, 0.58334]),
    ('}', [0.35001, 0.85, 0.0, 0.0, 0.58334]),
    ('\u{220f}', [0.25001, 0.75, 0.0, 0.0, 0.94445]),
    ('\u{2210}', [0.25001, 0.75, 0.0, 0.0, 0.94445]),
    ('\u{2211}', [0.25001, 0.75, 0.0, 0.0, 1.05556]),
    ('\u{221a}', [0.35001, 0.85, 0.0, 0.0, 1.0]),
    ('\u{222b}', [0.30612, 0.805, 0.19445, 0.0, 0.47222]),
    ('\u{222e}', [0.30612, 0.805, 0.19445, 0.0, 0.47222]),
    ('\u{22c2}', [0.25001, 0.75, 0.0, 0.0, 0.83334]),
    ('\u{22c3}', [0.25001, 0.75, 0.0, 0.0, 0.83334]),
    ('\u{2308}', [0.35001, 0.85, 0.0, 0.0, 0.47222]),
    ('\u{2309}', [0.35001, 0.85, 0.0, 0.0, 0.47222]),
    ('\u{230a}', [0.35001, 0.85, 0.0, 0.0, 0.47222]),
    ('\u{230b}', [0.35001, 0.85, 0.0, 0.0, 0.47222]),
    ('\u{27e8}', [0.35001, 0.85, 0.0, 0.0, 0.47222]),
    ('\u{27e9}', [0.35001, 0.85, 0.0, 0.0, 0.47222]),
];

static SIZE2_REGULAR: MetricTable = &[
    ('(', [0.65002, 1.15, 0.0, 0.0, 0.59722]),
    (')', [0.65002, 1.15, 0.0, 0.0, 0.59722]),
    ('/', [0.65002, 1.15, 0.0, 0.0, 0.81111]),
    ('[', [0.65002, 1.15, 0.0, 0.0, 0.47222]),
    ('\\', [0.65002, 1.15, 0.0, 0.0, 0.81111]),
    (']', [0.65002, 1.15, 0.0, 0.0, 0.47222]),
    ('{', [0.65002, 1.15, 0.0, 0.0, 0.66667]),
    ('}', [0.65002, 1.15, 0.0, 0.0, 0.66667]),
    ('\u{220f}', [0.55001, 1.05, 0.0, 0.0, 1.27778]),
    ('\u{2210}', [0.55001, 1.05, 0.0, 0.0, 1.27778]),
    ('\u{2211}', [0.55001, 1.05, 0.0, 0.0, 1.44445]),
    ('\u{221a}', [0.65002, 1.15, 0.0, 0.0, 1.0]),
    ('\u{222b}', [0.86225, 1.36, 0.44445, 0.0, 0.55556]),
    ('\u{222e}', [0.86225, 1.36, 0.44445, 0.0, 0.55556]),
    ('\u{22c2}', [0.55001, 1.05, 0.0, 0.0, 1.11111]),
    ('\u{22c3}', [0.55001, 1.05, 0.0, 0.0, 1.11111]),
    ('\u{2308}', [0.65002, 1.15, 0.0, 0.0, 0.52778]),
    ('\u{2309}', [0.65002, 1.15, 0.0, 0.0, 0.52778]),
    ('\u{230a}', [0.65002, 1.15, 0.0, 0.0, 0.52778]),
    ('\u{230b}', [0.65002, 1.15, 0.0, 0.0, 0.52778]),
    ('\u{27e8}', [0.65002, 1.15, 0.0, 0.0, 0.61111]),
    ('\u{27e9}', [0.65002, 1.15, 0.0, 0.0, 0.61111]),
];

static SIZE3_REGULAR: MetricTable = &[
    ('(', [0.95003, 1.45, 0.0, 0.0, 0.73611]),
    (')', [0.95003, 1.45, 0.0, 0.0, 0.73611]),
    ('/', [0.95003, 1.45, 0.0, 0.0, 1.04445]),
    ('[', [0.95003, 1.45, 0.0, 0.0, 0.52778]),
    ('\\', [0.95003, 1.45, 0.0, 0.0, 1.04445]),
    (']', [0.95003, 1.45, 0.0, 0.0, 0.52778]),
    ('{', [0.95003, 1.45, 0.0, 0.0, 0.75]),
    ('}', [0.95003, 1.45, 0.0, 0.0, 0.75]),
    ('\u{221a}', [0.95003, 1.45, 0.0, 0.0, 1.0]),
    ('\u{2308}', [0.95003, 1.45, 0.0, 0.0, 0.58334]),
    ('\u{2309}', [0.95003, 1.45, 0.0, 0.0, 0.58334]),
    ('\u{230a}', [0.95003, 1.45, 0.0, 0.0, 0.58334]),
    ('\u{230b}', [0.95003, 1.45, 0.0, 0.0, 0.58334]),
    ('\u{27e8}', [0.95003, 1.45, 0.0, 0.0, 0.75]),
    ('\u{27e9}', [0.95003, 1.45, 0.0, 0.0, 0.75]),
];

static SIZE4_REGULAR: MetricTable = &[
    ('(', [1.25003, 1.75, 0.0, 0.0, 0.79167]),
    (')', [1.25003, 1.75, 0.0, 0.0, 0.79167]),
    ('/', [1.25003, 1.75, 0.0, 0.0, 1.27778]),
    ('[', [1.25003, 1.75, 0.0, 0.0, 0.58334]),
    ('\\', [1.25003, 1.75, 0.0, 0.0, 1.27778]),
    (']', [1.25003, 1.75, 0.0, 0.0, 0.58334]),
    ('{', [1.25003, 1.75, 0.0, 0.0, 0.80556]),
    ('}', [1.25003, 1.75, 0.0, 0.0, 0.80556]),
    ('\u{221a}', [1.25003, 1.75, 0.0, 0.0, 1.0]),
    ('\u{2308}', [1.25003, 1.75, 0.0, 0.0, 0.63889]),
    ('\u{2309}', [1.25003, 1.75, 0.0, 0.0, 0.63889]),
    ('\u{230a}', [1.25003, 1.75, 0.0, 0.0, 0.63889]),
    ('\u{230b}', [1.25003, 1.75, 0.0, 0.0, 0.63889]),
    ('\u{27e8}', [1.25003, 1.75, 0.0, 0.0, 0.80556]),
    ('\u{27e9}', [1.25003, 1.75, 0.0, 0.0, 0.80556]),
];
