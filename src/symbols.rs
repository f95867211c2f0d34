use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{font_metrics::Font, parse_node::Mode};

/// The typographic class of an atom. This governs inter-atom spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomClass {
    Ord,
    Op,
    Bin,
    Rel,
    Open,
    Close,
    Punct,
    Inner,
    /// Explicit spacing, which is transparent to spacing and Bin reclassification
    Spacing,
}
impl AtomClass {
    pub fn as_str(self) -> &'static str {
        match self {
            AtomClass::Ord => "mord",
            AtomClass::Op => "mop",
            AtomClass::Bin => "mbin",
            AtomClass::Rel => "mrel",
            AtomClass::Open => "mopen",
            AtomClass::Close => "mclose",
            AtomClass::Punct => "mpunct",
            AtomClass::Inner => "minner",
            AtomClass::Spacing => "mspace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub font: Font,
    pub class: AtomClass,
    /// The character actually set. `None` means the source text is used as is.
    pub replace: Option<&'static str>,
}
impl Symbol {
    /// The text to put in the output for `source`
    pub fn output_text<'a>(&self, source: &'a str) -> &'a str {
        self.replace.unwrap_or(source)
    }
}

pub struct Symbols {
    pub math: HashMap<&'static str, Symbol>,
    pub text: HashMap<&'static str, Symbol>,
}
impl Symbols {
    pub fn get(&self, mode: Mode, key: &str) -> Option<&Symbol> {
        match mode {
            Mode::Math => self.math.get(key),
            Mode::Text => self.text.get(key),
        }
    }

    pub fn contains_key(&self, mode: Mode, key: &str) -> bool {
        match mode {
            Mode::Math => self.math.contains_key(key),
            Mode::Text => self.text.contains_key(key),
        }
    }

    /// Math symbol in the main font. When `accept_unicode_char` is set the replacement
    /// character can be typed directly as well.
    fn cmath(&mut self, class: AtomClass, r: &'static str, name: &'static str, accept_unicode_char: bool) {
        let symbol = Symbol {
            font: Font::MainRegular,
            class,
            replace: Some(r),
        };
        self.math.insert(name, symbol);
        if accept_unicode_char && !r.is_empty() {
            self.math.insert(r, symbol);
        }
    }

    /// Math symbol in the math italic font
    fn imath(&mut self, r: &'static str, name: &'static str, accept_unicode_char: bool) {
        let symbol = Symbol {
            font: Font::MathItalic,
            class: AtomClass::Ord,
            replace: Some(r),
        };
        self.math.insert(name, symbol);
        if accept_unicode_char && !r.is_empty() {
            self.math.insert(r, symbol);
        }
    }

    /// Text symbol in the main font
    fn ctext(&mut self, class: AtomClass, r: &'static str, name: &'static str) {
        let symbol = Symbol {
            font: Font::MainRegular,
            class,
            replace: Some(r),
        };
        self.text.insert(name, symbol);
    }
}

pub static SYMBOLS: Lazy<Symbols> = Lazy::new(|| {
    use AtomClass::{Bin, Close, Inner, Open, Ord, Punct, Rel, Spacing};

    let mut s = Symbols {
        math: HashMap::new(),
        text: HashMap::new(),
    };

    // Relations
    s.cmath(Rel, "=", "=", false);
    s.cmath(Rel, "<", "<", false);
    s.cmath(Rel, ">", ">", false);
    s.cmath(Rel, ":", ":", false);
    s.cmath(Rel, "\u{2264}", "\\leq", true);
    s.cmath(Rel, "\u{2264}", "\\le", false);
    s.cmath(Rel, "\u{2265}", "\\geq", true);
    s.cmath(Rel, "\u{2265}", "\\ge", false);
    s.cmath(Rel, "\u{2260}", "\\neq", true);
    s.cmath(Rel, "\u{2260}", "\\ne", false);
    s.cmath(Rel, "\u{2261}", "\\equiv", true);
    s.cmath(Rel, "\u{223c}", "\\sim", true);
    s.cmath(Rel, "\u{2243}", "\\simeq", true);
    s.cmath(Rel, "\u{2248}", "\\approx", true);
    s.cmath(Rel, "\u{2245}", "\\cong", true);
    s.cmath(Rel, "\u{224d}", "\\asymp", true);
    s.cmath(Rel, "\u{221d}", "\\propto", true);
    s.cmath(Rel, "\u{2208}", "\\in", true);
    s.cmath(Rel, "\u{220b}", "\\ni", true);
    s.cmath(Rel, "\u{2282}", "\\subset", true);
    s.cmath(Rel, "\u{2283}", "\\supset", true);
    s.cmath(Rel, "\u{2286}", "\\subseteq", true);
    s.cmath(Rel, "\u{2287}", "\\supseteq", true);
    s.cmath(Rel, "\u{2291}", "\\sqsubseteq", true);
    s.cmath(Rel, "\u{2292}", "\\sqsupseteq", true);
    s.cmath(Rel, "\u{227a}", "\\prec", true);
    s.cmath(Rel, "\u{227b}", "\\succ", true);
    s.cmath(Rel, "\u{226a}", "\\ll", true);
    s.cmath(Rel, "\u{226b}", "\\gg", true);
    s.cmath(Rel, "\u{22a2}", "\\vdash", true);
    s.cmath(Rel, "\u{22a3}", "\\dashv", true);
    s.cmath(Rel, "\u{22a5}", "\\perp", false);
    s.cmath(Rel, "\u{2223}", "\\mid", true);
    s.cmath(Rel, "\u{2225}", "\\parallel", true);
    s.cmath(Rel, "\u{2192}", "\\rightarrow", true);
    s.cmath(Rel, "\u{2192}", "\\to", false);
    s.cmath(Rel, "\u{2190}", "\\leftarrow", true);
    s.cmath(Rel, "\u{2190}", "\\gets", false);
    s.cmath(Rel, "\u{2194}", "\\leftrightarrow", true);
    s.cmath(Rel, "\u{21d2}", "\\Rightarrow", true);
    s.cmath(Rel, "\u{21d0}", "\\Leftarrow", true);
    s.cmath(Rel, "\u{21d4}", "\\Leftrightarrow", true);
    s.cmath(Rel, "\u{2191}", "\\uparrow", true);
    s.cmath(Rel, "\u{2193}", "\\downarrow", true);

    // Binary operators
    s.cmath(Bin, "+", "+", false);
    s.cmath(Bin, "\u{2212}", "-", false);
    s.cmath(Bin, "\u{2212}", "\u{2212}", false);
    s.cmath(Bin, "\u{2217}", "*", false);
    s.cmath(Bin, "\u{2217}", "\\ast", true);
    s.cmath(Bin, "\u{b1}", "\\pm", true);
    s.cmath(Bin, "\u{2213}", "\\mp", true);
    s.cmath(Bin, "\u{d7}", "\\times", true);
    s.cmath(Bin, "\u{f7}", "\\div", true);
    s.cmath(Bin, "\u{22c5}", "\\cdot", true);
    s.cmath(Bin, "\u{2218}", "\\circ", true);
    s.cmath(Bin, "\u{2219}", "\\bullet", true);
    s.cmath(Bin, "\u{22c6}", "\\star", true);
    s.cmath(Bin, "\u{2229}", "\\cap", true);
    s.cmath(Bin, "\u{222a}", "\\cup", true);
    s.cmath(Bin, "\u{2227}", "\\wedge", true);
    s.cmath(Bin, "\u{2227}", "\\land", false);
    s.cmath(Bin, "\u{2228}", "\\vee", true);
    s.cmath(Bin, "\u{2228}", "\\lor", false);
    s.cmath(Bin, "\u{2216}", "\\setminus", true);
    s.cmath(Bin, "\u{228e}", "\\uplus", true);
    s.cmath(Bin, "\u{2293}", "\\sqcap", true);
    s.cmath(Bin, "\u{2294}", "\\sqcup", true);
    s.cmath(Bin, "\u{2295}", "\\oplus", true);
    s.cmath(Bin, "\u{2296}", "\\ominus", true);
    s.cmath(Bin, "\u{2297}", "\\otimes", true);
    s.cmath(Bin, "\u{2298}", "\\oslash", true);
    s.cmath(Bin, "\u{2299}", "\\odot", true);
    s.cmath(Bin, "\u{22c4}", "\\diamond", true);
    s.cmath(Bin, "\u{2240}", "\\wr", true);
    s.cmath(Bin, "\u{25b3}", "\\bigtriangleup", true);
    s.cmath(Bin, "\u{25bd}", "\\bigtriangledown", true);

    // Delimiters
    s.cmath(Open, "(", "(", false);
    s.cmath(Open, "[", "[", false);
    s.cmath(Open, "{", "\\{", false);
    s.cmath(Open, "{", "\\lbrace", false);
    s.cmath(Open, "[", "\\lbrack", false);
    s.cmath(Open, "\u{27e8}", "\\langle", true);
    s.cmath(Open, "\u{2308}", "\\lceil", true);
    s.cmath(Open, "\u{230a}", "\\lfloor", true);
    s.cmath(Close, ")", ")", false);
    s.cmath(Close, "]", "]", false);
    s.cmath(Close, "}", "\\}", false);
    s.cmath(Close, "}", "\\rbrace", false);
    s.cmath(Close, "]", "\\rbrack", false);
    s.cmath(Close, "\u{27e9}", "\\rangle", true);
    s.cmath(Close, "\u{2309}", "\\rceil", true);
    s.cmath(Close, "\u{230b}", "\\rfloor", true);
    s.cmath(Close, "!", "!", false);
    s.cmath(Close, "?", "?", false);

    // Punctuation
    s.cmath(Punct, ",", ",", false);
    s.cmath(Punct, ";", ";", false);
    s.cmath(Punct, ":", "\\colon", false);

    // Ordinary symbols set upright
    s.cmath(Ord, "\u{2223}", "|", false);
    s.cmath(Ord, "\u{2223}", "\\vert", false);
    s.cmath(Ord, "\u{2225}", "\\|", false);
    s.cmath(Ord, "\u{2225}", "\\Vert", false);
    s.cmath(Ord, "/", "/", false);
    s.cmath(Ord, ".", ".", false);
    s.cmath(Ord, "@", "@", false);
    s.cmath(Ord, "\"", "\"", false);
    s.cmath(Ord, "\u{221e}", "\\infty", true);
    s.cmath(Ord, "\u{2207}", "\\nabla", true);
    s.cmath(Ord, "\u{2200}", "\\forall", true);
    s.cmath(Ord, "\u{2203}", "\\exists", true);
    s.cmath(Ord, "\u{2205}", "\\emptyset", true);
    s.cmath(Ord, "\u{ac}", "\\neg", true);
    s.cmath(Ord, "\u{ac}", "\\lnot", false);
    s.cmath(Ord, "\u{2032}", "\\prime", true);
    s.cmath(Ord, "\u{2113}", "\\ell", true);
    s.cmath(Ord, "\u{211c}", "\\Re", true);
    s.cmath(Ord, "\u{2111}", "\\Im", true);
    s.cmath(Ord, "\u{2135}", "\\aleph", true);
    s.cmath(Ord, "\u{2118}", "\\wp", true);
    s.cmath(Ord, "\u{2220}", "\\angle", true);
    s.cmath(Ord, "\u{22a4}", "\\top", true);
    s.cmath(Ord, "\u{22a5}", "\\bot", false);
    s.cmath(Ord, "\u{25b3}", "\\triangle", false);
    s.cmath(Ord, "\\", "\\backslash", false);
    s.cmath(Ord, "\u{22ee}", "\\vdots", true);
    s.cmath(Inner, "\u{2026}", "\\ldots", true);
    s.cmath(Inner, "\u{2026}", "\\dots", false);
    s.cmath(Inner, "\u{22ef}", "\\cdots", true);
    s.cmath(Inner, "\u{22f1}", "\\ddots", true);
    s.cmath(Ord, "\u{393}", "\\Gamma", true);
    s.cmath(Ord, "\u{394}", "\\Delta", true);
    s.cmath(Ord, "\u{398}", "\\Theta", true);
    s.cmath(Ord, "\u{39b}", "\\Lambda", true);
    s.cmath(Ord, "\u{39e}", "\\Xi", true);
    s.cmath(Ord, "\u{3a0}", "\\Pi", true);
    s.cmath(Ord, "\u{3a3}", "\\Sigma", true);
    s.cmath(Ord, "\u{3a5}", "\\Upsilon", true);
    s.cmath(Ord, "\u{3a6}", "\\Phi", true);
    s.cmath(Ord, "\u{3a8}", "\\Psi", true);
    s.cmath(Ord, "\u{3a9}", "\\Omega", true);

    // Ordinary symbols set in italic
    s.imath("\u{3b1}", "\\alpha", true);
    s.imath("\u{3b2}", "\\beta", true);
    s.imath("\u{3b3}", "\\gamma", true);
    s.imath("\u{3b4}", "\\delta", true);
    s.imath("\u{3f5}", "\\epsilon", true);
    s.imath("\u{3b5}", "\\varepsilon", true);
    s.imath("\u{3b6}", "\\zeta", true);
    s.imath("\u{3b7}", "\\eta", true);
    s.imath("\u{3b8}", "\\theta", true);
    s.imath("\u{3d1}", "\\vartheta", true);
    s.imath("\u{3b9}", "\\iota", true);
    s.imath("\u{3ba}", "\\kappa", true);
    s.imath("\u{3bb}", "\\lambda", true);
    s.imath("\u{3bc}", "\\mu", true);
    s.imath("\u{3bd}", "\\nu", true);
    s.imath("\u{3be}", "\\xi", true);
    s.imath("\u{3bf}", "\\omicron", true);
    s.imath("\u{3c0}", "\\pi", true);
    s.imath("\u{3d6}", "\\varpi", true);
    s.imath("\u{3c1}", "\\rho", true);
    s.imath("\u{3f1}", "\\varrho", true);
    s.imath("\u{3c3}", "\\sigma", true);
    s.imath("\u{3c2}", "\\varsigma", true);
    s.imath("\u{3c4}", "\\tau", true);
    s.imath("\u{3c5}", "\\upsilon", true);
    s.imath("\u{3d5}", "\\phi", true);
    s.imath("\u{3c6}", "\\varphi", true);
    s.imath("\u{3c7}", "\\chi", true);
    s.imath("\u{3c8}", "\\psi", true);
    s.imath("\u{3c9}", "\\omega", true);
    s.imath("\u{2202}", "\\partial", true);

    // Explicit spacing. The widths live in `spacing_data`.
    for name in [
        "\\ ", "~", "\\,", "\\:", "\\;", "\\!", "\\quad", "\\qquad", "\\space", "\\nobreakspace",
    ] {
        s.cmath(Spacing, "\u{a0}", name, false);
        s.ctext(Spacing, "\u{a0}", name);
    }

    let math_text_symbols = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    for sym in math_text_symbols {
        s.cmath(Ord, sym, sym, false);
    }

    let text_symbols = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "!", "@", "*", "(", ")", "-", "=", "+",
        "\"", ";", ":", "?", "/", ".", ",", "[", "]", "'", "<", ">",
    ];
    for sym in text_symbols {
        s.ctext(Ord, sym, sym);
    }
    // A run of whitespace in text mode
    s.ctext(Ord, "\u{a0}", " ");

    let letters = [
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
        "S", "T", "U", "V", "W", "X", "Y", "Z", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j",
        "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    ];
    for letter in letters {
        s.imath(letter, letter, false);
        s.ctext(Ord, letter, letter);
    }

    s
});
