use std::{
    iter::Sum,
    ops::{Add, AddAssign, Mul, Neg, Sub},
};

/// An f64 in em, which is a unit relative to the font size of the outermost element.
///
/// Every length stored in the layout tree is in absolute em: glyph metrics and font
/// parameters have already been multiplied by the size multiplier of their context.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Em(pub f64);
impl Em {
    pub const ZERO: Em = Em(0.0);

    pub fn max(self, other: Em) -> Em {
        Em(self.0.max(other.0))
    }

    pub fn min(self, other: Em) -> Em {
        Em(self.0.min(other.0))
    }
}
impl Add for Em {
    type Output = Em;

    fn add(self, rhs: Em) -> Em {
        Em(self.0 + rhs.0)
    }
}
impl AddAssign for Em {
    fn add_assign(&mut self, rhs: Em) {
        self.0 += rhs.0;
    }
}
impl Sum for Em {
    fn sum<I: Iterator<Item = Em>>(iter: I) -> Em {
        iter.fold(Em::ZERO, Add::add)
    }
}
impl Sub for Em {
    type Output = Em;

    fn sub(self, rhs: Em) -> Em {
        Em(self.0 - rhs.0)
    }
}
impl Neg for Em {
    type Output = Em;

    fn neg(self) -> Em {
        Em(-self.0)
    }
}
impl Mul<f64> for Em {
    type Output = Em;

    fn mul(self, rhs: f64) -> Em {
        Em(self.0 * rhs)
    }
}

/// Math units. 18mu make up one quad of the font in use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mu(pub f64);

/// TeX point
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pt(pub f64);
impl Pt {
    /// Convert to em, given how many points make up an em at the current size
    pub fn to_em(self, pt_per_em: f64) -> Em {
        Em(self.0 / pt_per_em)
    }
}

/// Format an em value for the markup backends. Rounded to four decimal places so that
/// both backends (and repeated renders) produce byte-identical text.
pub fn make_em(v: f64) -> String {
    let rounded = (v * 10000.0).round() / 10000.0;
    // Avoid printing "-0em"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}em", rounded)
}

#[cfg(test)]
mod tests {
    use super::{make_em, Em, Pt};

    #[test]
    fn test_make_em() {
        assert_eq!(make_em(0.5), "0.5em");
        assert_eq!(make_em(1.0), "1em");
        assert_eq!(make_em(0.123456), "0.1235em");
        assert_eq!(make_em(-0.00001), "0em");
        assert_eq!(make_em(-0.25), "-0.25em");
    }

    #[test]
    fn test_em_arith() {
        assert_eq!(Em(1.0) + Em(0.5), Em(1.5));
        assert_eq!(Em(1.0) - Em(0.5), Em(0.5));
        assert_eq!(-Em(1.0), Em(-1.0));
        assert_eq!(Em(2.0) * 0.5, Em(1.0));
        assert_eq!(Em(2.0).max(Em(3.0)), Em(3.0));
        assert_eq!([Em(1.0), Em(0.25)].into_iter().sum::<Em>(), Em(1.25));
        assert_eq!(Pt(5.0).to_em(10.0), Em(0.5));
    }
}
