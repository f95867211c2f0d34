//! Describes spaces between different classes of atoms, and the widths of explicit spaces.

use crate::{
    symbols::AtomClass,
    unit::{Em, Mu},
    util::find_assoc_data,
};

const THIN_SPACE: Mu = Mu(3.0);
const MEDIUM_SPACE: Mu = Mu(4.0);
const THICK_SPACE: Mu = Mu(5.0);

/// Spacing relationships for display and text styles
pub(crate) const SPACINGS: &[((AtomClass, AtomClass), Mu)] = &[
    ((AtomClass::Ord, AtomClass::Op), THIN_SPACE),
    ((AtomClass::Ord, AtomClass::Bin), MEDIUM_SPACE),
    ((AtomClass::Ord, AtomClass::Rel), THICK_SPACE),
    ((AtomClass::Ord, AtomClass::Inner), THIN_SPACE),
    //
    ((AtomClass::Op, AtomClass::Ord), THIN_SPACE),
    ((AtomClass::Op, AtomClass::Op), THIN_SPACE),
    ((AtomClass::Op, AtomClass::Rel), THICK_SPACE),
    ((AtomClass::Op, AtomClass::Inner), THIN_SPACE),
    //
    ((AtomClass::Bin, AtomClass::Ord), MEDIUM_SPACE),
    ((AtomClass::Bin, AtomClass::Op), MEDIUM_SPACE),
    ((AtomClass::Bin, AtomClass::Open), MEDIUM_SPACE),
    ((AtomClass::Bin, AtomClass::Inner), MEDIUM_SPACE),
    //
    ((AtomClass::Rel, AtomClass::Ord), THICK_SPACE),
    ((AtomClass::Rel, AtomClass::Op), THICK_SPACE),
    ((AtomClass::Rel, AtomClass::Open), THICK_SPACE),
    ((AtomClass::Rel, AtomClass::Inner), THICK_SPACE),
    //
    ((AtomClass::Close, AtomClass::Op), THIN_SPACE),
    ((AtomClass::Close, AtomClass::Bin), MEDIUM_SPACE),
    ((AtomClass::Close, AtomClass::Rel), THICK_SPACE),
    ((AtomClass::Close, AtomClass::Inner), THIN_SPACE),
    //
    ((AtomClass::Punct, AtomClass::Ord), THIN_SPACE),
    ((AtomClass::Punct, AtomClass::Op), THIN_SPACE),
    ((AtomClass::Punct, AtomClass::Rel), THIN_SPACE),
    ((AtomClass::Punct, AtomClass::Open), THIN_SPACE),
    ((AtomClass::Punct, AtomClass::Close), THIN_SPACE),
    ((AtomClass::Punct, AtomClass::Punct), THIN_SPACE),
    ((AtomClass::Punct, AtomClass::Inner), THIN_SPACE),
    //
    ((AtomClass::Inner, AtomClass::Ord), THIN_SPACE),
    ((AtomClass::Inner, AtomClass::Op), THIN_SPACE),
    ((AtomClass::Inner, AtomClass::Bin), MEDIUM_SPACE),
    ((AtomClass::Inner, AtomClass::Rel), THICK_SPACE),
    ((AtomClass::Inner, AtomClass::Open), THIN_SPACE),
    ((AtomClass::Inner, AtomClass::Punct), THIN_SPACE),
    ((AtomClass::Inner, AtomClass::Inner), THIN_SPACE),
];

/// Spacing relationships for script and scriptscript styles
pub(crate) const TIGHT_SPACINGS: &[((AtomClass, AtomClass), Mu)] = &[
    ((AtomClass::Ord, AtomClass::Op), THIN_SPACE),
    //
    ((AtomClass::Op, AtomClass::Ord), THIN_SPACE),
    ((AtomClass::Op, AtomClass::Op), THIN_SPACE),
    //
    ((AtomClass::Close, AtomClass::Op), THIN_SPACE),
    //
    ((AtomClass::Inner, AtomClass::Op), THIN_SPACE),
];

/// The space between a `left` atom and a `right` atom, if any.
pub(crate) fn atom_spacing(left: AtomClass, right: AtomClass, tight: bool) -> Option<Mu> {
    let table = if tight { TIGHT_SPACINGS } else { SPACINGS };
    find_assoc_data(table, (left, right)).copied()
}

/// Width of an explicit spacing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ExplicitSpace {
    Mu(Mu),
    Em(Em),
}

pub(crate) const EXPLICIT_SPACES: &[(&str, ExplicitSpace)] = &[
    ("\\,", ExplicitSpace::Mu(THIN_SPACE)),
    ("\\:", ExplicitSpace::Mu(MEDIUM_SPACE)),
    ("\\;", ExplicitSpace::Mu(THICK_SPACE)),
    ("\\!", ExplicitSpace::Mu(Mu(-3.0))),
    ("\\ ", ExplicitSpace::Em(Em(0.25))),
    ("~", ExplicitSpace::Em(Em(0.25))),
    ("\\space", ExplicitSpace::Em(Em(0.25))),
    ("\\nobreakspace", ExplicitSpace::Em(Em(0.25))),
    ("\\quad", ExplicitSpace::Em(Em(1.0))),
    ("\\qquad", ExplicitSpace::Em(Em(2.0))),
];

pub(crate) fn explicit_space(name: &str) -> Option<ExplicitSpace> {
    find_assoc_data(EXPLICIT_SPACES, name).copied()
}

#[cfg(test)]
mod tests {
    use super::{atom_spacing, explicit_space, ExplicitSpace};
    use crate::{symbols::AtomClass, unit::Mu};

    #[test]
    fn test_atom_spacing() {
        assert_eq!(atom_spacing(AtomClass::Ord, AtomClass::Bin, false), Some(Mu(4.0)));
        assert_eq!(atom_spacing(AtomClass::Rel, AtomClass::Ord, false), Some(Mu(5.0)));
        assert_eq!(atom_spacing(AtomClass::Ord, AtomClass::Ord, false), None);
        assert_eq!(atom_spacing(AtomClass::Ord, AtomClass::Bin, true), None);
        assert_eq!(atom_spacing(AtomClass::Op, AtomClass::Ord, true), Some(Mu(3.0)));
        assert_eq!(atom_spacing(AtomClass::Punct, AtomClass::Rel, false), Some(Mu(3.0)));
        assert_eq!(atom_spacing(AtomClass::Punct, AtomClass::Rel, true), None);
    }

    #[test]
    fn test_explicit_space() {
        assert_eq!(explicit_space("\\,"), Some(ExplicitSpace::Mu(Mu(3.0))));
        assert!(explicit_space("\\qquad").is_some());
        assert_eq!(explicit_space("x"), None);
    }
}
