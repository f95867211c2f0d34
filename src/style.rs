/// One of the eight TeX styles. The `c` suffix marks the cramped variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StyleId {
    D = 0,
    Dc = 1,
    T = 2,
    Tc = 3,
    S = 4,
    Sc = 5,
    SS = 6,
    SSc = 7,
}
impl StyleId {
    pub fn as_id(self) -> usize {
        self as usize
    }

    /// 0 for display, 1 for text, 2 for script and 3 for scriptscript
    pub fn size(self) -> usize {
        match self {
            StyleId::D | StyleId::Dc => 0,
            StyleId::T | StyleId::Tc => 1,
            StyleId::S | StyleId::Sc => 2,
            StyleId::SS | StyleId::SSc => 3,
        }
    }

    pub fn is_cramped(self) -> bool {
        matches!(self, StyleId::Dc | StyleId::Tc | StyleId::Sc | StyleId::SSc)
    }

    /// Whether inter-atom spacing should use the tight table
    pub fn is_tight(self) -> bool {
        self.size() >= 2
    }

    pub fn is_display(self) -> bool {
        self.size() == 0
    }

    /// Style of a superscript attached to an atom in this style
    pub fn sup(self) -> StyleId {
        SUP[self.as_id()]
    }

    /// Style of a subscript attached to an atom in this style
    pub fn sub(self) -> StyleId {
        SUB[self.as_id()]
    }

    pub fn frac_num(self) -> StyleId {
        FRACNUM[self.as_id()]
    }

    pub fn frac_den(self) -> StyleId {
        FRACDEN[self.as_id()]
    }

    pub fn cramp(self) -> StyleId {
        CRAMP[self.as_id()]
    }

    /// At least text style, keeping crampedness
    pub fn text(self) -> StyleId {
        TEXT[self.as_id()]
    }
}

const SUP: [StyleId; 8] = [
    StyleId::S,
    StyleId::Sc,
    StyleId::S,
    StyleId::Sc,
    StyleId::SS,
    StyleId::SSc,
    StyleId::SS,
    StyleId::SSc,
];
const SUB: [StyleId; 8] = [
    StyleId::Sc,
    StyleId::Sc,
    StyleId::Sc,
    StyleId::Sc,
    StyleId::SSc,
    StyleId::SSc,
    StyleId::SSc,
    StyleId::SSc,
];
const FRACNUM: [StyleId; 8] = [
    StyleId::T,
    StyleId::Tc,
    StyleId::S,
    StyleId::Sc,
    StyleId::SS,
    StyleId::SSc,
    StyleId::SS,
    StyleId::SSc,
];
const FRACDEN: [StyleId; 8] = [
    StyleId::Tc,
    StyleId::Tc,
    StyleId::Sc,
    StyleId::Sc,
    StyleId::SSc,
    StyleId::SSc,
    StyleId::SSc,
    StyleId::SSc,
];
const CRAMP: [StyleId; 8] = [
    StyleId::Dc,
    StyleId::Dc,
    StyleId::Tc,
    StyleId::Tc,
    StyleId::Sc,
    StyleId::Sc,
    StyleId::SSc,
    StyleId::SSc,
];
const TEXT: [StyleId; 8] = [
    StyleId::D,
    StyleId::Dc,
    StyleId::T,
    StyleId::Tc,
    StyleId::T,
    StyleId::Tc,
    StyleId::T,
    StyleId::Tc,
];

pub const DISPLAY_STYLE: StyleId = StyleId::D;
pub const TEXT_STYLE: StyleId = StyleId::T;
pub const SCRIPT_STYLE: StyleId = StyleId::S;
pub const SCRIPT_SCRIPT_STYLE: StyleId = StyleId::SS;
