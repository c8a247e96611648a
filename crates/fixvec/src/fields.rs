use fixvec_macros::named_fields;

use crate::Vector;

const XYZ: [&str; 3] = ["x", "y", "z"];
const LETTERS: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

impl<T, const N: usize> Vector<T, N> {
    /// Cosmetic name of the component at `index`: `x`, `y`, `z` up to three components,
    /// `a` through `j` above that.
    ///
    /// `None` past the end or past the tenth component.
    pub fn field_name(index: usize) -> Option<&'static str> {
        if index >= N {
            return None;
        }
        let names: &[&'static str] = if N <= XYZ.len() { &XYZ } else { &LETTERS };
        names.get(index).copied()
    }
}

named_fields! {
    2 => x y;
    3 => x y z;
    4 => a b c d;
    5 => a b c d e;
    6 => a b c d e f;
    7 => a b c d e f g;
    8 => a b c d e f g h;
    9 => a b c d e f g h i;
    10 => a b c d e f g h i j;
}
