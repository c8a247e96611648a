use std::fmt::{self, Display};

use crate::Vector;

/// Renders `name: value | name: value | ...` in component order.
///
/// Formatting flags apply to every value, so `{:.2}` prints each float with two decimals.
impl<T, const N: usize> Display for Vector<T, N>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" | ")?;
            }
            match Self::field_name(index) {
                Some(name) => write!(f, "{name}: ")?,
                None => write!(f, "{index}: ")?,
            }
            value.fmt(f)?;
        }
        Ok(())
    }
}
