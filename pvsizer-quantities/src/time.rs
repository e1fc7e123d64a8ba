use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

pub type Hours = Quantity<0, 1, 0>;

impl Hours {
    pub const ONE_DAY: Self = Self::new(24.0);
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}h", self.0)
    }
}
