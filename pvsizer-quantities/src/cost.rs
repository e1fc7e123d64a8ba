use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Money in the local currency (Brazilian real).
pub type Cost = Quantity<0, 0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ok() {
        assert_eq!(Cost::from(578.0).to_string(), "R$ 578.00");
        assert_eq!(format!("{:?}", Cost::from(0.01)), "R$0.01");
    }
}
