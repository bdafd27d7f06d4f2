use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul};

/// An amount of money, stored as a whole number of cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fee {
    cents: u32,
}

impl Fee {
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> u32 {
        self.cents
    }
}

impl Add for Fee {
    type Output = Fee;

    fn add(self, rhs: Self) -> Self::Output {
        Fee::from_cents(self.cents + rhs.cents)
    }
}

impl Mul<u32> for Fee {
    type Output = Fee;

    fn mul(self, rhs: u32) -> Self::Output {
        Fee::from_cents(self.cents * rhs)
    }
}

impl Display for Fee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
