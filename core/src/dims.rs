use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

/// Position or offset on a grid, stored as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub const UP: Dims = Dims(-1, 0);
    pub const DOWN: Dims = Dims(1, 0);
    pub const LEFT: Dims = Dims(0, -1);
    pub const RIGHT: Dims = Dims(0, 1);

    /// Unit offsets in the order up, down, left, right.
    pub const CARDINALS: [Dims; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    pub fn col(self) -> i32 {
        self.1
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Manhattan distance between two cells.
    pub fn distance(self, other: Dims) -> i32 {
        (self - other).abs_sum()
    }

    pub fn is_adjacent(self, other: Dims) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl Div<i32> for Dims {
    type Output = Dims;

    fn div(self, other: i32) -> Dims {
        Dims(self.0 / other, self.1 / other)
    }
}
