use std::ops::Neg;

use rand::Rng;
use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from(rng.gen_range(0..4_u8))
    }

    /// Unit vector in screen coordinates (y grows downwards)
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            D => (0, 1),
            L => (-1, 0),
            R => (1, 0),
        }
    }
}

#[test]
fn test_dir_neg() {
    for (dir, opposite) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, opposite);
        let (dx, dy) = dir.delta();
        assert_eq!((-dx, -dy), opposite.delta());
    }
}

#[test]
fn test_dir_random_covers_all() {
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    let mut rng = StdRng::seed_from_u64(7);
    let seen: HashSet<_> = (0..200).map(|_| Dir::random(&mut rng)).collect();
    assert_eq!(seen.len(), 4);
}
