//! Packed cell sets for a single board.
//!
//! A `CellMask` stores one bit per grid cell inside an unsigned integer `T`.
//! Cells are addressed through [`Coord`], which is already bounds-checked, so
//! every operation here is infallible. The board keeps three of these: ship
//! occupancy, hits and misses.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};
use num_traits::{PrimInt, Unsigned};

use crate::common::Coord;
use crate::config::BOARD_SIZE;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A set of cells on a `BOARD_SIZE`×`BOARD_SIZE` grid packed into `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMask<T>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

/// The mask type used by [`Board`](crate::Board).
pub type BoardMask = CellMask<u128>;

impl<T> CellMask<T>
where
    T: PrimInt + Unsigned,
{
    // Compile-time guard: the grid has to fit into `T`.
    const FITS: () = assert!(CELLS <= core::mem::size_of::<T>() * 8);

    #[inline]
    fn bit(coord: Coord) -> T {
        T::one() << coord.index()
    }

    #[inline]
    fn full() -> T {
        if CELLS == core::mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << CELLS) - T::one()
        }
    }

    /// An empty mask.
    #[inline]
    pub fn new() -> Self {
        let _ = Self::FITS;
        CellMask { bits: T::zero() }
    }

    /// Builds a mask from a list of coordinates.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = Self::new();
        for coord in coords {
            mask.insert(coord);
        }
        mask
    }

    /// Whether `coord` is in the set.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        !(self.bits & Self::bit(coord)).is_zero()
    }

    /// Adds `coord`. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, coord: Coord) -> bool {
        let present = self.contains(coord);
        self.bits = self.bits | Self::bit(coord);
        !present
    }

    /// Removes `coord`. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, coord: Coord) -> bool {
        let present = self.contains(coord);
        self.bits = self.bits & !Self::bit(coord);
        present
    }

    /// Empties the set.
    #[inline]
    pub fn reset(&mut self) {
        self.bits = T::zero();
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True when no cell is in both masks.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// Iterates the cells in row-major order.
    pub fn iter(&self) -> Cells<T> {
        Cells {
            bits: self.bits,
            next: 0,
        }
    }
}

impl<T> Default for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Coord> for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::from_coords(iter)
    }
}

impl<T> BitAnd for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T> BitOr for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid.
impl<T> Not for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn not(self) -> Self {
        CellMask {
            bits: !self.bits & Self::full(),
        }
    }
}

impl<T> fmt::Debug for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask ({} set):", self.len())?;
        fmt::Display::fmt(self, f)
    }
}

impl<T> fmt::Display for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coord in Coord::all() {
            let ch = if self.contains(coord) { '■' } else { '□' };
            write!(f, "{} ", ch)?;
            if coord.col() + 1 == BOARD_SIZE && coord.row() + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`CellMask`].
#[derive(Clone, Copy)]
pub struct Cells<T> {
    bits: T,
    next: usize,
}

impl<T> Iterator for Cells<T>
where
    T: PrimInt + Unsigned,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.next < CELLS {
            let idx = self.next;
            self.next += 1;
            if !((self.bits >> idx) & T::one()).is_zero() {
                return Some(Coord::from_index(idx));
            }
        }
        None
    }
}
