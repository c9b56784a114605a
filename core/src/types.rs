/// Single coordinate axis used for positions on the board.
pub type Coord = u8;

/// Count type used for cell counts.
pub type CellCount = u8;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Signed single-cell step `(dx, dy)`.
pub type Delta = (i8, i8);

/// Width and height of the square board.
pub const BOARD_SIZE: Coord = 6;

/// Number of cells on the board.
pub const TOTAL_CELLS: CellCount = BOARD_SIZE * BOARD_SIZE;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((x, y): Coord2) -> bool {
    x < BOARD_SIZE && y < BOARD_SIZE
}

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
fn apply_delta(coords: Coord2, delta: Delta) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= BOARD_SIZE {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= BOARD_SIZE {
        return None;
    }

    Some((next_x, next_y))
}

/// Walks from `origin` (exclusive) one `delta` at a time until leaving the board.
#[derive(Debug)]
pub struct RayIter {
    cursor: Coord2,
    delta: Delta,
}

impl RayIter {
    pub fn new(origin: Coord2, delta: Delta) -> Self {
        Self {
            cursor: origin,
            delta,
        }
    }
}

impl Iterator for RayIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.delta == (0, 0) {
            return None;
        }

        let next_item = apply_delta(self.cursor, self.delta)?;
        self.cursor = next_item;
        Some(next_item)
    }
}

/// Iterates every board coordinate, x-major.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| (x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn ray_walks_until_edge() {
        let ray: Vec<_> = RayIter::new((0, 0), (1, 0)).collect();
        assert_eq!(ray, [(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn ray_from_edge_outwards_is_empty() {
        assert_eq!(RayIter::new((5, 5), (1, 1)).count(), 0);
        assert_eq!(RayIter::new((0, 3), (-1, 0)).count(), 0);
    }

    #[test]
    fn diagonal_ray_stops_at_first_axis_out_of_bounds() {
        let ray: Vec<_> = RayIter::new((1, 4), (1, -1)).collect();
        assert_eq!(ray, [(2, 3), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn coords_cover_whole_board_once() {
        let coords: Vec<_> = iter_coords().collect();
        assert_eq!(coords.len(), usize::from(TOTAL_CELLS));
        assert!(coords.iter().all(|&c| in_bounds(c)));
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (0, 1));
    }
}
