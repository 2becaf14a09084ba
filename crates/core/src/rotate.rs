//! Rotation of a whole track by quarter-turns.
//!
//! Turning the track moves every cell to its new grid position and also turns
//! the tile lying in it, so each orientation advances by the same number of
//! quarter-turns.

use tracing::info;

use crate::track::Track;

/// Rotate `track` clockwise `k` times by 90°. Negative `k` turns counter-clockwise.
pub fn rotate(track: &mut Track, k: i32) {
    let (rows, cols) = track.shape();
    match k.rem_euclid(4) {
        0 => {}
        // (r, c) -> (c, rows - 1 - r)
        1 => track.reshape(cols, rows, |r, c| (rows - 1 - c, r)),
        2 => track.reshape(rows, cols, |r, c| (rows - 1 - r, cols - 1 - c)),
        // (r, c) -> (cols - 1 - c, r)
        _ => track.reshape(cols, rows, |r, c| (c, cols - 1 - r)),
    }
    track.map_cells(|mut cell| {
        cell.orient = cell.orient.rotated(k);
        cell
    });
    info!(k, "Track rotated");
}

impl Track {
    /// See [`rotate`].
    pub fn rotate(&mut self, k: i32) {
        rotate(self, k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Track {
        // 2 rows x 3 cols
        Track::new(
            &[vec![2, 3, 4], vec![5, 6, 7]],
            &[vec![0, 1, 2], vec![3, 0, 1]],
            "l",
        )
        .unwrap()
    }

    #[test]
    fn quarter_turn_moves_cells_clockwise() {
        let mut track = l_shape();
        rotate(&mut track, 1);
        assert_eq!(track.shape(), (3, 2));
        assert_eq!(track.tiles(), vec![vec![5, 2], vec![6, 3], vec![7, 4]]);
        assert_eq!(track.orient(), vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
    }

    #[test]
    fn negative_turn_is_counter_clockwise() {
        let mut track = l_shape();
        rotate(&mut track, -1);
        assert_eq!(track.tiles(), vec![vec![4, 7], vec![3, 6], vec![2, 5]]);
        assert_eq!(track.orient(), vec![vec![1, 0], vec![0, 3], vec![3, 2]]);

        let mut other = l_shape();
        rotate(&mut other, 3);
        assert_eq!(track, other);
    }

    #[test]
    fn half_turn_keeps_shape() {
        let mut track = l_shape();
        rotate(&mut track, 2);
        assert_eq!(track.shape(), (2, 3));
        assert_eq!(track.tiles(), vec![vec![7, 6, 5], vec![4, 3, 2]]);
        assert_eq!(track.orient(), vec![vec![3, 2, 1], vec![0, 3, 2]]);
    }

    #[test]
    fn zero_turn_is_identity() {
        let mut track = l_shape();
        rotate(&mut track, 0);
        assert_eq!(track, l_shape());
    }
}
