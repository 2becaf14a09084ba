//! Track tests - grid model, edits and derived views

mod common;

use std::collections::BTreeMap;

use line_track_designer::core::{Axis, Track, TrackError};
use line_track_designer::types::{Cell, Orientation};

use common::{fixture, sample_track};

#[test]
fn test_track_new() {
    let track = sample_track();
    assert_eq!(track.tiles(), vec![vec![3, 2, 3], vec![2, 11, 2], vec![3, 2, 3]]);
    assert_eq!(track.orient(), vec![vec![1, 1, 0], vec![0, 0, 0], vec![2, 1, 3]]);
    assert_eq!(track.name(), "Test track");
}

#[test]
fn test_track_copies_input() {
    let mut tiles = vec![vec![2, 3]];
    let orient = vec![vec![0, 1]];
    let track = Track::new(&tiles, &orient, "copy").unwrap();
    tiles[0][0] = 4;
    assert_eq!(track.tiles(), vec![vec![2, 3]]);
}

#[test]
fn test_track_string_format() {
    let expected = std::fs::read_to_string(common::data("track.txt")).unwrap();
    assert_eq!(sample_track().to_string(), expected);
}

#[test]
fn test_invalid_tiles_rejected() {
    for bad in [10, 32, 1, 34, -2] {
        let err = Track::new(&[vec![2, bad]], &[vec![0, 0]], "bad").unwrap_err();
        assert!(matches!(err, TrackError::InvalidTile(v) if v == bad), "tile {}", bad);
    }
}

#[test]
fn test_invalid_orient_rejected() {
    for bad in [4, -1] {
        let err = Track::new(&[vec![2]], &[vec![bad]], "bad").unwrap_err();
        assert!(matches!(err, TrackError::InvalidOrient(v) if v == bad), "orient {}", bad);
    }
    // Orientation is checked on empty cells too.
    assert!(Track::new(&[vec![0]], &[vec![5]], "bad").is_err());
}

#[test]
fn test_shape_mismatch_rejected() {
    let err = Track::new(&[vec![2, 3]], &[vec![0, 0], vec![0, 0]], "bad").unwrap_err();
    assert!(matches!(err, TrackError::ShapeMismatch { .. }));
    let err = Track::new(&[vec![2, 3]], &[vec![0]], "bad").unwrap_err();
    assert!(matches!(err, TrackError::ShapeMismatch { .. }));
}

#[test]
fn test_zeros() {
    let track = Track::zeros(2, 3, "empty");
    assert_eq!(track.shape(), (2, 3));
    assert!(track.cells().iter().all(|c| *c == Cell::EMPTY));
    assert_eq!(track.to_string(), "0;0 0;0 0;0\n0;0 0;0 0;0");
}

#[test]
fn test_max_shape() {
    assert_eq!(Track::max_shape(2000, 1500), (10, 7));
    assert_eq!(Track::max_shape(200, 150), (1, 0));
}

#[test]
fn test_add() {
    let mut track = fixture("track.txt");
    track.add_col();
    track.add_row();
    assert_eq!(
        track.tiles(),
        vec![
            vec![3, 2, 3, 0],
            vec![2, 11, 2, 0],
            vec![3, 2, 3, 0],
            vec![0, 0, 0, 0]
        ]
    );
    assert_eq!(
        track.orient(),
        vec![
            vec![1, 1, 0, 0],
            vec![0, 0, 0, 0],
            vec![2, 1, 3, 0],
            vec![0, 0, 0, 0]
        ]
    );
}

#[test]
fn test_del() {
    let mut track = fixture("track.txt");
    track.del_col(1).unwrap();
    track.del_row(1).unwrap();
    assert_eq!(track.tiles(), vec![vec![3, 3], vec![3, 3]]);
    assert_eq!(track.orient(), vec![vec![1, 0], vec![2, 3]]);
}

#[test]
fn test_del_edges() {
    let mut track = fixture("track_hard.txt");
    track.del_row(0).unwrap();
    track.del_row(3).unwrap();
    track.del_col(2).unwrap();
    assert_eq!(track.tiles(), vec![vec![2, 11], vec![26, 0], vec![0, 5]]);
}

#[test]
fn test_del_out_of_range() {
    let mut track = fixture("track.txt");
    assert!(matches!(
        track.del_col(3),
        Err(TrackError::IndexOutOfBounds { axis: Axis::Col, index: 3, len: 3 })
    ));
    assert!(matches!(
        track.del_row(9),
        Err(TrackError::IndexOutOfBounds { axis: Axis::Row, .. })
    ));
    assert_eq!(track, fixture("track.txt"));
}

#[test]
fn test_set_tile() {
    let mut track = fixture("track.txt");
    track.set_tile(1, 2, 26, 2).unwrap();
    track.set_tile(3, 3, 12, 1).unwrap();
    assert_eq!(
        track.tiles(),
        vec![
            vec![3, 2, 3, 0],
            vec![2, 11, 26, 0],
            vec![3, 2, 3, 0],
            vec![0, 0, 0, 12]
        ]
    );
    assert_eq!(
        track.orient(),
        vec![
            vec![1, 1, 0, 0],
            vec![0, 0, 2, 0],
            vec![2, 1, 3, 0],
            vec![0, 0, 0, 1]
        ]
    );
}

#[test]
fn test_set_tile_grows_with_empty_cells() {
    let mut track = Track::zeros(2, 3, "grow");
    track.set_tile(4, 5, 17, 1).unwrap();
    assert!(track.rows() >= 5);
    assert!(track.cols() >= 6);
    assert_eq!(track.cell(4, 5), Some(Cell::new(17, Orientation::East)));
    for r in 0..track.rows() {
        for c in 0..track.cols() {
            if (r, c) != (4, 5) {
                assert_eq!(track.cell(r, c), Some(Cell::EMPTY), "cell ({}, {})", r, c);
            }
        }
    }
}

#[test]
fn test_set_tile_clears_cell_with_zero() {
    let mut track = sample_track();
    track.set_tile(1, 1, 0, 3).unwrap();
    assert_eq!(track.cell(1, 1), Some(Cell::new(0, Orientation::West)));
    assert!(!track.occurrences().contains_key(&11));
}

#[test]
fn test_shape_invariant_after_edits() {
    let mut track = Track::zeros(1, 1, "ops");
    track.add_row();
    track.add_col();
    track.set_tile(5, 2, 4, 3).unwrap();
    track.del_row(0).unwrap();
    track.del_col(1).unwrap();
    track.rotate(1);
    track.set_tile(0, 7, 9, 0).unwrap();

    let tiles = track.tiles();
    let orient = track.orient();
    assert_eq!(tiles.len(), track.rows());
    assert_eq!(orient.len(), track.rows());
    for (rt, ro) in tiles.iter().zip(&orient) {
        assert_eq!(rt.len(), track.cols());
        assert_eq!(ro.len(), track.cols());
    }
}

#[test]
fn test_dimensions() {
    assert_eq!(Track::zeros(2, 3, "d").dimensions(), (600, 400));
    assert_eq!(fixture("track.txt").dimensions(), (600, 600));
    assert_eq!(fixture("track_hard.txt").dimensions(), (600, 1000));
}

#[test]
fn test_occurrences() {
    let expected: BTreeMap<u8, usize> = [(3, 4), (2, 4), (11, 1)].into_iter().collect();
    assert_eq!(sample_track().occurrences(), expected);
    assert!(Track::zeros(3, 3, "none").occurrences().is_empty());
}
