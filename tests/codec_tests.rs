//! Codec tests - text format and track files

mod common;

use std::fs;

use line_track_designer::core::{decode, parse, read_track, render, save_txt, Track, TrackError};

use common::{data, fixture, sample_track};

#[test]
fn test_example_scenario_text() {
    assert_eq!(render(&sample_track()), "3;1 2;1 3;0\n2;0 11;0 2;0\n3;2 2;1 3;3");
}

#[test]
fn test_round_trip() {
    let mut tracks = vec![sample_track(), fixture("track_hard.txt"), Track::zeros(2, 4, "z")];
    let mut edited = sample_track();
    edited.set_tile(4, 4, 33, 3).unwrap();
    edited.rotate(1);
    tracks.push(edited);

    for track in tracks {
        let (tiles, orient) = parse(&render(&track)).unwrap();
        let as_wide = |g: Vec<Vec<u8>>| -> Vec<Vec<i64>> {
            g.into_iter()
                .map(|r| r.into_iter().map(i64::from).collect())
                .collect()
        };
        assert_eq!(tiles, as_wide(track.tiles()));
        assert_eq!(orient, as_wide(track.orient()));
    }
}

#[test]
fn test_decode_validates_values() {
    assert!(matches!(decode("2;0 32;0", "x"), Err(TrackError::InvalidTile(32))));
    assert!(matches!(decode("2;0 3;4", "x"), Err(TrackError::InvalidOrient(4))));
    assert!(matches!(decode("2;0 3;0\n2;0", "x"), Err(TrackError::Format(_))));
    assert!(matches!(decode("2,0", "x"), Err(TrackError::Format(_))));
}

#[test]
fn test_read_fixture() {
    let track = read_track(data("track.txt"), "named").unwrap();
    assert_eq!(track.name(), "named");
    assert_eq!(track, Track::new(
        &[vec![3, 2, 3], vec![2, 11, 2], vec![3, 2, 3]],
        &[vec![1, 1, 0], vec![0, 0, 0], vec![2, 1, 3]],
        "named",
    )
    .unwrap());
}

#[test]
fn test_read_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        read_track(dir.path().join("missing.txt"), "x"),
        Err(TrackError::FileNotFound(_))
    ));

    let md = dir.path().join("track.md");
    fs::write(&md, "2;0").unwrap();
    assert!(matches!(read_track(&md, "x"), Err(TrackError::Format(_))));

    let broken = dir.path().join("broken.txt");
    fs::write(&broken, "2;0 x;1").unwrap();
    assert!(matches!(read_track(&broken, "x"), Err(TrackError::Format(_))));
}

#[test]
fn test_save_and_reload_after_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edited.txt");

    let mut track = fixture("track.txt");
    track.add_row();
    track.set_tile(3, 1, 26, 2).unwrap();
    save_txt(&track, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.ends_with('\n'));
    assert_eq!(text.lines().last(), Some("0;0 26;2 0;0"));
    assert_eq!(read_track(&path, "fixture").unwrap(), track);
}

#[test]
fn test_emptied_track_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emptied.txt");

    let mut one_col = Track::zeros(2, 1, "fixture");
    one_col.del_col(0).unwrap();
    save_txt(&one_col, &path).unwrap();
    let back = read_track(&path, "fixture").unwrap();
    assert_eq!(back, one_col);
    assert_eq!(back.shape(), (0, 0));

    let mut one_row = Track::zeros(1, 3, "fixture");
    one_row.del_row(0).unwrap();
    save_txt(&one_row, &path).unwrap();
    assert_eq!(read_track(&path, "fixture").unwrap().shape(), one_row.shape());

    // Editing can resume from the emptied file.
    let mut again = read_track(&path, "fixture").unwrap();
    again.set_tile(0, 1, 4, 2).unwrap();
    assert_eq!(again.to_string(), "0;0 4;2");
}
