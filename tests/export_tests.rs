//! Export tests - markdown build sheets and print planning

mod common;

use std::fs;
use std::path::Path;

use line_track_designer::core::TrackError;
use line_track_designer::export::{plan_jobs, save_md, ExportError, DEFAULT_MEDIA};
use line_track_designer::raster::Compositor;

use common::{sample_track, synthetic_catalog};

#[test]
fn test_save_md_writes_document_and_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("track.md");
    let catalog = synthetic_catalog(4);

    save_md(&sample_track(), &path, "A small loop", &Compositor::new(4), &catalog).unwrap();

    let expected = "\
# Test track

![Test track](track.png)

## Description

A small loop

## Dimensions
Width | Height
:---: | :---:
600 mm | 600 mm

## Tiles
Tile number | Number of copies required
:---: | :---:
2 | 4
3 | 4
11 | 1

Built with line-track-designer
";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);

    let png = image::open(dir.path().join("track.png")).unwrap().to_rgb8();
    assert_eq!(png.dimensions(), (4, 4));
}

#[test]
fn test_save_md_without_description() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.md");
    save_md(&sample_track(), &path, "", &Compositor::new(4), &synthetic_catalog(4)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("![Test track](plain.png)"));
    assert!(!text.contains("## Description"));
}

#[test]
fn test_save_md_checks_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("track.txt");
    let err = save_md(&sample_track(), &path, "", &Compositor::new(4), &synthetic_catalog(4))
        .unwrap_err();
    assert!(matches!(err, ExportError::Track(TrackError::Format(_))));
    assert!(!path.exists());
    assert!(!dir.path().join("track.png").exists());
}

#[test]
fn test_plan_jobs_one_per_tile() {
    let doc = Path::new("tiles/linefollowtiles.pdf");
    let jobs = plan_jobs(&sample_track(), doc, DEFAULT_MEDIA);

    let pages: Vec<(u8, usize)> = jobs.iter().map(|j| (j.page, j.copies)).collect();
    assert_eq!(pages, vec![(2, 4), (3, 4), (11, 1)]);
    for job in &jobs {
        assert_eq!(job.document, doc);
        assert_eq!(job.title, "Test track");
        assert_eq!(job.media, "A4");
    }
}
