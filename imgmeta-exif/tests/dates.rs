mod utils;

use imgmeta_common::datetime::DateTime;
use utils::*;

#[test]
fn date_time_original() {
    let mut exif = ExifData::new();
    assert!(exif.date_time_original().is_none());

    exif.set_raw_value(key("Exif.Photo.DateTimeOriginal"), "2024:03:01 12:30:05")
        .unwrap();
    let DateTime::Naive(naive) = exif.date_time_original().unwrap() else {
        panic!("expected naive date time");
    };
    assert_eq!(naive.to_string(), "2024-03-01 12:30:05");

    exif.set_raw_value(key("Exif.Photo.SubSecTimeOriginal"), "25")
        .unwrap();
    exif.set_raw_value(key("Exif.Photo.OffsetTimeOriginal"), "+02:00")
        .unwrap();
    let DateTime::FixedOffset(date_time) = exif.date_time_original().unwrap() else {
        panic!("expected date time with offset");
    };
    assert_eq!(date_time.to_rfc3339(), "2024-03-01T12:30:05.250+02:00");
}
