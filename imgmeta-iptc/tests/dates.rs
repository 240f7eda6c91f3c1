mod utils;

use imgmeta_common::datetime::DateTime;
use imgmeta_iptc::IptcData;
use utils::*;

#[test]
fn date_time_created() {
    let data = [
        dataset(2, 55, b"20090512"),
        dataset(2, 60, b"143015+0200"),
    ]
    .concat();
    let iptc = IptcData::decode(&data).unwrap();

    let Some(DateTime::FixedOffset(datetime)) = iptc.date_time_created() else {
        panic!("expected date with offset");
    };
    assert_eq!(datetime.to_rfc3339(), "2009-05-12T14:30:15+02:00");
}

#[test]
fn date_only() {
    let iptc = IptcData::decode(&dataset(2, 55, b"20090512")).unwrap();

    assert_eq!(
        iptc.date_time_created(),
        Some(DateTime::Naive(
            chrono::NaiveDate::from_ymd_opt(2009, 5, 12)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        ))
    );
}
