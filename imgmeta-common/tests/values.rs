use imgmeta_common::datetime::{IptcDate, IptcTime, Offset, XmpDate};
use imgmeta_common::geography::{Direction, GpsCoordinate};
use imgmeta_common::rational::{RationalError, SRational, URational};
use pretty_assertions::assert_eq;

#[test]
fn rationals() {
    let r: URational = "1/60".parse().unwrap();
    assert_eq!(r, URational::new(1, 60));
    assert_eq!(r.to_string(), "1/60");
    assert!(r.is_equivalent(&URational::new(2, 120)));
    assert!(URational::new(u32::MAX, 1).is_equivalent(&URational::new(u32::MAX, 1)));

    let r: SRational = "-1/3".parse().unwrap();
    assert_eq!(r.numerator, -1);
    assert_eq!(SRational::new(-1, 4).to_f64(), Some(-0.25));
    assert_eq!(URational::new(1, 0).to_f64(), None);

    assert_eq!("1/0".parse::<URational>(), Err(RationalError::ZeroDenominator));
    assert!("1".parse::<URational>().is_err());
    assert!("a/b".parse::<URational>().is_err());
}

#[test]
fn iptc_date() {
    let date = IptcDate::from_wire(b"20240229").unwrap();
    assert_eq!(date.to_string(), "2024-02-29");
    assert_eq!(date.to_wire(), b"20240229");

    let parsed: IptcDate = "2024-02-29".parse().unwrap();
    assert_eq!(parsed, date);

    assert!(IptcDate::from_wire(b"20230229").is_err());
    assert!("2024-13-01".parse::<IptcDate>().is_err());
}

#[test]
fn iptc_time() {
    let time = IptcTime::from_wire(b"134501+0130").unwrap();
    assert_eq!(time.to_string(), "13:45:01+01:30");
    assert_eq!(time.to_wire(), b"134501+0130");

    let parsed: IptcTime = "13:45:01+01:30".parse().unwrap();
    assert_eq!(parsed, time);

    let utc: IptcTime = "08:00:00".parse().unwrap();
    assert_eq!(utc.to_wire(), b"080000+0000");

    let west = IptcTime::from_wire(b"060000-0930").unwrap();
    assert_eq!(west.to_string(), "06:00:00-09:30");
    assert_eq!(west.to_wire(), b"060000-0930");

    assert!(IptcTime::from_wire(b"250000+0000").is_err());
    assert!(IptcTime::from_wire(b"120000+2400").is_err());
}

#[test]
fn xmp_date() {
    for s in [
        "2024",
        "2024-05",
        "2024-05-17",
        "2024-05-17T10:20Z",
        "2024-05-17T10:20:30+02:00",
        "2024-05-17T10:20:30.25-05:30",
    ] {
        let date: XmpDate = s.parse().unwrap();
        assert_eq!(date.to_string(), s);
    }

    let date: XmpDate = "2024-05-17T10:20:30Z".parse().unwrap();
    let time = date.time.unwrap();
    assert_eq!(time.offset, Some(Offset::Utc));

    assert!("2024-05-17T10".parse::<XmpDate>().is_err());
    assert!("17.05.2024".parse::<XmpDate>().is_err());
}

#[test]
fn gps_coordinate() {
    let c: GpsCoordinate = "52,32,37N".parse().unwrap();
    assert_eq!(c.direction, Direction::North);
    assert!((c.to_coord().0 - 52.543_611).abs() < 1e-5);

    let c: GpsCoordinate = "13,23.01W".parse().unwrap();
    assert_eq!((c.minutes, c.seconds), (23, 1));
    assert!(c.to_coord().0 < 0.);

    let c: GpsCoordinate = "13,23.5E".parse().unwrap();
    assert_eq!((c.minutes, c.seconds), (23, 30));
    let c: GpsCoordinate = "13,23.99E".parse().unwrap();
    assert_eq!((c.minutes, c.seconds), (23, 59));

    assert!("200,0,0E".parse::<GpsCoordinate>().is_err());
    assert!("52,32,37".parse::<GpsCoordinate>().is_err());
}
