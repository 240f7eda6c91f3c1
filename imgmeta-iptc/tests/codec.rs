mod utils;

use imgmeta_common::iptc::{DataSet, IptcType};
use imgmeta_iptc::{iim, irb, Error, Value};
use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn iim_decode() {
    let datasets = iim::decode(&sample_iim()).unwrap();

    assert_eq!(datasets.len(), 4);
    assert_eq!(datasets[0], (DataSet::new(2, 0), vec![0, 4]));
    assert_eq!(datasets[2], (DataSet::new(2, 25), b"sea".to_vec()));
}

#[test]
fn iim_stops_at_padding() {
    let mut data = sample_iim();
    data.extend_from_slice(&[0, 0, 0]);

    assert_eq!(iim::decode(&data).unwrap().len(), 4);
}

#[test]
fn iim_truncated() {
    let mut data = dataset(2, 120, b"A caption");
    data.truncate(data.len() - 2);

    assert!(matches!(
        iim::decode(&data),
        Err(Error::DataSetEof {
            record: 2,
            number: 120
        })
    ));
}

#[test]
fn iim_extended_length() {
    let value = vec![b'x'; 0x9000];
    let data = iim::encode([(DataSet::new(2, 202), value.as_slice())]).unwrap();

    assert_eq!(&data[3..5], &[0x80, 0x04]);
    assert_eq!(&data[5..9], &0x9000_u32.to_be_bytes());

    let decoded = iim::decode(&data).unwrap();
    assert_eq!(decoded[0].1.len(), 0x9000);
}

#[test]
fn iim_extended_length_too_long() {
    let data = [0x1C, 2, 202, 0x80, 0x05, 0, 0, 0, 0, 1];

    assert!(matches!(iim::decode(&data), Err(Error::ExtendedLength(5))));
}

#[test]
fn irb_decode() {
    let mut data = resource(0x03ED, &[1, 2, 3, 4, 5, 6, 7, 8]);
    data.extend(resource(irb::IPTC_RESOURCE, b"odd"));
    data.extend(resource(irb::IPTC_DIGEST_RESOURCE, &[0; 16]));

    let resources = irb::decode(&data).unwrap();
    assert_eq!(resources.len(), 3);
    assert_eq!(irb::iptc(&resources), Some(&b"odd"[..]));
}

#[test]
fn irb_named_resource() {
    let mut data = b"8BIM".to_vec();
    data.extend_from_slice(&0x0404_u16.to_be_bytes());
    // Name "ab" with length byte is three bytes, plus padding
    data.extend_from_slice(&[2, b'a', b'b', 0]);
    data.extend_from_slice(&2_u32.to_be_bytes());
    data.extend_from_slice(b"xy");

    let resources = irb::decode(&data).unwrap();
    assert_eq!(resources[0].name, b"ab");
    assert_eq!(resources[0].data, b"xy");

    assert_eq!(irb::encode(&resources).unwrap(), data);
}

#[test]
fn irb_bad_signature() {
    let data = b"XXXX\x04\x04\0\0\0\0\0\0";

    assert!(matches!(irb::decode(data), Err(Error::ResourceSignature)));
}

#[test]
fn irb_replace_iptc() {
    let mut resources = vec![
        irb::Resource::new(0x03ED, vec![1, 2]),
        irb::Resource::new(irb::IPTC_RESOURCE, b"old".to_vec()),
        irb::Resource::new(irb::IPTC_DIGEST_RESOURCE, vec![0; 16]),
        irb::Resource::new(0x0409, vec![3]),
    ];

    irb::replace_iptc(&mut resources, Some(b"new".to_vec()));

    let ids: Vec<_> = resources.iter().map(|x| x.id).collect();
    assert_eq!(ids, [0x03ED, irb::IPTC_RESOURCE, 0x0409]);
    assert_eq!(irb::iptc(&resources), Some(&b"new"[..]));

    irb::replace_iptc(&mut resources, None);
    assert_eq!(irb::iptc(&resources), None);
    assert_eq!(resources.len(), 2);
}

#[test]
fn values() {
    assert_eq!(
        Value::decode(IptcType::Short, &[0, 4]).unwrap(),
        Value::Short(4)
    );
    assert!(Value::decode(IptcType::Short, &[4]).is_err());

    let date = Value::decode(IptcType::Date, b"20090512").unwrap();
    assert_eq!(date.to_raw_string(), "2009-05-12");

    let time = Value::from_raw_string(IptcType::Time, "10:30:00+02:00").unwrap();
    assert_eq!(time.encode(), b"103000+0200");

    assert!(Value::from_raw_string(IptcType::Short, "many").is_err());
    assert!(Value::from_raw_string(IptcType::Time, "25:00:00+00:00").is_err());
}

#[test]
fn latin1_fallback() {
    let value = Value::decode(IptcType::String, b"Caf\xe9").unwrap();

    assert_eq!(value.to_raw_string(), "Café");
}
