mod utils;

use imgmeta_common::error::TagError;
use imgmeta_xmp::{ArrayKind, XmpData, XmpValue};
use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn set_text() {
    let mut xmp = XmpData::new();

    xmp.set_text(key("Xmp.xmp.Rating"), "5").unwrap();
    xmp.set_text(key("Xmp.dc.title"), "Sunset").unwrap();
    xmp.set_text(key("Xmp.dc.subject"), "sea").unwrap();

    assert_eq!(
        xmp.get(&key("Xmp.dc.title")).unwrap().value().unwrap(),
        &XmpValue::LangAlt(vec![("x-default".into(), "Sunset".into())])
    );
    assert_eq!(
        xmp.get(&key("Xmp.dc.subject")).unwrap().value().unwrap(),
        &XmpValue::Array {
            kind: ArrayKind::Bag,
            items: vec!["sea".into()]
        }
    );

    // Overwrite in place
    xmp.set_text(key("Xmp.xmp.Rating"), "3").unwrap();
    assert_eq!(xmp.keys()[0], key("Xmp.xmp.Rating"));
    assert_eq!(xmp.rating(), Some(3));
}

#[test]
fn invalid_values() {
    let mut xmp = XmpData::new();

    for (k, v) in [
        ("Xmp.xmp.Rating", "five"),
        ("Xmp.xmp.CreateDate", "2023-13-01"),
        ("Xmp.exif.FNumber", "28/0"),
        ("Xmp.exif.GPSLatitude", "100,00,00N"),
        ("Xmp.dc.format", "jpeg"),
    ] {
        assert!(
            matches!(xmp.set_text(key(k), v), Err(TagError::InvalidValue { .. })),
            "{k}"
        );
    }

    assert!(xmp.is_empty());
}

#[test]
fn unknown_prefix() {
    let mut xmp = XmpData::new();

    assert_eq!(
        xmp.set_text(key("Xmp.my.Project"), "Holidays"),
        Err(TagError::UnknownNamespacePrefix("my".into()))
    );

    xmp.register_namespace("my", "http://example.com/ns/my/")
        .unwrap();
    xmp.set_text(key("Xmp.my.Project"), "Holidays").unwrap();

    let decoded = XmpData::decode(&xmp.encode().unwrap()).unwrap();
    assert_eq!(
        decoded.get(&key("Xmp.my.Project")).unwrap().raw_value(),
        Ok("Holidays".into())
    );

    assert!(xmp.register_namespace("dc", "http://example.com/").is_err());
}

#[test]
fn unknown_prefix_on_lookup() {
    let mut xmp = XmpData::decode(PACKET.as_bytes()).unwrap();
    let unknown = key("Xmp.nosuchns.foo");

    assert_eq!(
        xmp.get(&unknown).map(|_| ()),
        Err(TagError::UnknownNamespacePrefix("nosuchns".into()))
    );
    assert_eq!(
        xmp.delete(&unknown).map(|_| ()),
        Err(TagError::UnknownNamespacePrefix("nosuchns".into()))
    );

    // Known prefix without an entry
    assert_eq!(
        xmp.get(&key("Xmp.dc.rights")).map(|_| ()),
        Err(TagError::KeyNotFound("Xmp.dc.rights".into()))
    );
}

#[test]
fn set_array() {
    let mut xmp = XmpData::new();

    xmp.set_array(key("Xmp.dc.creator"), vec!["Ann".into(), "Bo".into()])
        .unwrap();
    assert_eq!(
        xmp.get(&key("Xmp.dc.creator")).unwrap().value().unwrap(),
        &XmpValue::Array {
            kind: ArrayKind::Seq,
            items: vec!["Ann".into(), "Bo".into()]
        }
    );
    assert_eq!(xmp.creator().as_deref(), Some("Ann"));

    assert!(matches!(
        xmp.set_array(key("Xmp.xmp.Rating"), vec!["1".into()]),
        Err(TagError::InvalidValue { .. })
    ));
    assert!(matches!(
        xmp.set_array(key("Xmp.exif.ISOSpeedRatings"), vec!["100".into(), "x".into()]),
        Err(TagError::InvalidValue { .. })
    ));
}

#[test]
fn set_lang_alt() {
    let mut xmp = XmpData::new();
    let title = key("Xmp.dc.title");

    xmp.set_lang_alt(
        title.clone(),
        vec![
            ("de".into(), "Titel".into()),
            ("x-default".into(), "Title".into()),
        ],
    )
    .unwrap();
    assert_eq!(
        xmp.get(&title).unwrap().raw_value().unwrap(),
        r#"lang="x-default" Title, lang="de" Titel"#
    );

    assert!(matches!(
        xmp.set_lang_alt(title, Vec::new()),
        Err(TagError::InvalidValue { .. })
    ));
    assert!(xmp
        .set_lang_alt(key("Xmp.dc.subject"), vec![("en".into(), "x".into())])
        .is_err());
}

#[test]
fn set_raw_value() {
    let mut xmp = XmpData::new();

    xmp.set_raw_value(key("Xmp.dc.subject"), "sea, sky").unwrap();
    xmp.set_raw_value(key("Xmp.dc.title"), r#"lang="x-default" A, lang="fr" B"#)
        .unwrap();

    assert_eq!(
        xmp.get(&key("Xmp.dc.subject")).unwrap().raw_value().unwrap(),
        "sea, sky"
    );
    assert_eq!(
        xmp.get(&key("Xmp.dc.title")).unwrap().value().unwrap(),
        &XmpValue::LangAlt(vec![
            ("x-default".into(), "A".into()),
            ("fr".into(), "B".into())
        ])
    );
}

#[test]
fn typed_value() {
    let packet = r#"<x:xmpmeta xmlns:x="adobe:ns:meta/">
        <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
            <rdf:Description xmlns:xmp="http://ns.adobe.com/xap/1.0/" xmp:Rating="lots"/>
        </rdf:RDF>
    </x:xmpmeta>"#;
    let xmp = XmpData::decode(packet.as_bytes()).unwrap();
    let rating = xmp.get(&key("Xmp.xmp.Rating")).unwrap();

    assert_eq!(rating.raw_value().unwrap(), "lots");
    assert!(matches!(
        rating.typed_value(),
        Err(TagError::ValueDecode { raw, .. }) if raw == b"lots"
    ));
}

#[test]
fn delete() {
    let mut xmp = XmpData::decode(PACKET.as_bytes()).unwrap();

    let datum = xmp.delete(&key("Xmp.tiff.Make")).unwrap();
    assert_eq!(datum.raw_value().unwrap(), "Acme");
    assert_eq!(
        xmp.delete(&key("Xmp.tiff.Make")),
        Err(TagError::KeyNotFound("Xmp.tiff.Make".into()))
    );

    let decoded = XmpData::decode(&xmp.encode().unwrap()).unwrap();
    assert!(!decoded.contains(&key("Xmp.tiff.Make")));
    // Structures survive rewriting
    assert!(decoded.contains(&key("Xmp.exif.Flash")));
}
