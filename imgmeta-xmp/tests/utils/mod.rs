#![allow(dead_code)]

use imgmeta_common::key::XmpKey;

pub fn key(s: &str) -> XmpKey {
    s.parse().unwrap()
}

/// Packet as written by common photo tools
pub const PACKET: &str = r#"<?xpacket begin="﻿" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="Test">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
        xmlns:xmp="http://ns.adobe.com/xap/1.0/"
        xmlns:tiff="http://ns.adobe.com/tiff/1.0/"
        xmp:Rating="4"
        tiff:Make="Acme">
      <dc:title xmlns:dc="http://purl.org/dc/elements/1.1/">
        <rdf:Alt>
          <rdf:li xml:lang="de">Sonnenuntergang</rdf:li>
          <rdf:li xml:lang="x-default">Sunset</rdf:li>
        </rdf:Alt>
      </dc:title>
      <dc:subject xmlns:dc="http://purl.org/dc/elements/1.1/">
        <rdf:Bag>
          <rdf:li>sea</rdf:li>
          <rdf:li>sky</rdf:li>
        </rdf:Bag>
      </dc:subject>
    </rdf:Description>
    <rdf:Description rdf:about=""
        xmlns:my="http://example.com/ns/my/"
        xmlns:exif="http://ns.adobe.com/exif/1.0/">
      <my:Project>Holidays</my:Project>
      <exif:Flash rdf:parseType="Resource">
        <exif:Fired>True</exif:Fired>
        <exif:Mode>2</exif:Mode>
      </exif:Flash>
      <exif:GPSLatitude>41,53,58N</exif:GPSLatitude>
      <exif:GPSLongitude>12,30,0E</exif:GPSLongitude>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;
