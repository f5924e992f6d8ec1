use sleigh_utils::{xml, Element};

fn sample() -> Element {
    let mut root = Element::new("root").with_attr("id", "1");
    let list = root.sub_element("list");
    list.set_attr("id", "2");
    list.sub_element("name").text = Some("fish & chips".to_string());
    list.sub_element("empty");
    list.push(Element::new("ref").with_attr("reference", "1").with_attr("clas", "root"));
    root
}

#[test]
fn test_write_is_compact_and_ordered() {
    assert_eq!(
        sample().to_xml_string().unwrap(),
        "<root id=\"1\"><list id=\"2\"><name>fish &amp; chips</name><empty />\
         <ref reference=\"1\" clas=\"root\" /></list></root>"
    );
}

#[test]
fn test_parse_recovers_written_tree() {
    let written = sample().to_xml_string().unwrap();
    let parsed = xml::parse(&written).unwrap();
    assert_eq!(parsed, sample());
}

#[test]
fn test_parse_drops_indentation() {
    let parsed = xml::parse("<a id=\"1\">\n  <b>x</b>\n  <c />\n</a>").unwrap();
    assert_eq!(parsed.text, None);
    assert_eq!(parsed.child_text("b"), Some("x"));
    assert_eq!(parsed.children.len(), 2);
}

#[test]
fn test_parse_rejects_broken_markup() {
    assert!(xml::parse("<a><b></a>").is_err());
}

#[test]
fn test_descendants_are_pre_order() {
    let root = sample();
    let tags: Vec<&str> = root.descendants().iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec!["root", "list", "name", "empty", "ref"]);
}

#[test]
fn test_carriage_return_survives_round_trip() {
    let element = Element::new("latitude")
        .with_attr("note", "a\r\nb")
        .with_text("10.0\r");
    let written = element.to_xml_string().unwrap();
    assert_eq!(written, "<latitude note=\"a&#13;&#10;b\">10.0&#13;</latitude>");
    assert_eq!(xml::parse(&written).unwrap(), element);
}

#[test]
fn test_write_rejects_control_characters() {
    let mut root = Element::new("root");
    root.sub_element("latitude").text = Some("10.0\u{1}".to_string());
    assert_eq!(
        root.to_xml_string(),
        Err(xml::InvalidCharacter {
            tag: "latitude".to_string(),
            character: '\u{1}',
        })
    );

    let attr = Element::new("location").with_attr("reference", "\u{FFFF}");
    assert!(attr.to_xml_string().is_err());
}
