//! Integration tests for element creation and property reflection

use domprops_dom::{Document, DomError, Value};

#[test]
fn test_every_html_tag_creates_an_element() {
    let mut doc = Document::new();
    for tag in ["a", "table", "template", "marquee", "keygen", "image", "svg"] {
        let element = doc.create_element(tag).unwrap();
        assert!(element.interface().inherits("HTMLElement"), "{tag}");
        assert!(element.interface().inherits("Element"), "{tag}");
    }
}

#[test]
fn test_obsolete_attributes_still_reflect() {
    let mut doc = Document::new();

    let mut td = doc.create_element("td").unwrap();
    td.set_attribute("char", ".");
    assert_eq!(td.property("ch"), Some(Value::String(".".into())));
    assert_eq!(td.property("char"), None);

    let mut body = doc.create_element("body").unwrap();
    body.set_attribute("bgcolor", "red");
    assert_eq!(body.property("bgColor"), Some(Value::String("red".into())));
}

#[test]
fn test_numeric_defaults() {
    let mut doc = Document::new();

    let canvas = doc.create_element("canvas").unwrap();
    assert_eq!(canvas.property("width"), Some(Value::Long(300)));
    assert_eq!(canvas.property("height"), Some(Value::Long(150)));

    let mut textarea = doc.create_element("textarea").unwrap();
    assert_eq!(textarea.property("rows"), Some(Value::Long(2)));
    textarea.set_attribute("rows", "0");
    assert_eq!(textarea.property("rows"), Some(Value::Long(2)));
    textarea.set_attribute("rows", "7");
    assert_eq!(textarea.property("rows"), Some(Value::Long(7)));

    let meter = doc.create_element("meter").unwrap();
    assert_eq!(meter.property("max"), Some(Value::Double(1.0)));
}

#[test]
fn test_tab_index_depends_on_focusability() {
    let mut doc = Document::new();
    assert_eq!(doc.create_element("div").unwrap().property("tabIndex"), Some(Value::Long(-1)));
    assert_eq!(doc.create_element("button").unwrap().property("tabIndex"), Some(Value::Long(0)));
}

#[test]
fn test_enumerated_and_nullable() {
    let mut doc = Document::new();

    let mut form = doc.create_element("form").unwrap();
    assert_eq!(
        form.property("enctype"),
        Some(Value::String("application/x-www-form-urlencoded".into()))
    );
    form.set_attribute("method", "POST");
    assert_eq!(form.property("method"), Some(Value::String("post".into())));

    let mut img = doc.create_element("img").unwrap();
    assert_eq!(img.property("crossOrigin"), Some(Value::Null));
    img.set_attribute("crossorigin", "bogus");
    assert_eq!(img.property("crossOrigin"), Some(Value::String("anonymous".into())));

    let mut div = doc.create_element("div").unwrap();
    assert_eq!(div.property("popover"), Some(Value::Null));
    div.set_attribute("popover", "Auto");
    assert_eq!(div.property("popover"), Some(Value::String("auto".into())));
}

#[test]
fn test_aria_reflection() {
    let mut doc = Document::new();
    let mut div = doc.create_element("div").unwrap();

    assert_eq!(div.property("ariaLabel"), Some(Value::Null));
    div.set_attribute("aria-label", "Close");
    assert_eq!(div.property("ariaLabel"), Some(Value::String("Close".into())));

    div.set_attribute("aria-activedescendant", "item-1");
    assert_eq!(div.property("ariaActiveDescendant"), None);
    assert_eq!(div.property("ariaActiveDescendantElement"), Some(Value::Null));
}

#[test]
fn test_token_lists() {
    let mut doc = Document::new();
    let mut iframe = doc.create_element("iframe").unwrap();
    iframe.set_attribute("sandbox", "allow-forms allow-scripts");
    assert_eq!(
        iframe.property("sandbox"),
        Some(Value::TokenList(vec!["allow-forms".into(), "allow-scripts".into()]))
    );
}

#[test]
fn test_invalid_names_are_rejected() {
    let mut doc = Document::new();
    assert!(matches!(doc.create_element("<p>"), Err(DomError::InvalidCharacter(_))));
    assert!(matches!(doc.create_element(""), Err(DomError::EmptyName)));
}
