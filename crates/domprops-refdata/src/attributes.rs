//! HTML Element Attributes
//!
//! Map of tag name to the attributes allowed on it. The `*` entry holds
//! global attributes. Legacy attributes from older HTML versions are
//! included since browsers still expose most of them.

/// Key used for attributes valid on every element
pub const GLOBAL_KEY: &str = "*";

const TABLE_SECTION: &[&str] = &["align", "char", "charoff", "valign"];
const TABLE_COLUMN: &[&str] = &["align", "char", "charoff", "span", "valign", "width"];
const TABLE_CELL: &[&str] = &[
    "abbr", "align", "axis", "bgcolor", "char", "charoff", "colspan", "headers",
    "height", "nowrap", "rowspan", "scope", "valign", "width",
];
const HEADING: &[&str] = &["align"];
const EDIT: &[&str] = &["cite", "datetime"];

/// Tag name to allowed attribute names, sorted by tag
pub const HTML_ELEMENT_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("*", &[
        "accesskey", "autocapitalize", "autofocus", "class", "contenteditable",
        "dir", "draggable", "enterkeyhint", "hidden", "id", "inert", "inputmode",
        "is", "itemid", "itemprop", "itemref", "itemscope", "itemtype", "lang",
        "nonce", "popover", "slot", "spellcheck", "style", "tabindex", "title",
        "translate", "writingsuggestions",
    ]),
    ("a", &[
        "charset", "coords", "download", "href", "hreflang", "name", "ping",
        "referrerpolicy", "rel", "rev", "shape", "target", "type",
    ]),
    ("applet", &[
        "align", "alt", "archive", "code", "codebase", "height", "hspace", "name",
        "object", "vspace", "width",
    ]),
    ("area", &[
        "alt", "coords", "download", "href", "hreflang", "nohref", "ping",
        "referrerpolicy", "rel", "shape", "target", "type",
    ]),
    ("audio", &["autoplay", "controls", "crossorigin", "loop", "muted", "preload", "src"]),
    ("base", &["href", "target"]),
    ("basefont", &["color", "face", "size"]),
    ("blockquote", &["cite"]),
    ("body", &["alink", "background", "bgcolor", "link", "text", "vlink"]),
    ("br", &["clear"]),
    ("button", &[
        "disabled", "form", "formaction", "formenctype", "formmethod",
        "formnovalidate", "formtarget", "name", "popovertarget",
        "popovertargetaction", "type", "value",
    ]),
    ("canvas", &["height", "width"]),
    ("caption", &["align"]),
    ("col", TABLE_COLUMN),
    ("colgroup", TABLE_COLUMN),
    ("data", &["value"]),
    ("del", EDIT),
    ("details", &["name", "open"]),
    ("dialog", &["open"]),
    ("dir", &["compact"]),
    ("div", &["align"]),
    ("dl", &["compact"]),
    ("embed", &["height", "src", "type", "width"]),
    ("fieldset", &["disabled", "form", "name"]),
    ("font", &["color", "face", "size"]),
    ("form", &[
        "accept", "accept-charset", "action", "autocomplete", "enctype", "method",
        "name", "novalidate", "target",
    ]),
    ("frame", &[
        "frameborder", "longdesc", "marginheight", "marginwidth", "name",
        "noresize", "scrolling", "src",
    ]),
    ("frameset", &["cols", "rows"]),
    ("h1", HEADING),
    ("h2", HEADING),
    ("h3", HEADING),
    ("h4", HEADING),
    ("h5", HEADING),
    ("h6", HEADING),
    ("head", &["profile"]),
    ("hr", &["align", "noshade", "size", "width"]),
    ("html", &["manifest", "version"]),
    ("iframe", &[
        "align", "allow", "allowfullscreen", "allowpaymentrequest",
        "allowusermedia", "fetchpriority", "frameborder", "height", "loading",
        "longdesc", "marginheight", "marginwidth", "name", "referrerpolicy",
        "sandbox", "scrolling", "src", "srcdoc", "width",
    ]),
    ("img", &[
        "align", "alt", "border", "crossorigin", "decoding", "fetchpriority",
        "height", "hspace", "ismap", "loading", "longdesc", "name",
        "referrerpolicy", "sizes", "src", "srcset", "usemap", "vspace", "width",
    ]),
    ("input", &[
        "accept", "align", "alt", "autocomplete", "checked", "dirname", "disabled",
        "form", "formaction", "formenctype", "formmethod", "formnovalidate",
        "formtarget", "height", "ismap", "list", "max", "maxlength", "min",
        "minlength", "multiple", "name", "pattern", "placeholder",
        "popovertarget", "popovertargetaction", "readonly", "required", "size",
        "src", "step", "type", "usemap", "value", "width",
    ]),
    ("ins", EDIT),
    ("isindex", &["prompt"]),
    ("label", &["for", "form"]),
    ("legend", &["align"]),
    ("li", &["type", "value"]),
    ("link", &[
        "as", "blocking", "charset", "color", "crossorigin", "disabled",
        "fetchpriority", "href", "hreflang", "imagesizes", "imagesrcset",
        "integrity", "media", "referrerpolicy", "rel", "rev", "sizes", "target",
        "type",
    ]),
    ("map", &["name"]),
    ("menu", &["compact"]),
    ("meta", &["charset", "content", "http-equiv", "media", "name", "scheme"]),
    ("meter", &["high", "low", "max", "min", "optimum", "value"]),
    ("object", &[
        "align", "archive", "border", "classid", "codebase", "codetype", "data",
        "declare", "form", "height", "hspace", "name", "standby", "type",
        "typemustmatch", "usemap", "vspace", "width",
    ]),
    ("ol", &["compact", "reversed", "start", "type"]),
    ("optgroup", &["disabled", "label"]),
    ("option", &["disabled", "label", "selected", "value"]),
    ("output", &["for", "form", "name"]),
    ("p", &["align"]),
    ("param", &["name", "type", "value", "valuetype"]),
    ("pre", &["width"]),
    ("progress", &["max", "value"]),
    ("q", &["cite"]),
    ("script", &[
        "async", "blocking", "charset", "crossorigin", "defer", "fetchpriority",
        "integrity", "language", "nomodule", "referrerpolicy", "src", "type",
    ]),
    ("select", &["autocomplete", "disabled", "form", "multiple", "name", "required", "size"]),
    ("slot", &["name"]),
    ("source", &["height", "media", "sizes", "src", "srcset", "type", "width"]),
    ("style", &["blocking", "media", "type"]),
    ("table", &[
        "align", "bgcolor", "border", "cellpadding", "cellspacing", "frame",
        "rules", "summary", "width",
    ]),
    ("tbody", TABLE_SECTION),
    ("td", TABLE_CELL),
    ("template", &["shadowrootclonable", "shadowrootdelegatesfocus", "shadowrootmode"]),
    ("textarea", &[
        "autocomplete", "cols", "dirname", "disabled", "form", "maxlength",
        "minlength", "name", "placeholder", "readonly", "required", "rows", "wrap",
    ]),
    ("tfoot", TABLE_SECTION),
    ("th", TABLE_CELL),
    ("thead", TABLE_SECTION),
    ("time", &["datetime"]),
    ("tr", &["align", "bgcolor", "char", "charoff", "valign"]),
    ("track", &["default", "kind", "label", "src", "srclang"]),
    ("ul", &["compact", "type"]),
    ("video", &[
        "autoplay", "controls", "crossorigin", "height", "loop", "muted",
        "playsinline", "poster", "preload", "src", "width",
    ]),
];

/// Attributes allowed on `tag`, excluding global attributes
pub fn element_attributes(tag: &str) -> Option<&'static [&'static str]> {
    if tag == GLOBAL_KEY {
        return None;
    }
    lookup(tag)
}

/// Attributes allowed on every element
pub fn global_attributes() -> &'static [&'static str] {
    lookup(GLOBAL_KEY).unwrap_or(&[])
}

fn lookup(key: &str) -> Option<&'static [&'static str]> {
    HTML_ELEMENT_ATTRIBUTES
        .binary_search_by(|(tag, _)| (*tag).cmp(key))
        .ok()
        .map(|index| HTML_ELEMENT_ATTRIBUTES[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted() {
        for pair in HTML_ELEMENT_ATTRIBUTES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} should sort before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_attribute_lists_sorted() {
        for (tag, attrs) in HTML_ELEMENT_ATTRIBUTES {
            for pair in attrs.windows(2) {
                assert!(pair[0] < pair[1], "{tag}: {} before {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_element_lookup() {
        assert!(element_attributes("img").unwrap().contains(&"srcset"));
        assert!(element_attributes("template").unwrap().contains(&"shadowrootdelegatesfocus"));
        assert_eq!(element_attributes("span"), None);
        assert_eq!(element_attributes(GLOBAL_KEY), None);
    }

    #[test]
    fn test_global_lookup() {
        let globals = global_attributes();
        assert!(globals.contains(&"autocapitalize"));
        assert!(globals.contains(&"class"));
        assert!(!globals.contains(&"href"));
    }
}
