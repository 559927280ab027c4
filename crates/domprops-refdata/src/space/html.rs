//! HTML attribute definitions
//!
//! Property names follow the JSX convention (`srcSet`, `charSet`), which
//! differs in places from the property names browsers expose.

use super::{def, Definition};
use crate::info::Types;

const NONE: Types = Types::NONE;
const BOOLEAN: Types = Types::BOOLEAN;
const BOOLEANISH: Types = Types::BOOLEANISH;
const OVERLOADED_BOOLEAN: Types = Types::OVERLOADED_BOOLEAN;
const NUMBER: Types = Types::NUMBER;
const SPACE_SEPARATED: Types = Types::SPACE_SEPARATED;
const COMMA_SEPARATED: Types = Types::COMMA_SEPARATED;
const MUST_USE: Types = Types::MUST_USE_PROPERTY;

/// Properties whose attribute is not simply the lowercased property name
const ATTRIBUTES: &[(&str, &str)] = &[
    ("acceptCharset", "accept-charset"),
    ("className", "class"),
    ("htmlFor", "for"),
    ("httpEquiv", "http-equiv"),
];

pub(super) fn attribute_for(property: &str) -> String {
    ATTRIBUTES
        .iter()
        .find(|(prop, _)| *prop == property)
        .map(|(_, attr)| attr.to_string())
        .unwrap_or_else(|| property.to_ascii_lowercase())
}

pub(super) const DEFINITIONS: &[Definition] = &[
    def("abbr", NONE),
    def("accept", COMMA_SEPARATED),
    def("acceptCharset", SPACE_SEPARATED),
    def("accessKey", SPACE_SEPARATED),
    def("action", NONE),
    def("allow", NONE),
    def("allowFullScreen", BOOLEAN),
    def("allowPaymentRequest", BOOLEAN),
    def("allowUserMedia", BOOLEAN),
    def("alt", NONE),
    def("as", NONE),
    def("async", BOOLEAN),
    def("autoCapitalize", NONE),
    def("autoComplete", SPACE_SEPARATED),
    def("autoFocus", BOOLEAN),
    def("autoPlay", BOOLEAN),
    def("blocking", SPACE_SEPARATED),
    def("capture", NONE),
    def("charSet", NONE),
    def("checked", BOOLEAN.with(MUST_USE)),
    def("cite", NONE),
    def("className", SPACE_SEPARATED),
    def("cols", NUMBER),
    def("colSpan", NONE),
    def("content", NONE),
    def("contentEditable", BOOLEANISH),
    def("controls", BOOLEAN),
    def("controlsList", SPACE_SEPARATED),
    def("coords", NUMBER.with(COMMA_SEPARATED)),
    def("crossOrigin", NONE),
    def("data", NONE),
    def("dateTime", NONE),
    def("decoding", NONE),
    def("default", BOOLEAN),
    def("defer", BOOLEAN),
    def("dir", NONE),
    def("dirName", NONE),
    def("disabled", BOOLEAN),
    def("download", OVERLOADED_BOOLEAN),
    def("draggable", BOOLEANISH),
    def("encType", NONE),
    def("enterKeyHint", NONE),
    def("fetchPriority", NONE),
    def("form", NONE),
    def("formAction", NONE),
    def("formEncType", NONE),
    def("formMethod", NONE),
    def("formNoValidate", BOOLEAN),
    def("formTarget", NONE),
    def("headers", SPACE_SEPARATED),
    def("height", NUMBER),
    def("hidden", OVERLOADED_BOOLEAN),
    def("high", NUMBER),
    def("href", NONE),
    def("hrefLang", NONE),
    def("htmlFor", SPACE_SEPARATED),
    def("httpEquiv", SPACE_SEPARATED),
    def("id", NONE),
    def("imageSizes", NONE),
    def("imageSrcSet", NONE),
    def("inert", BOOLEAN),
    def("inputMode", NONE),
    def("integrity", NONE),
    def("is", NONE),
    def("isMap", BOOLEAN),
    def("itemId", NONE),
    def("itemProp", SPACE_SEPARATED),
    def("itemRef", SPACE_SEPARATED),
    def("itemScope", BOOLEAN),
    def("itemType", SPACE_SEPARATED),
    def("kind", NONE),
    def("label", NONE),
    def("lang", NONE),
    def("language", NONE),
    def("list", NONE),
    def("loading", NONE),
    def("loop", BOOLEAN),
    def("low", NUMBER),
    def("manifest", NONE),
    def("max", NONE),
    def("maxLength", NUMBER),
    def("media", NONE),
    def("method", NONE),
    def("min", NONE),
    def("minLength", NUMBER),
    def("multiple", BOOLEAN.with(MUST_USE)),
    def("muted", BOOLEAN.with(MUST_USE)),
    def("name", NONE),
    def("nonce", NONE),
    def("noModule", BOOLEAN),
    def("noValidate", BOOLEAN),
    def("onAbort", NONE),
    def("onBlur", NONE),
    def("onChange", NONE),
    def("onClick", NONE),
    def("onError", NONE),
    def("onFocus", NONE),
    def("onInput", NONE),
    def("onKeyDown", NONE),
    def("onKeyUp", NONE),
    def("onLoad", NONE),
    def("onSubmit", NONE),
    def("open", BOOLEAN),
    def("optimum", NUMBER),
    def("pattern", NONE),
    def("ping", SPACE_SEPARATED),
    def("placeholder", NONE),
    def("playsInline", BOOLEAN),
    def("popover", NONE),
    def("popoverTarget", NONE),
    def("popoverTargetAction", NONE),
    def("poster", NONE),
    def("preload", NONE),
    def("readOnly", BOOLEAN),
    def("referrerPolicy", NONE),
    def("rel", SPACE_SEPARATED),
    def("required", BOOLEAN),
    def("reversed", BOOLEAN),
    def("rows", NUMBER),
    def("rowSpan", NUMBER),
    def("sandbox", SPACE_SEPARATED),
    def("scope", NONE),
    def("scoped", BOOLEAN),
    def("seamless", BOOLEAN),
    def("selected", BOOLEAN.with(MUST_USE)),
    def("shadowRootClonable", BOOLEAN),
    def("shadowRootDelegatesFocus", BOOLEAN),
    def("shadowRootMode", NONE),
    def("shape", NONE),
    def("size", NUMBER),
    def("sizes", NONE),
    def("slot", NONE),
    def("span", NUMBER),
    def("spellCheck", BOOLEANISH),
    def("src", NONE),
    def("srcDoc", NONE),
    def("srcLang", NONE),
    def("srcSet", NONE),
    def("start", NUMBER),
    def("step", NONE),
    def("style", NONE),
    def("tabIndex", NUMBER),
    def("target", NONE),
    def("title", NONE),
    def("translate", NONE),
    def("type", NONE),
    def("typeMustMatch", BOOLEAN),
    def("useMap", NONE),
    def("value", BOOLEANISH),
    def("width", NUMBER),
    def("wrap", NONE),
    def("writingSuggestions", NONE),
    // Legacy
    def("align", NONE),
    def("aLink", NONE),
    def("archive", SPACE_SEPARATED),
    def("axis", NONE),
    def("background", NONE),
    def("bgColor", NONE),
    def("border", NUMBER),
    def("borderColor", NONE),
    def("bottomMargin", NUMBER),
    def("cellPadding", NONE),
    def("cellSpacing", NONE),
    def("char", NONE),
    def("charOff", NONE),
    def("classId", NONE),
    def("clear", NONE),
    def("code", NONE),
    def("codeBase", NONE),
    def("codeType", NONE),
    def("color", NONE),
    def("compact", BOOLEAN),
    def("declare", BOOLEAN),
    def("event", NONE),
    def("face", NONE),
    def("frame", NONE),
    def("frameBorder", NONE),
    def("hSpace", NUMBER),
    def("leftMargin", NUMBER),
    def("link", NONE),
    def("longDesc", NONE),
    def("lowSrc", NONE),
    def("marginHeight", NUMBER),
    def("marginWidth", NUMBER),
    def("noResize", BOOLEAN),
    def("noHref", BOOLEAN),
    def("noShade", BOOLEAN),
    def("noWrap", BOOLEAN),
    def("object", NONE),
    def("profile", NONE),
    def("prompt", NONE),
    def("rev", NONE),
    def("rightMargin", NUMBER),
    def("rules", NONE),
    def("scheme", NONE),
    def("scrolling", BOOLEANISH),
    def("standby", NONE),
    def("summary", NONE),
    def("text", NONE),
    def("topMargin", NUMBER),
    def("valueType", NONE),
    def("version", NONE),
    def("vAlign", NONE),
    def("vLink", NONE),
    def("vSpace", NUMBER),
];
