//! HTML Element Interfaces
//!
//! Member tables for `Element`, `HTMLElement` and the element-specific
//! interfaces, including the obsolete members browsers still expose, and
//! the tag name → interface mapping.

use crate::aria::ARIA_MIXIN;
use crate::interface::{computed, reflect, Computed, Interface, Member};
use crate::reflect::{Enumerated, Reflect};

use Computed::{Null, Object};
use Reflect::{Boolean, TokenList, Url};

const STR: Reflect = Reflect::String;

// Enumerated keyword sets

const DIR: Enumerated = Enumerated { keywords: &["ltr", "rtl", "auto"], missing: "", invalid: "" };
const AUTOCAPITALIZE: Enumerated = Enumerated {
    keywords: &["off", "none", "on", "sentences", "words", "characters"],
    missing: "",
    invalid: "sentences",
};
const CONTENT_EDITABLE: Enumerated = Enumerated {
    keywords: &["true", "false", "plaintext-only"],
    missing: "inherit",
    invalid: "inherit",
};
const ENTER_KEY_HINT: Enumerated = Enumerated {
    keywords: &["enter", "done", "go", "next", "previous", "search", "send"],
    missing: "",
    invalid: "",
};
const INPUT_MODE: Enumerated = Enumerated {
    keywords: &["none", "text", "tel", "url", "email", "numeric", "decimal", "search"],
    missing: "",
    invalid: "",
};
const POPOVER: Enumerated = Enumerated { keywords: &["auto", "manual", "hint"], missing: "", invalid: "manual" };
const WRITING_SUGGESTIONS: Enumerated = Enumerated { keywords: &["true", "false"], missing: "true", invalid: "true" };
const CROSS_ORIGIN: Enumerated = Enumerated {
    keywords: &["anonymous", "use-credentials"],
    missing: "",
    invalid: "anonymous",
};
const REFERRER_POLICY: Enumerated = Enumerated {
    keywords: &[
        "no-referrer",
        "no-referrer-when-downgrade",
        "same-origin",
        "origin",
        "strict-origin",
        "origin-when-cross-origin",
        "strict-origin-when-cross-origin",
        "unsafe-url",
    ],
    missing: "",
    invalid: "",
};
const LOADING: Enumerated = Enumerated { keywords: &["lazy", "eager"], missing: "eager", invalid: "eager" };
const FETCH_PRIORITY: Enumerated = Enumerated { keywords: &["high", "low", "auto"], missing: "auto", invalid: "auto" };
const DECODING: Enumerated = Enumerated { keywords: &["sync", "async", "auto"], missing: "auto", invalid: "auto" };
const PRELOAD: Enumerated = Enumerated { keywords: &["none", "metadata", "auto"], missing: "auto", invalid: "auto" };
const FORM_ENCTYPE: Enumerated = Enumerated {
    keywords: &["application/x-www-form-urlencoded", "multipart/form-data", "text/plain"],
    missing: "application/x-www-form-urlencoded",
    invalid: "application/x-www-form-urlencoded",
};
const FORM_METHOD: Enumerated = Enumerated { keywords: &["get", "post", "dialog"], missing: "get", invalid: "get" };
const SUBMITTER_ENCTYPE: Enumerated = Enumerated {
    keywords: &["application/x-www-form-urlencoded", "multipart/form-data", "text/plain"],
    missing: "",
    invalid: "application/x-www-form-urlencoded",
};
const SUBMITTER_METHOD: Enumerated = Enumerated { keywords: &["get", "post", "dialog"], missing: "", invalid: "get" };
const FORM_AUTOCOMPLETE: Enumerated = Enumerated { keywords: &["on", "off"], missing: "on", invalid: "on" };
const BUTTON_TYPE: Enumerated = Enumerated { keywords: &["submit", "reset", "button"], missing: "submit", invalid: "submit" };
const POPOVER_TARGET_ACTION: Enumerated = Enumerated {
    keywords: &["toggle", "show", "hide"],
    missing: "toggle",
    invalid: "toggle",
};
const INPUT_TYPE: Enumerated = Enumerated {
    keywords: &[
        "hidden", "text", "search", "tel", "url", "email", "password", "date", "month", "week", "time",
        "datetime-local", "number", "range", "color", "checkbox", "radio", "file", "submit", "image",
        "reset", "button",
    ],
    missing: "text",
    invalid: "text",
};
const SHADOW_ROOT_MODE: Enumerated = Enumerated { keywords: &["open", "closed"], missing: "", invalid: "" };
const CELL_SCOPE: Enumerated = Enumerated {
    keywords: &["row", "col", "rowgroup", "colgroup"],
    missing: "",
    invalid: "",
};
const TRACK_KIND: Enumerated = Enumerated {
    keywords: &["subtitles", "captions", "descriptions", "chapters", "metadata"],
    missing: "subtitles",
    invalid: "metadata",
};

const HTML_NAMESPACE_MEMBERS: &[Member] = &[
    computed("tagName", Computed::TagName),
    computed("localName", Computed::LocalName),
    computed("namespaceURI", Computed::NamespaceUri),
    computed("prefix", Null),
];

// Shared member groups

const REFERRER: Member = reflect("referrerPolicy", "referrerpolicy", Reflect::Enumerated(&REFERRER_POLICY));
const CROSS_ORIGIN_MEMBER: Member = reflect("crossOrigin", "crossorigin", Reflect::NullableEnumerated(&CROSS_ORIGIN));
const FORM_OWNER: Member = computed("form", Null);
const LABELS: Member = computed("labels", Object("NodeList"));
const FOCUSABLE: Member = reflect("tabIndex", "tabindex", Reflect::Long(0));

/// HTMLHyperlinkElementUtils
const HYPERLINK_UTILS: &[Member] = &[
    reflect("href", "href", Url),
    computed("origin", Computed::Str("null")),
    computed("protocol", Computed::Str(":")),
    computed("username", Computed::Str("")),
    computed("password", Computed::Str("")),
    computed("host", Computed::Str("")),
    computed("hostname", Computed::Str("")),
    computed("port", Computed::Str("")),
    computed("pathname", Computed::Str("")),
    computed("search", Computed::Str("")),
    computed("hash", Computed::Str("")),
];

/// Form-associated submit button members
const SUBMITTER: &[Member] = &[
    reflect("formAction", "formaction", Url),
    reflect("formEnctype", "formenctype", Reflect::Enumerated(&SUBMITTER_ENCTYPE)),
    reflect("formMethod", "formmethod", Reflect::Enumerated(&SUBMITTER_METHOD)),
    reflect("formNoValidate", "formnovalidate", Boolean),
    reflect("formTarget", "formtarget", STR),
];

/// PopoverInvokerElement
const POPOVER_INVOKER: &[Member] = &[
    computed("popoverTargetElement", Null),
    reflect("popoverTargetAction", "popovertargetaction", Reflect::Enumerated(&POPOVER_TARGET_ACTION)),
];

/// Constraint validation API
const VALIDATION: &[Member] = &[
    computed("willValidate", Computed::Bool(true)),
    computed("validity", Object("ValidityState")),
    computed("validationMessage", Computed::Str("")),
];

// Base interfaces

pub static ELEMENT: Interface = Interface {
    name: "Element",
    parent: None,
    mixins: &[HTML_NAMESPACE_MEMBERS, ARIA_MIXIN],
    members: &[
        reflect("id", "id", STR),
        reflect("className", "class", STR),
        reflect("classList", "class", TokenList),
        reflect("slot", "slot", STR),
        computed("attributes", Object("NamedNodeMap")),
        computed("shadowRoot", Null),
        computed("assignedSlot", Null),
        computed("innerHTML", Computed::Str("")),
        computed("outerHTML", Computed::Str("")),
        computed("parentElement", Null),
        computed("parentNode", Null),
        computed("ownerDocument", Object("Document")),
        computed("childElementCount", Computed::Long(0)),
        computed("children", Object("HTMLCollection")),
        computed("firstElementChild", Null),
        computed("lastElementChild", Null),
        computed("scrollTop", Computed::Long(0)),
        computed("scrollLeft", Computed::Long(0)),
        computed("clientWidth", Computed::Long(0)),
        computed("clientHeight", Computed::Long(0)),
    ],
};

pub static HTML_ELEMENT: Interface = Interface {
    name: "HTMLElement",
    parent: Some(&ELEMENT),
    mixins: &[],
    members: &[
        reflect("title", "title", STR),
        reflect("lang", "lang", STR),
        computed("translate", Computed::Bool(true)),
        reflect("dir", "dir", Reflect::Enumerated(&DIR)),
        reflect("hidden", "hidden", Boolean),
        reflect("inert", "inert", Boolean),
        reflect("accessKey", "accesskey", STR),
        computed("accessKeyLabel", Computed::Str("")),
        computed("draggable", Computed::Bool(false)),
        computed("spellcheck", Computed::Bool(true)),
        reflect("writingSuggestions", "writingsuggestions", Reflect::Enumerated(&WRITING_SUGGESTIONS)),
        reflect("autocapitalize", "autocapitalize", Reflect::Enumerated(&AUTOCAPITALIZE)),
        computed("innerText", Computed::Str("")),
        computed("outerText", Computed::Str("")),
        reflect("popover", "popover", Reflect::NullableEnumerated(&POPOVER)),
        reflect("contentEditable", "contenteditable", Reflect::Enumerated(&CONTENT_EDITABLE)),
        computed("isContentEditable", Computed::Bool(false)),
        reflect("enterKeyHint", "enterkeyhint", Reflect::Enumerated(&ENTER_KEY_HINT)),
        reflect("inputMode", "inputmode", Reflect::Enumerated(&INPUT_MODE)),
        computed("dataset", Object("DOMStringMap")),
        reflect("nonce", "nonce", STR),
        reflect("autofocus", "autofocus", Boolean),
        reflect("tabIndex", "tabindex", Reflect::Long(-1)),
        computed("style", Object("CSSStyleDeclaration")),
        computed("offsetParent", Null),
        computed("offsetTop", Computed::Long(0)),
        computed("offsetLeft", Computed::Long(0)),
        computed("offsetWidth", Computed::Long(0)),
        computed("offsetHeight", Computed::Long(0)),
    ],
};

pub static HTML_UNKNOWN_ELEMENT: Interface = Interface {
    name: "HTMLUnknownElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[],
};

// Element-specific interfaces

pub static HTML_ANCHOR_ELEMENT: Interface = Interface {
    name: "HTMLAnchorElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[HYPERLINK_UTILS],
    members: &[
        reflect("target", "target", STR),
        reflect("download", "download", STR),
        reflect("ping", "ping", STR),
        reflect("rel", "rel", STR),
        reflect("relList", "rel", TokenList),
        reflect("hreflang", "hreflang", STR),
        reflect("type", "type", STR),
        computed("text", Computed::Str("")),
        REFERRER,
        FOCUSABLE,
        // Obsolete
        reflect("coords", "coords", STR),
        reflect("charset", "charset", STR),
        reflect("name", "name", STR),
        reflect("rev", "rev", STR),
        reflect("shape", "shape", STR),
    ],
};

pub static HTML_AREA_ELEMENT: Interface = Interface {
    name: "HTMLAreaElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[HYPERLINK_UTILS],
    members: &[
        reflect("alt", "alt", STR),
        reflect("coords", "coords", STR),
        reflect("shape", "shape", STR),
        reflect("target", "target", STR),
        reflect("download", "download", STR),
        reflect("ping", "ping", STR),
        reflect("rel", "rel", STR),
        reflect("relList", "rel", TokenList),
        REFERRER,
        FOCUSABLE,
        // Obsolete
        reflect("noHref", "nohref", Boolean),
    ],
};

const MEDIA_MEMBERS: &[Member] = &[
    reflect("src", "src", Url),
    computed("currentSrc", Computed::Str("")),
    CROSS_ORIGIN_MEMBER,
    reflect("preload", "preload", Reflect::Enumerated(&PRELOAD)),
    reflect("autoplay", "autoplay", Boolean),
    reflect("loop", "loop", Boolean),
    reflect("controls", "controls", Boolean),
    reflect("defaultMuted", "muted", Boolean),
    computed("muted", Computed::Bool(false)),
    computed("volume", Computed::Double(1.0)),
    computed("paused", Computed::Bool(true)),
    computed("ended", Computed::Bool(false)),
    computed("readyState", Computed::Long(0)),
    computed("networkState", Computed::Long(0)),
    computed("currentTime", Computed::Double(0.0)),
    computed("playbackRate", Computed::Double(1.0)),
    computed("error", Null),
    computed("srcObject", Null),
    computed("textTracks", Object("TextTrackList")),
];

pub static HTML_MEDIA_ELEMENT: Interface = Interface {
    name: "HTMLMediaElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: MEDIA_MEMBERS,
};

pub static HTML_AUDIO_ELEMENT: Interface = Interface {
    name: "HTMLAudioElement",
    parent: Some(&HTML_MEDIA_ELEMENT),
    mixins: &[],
    members: &[],
};

pub static HTML_VIDEO_ELEMENT: Interface = Interface {
    name: "HTMLVideoElement",
    parent: Some(&HTML_MEDIA_ELEMENT),
    mixins: &[],
    members: &[
        reflect("width", "width", Reflect::UnsignedLong(0)),
        reflect("height", "height", Reflect::UnsignedLong(0)),
        computed("videoWidth", Computed::Long(0)),
        computed("videoHeight", Computed::Long(0)),
        reflect("poster", "poster", Url),
        reflect("playsInline", "playsinline", Boolean),
    ],
};

pub static HTML_BASE_ELEMENT: Interface = Interface {
    name: "HTMLBaseElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("href", "href", Url), reflect("target", "target", STR)],
};

pub static HTML_BODY_ELEMENT: Interface = Interface {
    name: "HTMLBodyElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        // Obsolete
        reflect("text", "text", STR),
        reflect("link", "link", STR),
        reflect("vLink", "vlink", STR),
        reflect("aLink", "alink", STR),
        reflect("bgColor", "bgcolor", STR),
        reflect("background", "background", STR),
    ],
};

pub static HTML_BR_ELEMENT: Interface = Interface {
    name: "HTMLBRElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("clear", "clear", STR)],
};

pub static HTML_BUTTON_ELEMENT: Interface = Interface {
    name: "HTMLButtonElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[SUBMITTER, POPOVER_INVOKER, VALIDATION],
    members: &[
        reflect("disabled", "disabled", Boolean),
        FORM_OWNER,
        reflect("name", "name", STR),
        reflect("type", "type", Reflect::Enumerated(&BUTTON_TYPE)),
        reflect("value", "value", STR),
        LABELS,
        FOCUSABLE,
    ],
};

pub static HTML_CANVAS_ELEMENT: Interface = Interface {
    name: "HTMLCanvasElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("width", "width", Reflect::UnsignedLong(300)),
        reflect("height", "height", Reflect::UnsignedLong(150)),
    ],
};

pub static HTML_DATA_ELEMENT: Interface = Interface {
    name: "HTMLDataElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("value", "value", STR)],
};

pub static HTML_DATA_LIST_ELEMENT: Interface = Interface {
    name: "HTMLDataListElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[computed("options", Object("HTMLCollection"))],
};

pub static HTML_DETAILS_ELEMENT: Interface = Interface {
    name: "HTMLDetailsElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("name", "name", STR), reflect("open", "open", Boolean)],
};

pub static HTML_DIALOG_ELEMENT: Interface = Interface {
    name: "HTMLDialogElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("open", "open", Boolean), computed("returnValue", Computed::Str(""))],
};

pub static HTML_DIRECTORY_ELEMENT: Interface = Interface {
    name: "HTMLDirectoryElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("compact", "compact", Boolean)],
};

pub static HTML_DIV_ELEMENT: Interface = Interface {
    name: "HTMLDivElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("align", "align", STR)],
};

pub static HTML_DLIST_ELEMENT: Interface = Interface {
    name: "HTMLDListElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("compact", "compact", Boolean)],
};

pub static HTML_EMBED_ELEMENT: Interface = Interface {
    name: "HTMLEmbedElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("src", "src", Url),
        reflect("type", "type", STR),
        reflect("width", "width", STR),
        reflect("height", "height", STR),
        // Obsolete
        reflect("align", "align", STR),
        reflect("name", "name", STR),
    ],
};

pub static HTML_FIELD_SET_ELEMENT: Interface = Interface {
    name: "HTMLFieldSetElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[VALIDATION],
    members: &[
        reflect("disabled", "disabled", Boolean),
        FORM_OWNER,
        reflect("name", "name", STR),
        computed("type", Computed::Str("fieldset")),
        computed("elements", Object("HTMLCollection")),
    ],
};

pub static HTML_FONT_ELEMENT: Interface = Interface {
    name: "HTMLFontElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("color", "color", STR),
        reflect("face", "face", STR),
        reflect("size", "size", STR),
    ],
};

pub static HTML_FORM_ELEMENT: Interface = Interface {
    name: "HTMLFormElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("acceptCharset", "accept-charset", STR),
        reflect("action", "action", Url),
        reflect("autocomplete", "autocomplete", Reflect::Enumerated(&FORM_AUTOCOMPLETE)),
        reflect("enctype", "enctype", Reflect::Enumerated(&FORM_ENCTYPE)),
        reflect("encoding", "enctype", Reflect::Enumerated(&FORM_ENCTYPE)),
        reflect("method", "method", Reflect::Enumerated(&FORM_METHOD)),
        reflect("name", "name", STR),
        reflect("noValidate", "novalidate", Boolean),
        reflect("target", "target", STR),
        reflect("rel", "rel", STR),
        reflect("relList", "rel", TokenList),
        computed("elements", Object("HTMLFormControlsCollection")),
        computed("length", Computed::Long(0)),
    ],
};

pub static HTML_FRAME_ELEMENT: Interface = Interface {
    name: "HTMLFrameElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("name", "name", STR),
        reflect("scrolling", "scrolling", STR),
        reflect("src", "src", Url),
        reflect("frameBorder", "frameborder", STR),
        reflect("longDesc", "longdesc", Url),
        reflect("noResize", "noresize", Boolean),
        computed("contentDocument", Null),
        computed("contentWindow", Null),
        reflect("marginHeight", "marginheight", STR),
        reflect("marginWidth", "marginwidth", STR),
    ],
};

pub static HTML_FRAME_SET_ELEMENT: Interface = Interface {
    name: "HTMLFrameSetElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("cols", "cols", STR), reflect("rows", "rows", STR)],
};

pub static HTML_HEAD_ELEMENT: Interface = Interface {
    name: "HTMLHeadElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[],
};

pub static HTML_HEADING_ELEMENT: Interface = Interface {
    name: "HTMLHeadingElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("align", "align", STR)],
};

pub static HTML_HR_ELEMENT: Interface = Interface {
    name: "HTMLHRElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("align", "align", STR),
        reflect("color", "color", STR),
        reflect("noShade", "noshade", Boolean),
        reflect("size", "size", STR),
        reflect("width", "width", STR),
    ],
};

pub static HTML_HTML_ELEMENT: Interface = Interface {
    name: "HTMLHtmlElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("version", "version", STR)],
};

pub static HTML_IFRAME_ELEMENT: Interface = Interface {
    name: "HTMLIFrameElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("src", "src", Url),
        reflect("srcdoc", "srcdoc", STR),
        reflect("name", "name", STR),
        reflect("sandbox", "sandbox", TokenList),
        reflect("allow", "allow", STR),
        reflect("allowFullscreen", "allowfullscreen", Boolean),
        reflect("width", "width", STR),
        reflect("height", "height", STR),
        REFERRER,
        computed("contentDocument", Null),
        computed("contentWindow", Null),
        FOCUSABLE,
        // Obsolete
        reflect("align", "align", STR),
        reflect("scrolling", "scrolling", STR),
        reflect("frameBorder", "frameborder", STR),
        reflect("longDesc", "longdesc", Url),
        reflect("marginHeight", "marginheight", STR),
        reflect("marginWidth", "marginwidth", STR),
    ],
};

pub static HTML_IMAGE_ELEMENT: Interface = Interface {
    name: "HTMLImageElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("alt", "alt", STR),
        reflect("src", "src", Url),
        reflect("srcset", "srcset", STR),
        reflect("sizes", "sizes", STR),
        CROSS_ORIGIN_MEMBER,
        reflect("useMap", "usemap", STR),
        reflect("isMap", "ismap", Boolean),
        reflect("width", "width", Reflect::UnsignedLong(0)),
        reflect("height", "height", Reflect::UnsignedLong(0)),
        computed("naturalWidth", Computed::Long(0)),
        computed("naturalHeight", Computed::Long(0)),
        computed("complete", Computed::Bool(true)),
        computed("currentSrc", Computed::Str("")),
        REFERRER,
        reflect("decoding", "decoding", Reflect::Enumerated(&DECODING)),
        reflect("loading", "loading", Reflect::Enumerated(&LOADING)),
        reflect("fetchPriority", "fetchpriority", Reflect::Enumerated(&FETCH_PRIORITY)),
        // Obsolete
        reflect("name", "name", STR),
        reflect("lowsrc", "lowsrc", Url),
        reflect("align", "align", STR),
        reflect("hspace", "hspace", Reflect::UnsignedLong(0)),
        reflect("vspace", "vspace", Reflect::UnsignedLong(0)),
        reflect("longDesc", "longdesc", Url),
        reflect("border", "border", STR),
    ],
};

pub static HTML_INPUT_ELEMENT: Interface = Interface {
    name: "HTMLInputElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[SUBMITTER, POPOVER_INVOKER, VALIDATION],
    members: &[
        reflect("accept", "accept", STR),
        reflect("alt", "alt", STR),
        reflect("autocomplete", "autocomplete", STR),
        reflect("defaultChecked", "checked", Boolean),
        computed("checked", Computed::Bool(false)),
        reflect("dirName", "dirname", STR),
        reflect("disabled", "disabled", Boolean),
        FORM_OWNER,
        computed("files", Null),
        reflect("height", "height", Reflect::UnsignedLong(0)),
        computed("indeterminate", Computed::Bool(false)),
        computed("list", Null),
        reflect("max", "max", STR),
        reflect("maxLength", "maxlength", Reflect::NonNegativeLong(-1)),
        reflect("min", "min", STR),
        reflect("minLength", "minlength", Reflect::NonNegativeLong(-1)),
        reflect("multiple", "multiple", Boolean),
        reflect("name", "name", STR),
        reflect("pattern", "pattern", STR),
        reflect("placeholder", "placeholder", STR),
        reflect("readOnly", "readonly", Boolean),
        reflect("required", "required", Boolean),
        reflect("size", "size", Reflect::PositiveUnsignedLong(20)),
        reflect("src", "src", Url),
        reflect("step", "step", STR),
        reflect("type", "type", Reflect::Enumerated(&INPUT_TYPE)),
        reflect("defaultValue", "value", STR),
        computed("value", Computed::Str("")),
        computed("valueAsNumber", Computed::Double(f64::NAN)),
        reflect("width", "width", Reflect::UnsignedLong(0)),
        LABELS,
        FOCUSABLE,
        // Obsolete
        reflect("align", "align", STR),
        reflect("useMap", "usemap", STR),
    ],
};

pub static HTML_LABEL_ELEMENT: Interface = Interface {
    name: "HTMLLabelElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[FORM_OWNER, reflect("htmlFor", "for", STR), computed("control", Null)],
};

pub static HTML_LEGEND_ELEMENT: Interface = Interface {
    name: "HTMLLegendElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[FORM_OWNER, reflect("align", "align", STR)],
};

pub static HTML_LI_ELEMENT: Interface = Interface {
    name: "HTMLLIElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("value", "value", Reflect::Long(0)), reflect("type", "type", STR)],
};

pub static HTML_LINK_ELEMENT: Interface = Interface {
    name: "HTMLLinkElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("href", "href", Url),
        CROSS_ORIGIN_MEMBER,
        reflect("rel", "rel", STR),
        reflect("as", "as", STR),
        reflect("relList", "rel", TokenList),
        reflect("media", "media", STR),
        reflect("integrity", "integrity", STR),
        reflect("hreflang", "hreflang", STR),
        reflect("type", "type", STR),
        reflect("sizes", "sizes", TokenList),
        reflect("imageSrcset", "imagesrcset", STR),
        reflect("imageSizes", "imagesizes", STR),
        REFERRER,
        reflect("blocking", "blocking", TokenList),
        reflect("disabled", "disabled", Boolean),
        reflect("fetchPriority", "fetchpriority", Reflect::Enumerated(&FETCH_PRIORITY)),
        computed("sheet", Null),
        // Obsolete
        reflect("charset", "charset", STR),
        reflect("rev", "rev", STR),
        reflect("target", "target", STR),
    ],
};

pub static HTML_MAP_ELEMENT: Interface = Interface {
    name: "HTMLMapElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("name", "name", STR), computed("areas", Object("HTMLCollection"))],
};

pub static HTML_MARQUEE_ELEMENT: Interface = Interface {
    name: "HTMLMarqueeElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("behavior", "behavior", STR),
        reflect("bgColor", "bgcolor", STR),
        reflect("direction", "direction", STR),
        reflect("height", "height", STR),
        reflect("hspace", "hspace", Reflect::UnsignedLong(0)),
        reflect("loop", "loop", Reflect::Long(-1)),
        reflect("scrollAmount", "scrollamount", Reflect::UnsignedLong(6)),
        reflect("scrollDelay", "scrolldelay", Reflect::UnsignedLong(85)),
        reflect("trueSpeed", "truespeed", Boolean),
        reflect("vspace", "vspace", Reflect::UnsignedLong(0)),
        reflect("width", "width", STR),
    ],
};

pub static HTML_MENU_ELEMENT: Interface = Interface {
    name: "HTMLMenuElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("compact", "compact", Boolean)],
};

pub static HTML_META_ELEMENT: Interface = Interface {
    name: "HTMLMetaElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("name", "name", STR),
        reflect("httpEquiv", "http-equiv", STR),
        reflect("content", "content", STR),
        reflect("media", "media", STR),
        // Obsolete
        reflect("scheme", "scheme", STR),
    ],
};

pub static HTML_METER_ELEMENT: Interface = Interface {
    name: "HTMLMeterElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("value", "value", Reflect::Double(0.0)),
        reflect("min", "min", Reflect::Double(0.0)),
        reflect("max", "max", Reflect::Double(1.0)),
        reflect("low", "low", Reflect::Double(0.0)),
        reflect("high", "high", Reflect::Double(1.0)),
        reflect("optimum", "optimum", Reflect::Double(0.5)),
        LABELS,
    ],
};

pub static HTML_MOD_ELEMENT: Interface = Interface {
    name: "HTMLModElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("cite", "cite", Url), reflect("dateTime", "datetime", STR)],
};

pub static HTML_OBJECT_ELEMENT: Interface = Interface {
    name: "HTMLObjectElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[VALIDATION],
    members: &[
        reflect("data", "data", Url),
        reflect("type", "type", STR),
        reflect("name", "name", STR),
        FORM_OWNER,
        reflect("width", "width", STR),
        reflect("height", "height", STR),
        computed("contentDocument", Null),
        computed("contentWindow", Null),
        FOCUSABLE,
        // Obsolete
        reflect("align", "align", STR),
        reflect("archive", "archive", STR),
        reflect("code", "code", STR),
        reflect("declare", "declare", Boolean),
        reflect("hspace", "hspace", Reflect::UnsignedLong(0)),
        reflect("standby", "standby", STR),
        reflect("vspace", "vspace", Reflect::UnsignedLong(0)),
        reflect("codeBase", "codebase", Url),
        reflect("codeType", "codetype", STR),
        reflect("useMap", "usemap", STR),
        reflect("border", "border", STR),
    ],
};

pub static HTML_OLIST_ELEMENT: Interface = Interface {
    name: "HTMLOListElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("reversed", "reversed", Boolean),
        reflect("start", "start", Reflect::Long(1)),
        reflect("type", "type", STR),
        reflect("compact", "compact", Boolean),
    ],
};

pub static HTML_OPT_GROUP_ELEMENT: Interface = Interface {
    name: "HTMLOptGroupElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("disabled", "disabled", Boolean), reflect("label", "label", STR)],
};

pub static HTML_OPTION_ELEMENT: Interface = Interface {
    name: "HTMLOptionElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("disabled", "disabled", Boolean),
        FORM_OWNER,
        reflect("label", "label", STR),
        reflect("defaultSelected", "selected", Boolean),
        computed("selected", Computed::Bool(false)),
        reflect("value", "value", STR),
        computed("text", Computed::Str("")),
        computed("index", Computed::Long(0)),
    ],
};

pub static HTML_OUTPUT_ELEMENT: Interface = Interface {
    name: "HTMLOutputElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[VALIDATION],
    members: &[
        reflect("htmlFor", "for", TokenList),
        FORM_OWNER,
        reflect("name", "name", STR),
        computed("type", Computed::Str("output")),
        computed("defaultValue", Computed::Str("")),
        computed("value", Computed::Str("")),
        LABELS,
    ],
};

pub static HTML_PARAGRAPH_ELEMENT: Interface = Interface {
    name: "HTMLParagraphElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("align", "align", STR)],
};

pub static HTML_PARAM_ELEMENT: Interface = Interface {
    name: "HTMLParamElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("name", "name", STR),
        reflect("value", "value", STR),
        reflect("type", "type", STR),
        reflect("valueType", "valuetype", STR),
    ],
};

pub static HTML_PICTURE_ELEMENT: Interface = Interface {
    name: "HTMLPictureElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[],
};

pub static HTML_PRE_ELEMENT: Interface = Interface {
    name: "HTMLPreElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("width", "width", Reflect::Long(0))],
};

pub static HTML_PROGRESS_ELEMENT: Interface = Interface {
    name: "HTMLProgressElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("value", "value", Reflect::Double(0.0)),
        reflect("max", "max", Reflect::Double(1.0)),
        computed("position", Computed::Double(-1.0)),
        LABELS,
    ],
};

pub static HTML_QUOTE_ELEMENT: Interface = Interface {
    name: "HTMLQuoteElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("cite", "cite", Url)],
};

pub static HTML_SCRIPT_ELEMENT: Interface = Interface {
    name: "HTMLScriptElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("src", "src", Url),
        reflect("type", "type", STR),
        reflect("noModule", "nomodule", Boolean),
        // Not parser-inserted, so async defaults to true
        computed("async", Computed::Bool(true)),
        reflect("defer", "defer", Boolean),
        CROSS_ORIGIN_MEMBER,
        computed("text", Computed::Str("")),
        reflect("integrity", "integrity", STR),
        REFERRER,
        reflect("blocking", "blocking", TokenList),
        reflect("fetchPriority", "fetchpriority", Reflect::Enumerated(&FETCH_PRIORITY)),
        // Obsolete
        reflect("charset", "charset", STR),
        reflect("event", "event", STR),
        reflect("htmlFor", "for", STR),
    ],
};

pub static HTML_SELECT_ELEMENT: Interface = Interface {
    name: "HTMLSelectElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[VALIDATION],
    members: &[
        reflect("autocomplete", "autocomplete", STR),
        reflect("disabled", "disabled", Boolean),
        FORM_OWNER,
        reflect("multiple", "multiple", Boolean),
        reflect("name", "name", STR),
        reflect("required", "required", Boolean),
        reflect("size", "size", Reflect::UnsignedLong(0)),
        computed("type", Computed::Str("select-one")),
        computed("options", Object("HTMLOptionsCollection")),
        computed("length", Computed::Long(0)),
        computed("selectedOptions", Object("HTMLCollection")),
        computed("selectedIndex", Computed::Long(-1)),
        computed("value", Computed::Str("")),
        LABELS,
        FOCUSABLE,
    ],
};

pub static HTML_SLOT_ELEMENT: Interface = Interface {
    name: "HTMLSlotElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("name", "name", STR)],
};

pub static HTML_SOURCE_ELEMENT: Interface = Interface {
    name: "HTMLSourceElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("src", "src", Url),
        reflect("type", "type", STR),
        reflect("srcset", "srcset", STR),
        reflect("sizes", "sizes", STR),
        reflect("media", "media", STR),
        reflect("width", "width", Reflect::UnsignedLong(0)),
        reflect("height", "height", Reflect::UnsignedLong(0)),
    ],
};

pub static HTML_SPAN_ELEMENT: Interface = Interface {
    name: "HTMLSpanElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[],
};

pub static HTML_STYLE_ELEMENT: Interface = Interface {
    name: "HTMLStyleElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        computed("disabled", Computed::Bool(false)),
        reflect("media", "media", STR),
        reflect("blocking", "blocking", TokenList),
        computed("sheet", Null),
        // Obsolete
        reflect("type", "type", STR),
    ],
};

pub static HTML_TABLE_CAPTION_ELEMENT: Interface = Interface {
    name: "HTMLTableCaptionElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("align", "align", STR)],
};

pub static HTML_TABLE_CELL_ELEMENT: Interface = Interface {
    name: "HTMLTableCellElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("colSpan", "colspan", Reflect::PositiveUnsignedLong(1)),
        reflect("rowSpan", "rowspan", Reflect::UnsignedLong(1)),
        reflect("headers", "headers", STR),
        computed("cellIndex", Computed::Long(-1)),
        reflect("scope", "scope", Reflect::Enumerated(&CELL_SCOPE)),
        reflect("abbr", "abbr", STR),
        // Obsolete
        reflect("align", "align", STR),
        reflect("axis", "axis", STR),
        reflect("height", "height", STR),
        reflect("width", "width", STR),
        reflect("ch", "char", STR),
        reflect("chOff", "charoff", STR),
        reflect("noWrap", "nowrap", Boolean),
        reflect("vAlign", "valign", STR),
        reflect("bgColor", "bgcolor", STR),
    ],
};

pub static HTML_TABLE_COL_ELEMENT: Interface = Interface {
    name: "HTMLTableColElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("span", "span", Reflect::PositiveUnsignedLong(1)),
        // Obsolete
        reflect("align", "align", STR),
        reflect("ch", "char", STR),
        reflect("chOff", "charoff", STR),
        reflect("vAlign", "valign", STR),
        reflect("width", "width", STR),
    ],
};

pub static HTML_TABLE_ELEMENT: Interface = Interface {
    name: "HTMLTableElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        computed("caption", Null),
        computed("tHead", Null),
        computed("tFoot", Null),
        computed("tBodies", Object("HTMLCollection")),
        computed("rows", Object("HTMLCollection")),
        // Obsolete
        reflect("align", "align", STR),
        reflect("border", "border", STR),
        reflect("frame", "frame", STR),
        reflect("rules", "rules", STR),
        reflect("summary", "summary", STR),
        reflect("width", "width", STR),
        reflect("bgColor", "bgcolor", STR),
        reflect("cellPadding", "cellpadding", STR),
        reflect("cellSpacing", "cellspacing", STR),
    ],
};

pub static HTML_TABLE_ROW_ELEMENT: Interface = Interface {
    name: "HTMLTableRowElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        computed("rowIndex", Computed::Long(-1)),
        computed("sectionRowIndex", Computed::Long(-1)),
        computed("cells", Object("HTMLCollection")),
        // Obsolete
        reflect("align", "align", STR),
        reflect("ch", "char", STR),
        reflect("chOff", "charoff", STR),
        reflect("vAlign", "valign", STR),
        reflect("bgColor", "bgcolor", STR),
    ],
};

pub static HTML_TABLE_SECTION_ELEMENT: Interface = Interface {
    name: "HTMLTableSectionElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        computed("rows", Object("HTMLCollection")),
        // Obsolete
        reflect("align", "align", STR),
        reflect("ch", "char", STR),
        reflect("chOff", "charoff", STR),
        reflect("vAlign", "valign", STR),
    ],
};

pub static HTML_TEMPLATE_ELEMENT: Interface = Interface {
    name: "HTMLTemplateElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        computed("content", Object("DocumentFragment")),
        reflect("shadowRootMode", "shadowrootmode", Reflect::Enumerated(&SHADOW_ROOT_MODE)),
        reflect("shadowRootDelegatesFocus", "shadowrootdelegatesfocus", Boolean),
        reflect("shadowRootClonable", "shadowrootclonable", Boolean),
        reflect("shadowRootSerializable", "shadowrootserializable", Boolean),
    ],
};

pub static HTML_TEXT_AREA_ELEMENT: Interface = Interface {
    name: "HTMLTextAreaElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[VALIDATION],
    members: &[
        reflect("autocomplete", "autocomplete", STR),
        reflect("cols", "cols", Reflect::PositiveUnsignedLong(20)),
        reflect("dirName", "dirname", STR),
        reflect("disabled", "disabled", Boolean),
        FORM_OWNER,
        reflect("maxLength", "maxlength", Reflect::NonNegativeLong(-1)),
        reflect("minLength", "minlength", Reflect::NonNegativeLong(-1)),
        reflect("name", "name", STR),
        reflect("placeholder", "placeholder", STR),
        reflect("readOnly", "readonly", Boolean),
        reflect("required", "required", Boolean),
        reflect("rows", "rows", Reflect::PositiveUnsignedLong(2)),
        reflect("wrap", "wrap", STR),
        computed("type", Computed::Str("textarea")),
        computed("defaultValue", Computed::Str("")),
        computed("value", Computed::Str("")),
        computed("textLength", Computed::Long(0)),
        LABELS,
        FOCUSABLE,
    ],
};

pub static HTML_TIME_ELEMENT: Interface = Interface {
    name: "HTMLTimeElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("dateTime", "datetime", STR)],
};

pub static HTML_TITLE_ELEMENT: Interface = Interface {
    name: "HTMLTitleElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[computed("text", Computed::Str(""))],
};

pub static HTML_TRACK_ELEMENT: Interface = Interface {
    name: "HTMLTrackElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[
        reflect("kind", "kind", Reflect::Enumerated(&TRACK_KIND)),
        reflect("src", "src", Url),
        reflect("srclang", "srclang", STR),
        reflect("label", "label", STR),
        reflect("default", "default", Boolean),
        computed("readyState", Computed::Long(0)),
        computed("track", Object("TextTrack")),
    ],
};

pub static HTML_ULIST_ELEMENT: Interface = Interface {
    name: "HTMLUListElement",
    parent: Some(&HTML_ELEMENT),
    mixins: &[],
    members: &[reflect("compact", "compact", Boolean), reflect("type", "type", STR)],
};

/// Interface for an HTML element's local name (already lowercased)
pub fn interface_for(local_name: &str) -> &'static Interface {
    match local_name {
        "a" => &HTML_ANCHOR_ELEMENT,
        "area" => &HTML_AREA_ELEMENT,
        "audio" => &HTML_AUDIO_ELEMENT,
        "base" => &HTML_BASE_ELEMENT,
        "blockquote" | "q" => &HTML_QUOTE_ELEMENT,
        "body" => &HTML_BODY_ELEMENT,
        "br" => &HTML_BR_ELEMENT,
        "button" => &HTML_BUTTON_ELEMENT,
        "canvas" => &HTML_CANVAS_ELEMENT,
        "caption" => &HTML_TABLE_CAPTION_ELEMENT,
        "col" | "colgroup" => &HTML_TABLE_COL_ELEMENT,
        "data" => &HTML_DATA_ELEMENT,
        "datalist" => &HTML_DATA_LIST_ELEMENT,
        "del" | "ins" => &HTML_MOD_ELEMENT,
        "details" => &HTML_DETAILS_ELEMENT,
        "dialog" => &HTML_DIALOG_ELEMENT,
        "dir" => &HTML_DIRECTORY_ELEMENT,
        "div" => &HTML_DIV_ELEMENT,
        "dl" => &HTML_DLIST_ELEMENT,
        "embed" => &HTML_EMBED_ELEMENT,
        "fieldset" => &HTML_FIELD_SET_ELEMENT,
        "font" => &HTML_FONT_ELEMENT,
        "form" => &HTML_FORM_ELEMENT,
        "frame" => &HTML_FRAME_ELEMENT,
        "frameset" => &HTML_FRAME_SET_ELEMENT,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => &HTML_HEADING_ELEMENT,
        "head" => &HTML_HEAD_ELEMENT,
        "hr" => &HTML_HR_ELEMENT,
        "html" => &HTML_HTML_ELEMENT,
        "iframe" => &HTML_IFRAME_ELEMENT,
        "img" => &HTML_IMAGE_ELEMENT,
        "input" => &HTML_INPUT_ELEMENT,
        "label" => &HTML_LABEL_ELEMENT,
        "legend" => &HTML_LEGEND_ELEMENT,
        "li" => &HTML_LI_ELEMENT,
        "link" => &HTML_LINK_ELEMENT,
        "map" => &HTML_MAP_ELEMENT,
        "marquee" => &HTML_MARQUEE_ELEMENT,
        "menu" => &HTML_MENU_ELEMENT,
        "meta" => &HTML_META_ELEMENT,
        "meter" => &HTML_METER_ELEMENT,
        "object" => &HTML_OBJECT_ELEMENT,
        "ol" => &HTML_OLIST_ELEMENT,
        "optgroup" => &HTML_OPT_GROUP_ELEMENT,
        "option" => &HTML_OPTION_ELEMENT,
        "output" => &HTML_OUTPUT_ELEMENT,
        "p" => &HTML_PARAGRAPH_ELEMENT,
        "param" => &HTML_PARAM_ELEMENT,
        "picture" => &HTML_PICTURE_ELEMENT,
        "pre" | "listing" | "xmp" => &HTML_PRE_ELEMENT,
        "progress" => &HTML_PROGRESS_ELEMENT,
        "script" => &HTML_SCRIPT_ELEMENT,
        "select" => &HTML_SELECT_ELEMENT,
        "slot" => &HTML_SLOT_ELEMENT,
        "source" => &HTML_SOURCE_ELEMENT,
        "span" => &HTML_SPAN_ELEMENT,
        "style" => &HTML_STYLE_ELEMENT,
        "table" => &HTML_TABLE_ELEMENT,
        "tbody" | "thead" | "tfoot" => &HTML_TABLE_SECTION_ELEMENT,
        "td" | "th" => &HTML_TABLE_CELL_ELEMENT,
        "template" => &HTML_TEMPLATE_ELEMENT,
        "textarea" => &HTML_TEXT_AREA_ELEMENT,
        "time" => &HTML_TIME_ELEMENT,
        "title" => &HTML_TITLE_ELEMENT,
        "tr" => &HTML_TABLE_ROW_ELEMENT,
        "track" => &HTML_TRACK_ELEMENT,
        "ul" => &HTML_ULIST_ELEMENT,
        "video" => &HTML_VIDEO_ELEMENT,
        "abbr" | "acronym" | "address" | "article" | "aside" | "b" | "basefont" | "bdi" | "bdo"
        | "big" | "center" | "cite" | "code" | "dd" | "dfn" | "dt" | "em" | "figcaption"
        | "figure" | "footer" | "header" | "hgroup" | "i" | "kbd" | "main" | "mark" | "nav"
        | "nobr" | "noembed" | "noframes" | "noscript" | "plaintext" | "rb" | "rp" | "rt"
        | "rtc" | "ruby" | "s" | "samp" | "search" | "section" | "small" | "strike"
        | "strong" | "sub" | "summary" | "sup" | "tt" | "u" | "var" | "wbr" => &HTML_ELEMENT,
        _ => &HTML_UNKNOWN_ELEMENT,
    }
}
