use weft_core::Modifier;

fn attribute(name: &'static str, value: impl Into<String>) -> Modifier {
    let value = value.into();
    Modifier::new(move |el| el.set_attribute(name, &value))
}

// Reflected properties are assigned on the element object rather than through setAttribute.
fn property(name: &'static str, value: impl Into<String>) -> Modifier {
    let value = value.into();
    Modifier::new(move |el| el.set_property(name, &value))
}

/// Set an arbitrary attribute.
pub fn set_attribute(attr: impl Into<String>, value: impl Into<String>) -> Modifier {
    let (attr, value) = (attr.into(), value.into());
    Modifier::new(move |el| el.set_attribute(&attr, &value))
}

/// Remove an attribute if present.
pub fn remove_attribute(attr: impl Into<String>) -> Modifier {
    let attr = attr.into();
    Modifier::new(move |el| el.remove_attribute(&attr))
}

/// Set a single CSS property in the inline style.
pub fn style(property: impl Into<String>, value: impl Into<String>) -> Modifier {
    let (property, value) = (property.into(), value.into());
    Modifier::new(move |el| el.set_style_property(&property, &value))
}

/// Append a text node.
pub fn text(t: impl Into<String>) -> Modifier {
    let t = t.into();
    Modifier::new(move |el| el.append_text_node(&t))
}

/// Replace the element's content with raw markup. The markup is not escaped.
pub fn inner_html(t: impl Into<String>) -> Modifier {
    let t = t.into();
    Modifier::new(move |el| el.set_inner_html(&t))
}

pub fn id(id: impl Into<String>) -> Modifier {
    let id = id.into();
    Modifier::new(move |el| el.set_id(&id))
}

pub fn src(src: impl Into<String>) -> Modifier {
    property("src", src)
}

pub fn alt(alt: impl Into<String>) -> Modifier {
    property("alt", alt)
}

pub fn title(title: impl Into<String>) -> Modifier {
    property("title", title)
}

pub fn href(href: impl Into<String>) -> Modifier {
    property("href", href)
}

pub fn width(w: impl Into<String>) -> Modifier {
    property("width", w)
}

pub fn height(h: impl Into<String>) -> Modifier {
    property("height", h)
}

pub fn tab_index(t: impl Into<String>) -> Modifier {
    attribute("tabindex", t)
}

pub fn aria_label(label: impl Into<String>) -> Modifier {
    attribute("aria-label", label)
}

pub fn aria_orientation(orientation: impl Into<String>) -> Modifier {
    attribute("aria-orientation", orientation)
}

pub fn aria_labelledby(label: impl Into<String>) -> Modifier {
    attribute("aria-labelledby", label)
}

/// Set the ARIA `role` attribute.
pub fn role(role: impl Into<String>) -> Modifier {
    attribute("role", role)
}
