use weft_core::Modifier;

// SVG geometry properties are read-only animated values on the element object, so everything here goes
// through setAttribute.
macro_rules! svg_attributes {
    ( $( $(#[$attr:meta])* $name:ident => $attribute:literal; )* ) => {
        $(
            #[doc = concat!("Set the `", $attribute, "` attribute.")]
            $(#[$attr])*
            pub fn $name(value: impl Into<String>) -> Modifier {
                let value = value.into();
                Modifier::new(move |el| el.set_attribute($attribute, &value))
            }
        )*
    };
}

svg_attributes! {
    xmlns => "xmlns";
    view_box => "viewBox";
    width => "width";
    height => "height";
    transform => "transform";

    // Painting
    fill => "fill";
    fill_opacity => "fill-opacity";
    fill_rule => "fill-rule";
    stroke => "stroke";
    stroke_opacity => "stroke-opacity";
    stroke_width => "stroke-width";
    stroke_linecap => "stroke-linecap";
    stroke_linejoin => "stroke-linejoin";
    stroke_miterlimit => "stroke-miterlimit";
    stroke_dasharray => "stroke-dasharray";
    opacity => "opacity";

    // Geometry
    /// The path data of a `<path>`.
    d => "d";
    cx => "cx";
    cy => "cy";
    r => "r";
    rx => "rx";
    ry => "ry";
    x => "x";
    y => "y";
    x1 => "x1";
    y1 => "y1";
    x2 => "x2";
    y2 => "y2";
    /// The vertex list of a `<polyline>` or `<polygon>`.
    points => "points";
    href => "href";
}
