use weft_core::{element_ns, Node, Renderable, SVG_NAMESPACE};

macro_rules! svg_constructors {
    ( $( $name:ident => $tag:literal; )* ) => {
        $(
            #[doc = concat!(
                "Build an SVG [`<", $tag, ">`]",
                "(https://developer.mozilla.org/en-US/docs/Web/SVG/Element/", $tag, ") element."
            )]
            pub fn $name<I>(children: I) -> Node
            where
                I: IntoIterator,
                I::Item: Into<Renderable>,
            {
                element_ns(SVG_NAMESPACE, $tag, children)
            }
        )*
    };
}

svg_constructors! {
    svg => "svg";
    g => "g";
    defs => "defs";
    symbol => "symbol";
    use_ => "use";
    path => "path";
    circle => "circle";
    ellipse => "ellipse";
    line => "line";
    polyline => "polyline";
    polygon => "polygon";
    rect => "rect";
}
