use weft_core::{element, Node, Renderable};

macro_rules! builder_constructors {
    ( $( $(#[$attr:meta])* $name:ident; )* ) => {
        $(
            #[doc = concat!(
                "Build a [`<", stringify!($name), ">`]",
                "(https://developer.mozilla.org/en-US/docs/Web/HTML/Element/", stringify!($name), ") element."
            )]
            $(#[$attr])*
            pub fn $name<I>(children: I) -> Node
            where
                I: IntoIterator,
                I::Item: Into<Renderable>,
            {
                element(stringify!($name), children)
            }
        )*
    };
}

// Organized in the same order as
// https://developer.mozilla.org/en-US/docs/Web/HTML/Element
//
// Document metadata is left out, as are obsolete and deprecated elements.
builder_constructors! {
    // Sectioning
    body;
    address;
    article;
    aside;
    footer;
    header;
    h1;
    h2;
    h3;
    h4;
    h5;
    h6;
    hgroup;
    main;
    nav;
    section;
    search;

    // Text content
    blockquote;
    dd;
    div;
    dl;
    dt;
    figcaption;
    figure;
    hr;
    li;
    menu;
    ol;
    p;
    pre;
    ul;

    // Inline text semantics
    a;
    abbr;
    b;
    bdi;
    bdo;
    br;
    cite;
    code;
    dfn;
    em;
    i;
    kbd;
    mark;
    q;
    s;
    samp;
    small;
    span;
    strong;
    sub;
    sup;
    time;
    u;
    var;
    wbr;

    // Image and multimedia
    area;
    audio;
    img;
    map;
    track;
    video;

    // Embedded content
    embed;
    iframe;
    object;
    picture;
    source;

    // Scripting
    canvas;
    noscript;

    // Edits
    del;
    ins;

    // Table content
    caption;
    col;
    colgroup;
    table;
    tbody;
    td;
    tfoot;
    th;
    thead;
    tr;

    // Forms
    button;
    datalist;
    fieldset;
    form;
    input;
    label;
    legend;
    meter;
    optgroup;
    option;
    output;
    progress;
    select;
    textarea;

    // Interactive elements
    details;
    dialog;
    summary;

    // Web components
    slot;
    template;
}
