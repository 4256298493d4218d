use weft_core::{children, mem::MemDocument, Node};
use weft_html as html;

#[test]
fn factories_use_their_literal_tag_names() {
    let cases: Vec<(Node, &str)> = vec![
        (html::div(children![]), "div"),
        (html::iframe(children![]), "iframe"),
        (html::hr(children![]), "hr"),
        (html::button(children![]), "button"),
        (html::nav(children![]), "nav"),
        (html::i(children![]), "i"),
        (html::a(children![]), "a"),
        (html::em(children![]), "em"),
        (html::figure(children![]), "figure"),
        (html::ul(children![]), "ul"),
        (html::li(children![]), "li"),
        (html::ol(children![]), "ol"),
        (html::img(children![]), "img"),
        (html::p(children![]), "p"),
        (html::pre(children![]), "pre"),
        (html::code(children![]), "code"),
        (html::aside(children![]), "aside"),
        (html::blockquote(children![]), "blockquote"),
        (html::figcaption(children![]), "figcaption"),
        (html::span(children![]), "span"),
        (html::table(children![]), "table"),
        (html::tr(children![]), "tr"),
        (html::td(children![]), "td"),
        (html::h1(children![]), "h1"),
        (html::input(children![]), "input"),
    ];

    for (node, tag) in cases {
        assert_eq!(node.tag(), tag);
        assert_eq!(node.namespace(), None, "<{tag}> must not carry a namespace");
    }
}

#[test]
fn factories_accept_any_iterable_of_children() {
    let rows = (0..4).map(|i| html::tr(children![html::td(children![html::text(i.to_string())])]));
    let table = html::table(children![html::tbody(rows.collect::<Vec<_>>())])
        .render(&MemDocument::new())
        .unwrap();

    let tbody = table.find("tbody").unwrap();
    assert_eq!(tbody.child_elements().count(), 4);
    assert_eq!(table.text_content(), "0123");
}

#[test]
fn nested_tree_renders() {
    let figure = html::figure(children![
        html::id("hero"),
        html::img(children![html::src("/hero.png"), html::alt("A hero")]),
        html::figcaption(children![html::text("Caption")]),
    ])
    .render(&MemDocument::new())
    .unwrap();

    assert_eq!(figure.attribute("id"), Some("hero"));
    let img = figure.find("img").unwrap();
    assert_eq!(img.property("src"), Some("/hero.png"));
    assert_eq!(img.property("alt"), Some("A hero"));
    assert_eq!(figure.find("figcaption").unwrap().text_content(), "Caption");
}
