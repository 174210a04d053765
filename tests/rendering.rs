//! End-to-end Markdown to HTML rendering with the default settings.

use aplomb::{Settings, render};
use similar_asserts::assert_eq;

#[test]
fn heading_renders_with_anchor_id() {
    let settings = Settings::default();
    assert_eq!(
        render("# T", None),
        format!(
            "<h1 id=\"T\" class=\"{}\">\n    T\n</h1>\n",
            settings.class_name.h1
        )
    );
}

#[test]
fn paragraph_renders_inline_link() {
    let settings = Settings::default();
    assert_eq!(
        render("see [docs](https://example.com) now", None),
        format!(
            "<p class=\"{}\">\n    see <a href=\"https://example.com\" class=\"{}\">docs</a> now\n</p>\n",
            settings.class_name.p, settings.class_name.a
        )
    );
}

#[test]
fn paragraph_renders_inline_code_and_image() {
    let settings = Settings::default();
    assert_eq!(
        render("run `make` ![icon](/i.png)", None),
        format!(
            "<p class=\"{}\">\n    run <code class=\"{}\">make</code> <img src=\"/i.png\" alt=\"icon\">\n</p>\n",
            settings.class_name.p, settings.class_name.code
        )
    );
}

#[test]
fn quote_renders_one_paragraph_per_line() {
    let settings = Settings::default();
    assert_eq!(
        render("> a\n> b", None),
        format!(
            "<blockquote class=\"{bq}\">\n    <p class=\"{p}\">\n        a\n    </p>\n    <p class=\"{p}\">\n        b\n    </p>\n</blockquote>\n",
            bq = settings.class_name.blockquote,
            p = settings.class_name.p
        )
    );
}

#[test]
fn list_renders_items() {
    let settings = Settings::default();
    assert_eq!(
        render("* milk\n- eggs", None),
        format!(
            "<ul class=\"{ul}\">\n    <li class=\"{li}\">\n        milk\n    </li>\n    <li class=\"{li}\">\n        eggs\n    </li>\n</ul>\n",
            ul = settings.class_name.ul,
            li = settings.class_name.li
        )
    );
}

#[test]
fn code_block_renders_escaped_verbatim_body() {
    let settings = Settings::default();
    assert_eq!(
        render("```HTML\n<div>&</div>\n```", None),
        format!(
            "<pre>\n    <code class=\"{}\">&lt;div&gt;&amp;&lt;/div&gt;\n    </code>\n</pre>\n",
            settings.code_block_class("HTML")
        )
    );
}

#[test]
fn code_block_body_is_never_reinterpreted() {
    let settings = Settings::default();
    assert_eq!(
        render("```\n# not a heading\n```", None),
        format!(
            "<pre>\n    <code class=\"{}\"># not a heading\n    </code>\n</pre>\n",
            settings.code_block_class("")
        )
    );
}

#[test]
fn horizontal_rule_renders() {
    let settings = Settings::default();
    assert_eq!(
        render("---", None),
        format!("<hr class=\"{}\">\n", settings.class_name.hr)
    );
}

#[test]
fn custom_settings_change_the_emitted_classes() {
    let mut settings = Settings::default();
    settings.class_name.p = "prose".to_string();
    settings.indent = "  ".to_string();
    assert_eq!(
        render("hello", Some(settings)),
        "<p class=\"prose\">\n  hello\n</p>\n"
    );
}

#[test]
fn crlf_input_is_normalized() {
    assert_eq!(render("> a\r\n> b", None), render("> a\n> b", None));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render("", None), "");
}
