use super::*;

#[test]
fn app_root_class_fills_viewport() {
    let classes: Vec<_> = APP_ROOT_CLASS.split_whitespace().collect();
    assert_eq!(classes, ["h-full", "block"]);
}

#[test]
fn stylesheet_gives_root_wrapper_a_full_height_chain() {
    let css = include_str!("../../style/main.css");
    let html_body = css.find("html,\nbody {").expect("html/body rule");
    let rule_end = html_body + css[html_body..].find('}').unwrap();
    assert!(css[html_body..rule_end].contains("height: 100%;"));
    assert!(css.contains(".h-full {\n  height: 100%;\n}"));
    assert!(css.contains(":root[data-theme=\"dark\"]"));
}
