/// Fragment ordering, singularity, and rendering tests for the builder
use crate::*;

#[test]
fn test_single_fragment_entry_points() {
    assert_eq!(element("div").to_css(), "div");
    assert_eq!(id("main").to_css(), "#main");
    assert_eq!(class("container").to_css(), ".container");
    assert_eq!(attr("data-open").to_css(), "[data-open]");
    assert_eq!(pseudo_class("hover").to_css(), ":hover");
    assert_eq!(pseudo_element("before").to_css(), "::before");
}

#[test]
fn test_classes_accumulate_in_insertion_order() {
    let sel = id("main")
        .class("container")
        .expect("Failed to append class")
        .class("editable")
        .expect("Failed to append class");
    assert_eq!(sel.to_css(), "#main.container.editable");
}

#[test]
fn test_duplicate_class_values_are_allowed() {
    let sel = class("row")
        .class("row")
        .expect("Failed to append repeated class");
    assert_eq!(sel.to_css(), ".row.row");
}

#[test]
fn test_element_attr_pseudo_class_chain() {
    let sel = element("a")
        .attr(r#"href$=".png""#)
        .expect("Failed to append attribute")
        .pseudo_class("focus")
        .expect("Failed to append pseudo-class");
    assert_eq!(sel.to_css(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_full_compound_selector() {
    let sel = element("div")
        .id("app")
        .expect("Failed to append id")
        .class("wide")
        .expect("Failed to append class")
        .attr("lang=en")
        .expect("Failed to append attribute")
        .pseudo_class("hover")
        .expect("Failed to append pseudo-class")
        .pseudo_element("first-line")
        .expect("Failed to append pseudo-element");
    assert_eq!(sel.to_css(), "div#app.wide[lang=en]:hover::first-line");
}

#[test]
fn test_multiple_attributes_and_pseudo_classes() {
    let sel = attr("type=checkbox")
        .attr("checked")
        .expect("Failed to append attribute")
        .pseudo_class("focus")
        .expect("Failed to append pseudo-class")
        .pseudo_class("enabled")
        .expect("Failed to append pseudo-class");
    assert_eq!(sel.to_css(), "[type=checkbox][checked]:focus:enabled");
}

#[test]
fn test_duplicate_id_is_rejected() {
    let err = id("a").id("b").expect_err("Second id must be rejected");
    assert_eq!(
        err,
        SelectorError::DuplicateFragment {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_duplicate_element_is_rejected() {
    let err = element("div")
        .element("span")
        .expect_err("Second element must be rejected");
    assert_eq!(
        err,
        SelectorError::DuplicateFragment {
            kind: FragmentKind::Element
        }
    );
}

#[test]
fn test_duplicate_pseudo_element_is_rejected() {
    let err = pseudo_element("before")
        .pseudo_element("after")
        .expect_err("Second pseudo-element must be rejected");
    assert_eq!(
        err,
        SelectorError::DuplicateFragment {
            kind: FragmentKind::PseudoElement
        }
    );
}

#[test]
fn test_class_after_attribute_is_out_of_order() {
    let err = attr("y")
        .class("x")
        .expect_err("Class after attribute must be rejected");
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            kind: FragmentKind::Class,
            seen: FragmentKind::Attribute
        }
    );
}

#[test]
fn test_element_after_pseudo_element_is_out_of_order() {
    let err = pseudo_element("before")
        .element("div")
        .expect_err("Element after pseudo-element must be rejected");
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            kind: FragmentKind::Element,
            seen: FragmentKind::PseudoElement
        }
    );
}

#[test]
fn test_id_after_class_is_out_of_order() {
    let err = class("c")
        .id("main")
        .expect_err("Id after class must be rejected");
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            kind: FragmentKind::Id,
            seen: FragmentKind::Class
        }
    );
}

#[test]
fn test_singularity_is_checked_before_ordering() {
    // Both violations apply; the duplicate wins.
    let err = id("a")
        .class("c")
        .expect("Failed to append class")
        .id("b")
        .expect_err("Second id must be rejected");
    assert_eq!(
        err,
        SelectorError::DuplicateFragment {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_error_messages() {
    let dup = id("a").id("b").expect_err("Second id must be rejected");
    assert_eq!(
        dup.to_string(),
        "Duplicate id fragment: a selector holds at most one"
    );

    let order = attr("y")
        .class("x")
        .expect_err("Class after attribute must be rejected");
    assert_eq!(
        order.to_string(),
        "Out-of-order class fragment: attribute fragment already present"
    );
}

#[test]
fn test_display_matches_to_css() {
    let sel = element("a")
        .class("icon")
        .expect("Failed to append class");
    assert_eq!(sel.to_string(), sel.to_css());
}

#[test]
fn test_specificity_counts() {
    let sel = element("div")
        .id("app")
        .expect("Failed to append id")
        .class("wide")
        .expect("Failed to append class")
        .attr("lang=en")
        .expect("Failed to append attribute")
        .pseudo_class("hover")
        .expect("Failed to append pseudo-class")
        .pseudo_element("first-line")
        .expect("Failed to append pseudo-element");
    assert_eq!(sel.specificity(), Specificity(1, 3, 2));

    assert_eq!(class("a").specificity(), Specificity(0, 1, 0));
    assert_eq!(element("p").specificity(), Specificity(0, 0, 1));
}
