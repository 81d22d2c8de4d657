//! Text and style tables for the page's UI conveniences. The web crate wires
//! them to DOM events; keeping them here lets the host tests see them.

/// Inline style pair applied on pointer enter/leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverStyle {
    pub property: &'static str,
    pub enter: &'static str,
    pub leave: &'static str,
}

pub const LOGO_HOVER: [HoverStyle; 2] = [
    HoverStyle {
        property: "transform",
        enter: "scale(1.1) translateY(-5px)",
        leave: "scale(1) translateY(0)",
    },
    HoverStyle {
        property: "filter",
        enter: "drop-shadow(0 8px 12px rgba(0, 255, 255, 0.3))",
        leave: "drop-shadow(0 4px 6px rgba(0, 255, 255, 0.1))",
    },
];

pub const CARD_HOVER: [HoverStyle; 2] = [
    HoverStyle {
        property: "transform",
        enter: "translateY(-8px) scale(1.02) perspective(1000px)",
        leave: "translateY(0) scale(1) perspective(1000px)",
    },
    HoverStyle {
        property: "box-shadow",
        enter: "0 15px 30px rgba(0, 255, 255, 0.2), 0 0 50px rgba(255, 0, 255, 0.1)",
        leave: "none",
    },
];

// Scroll reveal
pub const REVEAL_HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
pub const REVEAL_SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn contact_thanks(name: &str) -> String {
    format!(
        "Thank you {}! Your message has been received. We'll get back to you soon.",
        name
    )
}

/// Selector for an in-page anchor href, or `None` for a bare `#` or a link
/// that leaves the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}
