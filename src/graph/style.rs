/// Resolved drawing attributes for a single node.
///
/// The original styling was a free-form attribute map; here every field is
/// explicit so a style cannot silently carry unknown keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    /// Graphviz shape name, e.g. `box` or `octagon`.
    pub shape: &'static str,
    /// Fill/outline color; `None` keeps the Graphviz default.
    pub color: Option<&'static str>,
    /// Whether the node is drawn filled with `color`.
    pub filled: bool,
    /// Font color override for the label text.
    pub font_color: Option<&'static str>,
}

/// Default style for operator nodes: green filled boxes with white text.
pub const OPERATOR_STYLE: NodeStyle = NodeStyle {
    shape: "box",
    color: Some("#0F9D58"),
    filled: true,
    font_color: Some("#FFFFFF"),
};

/// Style for operators in the highlight set: purple filled boxes.
pub const MARKED_OPERATOR_STYLE: NodeStyle = NodeStyle {
    shape: "box",
    color: Some("#930e9d"),
    filled: true,
    font_color: Some("#FFFFFF"),
};

/// Style for value nodes: plain octagons.
pub const VALUE_STYLE: NodeStyle = NodeStyle {
    shape: "octagon",
    color: None,
    filled: false,
    font_color: None,
};
