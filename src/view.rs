//! A tree-shaped diagnostic payload.
//!
//! [`View`] is one concrete payload for [`FormResult`] and [`Form`]: a tree of
//! labeled elements carrying string attributes and ordered children, with
//! text leaves. A fragment is a transparent grouping node: its children are
//! spliced into the parent when it is placed inside another node, and
//! combining two views collects both into a single fragment.
//!
//! Equality treats a fragment holding exactly one child as that child, so
//! `View::empty().combine(view) == view` for every view.
//!
//! # Examples
//!
//! ```rust
//! use forms::typeclass::{Monoid, Semigroup};
//! use forms::view::{View, ViewResult};
//!
//! let required = View::node("error", [View::text("required")]).with_prop("field", "name");
//! let too_long = View::node("error", [View::text("too long")]).with_prop("field", "bio");
//!
//! let report = View::combine_all([required.clone(), too_long]);
//! assert_eq!(
//!     report.to_string(),
//!     "<#fragment{}><error{field={name}}>required</error>,<error{field={bio}}>too long</error></#fragment>"
//! );
//! assert_eq!(View::empty().combine(required.clone()), required);
//!
//! let failed: ViewResult<u8> = ViewResult::from_meta(report);
//! assert!(!failed.is_success());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::form::Form;
use crate::form_result::FormResult;
use crate::typeclass::{Monoid, Semigroup};

/// A form result carrying a [`View`] payload.
pub type ViewResult<A> = FormResult<View, A>;

/// A form producing a [`View`] payload.
pub type ViewForm<I, A> = Form<I, View, A>;

// =============================================================================
// Tag
// =============================================================================

/// The label of an [`Element`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// An ordinary named node.
    Name(String),
    /// A transparent grouping node.
    Fragment,
}

impl Tag {
    /// Returns `true` for [`Tag::Fragment`].
    #[must_use]
    pub const fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(formatter, "{name}"),
            Self::Fragment => write!(formatter, "#fragment"),
        }
    }
}

// =============================================================================
// Element
// =============================================================================

/// A labeled node with attributes and children.
///
/// Elements are built through the [`View`] constructors, which splice fragment
/// children into the child sequence. A fragment carries no attributes.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawElement")
)]
pub struct Element {
    tag: Tag,
    props: BTreeMap<String, String>,
    children: Vec<View>,
}

impl Element {
    fn build(
        tag: Tag,
        props: BTreeMap<String, String>,
        children: impl IntoIterator<Item = View>,
    ) -> Self {
        let props = if tag.is_fragment() { BTreeMap::new() } else { props };
        Self {
            tag,
            props,
            children: children.into_iter().flat_map(View::into_spliced).collect(),
        }
    }

    /// Returns the label.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the attributes, ordered by key.
    #[must_use]
    pub const fn props(&self) -> &BTreeMap<String, String> {
        &self.props
    }

    /// Returns the children.
    #[must_use]
    pub fn children(&self) -> &[View] {
        &self.children
    }

    /// Replaces the children, splicing fragment children into the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::view::View;
    ///
    /// let paragraph = View::node("p", [View::text("old")]);
    /// let replaced = paragraph
    ///     .as_element()
    ///     .cloned()
    ///     .map(|element| element.with_children([View::fragment([View::text("a"), View::text("b")])]));
    /// assert_eq!(
    ///     replaced.map(View::Element),
    ///     Some(View::node("p", [View::text("a"), View::text("b")]))
    /// );
    /// ```
    #[must_use]
    pub fn with_children(self, children: impl IntoIterator<Item = View>) -> Self {
        Self::build(self.tag, self.props, children)
    }
}

/// Whether `fragment` holds exactly one child, and that child equals `element`.
fn sole_child_is(fragment: &Element, element: &Element) -> bool {
    matches!(fragment.children.as_slice(), [View::Element(only)] if only == element)
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self.tag.is_fragment(), other.tag.is_fragment()) {
            (true, true) => self.children == other.children,
            (true, false) => sole_child_is(self, other),
            (false, true) => sole_child_is(other, self),
            (false, false) => {
                self.tag == other.tag
                    && self.props == other.props
                    && self.children == other.children
            }
        }
    }
}

impl Eq for Element {}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<{}{{", self.tag)?;
        for (index, (key, value)) in self.props.iter().enumerate() {
            if index > 0 {
                write!(formatter, ",")?;
            }
            write!(formatter, "{key}={{{value}}}")?;
        }
        write!(formatter, "}}>")?;
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                write!(formatter, ",")?;
            }
            write!(formatter, "{child}")?;
        }
        write!(formatter, "</{}>", self.tag)
    }
}

// =============================================================================
// View
// =============================================================================

/// A diagnostic tree: a text leaf or an [`Element`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum View {
    /// A text leaf.
    Text(String),
    /// A labeled node.
    Element(Element),
}

impl View {
    /// Creates a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates an element, splicing fragment children into its child sequence.
    ///
    /// `props` are dropped when `tag` is [`Tag::Fragment`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use forms::view::View;
    ///
    /// let list = View::element(
    ///     "ul",
    ///     BTreeMap::from([("class".to_string(), "errors".to_string())]),
    ///     [View::fragment([View::text("a"), View::text("b")]), View::text("c")],
    /// );
    /// assert_eq!(list.to_string(), "<ul{class={errors}}>a,b,c</ul>");
    /// ```
    pub fn element(
        tag: impl Into<Tag>,
        props: BTreeMap<String, String>,
        children: impl IntoIterator<Item = Self>,
    ) -> Self {
        Self::Element(Element::build(tag.into(), props, children))
    }

    /// Creates an element without attributes.
    pub fn node(tag: impl Into<Tag>, children: impl IntoIterator<Item = Self>) -> Self {
        Self::element(tag, BTreeMap::new(), children)
    }

    /// Creates a fragment grouping `children`.
    pub fn fragment(children: impl IntoIterator<Item = Self>) -> Self {
        Self::node(Tag::Fragment, children)
    }

    /// The empty fragment.
    #[must_use]
    pub fn empty() -> Self {
        Self::fragment([])
    }

    /// Sets the attribute `key` on an element. Text leaves and fragments are
    /// returned unchanged.
    #[must_use]
    pub fn with_prop(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            Self::Element(mut element) if !element.tag.is_fragment() => {
                element.props.insert(key.into(), value.into());
                Self::Element(element)
            }
            unchanged => unchanged,
        }
    }

    /// Returns `true` if this view is a fragment.
    #[must_use]
    pub const fn is_fragment(&self) -> bool {
        matches!(self, Self::Element(element) if element.tag.is_fragment())
    }

    /// Returns the element, if this view is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Returns the text, if this view is a text leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Element(_) => None,
        }
    }

    /// Combines two views into one fragment holding the children of each
    /// fragment operand and each non-fragment operand itself.
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        Self::fragment(self.into_spliced().into_iter().chain(other.into_spliced()))
    }

    /// The sequence this view contributes to an enclosing child list.
    fn into_spliced(self) -> Vec<Self> {
        match self {
            Self::Element(element) if element.tag.is_fragment() => element.children,
            other => vec![other],
        }
    }
}

impl From<&str> for View {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Element(left), Self::Element(right)) => left == right,
            (Self::Element(fragment), Self::Text(text))
            | (Self::Text(text), Self::Element(fragment)) => {
                fragment.tag.is_fragment()
                    && matches!(fragment.children.as_slice(), [Self::Text(only)] if only == text)
            }
        }
    }
}

impl Eq for View {}

impl fmt::Display for View {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => write!(formatter, "{content}"),
            Self::Element(element) => write!(formatter, "{element}"),
        }
    }
}

// =============================================================================
// Deserialization
// =============================================================================

/// The serialized shape of an [`Element`], before fragment splicing.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawElement {
    tag: Tag,
    props: BTreeMap<String, String>,
    children: Vec<View>,
}

#[cfg(feature = "serde")]
impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        Self::build(raw.tag, raw.props, raw.children)
    }
}

impl Semigroup for View {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl Monoid for View {
    fn empty() -> Self {
        Self::fragment([])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn error(message: &str) -> View {
        View::node("error", [View::text(message)])
    }

    #[rstest]
    fn fragment_children_are_spliced() {
        let nested = View::node("form", [View::fragment([error("a"), error("b")])]);
        let flat = View::node("form", [error("a"), error("b")]);
        assert_eq!(nested.as_element().map(|e| e.children().len()), Some(2));
        assert_eq!(nested, flat);
    }

    #[rstest]
    fn concat_collects_both_sides() {
        let combined = error("a").concat(View::fragment([error("b"), error("c")]));
        assert_eq!(combined, View::fragment([error("a"), error("b"), error("c")]));
    }

    #[rstest]
    #[case(View::fragment([error("a")]), error("a"), true)]
    #[case(error("a"), View::fragment([error("a")]), true)]
    #[case(View::fragment([View::text("t")]), View::text("t"), true)]
    #[case(View::fragment([error("a"), error("a")]), error("a"), false)]
    #[case(View::empty(), error("a"), false)]
    #[case(View::text("t"), error("t"), false)]
    #[case(error("a").with_prop("k", "v"), error("a"), false)]
    fn single_child_fragment_equality(#[case] left: View, #[case] right: View, #[case] equal: bool) {
        assert_eq!(left == right, equal);
    }

    #[rstest]
    fn empty_is_identity() {
        let view = error("a");
        assert_eq!(View::empty().combine(view.clone()), view);
        assert_eq!(view.clone().combine(View::empty()), view);
        assert!(View::empty().is_empty_value());
    }

    #[rstest]
    fn display_renders_props_and_children() {
        let view = View::node("label", [View::text("Name"), View::text("*")])
            .with_prop("for", "name")
            .with_prop("class", "required");
        assert_eq!(
            view.to_string(),
            "<label{class={required},for={name}}>Name,*</label>"
        );
        assert_eq!(View::empty().to_string(), "<#fragment{}></#fragment>");
    }

    #[rstest]
    fn with_prop_ignores_text() {
        assert_eq!(View::text("t").with_prop("k", "v"), View::text("t"));
    }

    #[rstest]
    fn with_children_splices_fragments() {
        let paragraph = View::node("p", [View::text("old")])
            .as_element()
            .cloned()
            .map(|element| {
                element.with_children([View::fragment([View::text("a"), View::text("b")])])
            })
            .map(View::Element);
        let flat = View::node("p", [View::text("a"), View::text("b")]);
        assert_eq!(paragraph.as_ref(), Some(&flat));
        assert_eq!(paragraph.map(|view| view.to_string()), Some("<p{}>a,b</p>".to_string()));
    }

    #[rstest]
    fn with_prop_leaves_fragments_unchanged() {
        let fragment = View::fragment([View::text("a"), View::text("b")]);
        let tagged = fragment.clone().with_prop("class", "error");
        assert_eq!(tagged.to_string(), "<#fragment{}>a,b</#fragment>");
        assert_eq!(tagged, fragment);
    }

    #[rstest]
    fn fragment_element_drops_props() {
        let props = BTreeMap::from([("class".to_string(), "error".to_string())]);
        let fragment = View::element(Tag::Fragment, props, [View::text("a")]);
        assert_eq!(fragment.to_string(), "<#fragment{}>a</#fragment>");
    }
}
