//! Constituency parse trees.
//!
//! Trees are read from and written as Penn-Treebank bracketed strings such
//! as `(S (NP (DT The) (NN cat)) (VP (VBD sat)) (. .))`. The extra unlabelled
//! wrapper used by treebank files, `( (S ...) )`, is accepted and removed.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{InputError, InputResult};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(|\)|[^\s()]+").expect("valid regex"));

/// A node-labelled, ordered tree over a sentence's tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    /// A phrase or preterminal with its children in order.
    Node {
        /// Category label, e.g. `NP` or `NP-SBJ-1`.
        label: String,
        /// Child subtrees.
        children: Vec<ParseTree>,
    },
    /// A word.
    Leaf {
        /// The surface word.
        word: String,
    },
}

/// One grammar rule instance: a node label and its ordered child labels.
///
/// Preterminals yield lexical productions whose right-hand side is the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    /// The parent label.
    pub lhs: String,
    /// Child labels, or words for leaf children.
    pub rhs: Vec<String>,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        for symbol in &self.rhs {
            write!(f, " {symbol}")?;
        }
        Ok(())
    }
}

impl ParseTree {
    /// Create an internal node.
    pub fn node(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Node {
            label: label.into(),
            children,
        }
    }

    /// Create a leaf.
    pub fn leaf(word: impl Into<String>) -> Self {
        Self::Leaf { word: word.into() }
    }

    /// Read exactly one bracketed tree.
    pub fn parse(text: &str) -> InputResult<Self> {
        let mut trees = Self::parse_many(text)?;
        match trees.len() {
            1 => Ok(trees.remove(0)),
            0 => Err(InputError::MalformedTree {
                offset: 0,
                message: "no tree found".to_string(),
            }),
            n => Err(InputError::MalformedTree {
                offset: 0,
                message: format!("expected one tree, found {n}"),
            }),
        }
    }

    /// Read a sequence of top-level bracketed trees, in order.
    pub fn parse_many(text: &str) -> InputResult<Vec<Self>> {
        let mut stack: Vec<Frame> = Vec::new();
        let mut trees = Vec::new();
        let mut expect_label = false;

        for m in TOKEN.find_iter(text) {
            match m.as_str() {
                "(" => {
                    stack.push(Frame {
                        offset: m.start(),
                        label: None,
                        children: Vec::new(),
                    });
                    expect_label = true;
                    continue;
                }
                ")" => {
                    let frame = stack.pop().ok_or_else(|| InputError::MalformedTree {
                        offset: m.start(),
                        message: "unbalanced ')'".to_string(),
                    })?;
                    let tree = frame.finish()?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(tree),
                        None => trees.push(tree),
                    }
                }
                token => {
                    let Some(frame) = stack.last_mut() else {
                        return Err(InputError::MalformedTree {
                            offset: m.start(),
                            message: format!("word {token:?} outside brackets"),
                        });
                    };
                    if expect_label {
                        frame.label = Some(token.to_string());
                    } else {
                        frame.children.push(Self::leaf(token));
                    }
                }
            }
            expect_label = false;
        }

        if let Some(frame) = stack.first() {
            return Err(InputError::MalformedTree {
                offset: frame.offset,
                message: "unclosed '('".to_string(),
            });
        }
        Ok(trees)
    }

    /// The node label, or `None` for a leaf.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Node { label, .. } => Some(label),
            Self::Leaf { .. } => None,
        }
    }

    /// Child subtrees; empty for a leaf.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Node { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Longest root-to-leaf path, counted in edges. A leaf has height 0.
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(Self::height)
            .max()
            .map_or(0, |h| h + 1)
    }

    /// The words at the leaves, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        self.preorder()
            .into_iter()
            .filter_map(|t| match t {
                Self::Leaf { word } => Some(word.as_str()),
                Self::Node { .. } => None,
            })
            .collect()
    }

    /// One production per internal node, in preorder.
    pub fn productions(&self) -> Vec<Production> {
        self.preorder()
            .into_iter()
            .filter_map(|t| match t {
                Self::Node { label, children } => Some(Production {
                    lhs: label.clone(),
                    rhs: children.iter().map(|c| c.symbol().to_string()).collect(),
                }),
                Self::Leaf { .. } => None,
            })
            .collect()
    }

    /// Every internal node whose base category is `category`, in preorder.
    ///
    /// Function tags and indices are ignored, so `NP-SBJ-1` and `NP=2`
    /// both match `NP`.
    pub fn subtrees<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.preorder()
            .into_iter()
            .filter(move |t| t.label().is_some_and(|l| base_category(l) == category))
    }

    /// Number of subtrees whose base category is `category`.
    pub fn count_category(&self, category: &str) -> usize {
        self.subtrees(category).count()
    }

    fn symbol(&self) -> &str {
        match self {
            Self::Node { label, .. } => label,
            Self::Leaf { word } => word,
        }
    }

    fn preorder(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            out.push(tree);
            pending.extend(tree.children().iter().rev());
        }
        out
    }
}

/// Strip function tags and indices from a treebank label.
///
/// Labels that begin with `-` (`-NONE-`, `-LRB-`) are returned unchanged.
pub fn base_category(label: &str) -> &str {
    if label.starts_with('-') {
        return label;
    }
    label
        .split(['-', '='])
        .next()
        .unwrap_or(label)
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
            Self::Leaf { word } => f.write_str(word),
        }
    }
}

impl std::str::FromStr for ParseTree {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct Frame {
    offset: usize,
    label: Option<String>,
    children: Vec<ParseTree>,
}

impl Frame {
    fn finish(mut self) -> InputResult<ParseTree> {
        match self.label {
            Some(label) if self.children.is_empty() => Err(InputError::MalformedTree {
                offset: self.offset,
                message: format!("node {label:?} has no children"),
            }),
            Some(label) => Ok(ParseTree::Node {
                label,
                children: self.children,
            }),
            // Treebank wrapper: ( (S ...) )
            None if self.children.len() == 1 && self.children[0].label().is_some() => {
                Ok(self.children.remove(0))
            }
            None => Err(InputError::MalformedTree {
                offset: self.offset,
                message: "unlabelled node".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: &str = "(S (NP (DT The) (NN cat)) (VP (VBD sat)) (. .))";

    #[test]
    fn display_round_trip() {
        let tree = ParseTree::parse(CAT).unwrap();
        assert_eq!(tree.to_string(), CAT);
        assert_eq!(ParseTree::parse(&tree.to_string()).unwrap(), tree);
    }

    #[test]
    fn treebank_wrapper_is_removed() {
        let wrapped = ParseTree::parse(&format!("( {CAT} )")).unwrap();
        assert_eq!(wrapped, ParseTree::parse(CAT).unwrap());
    }

    #[test]
    fn height_counts_edges() {
        assert_eq!(ParseTree::leaf("cat").height(), 0);
        assert_eq!(ParseTree::parse("(NN cat)").unwrap().height(), 1);
        assert_eq!(ParseTree::parse(CAT).unwrap().height(), 3);
    }

    #[test]
    fn productions_include_lexical_rules() {
        let tree = ParseTree::parse(CAT).unwrap();
        let rules: Vec<String> = tree.productions().iter().map(ToString::to_string).collect();
        assert_eq!(
            rules,
            [
                "S -> NP VP .",
                "NP -> DT NN",
                "DT -> The",
                "NN -> cat",
                "VP -> VBD",
                "VBD -> sat",
                ". -> .",
            ]
        );
    }

    #[test]
    fn subtrees_match_base_category() {
        let tree = ParseTree::parse(
            "(S (NP-SBJ (NP (NNP John) (POS 's)) (NN dog)) (VP (VBD slept) (PP-LOC (IN in) (NP=2 (DT the) (NN barn)))) (-NONE- *))",
        )
        .unwrap();
        assert_eq!(tree.count_category("NP"), 3);
        assert_eq!(tree.count_category("PP"), 1);
        assert_eq!(tree.count_category("SBAR"), 0);
        assert_eq!(tree.count_category("-NONE-"), 1);
        assert_eq!(tree.leaves(), ["John", "'s", "dog", "slept", "in", "the", "barn", "*"]);
    }

    #[test]
    fn root_counts_as_a_subtree() {
        let tree = ParseTree::parse("(NP (DT a) (NN dog))").unwrap();
        assert_eq!(tree.count_category("NP"), 1);
    }

    #[test]
    fn parse_many_reads_in_order() {
        let trees = ParseTree::parse_many("(X (A a))\n(Y (B b))\n").unwrap();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[1].label(), Some("Y"));
    }

    #[test]
    fn malformed_trees() {
        assert!(matches!(
            ParseTree::parse("(S (NP (NN cat))"),
            Err(InputError::MalformedTree { offset: 0, .. })
        ));
        assert!(matches!(
            ParseTree::parse("(S (NN cat)))"),
            Err(InputError::MalformedTree { offset: 12, .. })
        ));
        assert!(ParseTree::parse("cat").is_err());
        assert!(ParseTree::parse("(S)").is_err());
        assert!(ParseTree::parse("").is_err());
        assert!(ParseTree::parse("(A a) (B b)").is_err());
    }
}
