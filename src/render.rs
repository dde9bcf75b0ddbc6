//! Draws a Trie as a compact text diagram.
//!
//! Each top-level atom starts a line. Runs of nodes continue along the line
//! joined by `-`, a node holding a value is wrapped in parentheses, and every
//! sibling after the first drops to a new line under its branch point, with
//! `|` bars marking branch points further left that still have siblings to
//! come.
//!
//! ```
//! use prefix_tree::trie::{Trie, TrieString};
//!
//! let mut trie: TrieString<u32> = Trie::new();
//! trie.insert("tea", 1);
//! trie.insert("ted", 2);
//! trie.insert("ten", 3);
//! trie.insert("to", 4);
//!
//! assert_eq!(trie.to_string(), "t-e-(a)\n | `-(d)\n | `-(n)\n `-(o)");
//! ```

use std::fmt::{self, Display, Write};
use std::mem;

use crate::node::Node;
use crate::trie::{Trie, TrieAtom};

/// Where the label of the next node goes.
enum Lead {
    /// At the start of a fresh line.
    Line,
    /// On the current line, after a `-`.
    Inline,
    /// On a new line, after this indentation and a `` `- ``.
    Branch(String),
}

struct Step<'a, A, V> {
    atom: &'a A,
    node: &'a Node<A, V>,
    lead: Lead,
    bars: Vec<usize>,
}

/// Indentation for a sibling drawn under the branch point at `anchor`.
fn indent(anchor: usize, bars: &[usize]) -> String {
    let mut prefix = vec![' '; anchor];
    for &bar in bars {
        if bar < anchor {
            prefix[bar] = '|';
        }
    }
    prefix.into_iter().collect()
}

impl<A: TrieAtom + Display, V> Trie<A, V> {
    /// Write the diagram of this Trie to `out`. An empty Trie writes nothing
    /// and the last line has no trailing newline.
    pub fn render_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut steps: Vec<Step<'_, A, V>> = self
            .head
            .children
            .iter()
            .rev()
            .map(|(atom, node)| Step {
                atom,
                node,
                lead: Lead::Line,
                bars: Vec::new(),
            })
            .collect();
        let mut label = String::new();
        let mut column = 0;
        let mut started = false;

        while let Some(Step {
            atom,
            node,
            lead,
            mut bars,
        }) = steps.pop()
        {
            match lead {
                Lead::Line => {
                    if started {
                        out.write_char('\n')?;
                    }
                    column = 0;
                }
                Lead::Inline => {
                    out.write_char('-')?;
                    column += 1;
                }
                Lead::Branch(prefix) => {
                    out.write_char('\n')?;
                    out.write_str(&prefix)?;
                    out.write_str("`-")?;
                    column = prefix.len() + 2;
                }
            }
            started = true;

            label.clear();
            if node.value.is_some() {
                write!(label, "({atom})")?;
            } else {
                write!(label, "{atom}")?;
            }
            out.write_str(&label)?;
            column += label.chars().count();

            let fanout = node.children.len();
            if fanout == 0 {
                continue;
            }
            let anchor = column;
            let mut last_bars = None;
            if fanout > 1 {
                last_bars = Some(bars.clone());
                bars.push(anchor);
            }

            // Pushed in reverse so the first child is drawn next.
            for (index, (atom, child)) in node.children.iter().enumerate().rev() {
                let (lead, child_bars) = if index == 0 {
                    (Lead::Inline, mem::take(&mut bars))
                } else if index + 1 == fanout {
                    // The branch is finished below its last sibling.
                    let outer = last_bars.take().unwrap_or_default();
                    (Lead::Branch(indent(anchor, &outer)), outer)
                } else {
                    (Lead::Branch(indent(anchor, &bars)), bars.clone())
                };
                steps.push(Step {
                    atom,
                    node: child,
                    lead,
                    bars: child_bars,
                });
            }
        }
        Ok(())
    }
}

impl<A: TrieAtom + Display, V> Display for Trie<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(f)
    }
}
