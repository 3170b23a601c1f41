//! ASCII art rendering of [RBTree], adapted from the binary search tree
//! printer in MIT 6.006 readings.
//!
//! Each node is drawn as `<C:key>` where `C` is `R` or `B`. An empty
//! tree renders as `<B:empty>`.
//!
//! ```
//! use rbt::RBTree;
//!
//! let index: RBTree<u8> = vec![1, 2, 3].into_iter().collect();
//! let text = index.to_string();
//! assert_eq!(text.lines().next().unwrap().trim(), "<B:2>");
//! ```

use std::{cmp, fmt, iter};

use crate::{node::NodeRef, rbt::RBTree};

impl<K> fmt::Display for RBTree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", render(root).lines.join("\n")),
            None => write!(f, "<B:empty>"),
        }
    }
}

// Rendered sub-tree, `pos` is the column of the node label's center.
struct Block {
    lines: Vec<String>,
    pos: usize,
    width: usize,
}

fn spaces(n: usize) -> String {
    iter::repeat(' ').take(n).collect()
}

// Same padding rule as python's str.center(), extra fill goes right
// unless both fill and width are odd.
fn center(label: &str, width: usize, fill: char) -> String {
    let n = label.chars().count();
    if n >= width {
        return label.to_string();
    }
    let marg = width - n;
    let left = marg / 2 + (marg & width & 1);
    let mut out: String = iter::repeat(fill).take(left).collect();
    out.push_str(label);
    out.extend(iter::repeat(fill).take(marg - left));
    out
}

fn render<K>(node: NodeRef<K>) -> Block
where
    K: fmt::Display,
{
    let empty = || Block {
        lines: vec![],
        pos: 0,
        width: 0,
    };
    let mut label = format!("<{}:{}>", node.color(), node.key());

    let left = node.left().map_or_else(empty, render);
    let right = node.right().map_or_else(empty, render);

    let n = label.chars().count();
    let middle = cmp::max(cmp::max(right.pos + left.width + 1 - left.pos, n), 2);
    let pos = left.pos + middle / 2;
    let width = left.pos + middle + right.width - right.pos;

    if (middle - n) % 2 == 1 && node.is_left_child() && n < middle {
        label.push('.');
    }

    let mut label: Vec<char> = center(&label, middle, '.').chars().collect();
    if label.first() == Some(&'.') {
        label[0] = ' ';
    }
    if label.last() == Some(&'.') {
        let off = label.len() - 1;
        label[off] = ' ';
    }
    let label: String = label.into_iter().collect();

    let tail = spaces(right.width - right.pos);
    let mut lines = vec![
        format!("{}{}{}", spaces(left.pos), label, tail),
        format!("{}/{}\\{}", spaces(left.pos), spaces(middle - 2), tail),
    ];

    let gap = spaces(width - left.width - right.width);
    let (mut llines, mut rlines) = (left.lines, right.lines);
    while llines.len() < rlines.len() {
        llines.push(spaces(left.width));
    }
    while llines.len() > rlines.len() {
        rlines.push(spaces(right.width));
    }
    for (l, r) in llines.into_iter().zip(rlines.into_iter()) {
        lines.push(format!("{}{}{}", l, gap, r));
    }

    Block { lines, pos, width }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
