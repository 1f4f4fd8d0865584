//! The Offset Mapper: rendered-tree positions to flat offsets and back.
//!
//! Both directions are total: invalid positions clamp to the content bounds
//! and positions inside a token snap to the token's boundaries (a token is
//! atomic; a cursor may sit immediately before or after one, never inside).

use crate::tree::{RenderNode, RenderTree, TreePosition};

/// Map a tree position to a flat char offset.
///
/// Walks the nodes in document order accumulating logical length. Positions
/// inside a token snap to its boundaries: in-node offset 0 maps before the
/// token, anything else after it. A node index past the end maps to the end
/// of the content.
pub fn to_flat_offset(tree: &RenderTree, pos: TreePosition) -> usize {
    let mut acc = 0usize;
    for (i, node) in tree.nodes().iter().enumerate() {
        let len = node.logical_len();
        if i == pos.node {
            return match node {
                RenderNode::Token { .. } => {
                    if pos.offset == 0 {
                        acc
                    } else {
                        acc + len
                    }
                }
                RenderNode::Text(_) => acc + pos.offset.min(len),
            };
        }
        acc += len;
    }
    acc
}

/// Map a flat char offset back to a tree position.
///
/// Offsets landing strictly inside a token yield the position immediately
/// after that token node; offsets beyond the content clamp to the end.
pub fn from_flat_offset(tree: &RenderTree, offset: usize) -> TreePosition {
    let mut acc = 0usize;
    for (i, node) in tree.nodes().iter().enumerate() {
        let len = node.logical_len();
        if offset <= acc + len {
            return match node {
                RenderNode::Token { .. } => {
                    if offset <= acc {
                        TreePosition::new(i, 0)
                    } else {
                        TreePosition::new(i, len)
                    }
                }
                RenderNode::Text(_) => TreePosition::new(i, offset - acc),
            };
        }
        acc += len;
    }

    match tree.nodes().last() {
        Some(last) => TreePosition::new(tree.nodes().len() - 1, last.logical_len()),
        None => TreePosition::new(0, 0),
    }
}
