use crate::avl_tree::node::Node;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };
    trace!("rotating left");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };
    trace!("rotating right");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the height and the balance invariant of a node whose subtrees are valid avl trees with
// heights that differ by at most two, and returns the new root of the subtree.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            // a tie between the outer and inner grandchildren resolves to a single rotation
            if height(&child.left) >= height(&child.right) {
                node.left = Some(child);
            } else {
                trace!("left-right double rotation");
                node.left = Some(rotate_left(child));
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if height(&child.right) >= height(&child.left) {
                node.right = Some(child);
            } else {
                trace!("right-left double rotation");
                node.right = Some(rotate_right(child));
            }
        }
        node = rotate_left(node);
    }

    node.update();
    node
}

pub fn insert<T>(tree: &mut Tree<T>, data: T) -> bool
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(data)));
            return true;
        },
    };

    let inserted = match data.cmp(&node.data) {
        Ordering::Less => insert(&mut node.left, data),
        Ordering::Greater => insert(&mut node.right, data),
        Ordering::Equal => false,
    };

    *tree = Some(if inserted { balance(node) } else { node });
    inserted
}

// Detaches the minimum node of a non-empty tree, rebalancing every node on the path to it.
fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    let mut node = tree.take()?;
    if node.left.is_none() {
        *tree = node.right.take();
        return Some(node);
    }

    let ret = remove_min(&mut node.left);
    *tree = Some(balance(node));
    ret
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let mut node = tree.take()?;
    let ret = match key.cmp(&node.data) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() {
                *tree = node.right.take();
                return Some(node.data);
            }
            if node.right.is_none() {
                *tree = node.left.take();
                return Some(node.data);
            }
            debug!("removing node with two children from avl tree");
            remove_min(&mut node.right)
                .map(|successor| mem::replace(&mut node.data, successor.data))
        },
    };

    *tree = Some(if ret.is_some() { balance(node) } else { node });
    ret
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.data) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.data),
        }
    })
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    get(tree, key).is_some()
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &node.min().data)
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &node.max().data)
}

pub fn in_order<'a, T>(tree: &'a Tree<T>, result: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        in_order(&node.left, result);
        result.push(&node.data);
        in_order(&node.right, result);
    }
}

pub fn pre_order<'a, T>(tree: &'a Tree<T>, result: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        result.push(&node.data);
        pre_order(&node.left, result);
        pre_order(&node.right, result);
    }
}

pub fn post_order<'a, T>(tree: &'a Tree<T>, result: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        post_order(&node.left, result);
        post_order(&node.right, result);
        result.push(&node.data);
    }
}

/// Recomputes the height of every subtree without consulting the cached heights. Returns whether
/// every node is balanced, along with the height of the tree.
pub fn check_balanced<T>(tree: &Tree<T>) -> (bool, i32) {
    match tree {
        None => (true, -1),
        Some(ref node) => {
            let (left_balanced, left_height) = check_balanced(&node.left);
            let (right_balanced, right_height) = check_balanced(&node.right);
            let balanced =
                left_balanced && right_balanced && (left_height - right_height).abs() <= 1;
            (balanced, 1 + cmp::max(left_height, right_height))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(items: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for item in items {
            insert(&mut tree, *item);
        }
        tree
    }

    fn collect_pre_order(tree: &Tree<u32>) -> Vec<u32> {
        let mut result = Vec::new();
        pre_order(tree, &mut result);
        result.into_iter().cloned().collect()
    }

    // Checks that every cached height matches the recomputed one.
    fn heights_consistent(tree: &Tree<u32>) -> bool {
        match tree {
            None => true,
            Some(ref node) => {
                let expected = 1 + cmp::max(height(&node.left), height(&node.right));
                node.height == expected
                    && heights_consistent(&node.left)
                    && heights_consistent(&node.right)
            },
        }
    }

    #[test]
    fn test_rotate_left() {
        let tree = build(&[10, 20, 30]);
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 30]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_rotate_right() {
        let tree = build(&[30, 20, 10]);
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 30]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_rotate_left_right() {
        let tree = build(&[30, 10, 20]);
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 30]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_rotate_right_left() {
        let tree = build(&[10, 30, 20]);
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 30]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_sorted_insertion_is_perfect() {
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(collect_pre_order(&tree), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(height(&tree), 2);
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_remove_tie_prefers_single_right_rotation() {
        let mut tree = build(&[20, 10, 30, 5, 15]);
        assert_eq!(remove(&mut tree, &30), Some(30));
        assert_eq!(collect_pre_order(&tree), vec![10, 5, 20, 15]);
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_remove_tie_prefers_single_left_rotation() {
        let mut tree = build(&[10, 5, 20, 15, 25]);
        assert_eq!(remove(&mut tree, &5), Some(5));
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 15, 25]);
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_remove_cases() {
        let mut tree = build(&[20, 10, 30, 25, 35]);
        assert_eq!(remove(&mut tree, &25), Some(25));
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 30, 35]);
        assert_eq!(remove(&mut tree, &30), Some(30));
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 35]);
        assert_eq!(remove(&mut tree, &20), Some(20));
        assert_eq!(collect_pre_order(&tree), vec![35, 10]);
        assert_eq!(remove(&mut tree, &99), None);
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_remove_successor_path_rebalances() {
        let mut tree = build(&[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15, 16]);
        for key in &[8, 9, 10, 11] {
            assert!(remove(&mut tree, key).is_some());
            assert!(check_balanced(&tree).0);
            assert!(heights_consistent(&tree));
        }
    }

    #[test]
    fn test_check_balanced_ignores_cache() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(check_balanced(&tree), (true, 1));

        // hang a chain off the right of a leaf without updating any cached height
        if let Some(ref mut root) = tree {
            if let Some(ref mut right) = root.right {
                let mut chain = Node::new(5);
                chain.right = Some(Box::new(Node::new(6)));
                right.right = Some(Box::new(chain));
            }
        }
        assert_eq!(height(&tree), 1);
        assert_eq!(check_balanced(&tree), (false, 3));
    }

    #[test]
    fn test_duplicate_insert_keeps_shape() {
        let mut tree = build(&[20, 10, 30]);
        assert!(!insert(&mut tree, 10));
        assert_eq!(collect_pre_order(&tree), vec![20, 10, 30]);
    }
}
